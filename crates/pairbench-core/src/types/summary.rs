//! Aggregate performance metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance metrics for one (symbol, strategy) pair.
///
/// Serialized field order matches the metrics CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub symbol: String,
    pub strategy: String,
    pub total_return_pct: Decimal,
    pub sharpe_ratio: f64,
    pub max_drawdown_pct: Decimal,
    pub win_rate_pct: Decimal,
    /// Mean net pnl per closed trade
    pub expectancy: Decimal,
    /// Share of bars spent holding a position, percent
    pub exposure_time_pct: Decimal,
    pub trade_count: usize,
}

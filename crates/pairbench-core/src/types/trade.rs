//! Simulated trades and equity curves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record of a single round-trip trade. Immutable engine output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub strategy_id: String,
    /// Entry timestamp, Unix milliseconds
    pub entry_time: i64,
    /// Exit timestamp, Unix milliseconds
    pub exit_time: i64,
    /// Fill price at entry, slippage included
    pub entry_price: Decimal,
    /// Fill price at exit, slippage included
    pub exit_price: Decimal,
    /// Position size in base units
    pub size: Decimal,
    /// Net profit after fees
    pub pnl: Decimal,
    /// Net return on the capital committed, percent
    pub return_pct: Decimal,
}

impl TradeRecord {
    pub fn entry_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.entry_time)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }

    pub fn exit_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.exit_time)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }

    pub fn is_winner(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}

/// One point of the simulated equity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Account value (cash + marked-to-market position)
    pub equity: Decimal,
}

/// Raw simulation output for one (symbol, strategy) pair.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub trades: Vec<TradeRecord>,
    /// Per-bar equity, aligned with the input series
    pub equity_curve: Vec<EquityPoint>,
    /// Bars spent holding a position
    pub bars_in_position: usize,
    pub initial_capital: Decimal,
    pub final_equity: Decimal,
}

//! Performance statistics over a simulation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pairbench_core::types::{EquityPoint, PerformanceSummary, Simulation, Timeframe};

/// Condense a simulation into the per-pair summary row.
pub fn summarize(
    symbol: &str,
    strategy_name: &str,
    simulation: &Simulation,
    timeframe: Timeframe,
) -> PerformanceSummary {
    let total_return_pct = if simulation.initial_capital > Decimal::ZERO {
        (simulation.final_equity - simulation.initial_capital) / simulation.initial_capital
            * dec!(100)
    } else {
        Decimal::ZERO
    };

    let winners = simulation.trades.iter().filter(|t| t.is_winner()).count();
    let trade_count = simulation.trades.len();

    let win_rate_pct = if trade_count > 0 {
        Decimal::from(winners * 100) / Decimal::from(trade_count)
    } else {
        Decimal::ZERO
    };

    let expectancy = if trade_count > 0 {
        simulation.trades.iter().map(|t| t.pnl).sum::<Decimal>() / Decimal::from(trade_count)
    } else {
        Decimal::ZERO
    };

    let total_bars = simulation.equity_curve.len();
    let exposure_time_pct = if total_bars > 0 {
        Decimal::from(simulation.bars_in_position * 100) / Decimal::from(total_bars)
    } else {
        Decimal::ZERO
    };

    PerformanceSummary {
        symbol: symbol.to_string(),
        strategy: strategy_name.to_string(),
        total_return_pct,
        sharpe_ratio: sharpe_ratio(&simulation.equity_curve, timeframe.bars_per_year()),
        max_drawdown_pct: max_drawdown_pct(&simulation.equity_curve),
        win_rate_pct,
        expectancy,
        exposure_time_pct,
        trade_count,
    }
}

/// Largest peak-to-trough equity decline, percent.
pub fn max_drawdown_pct(equity_curve: &[EquityPoint]) -> Decimal {
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for point in equity_curve {
        if point.equity > peak {
            peak = point.equity;
        }
        if peak > Decimal::ZERO {
            let drawdown = (peak - point.equity) / peak * dec!(100);
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    max_drawdown
}

/// Annualized Sharpe ratio of per-bar returns, risk-free rate zero.
pub fn sharpe_ratio(equity_curve: &[EquityPoint], bars_per_year: f64) -> f64 {
    let mut returns = Vec::with_capacity(equity_curve.len().saturating_sub(1));
    for pair in equity_curve.windows(2) {
        let prev = decimal_to_f64(pair[0].equity);
        let curr = decimal_to_f64(pair[1].equity);
        if prev > 0.0 {
            returns.push((curr - prev) / prev);
        }
    }

    if returns.is_empty() {
        return 0.0;
    }

    let mean: f64 = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance: f64 =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev > 0.0 {
        mean / std_dev * bars_per_year.sqrt()
    } else {
        0.0
    }
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(0.0)
}

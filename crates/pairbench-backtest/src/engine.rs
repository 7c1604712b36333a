//! Vectorized long-only simulation engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use pairbench_core::error::EngineError;
use pairbench_core::traits::SimulationEngine;
use pairbench_core::types::{
    BarSeries, EquityPoint, SignalAction, SignalSeries, Simulation, TradeRecord,
};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Starting cash
    pub initial_capital: Decimal,
    /// Proportional fee per fill (0.001 = 10 bps)
    pub fee_pct: Decimal,
    /// Proportional slippage per fill, applied against the trade
    pub slippage_pct: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capital: dec!(1000),
            fee_pct: dec!(0.001),
            slippage_pct: dec!(0.001),
        }
    }
}

/// Open position during a scan.
struct OpenPosition {
    size: Decimal,
    entry_time: i64,
    entry_price: Decimal,
    /// Cash committed at entry, fees included
    entry_cost: Decimal,
}

/// Vectorized simulation over aligned bar and signal series.
///
/// Execution convention: fills happen at the signal bar's close. Entries
/// commit all available cash; a position still open after the last bar is
/// closed at the final close so every entry produces a [`TradeRecord`].
pub struct VectorEngine {
    config: EngineConfig,
}

impl VectorEngine {
    /// Create a new engine.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    fn to_decimal(value: f64) -> Decimal {
        Decimal::try_from(value).unwrap_or_default()
    }

    fn open(&self, cash: Decimal, close: Decimal, timestamp: i64) -> OpenPosition {
        let fill = close * (Decimal::ONE + self.config.slippage_pct);
        let fee = cash * self.config.fee_pct;
        let size = if fill > Decimal::ZERO {
            (cash - fee) / fill
        } else {
            Decimal::ZERO
        };
        OpenPosition {
            size,
            entry_time: timestamp,
            entry_price: fill,
            entry_cost: cash,
        }
    }

    /// Close a position at the given bar, returning proceeds and record.
    fn close(
        &self,
        position: OpenPosition,
        close: Decimal,
        timestamp: i64,
        symbol: &str,
        strategy_id: &str,
    ) -> (Decimal, TradeRecord) {
        let fill = close * (Decimal::ONE - self.config.slippage_pct);
        let gross = position.size * fill;
        let proceeds = gross - gross * self.config.fee_pct;
        let pnl = proceeds - position.entry_cost;
        let return_pct = if position.entry_cost > Decimal::ZERO {
            pnl / position.entry_cost * dec!(100)
        } else {
            Decimal::ZERO
        };

        let record = TradeRecord {
            symbol: symbol.to_string(),
            strategy_id: strategy_id.to_string(),
            entry_time: position.entry_time,
            exit_time: timestamp,
            entry_price: position.entry_price,
            exit_price: fill,
            size: position.size,
            pnl,
            return_pct,
        };
        (proceeds, record)
    }
}

impl SimulationEngine for VectorEngine {
    fn simulate(
        &self,
        series: &BarSeries,
        signals: &SignalSeries,
        strategy_id: &str,
    ) -> Result<Simulation, EngineError> {
        if series.is_empty() {
            return Err(EngineError::EmptySeries);
        }
        if signals.len() != series.len() {
            return Err(EngineError::MisalignedSeries {
                bars: series.len(),
                signals: signals.len(),
            });
        }
        if self.config.initial_capital <= Decimal::ZERO {
            return Err(EngineError::InvalidCapital(self.config.initial_capital));
        }

        let mut cash = self.config.initial_capital;
        let mut position: Option<OpenPosition> = None;
        let mut trades = Vec::new();
        let mut equity_curve = Vec::with_capacity(series.len());
        let mut bars_in_position = 0;

        for (bar, action) in series.iter().zip(signals.iter()) {
            let close = Self::to_decimal(bar.close);

            match action {
                SignalAction::LongEntry if position.is_none() => {
                    position = Some(self.open(cash, close, bar.timestamp));
                    cash = Decimal::ZERO;
                }
                SignalAction::LongExit => {
                    if let Some(open) = position.take() {
                        let (proceeds, record) =
                            self.close(open, close, bar.timestamp, &series.symbol, strategy_id);
                        cash = proceeds;
                        trades.push(record);
                    }
                }
                _ => {}
            }

            let marked = match &position {
                Some(open) => cash + open.size * close,
                None => cash,
            };
            equity_curve.push(EquityPoint {
                timestamp: bar.timestamp,
                equity: marked,
            });
            if position.is_some() {
                bars_in_position += 1;
            }
        }

        // Force-close anything still open at the end of data.
        if let (Some(open), Some(last)) = (position.take(), series.last()) {
            let close = Self::to_decimal(last.close);
            let (proceeds, record) =
                self.close(open, close, last.timestamp, &series.symbol, strategy_id);
            cash = proceeds;
            trades.push(record);
            if let Some(point) = equity_curve.last_mut() {
                point.equity = cash;
            }
        }

        Ok(Simulation {
            trades,
            equity_curve,
            bars_in_position,
            initial_capital: self.config.initial_capital,
            final_equity: cash,
        })
    }

    fn name(&self) -> &str {
        "vector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairbench_core::types::{Bar, Timeframe};
    use SignalAction::*;

    fn series(closes: &[f64]) -> BarSeries {
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(i as i64 * 60_000, c, c, c, c, 1000.0))
            .collect();
        BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).unwrap()
    }

    fn frictionless() -> VectorEngine {
        VectorEngine::new(EngineConfig {
            initial_capital: dec!(1000),
            fee_pct: Decimal::ZERO,
            slippage_pct: Decimal::ZERO,
        })
    }

    #[test]
    fn test_round_trip_pnl() {
        let series = series(&[100.0, 110.0, 120.0, 120.0]);
        let signals = SignalSeries::new(vec![LongEntry, Flat, LongExit, Flat]);

        let sim = frictionless()
            .simulate(&series, &signals, "sma_crossover")
            .unwrap();

        assert_eq!(sim.trades.len(), 1);
        let trade = &sim.trades[0];
        // All-in at 100, out at 120: 1000 -> 1200
        assert_eq!(trade.pnl, dec!(200));
        assert_eq!(trade.return_pct, dec!(20));
        assert_eq!(sim.final_equity, dec!(1200));
        assert_eq!(trade.entry_time, 0);
        assert_eq!(trade.exit_time, 120_000);
    }

    #[test]
    fn test_fees_and_slippage_reduce_proceeds() {
        let series = series(&[100.0, 100.0]);
        let signals = SignalSeries::new(vec![LongEntry, LongExit]);

        let engine = VectorEngine::new(EngineConfig::default());
        let sim = engine.simulate(&series, &signals, "test").unwrap();

        // A flat market round trip loses the fee and slippage spread
        assert_eq!(sim.trades.len(), 1);
        assert!(sim.trades[0].pnl < Decimal::ZERO);
        assert!(sim.final_equity < dec!(1000));
    }

    #[test]
    fn test_misaligned_series_rejected() {
        let series = series(&[100.0, 101.0, 102.0]);
        let signals = SignalSeries::flat(2);

        let result = frictionless().simulate(&series, &signals, "test");
        assert!(matches!(
            result,
            Err(EngineError::MisalignedSeries { bars: 3, signals: 2 })
        ));
    }

    #[test]
    fn test_empty_series_rejected() {
        let series = BarSeries::from_bars("ETHBTC", Timeframe::Minute1, vec![]).unwrap();
        let result = frictionless().simulate(&series, &SignalSeries::flat(0), "test");
        assert!(matches!(result, Err(EngineError::EmptySeries)));
    }

    #[test]
    fn test_invalid_capital_rejected() {
        let engine = VectorEngine::new(EngineConfig {
            initial_capital: Decimal::ZERO,
            ..Default::default()
        });
        let series = series(&[100.0]);
        let result = engine.simulate(&series, &SignalSeries::flat(1), "test");
        assert!(matches!(result, Err(EngineError::InvalidCapital(_))));
    }

    #[test]
    fn test_open_position_closed_at_end() {
        let series = series(&[100.0, 150.0]);
        let signals = SignalSeries::new(vec![LongEntry, Flat]);

        let sim = frictionless().simulate(&series, &signals, "test").unwrap();

        assert_eq!(sim.trades.len(), 1);
        assert_eq!(sim.trades[0].exit_time, 60_000);
        assert_eq!(sim.final_equity, dec!(1500));
        // Liquidation value lands on the last equity point
        assert_eq!(sim.equity_curve.last().unwrap().equity, dec!(1500));
    }

    #[test]
    fn test_flat_signals_no_trades() {
        let series = series(&[100.0, 101.0, 99.0]);
        let sim = frictionless()
            .simulate(&series, &SignalSeries::flat(3), "test")
            .unwrap();

        assert!(sim.trades.is_empty());
        assert_eq!(sim.bars_in_position, 0);
        assert_eq!(sim.final_equity, dec!(1000));
        assert_eq!(sim.equity_curve.len(), 3);
    }

    #[test]
    fn test_exposure_counts_holding_bars() {
        let series = series(&[100.0, 100.0, 100.0, 100.0, 100.0]);
        let signals = SignalSeries::new(vec![Flat, LongEntry, Flat, LongExit, Flat]);

        let sim = frictionless().simulate(&series, &signals, "test").unwrap();
        // Held on the entry bar and the bar after; the exit bar is flat again
        assert_eq!(sim.bars_in_position, 2);
    }
}

//! Sequential batch runner over (symbol, strategy) pairs.

use std::collections::BTreeMap;

use tracing::{error, info};

use pairbench_core::traits::{SimulationEngine, Strategy};
use pairbench_core::types::{BarSeries, PerformanceSummary, Simulation};

use crate::statistics;

/// Outcome of one successful (symbol, strategy) run.
pub struct RunResult {
    pub summary: PerformanceSummary,
    pub simulation: Simulation,
    pub strategy_id: String,
    pub strategy_name: String,
}

/// Runs every strategy over every symbol, one pair at a time.
///
/// A strategy or engine failure aborts only the failing pair; the batch
/// continues and reports whatever completed.
pub struct BacktestRunner<E: SimulationEngine> {
    engine: E,
}

impl<E: SimulationEngine> BacktestRunner<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Run one strategy across the whole symbol universe.
    pub fn run_strategy(
        &self,
        strategy: &dyn Strategy,
        data: &BTreeMap<String, BarSeries>,
    ) -> Vec<RunResult> {
        let mut results = Vec::with_capacity(data.len());

        for (symbol, series) in data {
            info!(symbol = %symbol, strategy = strategy.id(), "running backtest");

            let signals = match strategy.generate_signals(series) {
                Ok(signals) => signals,
                Err(e) => {
                    error!(symbol = %symbol, strategy = strategy.id(), error = %e,
                        "signal generation failed, skipping pair");
                    continue;
                }
            };

            let simulation = match self.engine.simulate(series, &signals, strategy.id()) {
                Ok(simulation) => simulation,
                Err(e) => {
                    error!(symbol = %symbol, strategy = strategy.id(), error = %e,
                        "simulation failed, skipping pair");
                    continue;
                }
            };

            let summary =
                statistics::summarize(symbol, strategy.name(), &simulation, series.timeframe);
            results.push(RunResult {
                summary,
                simulation,
                strategy_id: strategy.id().to_string(),
                strategy_name: strategy.name().to_string(),
            });
        }

        results
    }

    /// Run every strategy over every symbol, grouped by strategy id.
    pub fn run_all(
        &self,
        strategies: &[Box<dyn Strategy>],
        data: &BTreeMap<String, BarSeries>,
    ) -> BTreeMap<String, Vec<RunResult>> {
        let mut grouped = BTreeMap::new();
        for strategy in strategies {
            let results = self.run_strategy(strategy.as_ref(), data);
            info!(
                strategy = strategy.id(),
                pairs = results.len(),
                "strategy batch complete"
            );
            grouped.insert(strategy.id().to_string(), results);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, VectorEngine};
    use pairbench_core::types::{Bar, Timeframe};
    use pairbench_strategies::StrategyRegistry;

    fn synthetic_universe() -> BTreeMap<String, BarSeries> {
        let mut data = BTreeMap::new();
        for symbol in ["AAABTC", "BBBBTC"] {
            let bars: Vec<Bar> = (0..300)
                .map(|i| {
                    let price = 100.0 + (i as f64 * 0.15).sin() * 12.0;
                    Bar::new(i as i64 * 60_000, price, price + 1.0, price - 1.0, price, 1000.0)
                })
                .collect();
            data.insert(
                symbol.to_string(),
                BarSeries::from_bars(symbol, Timeframe::Minute1, bars).unwrap(),
            );
        }
        data
    }

    #[test]
    fn test_run_all_covers_every_pair() {
        let registry = StrategyRegistry::new();
        let strategies: Vec<_> = registry
            .ids()
            .into_iter()
            .map(|id| registry.create_default(id).unwrap())
            .collect();

        let runner = BacktestRunner::new(VectorEngine::new(EngineConfig::default()));
        let data = synthetic_universe();
        let grouped = runner.run_all(&strategies, &data);

        assert_eq!(grouped.len(), 3);
        for results in grouped.values() {
            assert_eq!(results.len(), 2);
        }
    }

    #[test]
    fn test_summary_rows_carry_symbol_and_strategy() {
        let registry = StrategyRegistry::new();
        let strategy = registry.create_default("vwap_reversion").unwrap();

        let runner = BacktestRunner::new(VectorEngine::new(EngineConfig::default()));
        let data = synthetic_universe();
        let results = runner.run_strategy(strategy.as_ref(), &data);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].summary.symbol, "AAABTC");
        assert_eq!(results[0].summary.strategy, "VWAP Reversion");
        assert_eq!(results[0].strategy_id, "vwap_reversion");
    }

    #[test]
    fn test_equity_curve_aligned_with_bars() {
        let registry = StrategyRegistry::new();
        let strategy = registry.create_default("rsi_bollinger").unwrap();

        let runner = BacktestRunner::new(VectorEngine::new(EngineConfig::default()));
        let data = synthetic_universe();
        let results = runner.run_strategy(strategy.as_ref(), &data);

        for result in results {
            assert_eq!(result.simulation.equity_curve.len(), 300);
        }
    }
}

//! SMA Crossover Strategy.
//!
//! Enters long when the fast SMA crosses above the slow SMA, exits when
//! the fast SMA crosses back below.

use serde::{Deserialize, Serialize};

use pairbench_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, SignalSeries},
};
use pairbench_indicators::Sma;

use crate::state::signalize;

/// Configuration for the SMA Crossover strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaCrossoverConfig {
    /// Fast moving average period
    pub fast_period: usize,
    /// Slow moving average period
    pub slow_period: usize,
}

impl Default for SmaCrossoverConfig {
    fn default() -> Self {
        Self {
            fast_period: 150,
            slow_period: 250,
        }
    }
}

impl StrategyConfig for SmaCrossoverConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.fast_period == 0 {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be greater than 0".into(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be less than slow period".into(),
            ));
        }
        Ok(())
    }
}

/// SMA Crossover strategy.
pub struct SmaCrossoverStrategy {
    config: SmaCrossoverConfig,
    fast: Sma,
    slow: Sma,
}

impl SmaCrossoverStrategy {
    /// Create a new SMA Crossover strategy.
    pub fn new(config: SmaCrossoverConfig) -> Self {
        let fast = Sma::new(config.fast_period);
        let slow = Sma::new(config.slow_period);
        Self { config, fast, slow }
    }
}

impl Strategy for SmaCrossoverStrategy {
    fn id(&self) -> &'static str {
        "sma_crossover"
    }

    fn name(&self) -> &str {
        "SMA Crossover"
    }

    fn description(&self) -> &str {
        "Follows fast/slow moving average crossovers"
    }

    fn warmup_period(&self) -> usize {
        // A cross needs the bar before it, so one past the slow window.
        self.config.slow_period + 1
    }

    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, StrategyError> {
        let closes = series.closes();
        let fast = self.fast.calculate(&closes);
        let slow = self.slow.calculate(&closes);

        let mut entries = vec![false; closes.len()];
        let mut exits = vec![false; closes.len()];

        for i in 1..closes.len() {
            let (Some(f), Some(s), Some(prev_f), Some(prev_s)) =
                (fast[i], slow[i], fast[i - 1], slow[i - 1])
            else {
                continue;
            };
            // Bullish cross: fast moves from at-or-below to above
            entries[i] = prev_f <= prev_s && f > s;
            exits[i] = prev_f >= prev_s && f < s;
        }

        Ok(signalize(&entries, &exits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairbench_core::types::{Bar, SignalAction, Timeframe};

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Bar::new(i as i64 * 60_000, close, close + 1.0, close - 1.0, close, 1000.0)
            })
            .collect();
        BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(SmaCrossoverConfig::default().validate().is_ok());

        let config = SmaCrossoverConfig {
            fast_period: 30,
            slow_period: 20,
        };
        assert!(config.validate().is_err());

        let config = SmaCrossoverConfig {
            fast_period: 0,
            slow_period: 20,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bullish_crossover() {
        let config = SmaCrossoverConfig {
            fast_period: 3,
            slow_period: 5,
        };
        let strategy = SmaCrossoverStrategy::new(config);

        // Downtrend then reversal pulls the fast SMA above the slow SMA.
        let closes = vec![
            100.0, 99.0, 98.0, 97.0, 96.0, // downtrend
            97.0, 99.0, 102.0, 105.0, 108.0, // reversal
        ];
        let series = series_from_closes(&closes);
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.len(), series.len());
        assert_eq!(signals.entry_count(), 1);
        assert!(signals.is_well_formed());
    }

    #[test]
    fn test_round_trip_on_reversal() {
        let config = SmaCrossoverConfig {
            fast_period: 2,
            slow_period: 4,
        };
        let strategy = SmaCrossoverStrategy::new(config);

        let closes = vec![
            100.0, 98.0, 96.0, 94.0, // down
            97.0, 101.0, 105.0, // up: bullish cross
            101.0, 96.0, 90.0, 85.0, // down again: bearish cross
        ];
        let series = series_from_closes(&closes);
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.entry_count(), 1);
        let actions: Vec<_> = signals.iter().collect();
        let entry_idx = actions
            .iter()
            .position(|a| *a == SignalAction::LongEntry)
            .unwrap();
        let exit_idx = actions
            .iter()
            .position(|a| *a == SignalAction::LongExit)
            .unwrap();
        assert!(entry_idx < exit_idx);
    }

    #[test]
    fn test_short_series_all_flat() {
        // Series shorter than the slow window: indicators stay None and
        // every bar is Flat.
        let strategy = SmaCrossoverStrategy::new(SmaCrossoverConfig::default());
        let closes: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);

        let signals = strategy.generate_signals(&series).unwrap();
        assert_eq!(signals.len(), 100);
        assert!(signals.iter().all(|a| a == SignalAction::Flat));
    }
}

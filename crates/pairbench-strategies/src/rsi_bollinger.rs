//! RSI + Bollinger Bands Strategy.
//!
//! Enters long when RSI is oversold and price is below the lower band,
//! exits when RSI is overbought and price is above the upper band.

use serde::{Deserialize, Serialize};

use pairbench_core::{
    error::StrategyError,
    traits::{Indicator, MultiOutputIndicator, Strategy, StrategyConfig},
    types::{BarSeries, SignalSeries},
};
use pairbench_indicators::{BollingerBands, Rsi};

use crate::state::signalize;

/// Configuration for the RSI + Bollinger Bands strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiBollingerConfig {
    /// RSI calculation period
    pub rsi_period: usize,
    /// Bollinger Bands period
    pub bb_period: usize,
    /// Bollinger Bands standard deviation multiplier
    pub bb_std_dev: f64,
    /// Oversold threshold (enter below this)
    pub oversold: f64,
    /// Overbought threshold (exit above this)
    pub overbought: f64,
}

impl Default for RsiBollingerConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            bb_period: 20,
            bb_std_dev: 2.0,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl StrategyConfig for RsiBollingerConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.rsi_period < 2 {
            return Err(StrategyError::InvalidConfig(
                "RSI period must be at least 2".into(),
            ));
        }
        if self.bb_period < 2 {
            return Err(StrategyError::InvalidConfig(
                "BB period must be at least 2".into(),
            ));
        }
        if self.bb_std_dev <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "BB std dev must be positive".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(StrategyError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        if self.overbought > 100.0 || self.oversold < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

/// RSI + Bollinger Bands strategy.
pub struct RsiBollingerStrategy {
    config: RsiBollingerConfig,
    rsi: Rsi,
    bb: BollingerBands,
}

impl RsiBollingerStrategy {
    /// Create a new RSI + Bollinger Bands strategy.
    pub fn new(config: RsiBollingerConfig) -> Self {
        let rsi = Rsi::new(config.rsi_period);
        let bb = BollingerBands::with_params(config.bb_period, config.bb_std_dev);
        Self { config, rsi, bb }
    }
}

impl Strategy for RsiBollingerStrategy {
    fn id(&self) -> &'static str {
        "rsi_bollinger"
    }

    fn name(&self) -> &str {
        "RSI and Bollinger Bands"
    }

    fn description(&self) -> &str {
        "Buys oversold dips below the lower band, sells overbought rallies above the upper band"
    }

    fn warmup_period(&self) -> usize {
        (self.config.rsi_period + 1).max(self.config.bb_period)
    }

    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, StrategyError> {
        let closes = series.closes();
        let rsi = self.rsi.calculate(&closes);
        let bands = self.bb.calculate(&closes);

        let mut entries = vec![false; closes.len()];
        let mut exits = vec![false; closes.len()];

        for i in 0..closes.len() {
            let (Some(rsi_value), Some(band)) = (rsi[i], bands[i]) else {
                continue;
            };
            entries[i] = rsi_value < self.config.oversold && closes[i] < band.lower;
            exits[i] = rsi_value > self.config.overbought && closes[i] > band.upper;
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
        assert!(RsiBollingerConfig::default().validate().is_ok());

        let config = RsiBollingerConfig {
            oversold: 70.0,
            overbought: 30.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RsiBollingerConfig {
            bb_std_dev: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rising_series_never_enters() {
        // Strictly increasing prices are never oversold.
        let closes: Vec<f64> = (0..120).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);

        let strategy = RsiBollingerStrategy::new(RsiBollingerConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.len(), series.len());
        assert_eq!(signals.entry_count(), 0);
    }

    #[test]
    fn test_crash_triggers_entry() {
        // A steady market followed by a collapse drives RSI under 30 and
        // price under the lower band.
        let mut closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.9).sin() * 0.5)
            .collect();
        for i in 0..10 {
            closes.push(95.0 - 5.0 * i as f64);
        }
        let series = series_from_closes(&closes);

        let strategy = RsiBollingerStrategy::new(RsiBollingerConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.entry_count(), 1);
        assert!(signals.is_well_formed());
    }

    #[test]
    fn test_warmup_emits_flat() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let series = series_from_closes(&closes);

        let strategy = RsiBollingerStrategy::new(RsiBollingerConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        // Shorter than both indicator windows: nothing can fire.
        assert!(signals.iter().all(|a| a == SignalAction::Flat));
    }
}

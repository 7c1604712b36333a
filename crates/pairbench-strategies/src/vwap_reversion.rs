//! VWAP Reversion Strategy.
//!
//! Enters long when price trades below the running VWAP by a threshold,
//! exits when price trades above it by the same threshold.

use serde::{Deserialize, Serialize};

use pairbench_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{BarSeries, SignalSeries},
};
use pairbench_indicators::VwapDeviation;

use crate::state::signalize;

/// Configuration for the VWAP Reversion strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VwapReversionConfig {
    /// Relative deviation from VWAP that triggers entry/exit (0.01 = 1%)
    pub deviation_threshold: f64,
}

impl Default for VwapReversionConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: 0.01,
        }
    }
}

impl StrategyConfig for VwapReversionConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.deviation_threshold <= 0.0 || self.deviation_threshold >= 1.0 {
            return Err(StrategyError::InvalidConfig(
                "Deviation threshold must be in (0, 1)".into(),
            ));
        }
        Ok(())
    }
}

/// VWAP Reversion strategy.
pub struct VwapReversionStrategy {
    config: VwapReversionConfig,
    vwap: VwapDeviation,
}

impl VwapReversionStrategy {
    /// Create a new VWAP Reversion strategy.
    pub fn new(config: VwapReversionConfig) -> Self {
        Self {
            config,
            vwap: VwapDeviation::new(),
        }
    }
}

impl Strategy for VwapReversionStrategy {
    fn id(&self) -> &'static str {
        "vwap_reversion"
    }

    fn name(&self) -> &str {
        "VWAP Reversion"
    }

    fn description(&self) -> &str {
        "Buys below the running VWAP, sells above it"
    }

    fn warmup_period(&self) -> usize {
        1
    }

    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, StrategyError> {
        let closes = series.closes();
        let volumes = series.volumes();
        let deviation = self.vwap.calculate(&closes, &volumes);

        let threshold = self.config.deviation_threshold;
        let entries: Vec<bool> = deviation
            .iter()
            .map(|d| matches!(d, Some(v) if *v < -threshold))
            .collect();
        let exits: Vec<bool> = deviation
            .iter()
            .map(|d| matches!(d, Some(v) if *v > threshold))
            .collect();

        Ok(signalize(&entries, &exits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairbench_core::types::{Bar, SignalAction, Timeframe};

    fn series_with_volumes(closes: &[f64], volumes: &[f64]) -> BarSeries {
        let bars: Vec<Bar> = closes
            .iter()
            .zip(volumes.iter())
            .enumerate()
            .map(|(i, (&close, &volume))| {
                Bar::new(i as i64 * 60_000, close, close + 1.0, close - 1.0, close, volume)
            })
            .collect();
        BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(VwapReversionConfig::default().validate().is_ok());

        let config = VwapReversionConfig {
            deviation_threshold: 0.0,
        };
        assert!(config.validate().is_err());

        let config = VwapReversionConfig {
            deviation_threshold: 1.5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_entry_below_vwap() {
        // Steady prices, then a deep dip: price falls far below the
        // running VWAP and triggers an entry.
        let closes = vec![100.0, 100.0, 100.0, 100.0, 90.0];
        let volumes = vec![1000.0; 5];
        let series = series_with_volumes(&closes, &volumes);

        let strategy = VwapReversionStrategy::new(VwapReversionConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.len(), series.len());
        assert_eq!(signals.get(4), Some(SignalAction::LongEntry));
        assert!(signals.is_well_formed());
    }

    #[test]
    fn test_round_trip() {
        // Dip below VWAP, then recover above it: the bounce back to 100
        // already trades more than 1% over the dragged-down VWAP.
        let closes = vec![100.0, 100.0, 100.0, 90.0, 100.0, 130.0];
        let volumes = vec![1000.0; 6];
        let series = series_with_volumes(&closes, &volumes);

        let strategy = VwapReversionStrategy::new(VwapReversionConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        assert_eq!(signals.entry_count(), 1);
        assert_eq!(signals.get(3), Some(SignalAction::LongEntry));
        assert_eq!(signals.get(4), Some(SignalAction::LongExit));
        assert_eq!(signals.get(5), Some(SignalAction::Flat));
    }

    #[test]
    fn test_flat_market_stays_flat() {
        let closes = vec![100.0; 20];
        let volumes = vec![1000.0; 20];
        let series = series_with_volumes(&closes, &volumes);

        let strategy = VwapReversionStrategy::new(VwapReversionConfig::default());
        let signals = strategy.generate_signals(&series).unwrap();

        assert!(signals.iter().all(|a| a == SignalAction::Flat));
    }
}

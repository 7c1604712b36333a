//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{BarSeries, SignalSeries};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy is a pure mapping from a bar series to an aligned signal
/// series: indicators are computed over the whole history, then thresholds
/// and an explicit position state machine produce one action per bar.
/// Strategies hold no mutable state between calls.
pub trait Strategy: Send + Sync {
    /// Stable identifier, safe for file names (e.g. `sma_crossover`).
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }

    /// Number of bars needed before the first non-Flat action can appear.
    fn warmup_period(&self) -> usize;

    /// Map a bar series to one action per bar.
    ///
    /// The returned series has exactly `series.len()` elements and satisfies
    /// [`SignalSeries::is_well_formed`]. A series shorter than the warmup
    /// period yields all-Flat signals, not an error.
    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, StrategyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bar, SignalAction, Timeframe};

    struct AlwaysFlat;

    impl Strategy for AlwaysFlat {
        fn id(&self) -> &'static str {
            "always_flat"
        }

        fn name(&self) -> &str {
            "Always Flat"
        }

        fn warmup_period(&self) -> usize {
            0
        }

        fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, StrategyError> {
            Ok(SignalSeries::flat(series.len()))
        }
    }

    #[test]
    fn test_signals_aligned_with_series() {
        let bars: Vec<Bar> = (0..5)
            .map(|i| Bar::new(i as i64 * 60_000, 1.0, 1.0, 1.0, 1.0, 1.0))
            .collect();
        let series = BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).unwrap();

        let signals = AlwaysFlat.generate_signals(&series).unwrap();
        assert_eq!(signals.len(), series.len());
        assert!(signals.iter().all(|a| a == SignalAction::Flat));
    }
}

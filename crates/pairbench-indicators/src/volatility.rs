//! Volatility indicators.

use pairbench_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

/// Rolling population standard deviation.
#[derive(Debug, Clone)]
pub struct StdDev {
    period: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        Self { period }
    }
}

impl Indicator for StdDev {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        for (offset, window) in data.windows(self.period).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / period_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period_f64;
            result[offset + self.period - 1] = Some(variance.sqrt());
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Bollinger Bands output values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band (middle + k * stddev)
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band (middle - k * stddev)
    pub lower: f64,
    /// Position of price within the bands, 0 = lower, 1 = upper
    pub percent_b: f64,
    /// Band width relative to the middle band
    pub bandwidth: f64,
}

/// Bollinger Bands.
///
/// Rolling mean with bands at +/- k standard deviations, used as
/// volatility-relative price bounds.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_mult: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands with the default parameters (20, 2.0).
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    /// Create with custom period and standard deviation multiplier.
    pub fn with_params(period: usize, std_dev_mult: f64) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        assert!(std_dev_mult > 0.0, "Std dev multiplier must be positive");
        Self {
            period,
            std_dev_mult,
        }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<BollingerOutput>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        for (offset, window) in data.windows(self.period).enumerate() {
            let i = offset + self.period - 1;
            let mean: f64 = window.iter().sum::<f64>() / period_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period_f64;
            let std_dev = variance.sqrt();

            let upper = mean + self.std_dev_mult * std_dev;
            let lower = mean - self.std_dev_mult * std_dev;
            let band_range = upper - lower;

            let percent_b = if band_range == 0.0 {
                0.5
            } else {
                (data[i] - lower) / band_range
            };
            let bandwidth = if mean == 0.0 { 0.0 } else { band_range / mean };

            result[i] = Some(BollingerOutput {
                upper,
                middle: mean,
                lower,
                percent_b,
                bandwidth,
            });
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "BollingerBands"
    }
}

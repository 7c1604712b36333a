//! Volume-weighted indicators.

/// Deviation of price from the cumulative volume-weighted average price.
///
/// The VWAP runs from the start of the series: at each bar it is the
/// cumulative sum of `close * volume` over the cumulative volume. The
/// deviation is `(close - vwap) / vwap`; a value of -0.02 means price
/// trades 2% below VWAP. Bars before any volume has printed yield `None`.
#[derive(Debug, Clone, Default)]
pub struct VwapDeviation;

impl VwapDeviation {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the running VWAP, aligned with the inputs.
    pub fn vwap(&self, closes: &[f64], volumes: &[f64]) -> Vec<Option<f64>> {
        let len = closes.len().min(volumes.len());
        let mut result = vec![None; len];

        let mut cum_volume = 0.0;
        let mut cum_price_volume = 0.0;

        for i in 0..len {
            cum_volume += volumes[i];
            cum_price_volume += closes[i] * volumes[i];
            if cum_volume > 0.0 {
                result[i] = Some(cum_price_volume / cum_volume);
            }
        }

        result
    }

    /// Calculate the normalized deviation of close from the running VWAP.
    pub fn calculate(&self, closes: &[f64], volumes: &[f64]) -> Vec<Option<f64>> {
        self.vwap(closes, volumes)
            .iter()
            .enumerate()
            .map(|(i, vwap)| {
                vwap.and_then(|v| {
                    if v == 0.0 {
                        None
                    } else {
                        Some((closes[i] - v) / v)
                    }
                })
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        "VwapDeviation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vwap_running_average() {
        let ind = VwapDeviation::new();
        let closes = vec![10.0, 20.0, 30.0];
        let volumes = vec![1.0, 1.0, 2.0];
        let vwap = ind.vwap(&closes, &volumes);

        assert!((vwap[0].unwrap() - 10.0).abs() < 1e-10);
        assert!((vwap[1].unwrap() - 15.0).abs() < 1e-10);
        // (10 + 20 + 60) / 4
        assert!((vwap[2].unwrap() - 22.5).abs() < 1e-10);
    }

    #[test]
    fn test_deviation_sign() {
        let ind = VwapDeviation::new();
        let closes = vec![100.0, 90.0, 120.0];
        let volumes = vec![1.0, 1.0, 1.0];
        let dev = ind.calculate(&closes, &volumes);

        assert!((dev[0].unwrap()).abs() < 1e-10);
        assert!(dev[1].unwrap() < 0.0); // below VWAP
        assert!(dev[2].unwrap() > 0.0); // above VWAP
    }

    #[test]
    fn test_zero_volume_prefix() {
        let ind = VwapDeviation::new();
        let closes = vec![100.0, 101.0, 102.0];
        let volumes = vec![0.0, 0.0, 5.0];
        let dev = ind.calculate(&closes, &volumes);

        assert_eq!(dev[0], None);
        assert_eq!(dev[1], None);
        assert!(dev[2].is_some());
    }

    #[test]
    fn test_alignment() {
        let ind = VwapDeviation::new();
        let closes: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let volumes = vec![1.0; 50];
        assert_eq!(ind.calculate(&closes, &volumes).len(), 50);
    }
}

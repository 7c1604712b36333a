//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Timeframe;
use crate::error::DataError;

/// Compact OHLCV bar. Uses f64 for fast indicator calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Calculate the typical price (HLC average).
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// Time-series container for one symbol's bars.
///
/// Timestamps are strictly increasing; the series is immutable once built.
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Symbol identifier
    pub symbol: String,
    /// Timeframe of the bars
    pub timeframe: Timeframe,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Build a series from bars, enforcing strictly increasing timestamps.
    pub fn from_bars(
        symbol: impl Into<String>,
        timeframe: Timeframe,
        bars: Vec<Bar>,
    ) -> Result<Self, DataError> {
        let symbol = symbol.into();
        if bars
            .windows(2)
            .any(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(DataError::NonMonotonicTimestamps { symbol });
        }
        Ok(Self {
            symbol,
            timeframe,
            bars,
        })
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract open prices as a vector.
    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Extract typical prices as a vector.
    pub fn typical_prices(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.typical_price()).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_calculations() {
        let bar = Bar::new(1000, 100.0, 110.0, 95.0, 105.0, 1_000_000.0);

        assert!((bar.typical_price() - 103.333333).abs() < 0.001);
        assert!(bar.is_bullish());
    }

    #[test]
    fn test_series_rejects_unordered_timestamps() {
        let bars = vec![
            Bar::new(2, 100.0, 101.0, 99.0, 100.5, 1000.0),
            Bar::new(1, 100.5, 102.0, 100.0, 101.5, 1000.0),
        ];
        let result = BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars);
        assert!(matches!(
            result,
            Err(DataError::NonMonotonicTimestamps { .. })
        ));
    }

    #[test]
    fn test_series_rejects_duplicate_timestamps() {
        let bars = vec![
            Bar::new(1, 100.0, 101.0, 99.0, 100.5, 1000.0),
            Bar::new(1, 100.5, 102.0, 100.0, 101.5, 1000.0),
        ];
        assert!(BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).is_err());
    }

    #[test]
    fn test_series_extractions() {
        let bars = vec![
            Bar::new(1, 100.0, 101.0, 99.0, 100.5, 1000.0),
            Bar::new(2, 100.5, 102.0, 100.0, 101.5, 2000.0),
        ];
        let series = BarSeries::from_bars("ETHBTC", Timeframe::Minute1, bars).unwrap();

        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.volumes(), vec![1000.0, 2000.0]);
        assert_eq!(series.len(), 2);
    }
}

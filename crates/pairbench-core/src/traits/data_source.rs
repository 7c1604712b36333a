//! Data source trait definitions.

use crate::error::DataError;
use crate::types::Bar;
use async_trait::async_trait;

/// Trait for historical market data providers.
///
/// The provider is constructed with a fixed market, timeframe, and date
/// range; callers only name symbols. One fetch attempt per symbol, no
/// retry or backoff.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// List tradeable symbols quoted in the given asset.
    async fn list_symbols(&self, quote_asset: &str) -> Result<Vec<String>, DataError>;

    /// Total traded volume for a symbol over the configured range.
    async fn fetch_volume(&self, symbol: &str) -> Result<f64, DataError>;

    /// Fetch OHLCV bars for a symbol over the configured range,
    /// ordered oldest to newest.
    async fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

//! Load-or-fetch orchestration.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use pairbench_core::error::DataError;
use pairbench_core::traits::MarketDataSource;
use pairbench_core::types::{BarSeries, Timeframe};

use crate::cache::BarCache;
use crate::selector::SymbolSelector;

/// Loads bar series for a volume-ranked symbol universe, cache first.
pub struct DataLoader {
    source: Arc<dyn MarketDataSource>,
    cache: BarCache,
    timeframe: Timeframe,
    quote_asset: String,
}

impl DataLoader {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        cache: BarCache,
        timeframe: Timeframe,
        quote_asset: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cache,
            timeframe,
            quote_asset: quote_asset.into(),
        }
    }

    /// Return one bar series per symbol for the top `num_symbols` pairs.
    ///
    /// A populated cache short-circuits symbol selection and fetching
    /// entirely. Otherwise symbols are ranked by volume (`reverse` selects
    /// the lowest instead of the highest), fetched one attempt each, and
    /// written through to the cache. Per-symbol failures are skipped with
    /// a warning; an empty result is `DataError::NoSymbolsLoaded`.
    pub async fn load_or_get_data(
        &self,
        num_symbols: usize,
        reverse: bool,
    ) -> Result<BTreeMap<String, BarSeries>, DataError> {
        if self.cache.is_populated() {
            info!(dir = %self.cache.dir().display(), "cache hit, loading bars from disk");
            return self.load_cached();
        }

        info!(
            source = self.source.name(),
            num_symbols, reverse, "cache miss, fetching from data source"
        );
        let selector = SymbolSelector::new(Arc::clone(&self.source), self.quote_asset.clone());
        let symbols = selector.top_symbols(num_symbols, reverse).await?;

        let mut result = BTreeMap::new();
        for symbol in symbols {
            match self.fetch_one(&symbol).await {
                Ok(series) => {
                    result.insert(symbol, series);
                }
                Err(e) => warn!(symbol = %symbol, error = %e, "skipping symbol"),
            }
        }

        if result.is_empty() {
            return Err(DataError::NoSymbolsLoaded);
        }
        info!(symbols = result.len(), "loaded symbol universe");
        Ok(result)
    }

    async fn fetch_one(&self, symbol: &str) -> Result<BarSeries, DataError> {
        let bars = self.source.fetch_bars(symbol).await?;
        let series = BarSeries::from_bars(symbol, self.timeframe, bars)?;
        self.cache.store(symbol, series.bars())?;
        Ok(series)
    }

    fn load_cached(&self) -> Result<BTreeMap<String, BarSeries>, DataError> {
        let mut result = BTreeMap::new();
        for (symbol, bars) in self.cache.load_all()? {
            let series = BarSeries::from_bars(symbol.as_str(), self.timeframe, bars)?;
            result.insert(symbol, series);
        }
        if result.is_empty() {
            return Err(DataError::NoSymbolsLoaded);
        }
        Ok(result)
    }
}

//! Volume-ranked symbol selection.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{info, warn};

use pairbench_core::error::DataError;
use pairbench_core::traits::MarketDataSource;

/// Selects the top (or bottom) N symbols by traded volume.
pub struct SymbolSelector {
    source: Arc<dyn MarketDataSource>,
    quote_asset: String,
}

impl SymbolSelector {
    pub fn new(source: Arc<dyn MarketDataSource>, quote_asset: impl Into<String>) -> Self {
        Self {
            source,
            quote_asset: quote_asset.into(),
        }
    }

    /// Rank symbols by total volume over the source's range and take `n`.
    ///
    /// `reverse = false` selects the highest-volume symbols, `true` the
    /// lowest. Equal volumes break ties by symbol name ascending, so the
    /// selection is deterministic. Symbols whose volume cannot be fetched
    /// are skipped with a warning.
    pub async fn top_symbols(&self, n: usize, reverse: bool) -> Result<Vec<String>, DataError> {
        let symbols = self.source.list_symbols(&self.quote_asset).await?;
        info!(
            quote_asset = %self.quote_asset,
            candidates = symbols.len(),
            "ranking symbols by volume"
        );

        let mut ranked: Vec<(String, f64)> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            match self.source.fetch_volume(&symbol).await {
                Ok(volume) => ranked.push((symbol, volume)),
                Err(e) => warn!(symbol = %symbol, error = %e, "skipping symbol in ranking"),
            }
        }

        ranked.sort_by(|a, b| {
            let by_volume = if reverse {
                a.1.partial_cmp(&b.1)
            } else {
                b.1.partial_cmp(&a.1)
            }
            .unwrap_or(Ordering::Equal);
            by_volume.then_with(|| a.0.cmp(&b.0))
        });

        ranked.truncate(n);
        Ok(ranked.into_iter().map(|(symbol, _)| symbol).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pairbench_core::types::Bar;
    use std::collections::BTreeMap;

    struct FixedVolumes {
        volumes: BTreeMap<&'static str, f64>,
    }

    #[async_trait]
    impl MarketDataSource for FixedVolumes {
        async fn list_symbols(&self, _quote_asset: &str) -> Result<Vec<String>, DataError> {
            Ok(self.volumes.keys().map(|s| s.to_string()).collect())
        }

        async fn fetch_volume(&self, symbol: &str) -> Result<f64, DataError> {
            self.volumes
                .get(symbol)
                .copied()
                .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
        }

        async fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError> {
            Err(DataError::NoDataAvailable(symbol.to_string()))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn selector(volumes: &[(&'static str, f64)]) -> SymbolSelector {
        let source = FixedVolumes {
            volumes: volumes.iter().copied().collect(),
        };
        SymbolSelector::new(Arc::new(source), "BTC")
    }

    #[tokio::test]
    async fn test_top_by_volume_descending() {
        let selector = selector(&[("AAABTC", 50.0), ("BBBBTC", 200.0), ("CCCBTC", 100.0)]);
        let top = selector.top_symbols(2, false).await.unwrap();
        assert_eq!(top, vec!["BBBBTC", "CCCBTC"]);
    }

    #[tokio::test]
    async fn test_reverse_selects_lowest_volume() {
        // Ascending order returns exactly the two lowest-volume symbols.
        let selector = selector(&[("AAABTC", 50.0), ("BBBBTC", 200.0), ("CCCBTC", 100.0)]);
        let bottom = selector.top_symbols(2, true).await.unwrap();
        assert_eq!(bottom, vec!["AAABTC", "CCCBTC"]);
    }

    #[tokio::test]
    async fn test_equal_volume_tie_break_by_name() {
        let selector = selector(&[("ZZZBTC", 100.0), ("AAABTC", 100.0), ("MMMBTC", 100.0)]);
        let top = selector.top_symbols(2, false).await.unwrap();
        assert_eq!(top, vec!["AAABTC", "MMMBTC"]);
    }

    #[tokio::test]
    async fn test_n_larger_than_universe() {
        let selector = selector(&[("AAABTC", 1.0)]);
        let top = selector.top_symbols(10, false).await.unwrap();
        assert_eq!(top, vec!["AAABTC"]);
    }
}

//! On-disk bar cache.
//!
//! One CSV file per symbol under a directory keyed by market, timeframe,
//! and month (e.g. `cache/spot_1m_2025_02/ETHBTC.csv`). Read-or-create:
//! a populated directory is read as-is and never refreshed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use pairbench_core::error::DataError;
use pairbench_core::types::{Bar, MarketType, Timeframe};

/// Per-symbol CSV cache for one data window.
pub struct BarCache {
    dir: PathBuf,
}

impl BarCache {
    /// Cache rooted at `base/{market}_{timeframe}_{year}_{month:02}`.
    pub fn new(
        base: impl AsRef<Path>,
        market: MarketType,
        timeframe: Timeframe,
        year: i32,
        month: u32,
    ) -> Self {
        let dir = base
            .as_ref()
            .join(format!("{}_{}_{}_{:02}", market, timeframe, year, month));
        Self { dir }
    }

    /// Directory holding the cached files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the cache holds at least one symbol.
    pub fn is_populated(&self) -> bool {
        match fs::read_dir(&self.dir) {
            Ok(entries) => entries
                .flatten()
                .any(|e| e.path().extension().is_some_and(|ext| ext == "csv")),
            Err(_) => false,
        }
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.csv"))
    }

    /// Write one symbol's bars, creating the directory on first use.
    pub fn store(&self, symbol: &str, bars: &[Bar]) -> Result<(), DataError> {
        fs::create_dir_all(&self.dir).map_err(|e| DataError::CacheError(e.to_string()))?;

        let path = self.path_for(symbol);
        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| DataError::CacheError(e.to_string()))?;
        for bar in bars {
            writer
                .serialize(bar)
                .map_err(|e| DataError::CacheError(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        debug!(symbol = %symbol, path = %path.display(), rows = bars.len(), "cached bars");
        Ok(())
    }

    /// Read one symbol's bars.
    pub fn load(&self, symbol: &str) -> Result<Vec<Bar>, DataError> {
        let path = self.path_for(symbol);
        let mut reader =
            csv::Reader::from_path(&path).map_err(|e| DataError::CacheError(e.to_string()))?;

        let mut bars = Vec::new();
        for record in reader.deserialize() {
            let bar: Bar = record.map_err(|e| DataError::ParseError(e.to_string()))?;
            bars.push(bar);
        }
        Ok(bars)
    }

    /// Read every cached symbol, keyed by file stem.
    pub fn load_all(&self) -> Result<BTreeMap<String, Vec<Bar>>, DataError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| DataError::CacheError(e.to_string()))?;

        let mut result = BTreeMap::new();
        for entry in entries {
            let path = entry
                .map_err(|e| DataError::CacheError(e.to_string()))?
                .path();
            if !path.extension().is_some_and(|ext| ext == "csv") {
                continue;
            }
            let Some(symbol) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let bars = self.load(symbol)?;
            result.insert(symbol.to_string(), bars);
        }
        Ok(result)
    }
}

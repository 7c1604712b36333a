//! Cache population without backtesting.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use pairbench_data::{BarCache, BinanceSource, DataLoader};

use crate::cli::DownloadArgs;

pub async fn run(args: DownloadArgs, config_path: &Path) -> Result<()> {
    let mut config = pairbench_config::load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    if let Some(num_symbols) = args.num_symbols {
        config.data.num_symbols = num_symbols;
    }
    if args.reverse {
        config.data.reverse = true;
    }
    config.validate()?;

    let data = &config.data;
    let source = BinanceSource::new(
        data.market_type,
        data.timeframe,
        data.year,
        data.month,
        data.timeout_secs,
    )?;
    let cache = BarCache::new(
        &data.cache_dir,
        data.market_type,
        data.timeframe,
        data.year,
        data.month,
    );
    let cache_dir = cache.dir().to_path_buf();
    let loader = DataLoader::new(
        Arc::new(source),
        cache,
        data.timeframe,
        data.quote_asset.clone(),
    );

    let universe = loader
        .load_or_get_data(data.num_symbols, data.reverse)
        .await?;

    let total_bars: usize = universe.values().map(|s| s.len()).sum();
    println!(
        "Cached {} symbols ({} bars) under {}",
        universe.len(),
        total_bars,
        cache_dir.display()
    );
    Ok(())
}

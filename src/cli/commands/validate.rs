//! Validate configuration.

use std::path::Path;

use anyhow::{Context, Result};

pub fn run(config_path: &Path) -> Result<()> {
    let config = pairbench_config::load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    config.validate()?;

    println!("Configuration OK: {}", config_path.display());
    println!(
        "  universe: top {}{} {} pairs, {} {} {}-{:02}",
        config.data.num_symbols,
        if config.data.reverse { " (reversed)" } else { "" },
        config.data.quote_asset,
        config.data.market_type,
        config.data.timeframe,
        config.data.year,
        config.data.month,
    );
    println!(
        "  backtest: capital {}, fee {}, slippage {}",
        config.backtest.initial_capital, config.backtest.fee_pct, config.backtest.slippage_pct
    );
    println!("  results: {}", config.report.results_dir.display());
    Ok(())
}

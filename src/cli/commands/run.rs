//! Full pipeline: load data, backtest every pair, write reports.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use pairbench_backtest::{BacktestRunner, EngineConfig, VectorEngine};
use pairbench_config::AppConfig;
use pairbench_core::types::{BarSeries, PerformanceSummary};
use pairbench_data::{BarCache, BinanceSource, DataLoader};
use pairbench_report::ReportWriter;
use pairbench_strategies::StrategyRegistry;

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    let mut config = pairbench_config::load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    if let Some(num_symbols) = args.num_symbols {
        config.data.num_symbols = num_symbols;
    }
    if args.reverse {
        config.data.reverse = true;
    }
    config.validate()?;

    let data = load_universe(&config).await?;

    let registry = StrategyRegistry::new();
    let ids: Vec<&str> = match &args.strategy {
        Some(id) => {
            if !registry.exists(id) {
                bail!(
                    "unknown strategy '{}', available: {}",
                    id,
                    registry.ids().join(", ")
                );
            }
            vec![id.as_str()]
        }
        None => registry.ids(),
    };

    let mut strategies = Vec::with_capacity(ids.len());
    for &id in &ids {
        let params = config
            .strategies
            .params_for(id)
            .with_context(|| format!("no parameters for strategy '{}'", id))?;
        strategies.push(registry.create(id, params)?);
    }

    let engine = VectorEngine::new(EngineConfig {
        initial_capital: config.backtest.initial_capital,
        fee_pct: config.backtest.fee_pct,
        slippage_pct: config.backtest.slippage_pct,
    });
    let runner = BacktestRunner::new(engine);
    let grouped = runner.run_all(&strategies, &data);

    write_reports(&config, &registry, &grouped)?;

    for (strategy_id, results) in &grouped {
        let completed = results.len();
        let profitable = results
            .iter()
            .filter(|r| r.summary.total_return_pct > rust_decimal::Decimal::ZERO)
            .count();
        println!(
            "{}: {} pairs backtested, {} profitable",
            strategy_id, completed, profitable
        );
    }
    println!(
        "Reports written to {}",
        config.report.results_dir.display()
    );

    Ok(())
}

async fn load_universe(config: &AppConfig) -> Result<BTreeMap<String, BarSeries>> {
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
    let loader = DataLoader::new(
        Arc::new(source),
        cache,
        data.timeframe,
        data.quote_asset.clone(),
    );

    let universe = loader
        .load_or_get_data(data.num_symbols, data.reverse)
        .await?;
    info!(symbols = universe.len(), "universe ready");
    Ok(universe)
}

fn write_reports(
    config: &AppConfig,
    registry: &StrategyRegistry,
    grouped: &BTreeMap<String, Vec<pairbench_backtest::RunResult>>,
) -> Result<()> {
    let writer = ReportWriter::new(&config.report.results_dir);
    writer.prepare_dirs().context("cannot create results directories")?;

    for (strategy_id, results) in grouped {
        let strategy_name = registry
            .get(strategy_id)
            .map(|info| info.name.clone())
            .unwrap_or_else(|| strategy_id.clone());

        let rows: Vec<PerformanceSummary> =
            results.iter().map(|r| r.summary.clone()).collect();
        writer.write_metrics_csv(strategy_id, &rows)?;
        writer.write_html_report(strategy_id, &strategy_name, &rows)?;

        for result in results {
            writer.write_equity_chart(
                &result.summary.symbol,
                strategy_id,
                &strategy_name,
                &result.simulation.equity_curve,
            )?;
        }
    }

    Ok(())
}

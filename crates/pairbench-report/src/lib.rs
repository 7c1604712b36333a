//! Report generation.
//!
//! Three artifact families per batch, all under the results directory:
//! - `{strategy_id}_metrics.csv`: one summary row per symbol
//! - `statistic/{strategy_id}_report.html`: per-strategy summary table
//! - `screenshots/{symbol}_{strategy_id}_equity_curve.png`: equity chart
//!
//! Unlike data loading, report I/O is all-or-nothing: any write failure
//! aborts the run, since a partially written report cannot be trusted.

mod chart;
mod html;
mod metrics_csv;

use std::path::{Path, PathBuf};

use tracing::info;

use pairbench_core::error::ReportError;
use pairbench_core::types::{EquityPoint, PerformanceSummary};

/// Writes all report artifacts for a batch.
pub struct ReportWriter {
    results_dir: PathBuf,
    statistic_dir: PathBuf,
    screenshots_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at the results directory.
    pub fn new(results_dir: impl AsRef<Path>) -> Self {
        let results_dir = results_dir.as_ref().to_path_buf();
        Self {
            statistic_dir: results_dir.join("statistic"),
            screenshots_dir: results_dir.join("screenshots"),
            results_dir,
        }
    }

    /// Create the output directory tree up-front.
    pub fn prepare_dirs(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.results_dir)?;
        std::fs::create_dir_all(&self.statistic_dir)?;
        std::fs::create_dir_all(&self.screenshots_dir)?;
        Ok(())
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Write the per-strategy metrics CSV, one row per symbol.
    pub fn write_metrics_csv(
        &self,
        strategy_id: &str,
        rows: &[PerformanceSummary],
    ) -> Result<PathBuf, ReportError> {
        let path = self.results_dir.join(format!("{strategy_id}_metrics.csv"));
        metrics_csv::write(&path, rows)?;
        info!(path = %path.display(), rows = rows.len(), "metrics CSV written");
        Ok(path)
    }

    /// Write the per-strategy HTML summary report.
    pub fn write_html_report(
        &self,
        strategy_id: &str,
        strategy_name: &str,
        rows: &[PerformanceSummary],
    ) -> Result<PathBuf, ReportError> {
        let path = self.statistic_dir.join(format!("{strategy_id}_report.html"));
        let body = html::render_report(strategy_name, rows);
        std::fs::write(&path, body)?;
        info!(path = %path.display(), "HTML report written");
        Ok(path)
    }

    /// Render one (symbol, strategy) equity curve to PNG.
    pub fn write_equity_chart(
        &self,
        symbol: &str,
        strategy_id: &str,
        strategy_name: &str,
        curve: &[EquityPoint],
    ) -> Result<PathBuf, ReportError> {
        let path = self
            .screenshots_dir
            .join(format!("{symbol}_{strategy_id}_equity_curve.png"));
        chart::render_equity_chart(&path, symbol, strategy_name, curve)?;
        Ok(path)
    }
}

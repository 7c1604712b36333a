//! Metrics CSV writing.

use std::path::Path;

use pairbench_core::error::ReportError;
use pairbench_core::types::PerformanceSummary;

/// Serialize summary rows to a CSV file, header included.
pub(crate) fn write(path: &Path, rows: &[PerformanceSummary]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> ReportError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ReportError::Io(io),
        other => ReportError::Csv(format!("{:?}", other)),
    }
}

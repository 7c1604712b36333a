//! Equity-curve PNG rendering.

use std::path::Path;

use plotters::prelude::*;

use pairbench_core::error::ReportError;
use pairbench_core::types::EquityPoint;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

/// Render one equity curve as a PNG line chart.
pub(crate) fn render_equity_chart(
    path: &Path,
    symbol: &str,
    strategy_name: &str,
    curve: &[EquityPoint],
) -> Result<(), ReportError> {
    if curve.is_empty() {
        return Err(ReportError::Render(format!(
            "empty equity curve for {symbol}"
        )));
    }

    let values: Vec<f64> = curve
        .iter()
        .map(|p| p.equity.to_string().parse::<f64>().unwrap_or(0.0))
        .collect();

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Pad a flat curve so the axis range stays non-degenerate
    let pad = ((max - min) * 0.05).max(max.abs() * 0.01).max(1.0);
    let y_range = (min - pad)..(max + pad);
    let x_range = 0.0..(values.len().saturating_sub(1).max(1)) as f64;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let caption = format!("{} / {} equity curve", symbol, strategy_name);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Bar")
        .y_desc("Equity")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
            &BLUE,
        ))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn curve(values: &[i64]) -> Vec<EquityPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EquityPoint {
                timestamp: i as i64 * 60_000,
                equity: rust_decimal::Decimal::from(*v),
            })
            .collect()
    }

    #[test]
    fn test_renders_png_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.png");

        render_equity_chart(&path, "ETHBTC", "SMA Crossover", &curve(&[1000, 1010, 990, 1050]))
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_flat_curve_renders() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flat.png");

        render_equity_chart(&path, "ETHBTC", "VWAP Reversion", &curve(&[1000, 1000, 1000]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_curve_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");

        let result = render_equity_chart(&path, "ETHBTC", "VWAP Reversion", &[]);
        assert!(matches!(result, Err(ReportError::Render(_))));
    }
}

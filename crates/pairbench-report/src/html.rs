//! Per-strategy HTML summary rendering.

use chrono::Utc;
use rust_decimal::Decimal;

use pairbench_core::types::PerformanceSummary;

/// Render the summary table for one strategy across all symbols.
pub(crate) fn render_report(strategy_name: &str, rows: &[PerformanceSummary]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{} backtest report</title>\n", strategy_name));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 6px 12px; text-align: right; }\n\
         th { background: #f0f0f0; }\n\
         td:first-child { text-align: left; }\n\
         .negative { color: #b00020; }\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str(&format!("<h1>{} backtest report</h1>\n", strategy_name));
    html.push_str(&format!(
        "<p>Generated {} for {} symbols.</p>\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC"),
        rows.len()
    ));

    html.push_str("<table>\n<tr>");
    for header in [
        "Symbol",
        "Total Return [%]",
        "Sharpe Ratio",
        "Max Drawdown [%]",
        "Win Rate [%]",
        "Expectancy",
        "Exposure Time [%]",
        "Trades",
    ] {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n");

    for row in rows {
        let return_class = if row.total_return_pct < Decimal::ZERO {
            " class=\"negative\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td{}>{:.2}</td><td>{:.2}</td><td>{:.2}</td>\
             <td>{:.2}</td><td>{:.4}</td><td>{:.2}</td><td>{}</td></tr>\n",
            row.symbol,
            return_class,
            row.total_return_pct,
            row.sharpe_ratio,
            row.max_drawdown_pct,
            row.win_rate_pct,
            row.expectancy,
            row.exposure_time_pct,
            row.trade_count,
        ));
    }
    html.push_str("</table>\n");

    if !rows.is_empty() {
        let count = Decimal::from(rows.len());
        let avg_return =
            rows.iter().map(|r| r.total_return_pct).sum::<Decimal>() / count;
        let avg_win_rate = rows.iter().map(|r| r.win_rate_pct).sum::<Decimal>() / count;
        let total_trades: usize = rows.iter().map(|r| r.trade_count).sum();

        html.push_str(&format!(
            "<p>Average return {:.2}%, average win rate {:.2}%, {} trades total.</p>\n",
            avg_return, avg_win_rate, total_trades
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

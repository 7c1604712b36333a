//! Binance REST data source.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use pairbench_core::error::DataError;
use pairbench_core::traits::MarketDataSource;
use pairbench_core::types::{Bar, MarketType, Timeframe};

const KLINE_PAGE_LIMIT: usize = 1000;

/// One kline as returned by the REST API. All twelve positions must be
/// listed for the array to deserialize; only the first six are read.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RestKline(
    i64,    // 0: Open time
    String, // 1: Open
    String, // 2: High
    String, // 3: Low
    String, // 4: Close
    String, // 5: Volume
    #[serde(default)] serde::de::IgnoredAny, // 6: Close time
    #[serde(default)] serde::de::IgnoredAny, // 7: Quote asset volume
    #[serde(default)] serde::de::IgnoredAny, // 8: Number of trades
    #[serde(default)] serde::de::IgnoredAny, // 9: Taker buy base volume
    #[serde(default)] serde::de::IgnoredAny, // 10: Taker buy quote volume
    #[serde(default)] serde::de::IgnoredAny, // 11: Ignore
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeInfo {
    symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    symbol: String,
    status: String,
    quote_asset: String,
}

/// Historical bar source backed by the Binance REST API.
///
/// Constructed for one market, timeframe, and calendar month; every fetch
/// is a single attempt with no retry.
pub struct BinanceSource {
    client: Client,
    market: MarketType,
    timeframe: Timeframe,
    start_ms: i64,
    end_ms: i64,
}

impl BinanceSource {
    /// Create a source for the given month.
    pub fn new(
        market: MarketType,
        timeframe: Timeframe,
        year: i32,
        month: u32,
        timeout_secs: u64,
    ) -> Result<Self, DataError> {
        let (start_ms, end_ms) = month_range_ms(year, month)?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            market,
            timeframe,
            start_ms,
            end_ms,
        })
    }

    fn rest_base_url(&self) -> &'static str {
        match self.market {
            MarketType::Spot => "https://api.binance.com/api/v3",
            MarketType::Futures => "https://fapi.binance.com/fapi/v1",
        }
    }

    async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        start_ms: i64,
    ) -> Result<Vec<RestKline>, DataError> {
        let url = format!("{}/klines", self.rest_base_url());
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol.to_string()),
                ("interval", interval.to_string()),
                ("startTime", start_ms.to_string()),
                ("endTime", self.end_ms.to_string()),
                ("limit", KLINE_PAGE_LIMIT.to_string()),
            ])
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        match response.status() {
            s if s.is_success() => response
                .json()
                .await
                .map_err(|e| DataError::ParseError(e.to_string())),
            s if s.as_u16() == 404 || s.as_u16() == 400 => {
                Err(DataError::SymbolNotFound(symbol.to_string()))
            }
            s => Err(DataError::ConnectionError(format!(
                "HTTP {} for {}",
                s, symbol
            ))),
        }
    }

    fn kline_to_bar(symbol: &str, kline: &RestKline) -> Result<Bar, DataError> {
        let parse = |field: &str, value: &str| {
            value.parse::<f64>().map_err(|_| {
                DataError::ParseError(format!("{symbol}: bad {field} value {value:?}"))
            })
        };

        Ok(Bar::new(
            normalize_timestamp_ms(kline.0),
            parse("open", &kline.1)?,
            parse("high", &kline.2)?,
            parse("low", &kline.3)?,
            parse("close", &kline.4)?,
            parse("volume", &kline.5)?,
        ))
    }
}

#[async_trait]
impl MarketDataSource for BinanceSource {
    async fn list_symbols(&self, quote_asset: &str) -> Result<Vec<String>, DataError> {
        let url = format!("{}/exchangeInfo", self.rest_base_url());
        let info: ExchangeInfo = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        Ok(info
            .symbols
            .into_iter()
            .filter(|s| s.status == "TRADING" && s.quote_asset == quote_asset)
            .map(|s| s.symbol)
            .collect())
    }

    async fn fetch_volume(&self, symbol: &str) -> Result<f64, DataError> {
        // Daily bars keep the whole month inside one page.
        let klines = self.get_klines(symbol, "1d", self.start_ms).await?;
        if klines.is_empty() {
            return Err(DataError::NoDataAvailable(symbol.to_string()));
        }

        let mut total = 0.0;
        for kline in &klines {
            total += Self::kline_to_bar(symbol, kline)?.volume;
        }
        Ok(total)
    }

    async fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError> {
        let interval = self.timeframe.to_string();
        let mut bars: Vec<Bar> = Vec::new();
        let mut cursor = self.start_ms;

        loop {
            let klines = self.get_klines(symbol, &interval, cursor).await?;
            if klines.is_empty() {
                break;
            }

            let last_open = klines.last().map(|k| k.0).unwrap_or(cursor);
            for kline in &klines {
                bars.push(Self::kline_to_bar(symbol, kline)?);
            }

            if klines.len() < KLINE_PAGE_LIMIT {
                break;
            }
            cursor = last_open + 1;
        }

        if bars.is_empty() {
            return Err(DataError::NoDataAvailable(symbol.to_string()));
        }
        Ok(bars)
    }

    fn name(&self) -> &str {
        "binance"
    }
}

/// Normalize an exchange timestamp to milliseconds.
///
/// Feeds arrive in seconds, milliseconds, microseconds, or nanoseconds
/// depending on market and API version; magnitude decides the unit.
fn normalize_timestamp_ms(ts: i64) -> i64 {
    if ts > 100_000_000_000_000_000 {
        ts / 1_000_000 // nanoseconds
    } else if ts > 100_000_000_000_000 {
        ts / 1_000 // microseconds
    } else if ts < 1_000_000_000_000 {
        ts * 1000 // seconds
    } else {
        ts
    }
}

/// Millisecond range [start, end) of one calendar month.
fn month_range_ms(year: i32, month: u32) -> Result<(i64, i64), DataError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DataError::ParseError(format!("invalid month {year}-{month:02}")))?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| DataError::ParseError(format!("invalid month {year}-{month:02}")))?;

    let to_ms = |d: NaiveDate| d.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis();
    Ok((to_ms(start), to_ms(end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_timestamp_units() {
        let ms = 1_740_000_000_000_i64; // Feb 2025 in ms
        assert_eq!(normalize_timestamp_ms(ms), ms);
        assert_eq!(normalize_timestamp_ms(ms / 1000), ms); // seconds
        assert_eq!(normalize_timestamp_ms(ms * 1000), ms); // microseconds
        assert_eq!(normalize_timestamp_ms(ms * 1_000_000), ms); // nanoseconds
    }

    #[test]
    fn test_month_range() {
        let (start, end) = month_range_ms(2025, 2).unwrap();
        assert_eq!(start, 1_738_368_000_000); // 2025-02-01T00:00:00Z
        assert_eq!(end, 1_740_787_200_000); // 2025-03-01T00:00:00Z
    }

    #[test]
    fn test_month_range_year_rollover() {
        let (start, end) = month_range_ms(2024, 12).unwrap();
        assert!(end > start);
        // End is January 1st of the next year
        let end_date = chrono::DateTime::from_timestamp_millis(end).unwrap();
        assert_eq!(end_date.format("%Y-%m-%d").to_string(), "2025-01-01");
    }

    #[test]
    fn test_month_range_rejects_bad_month() {
        assert!(month_range_ms(2025, 13).is_err());
    }

    #[test]
    fn test_kline_parsing() {
        let kline: RestKline = serde_json::from_str(
            r#"[1738368000000,"0.05","0.06","0.04","0.055","1234.5",1738368059999,"67.8",42,"600.0","33.0","0"]"#,
        )
        .unwrap();
        let bar = BinanceSource::kline_to_bar("ETHBTC", &kline).unwrap();

        assert_eq!(bar.timestamp, 1_738_368_000_000);
        assert!((bar.close - 0.055).abs() < 1e-12);
        assert!((bar.volume - 1234.5).abs() < 1e-9);
    }

    #[test]
    fn test_kline_bad_number_rejected() {
        let kline: RestKline = serde_json::from_str(
            r#"[1738368000000,"abc","0.06","0.04","0.055","1234.5",0,"0",0,"0","0","0"]"#,
        )
        .unwrap();
        assert!(matches!(
            BinanceSource::kline_to_bar("ETHBTC", &kline),
            Err(DataError::ParseError(_))
        ));
    }
}

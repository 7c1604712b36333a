//! Configuration structures.

use std::path::PathBuf;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use pairbench_core::error::PairbenchError;
use pairbench_core::traits::StrategyConfig;
use pairbench_core::types::{MarketType, Timeframe};
use pairbench_strategies::{RsiBollingerConfig, SmaCrossoverConfig, VwapReversionConfig};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub backtest: BacktestSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
    #[serde(default)]
    pub report: ReportSettings,
}

impl AppConfig {
    /// Validate every section once at startup.
    pub fn validate(&self) -> Result<(), PairbenchError> {
        self.data.validate()?;
        self.backtest.validate()?;
        self.strategies.validate()?;
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "pairbench".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Data loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Exchange market to query
    pub market_type: MarketType,
    /// Bar timeframe
    pub timeframe: Timeframe,
    /// Calendar year of the data window
    pub year: i32,
    /// Calendar month of the data window (1-12)
    pub month: u32,
    /// Quote asset the universe is filtered by
    pub quote_asset: String,
    /// How many pairs to select by volume
    pub num_symbols: usize,
    /// Select the lowest-volume pairs instead of the highest
    pub reverse: bool,
    /// Cache root directory
    pub cache_dir: PathBuf,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            market_type: MarketType::Spot,
            timeframe: Timeframe::Minute1,
            year: 2025,
            month: 2,
            quote_asset: "BTC".to_string(),
            num_symbols: 20,
            reverse: false,
            cache_dir: PathBuf::from("data/cache"),
            timeout_secs: 30,
        }
    }
}

impl DataSettings {
    fn validate(&self) -> Result<(), PairbenchError> {
        if self.num_symbols == 0 {
            return Err(PairbenchError::Config(
                "data.num_symbols must be at least 1".to_string(),
            ));
        }
        if !(1..=12).contains(&self.month) {
            return Err(PairbenchError::Config(format!(
                "data.month must be 1-12, got {}",
                self.month
            )));
        }
        if self.quote_asset.is_empty() {
            return Err(PairbenchError::Config(
                "data.quote_asset must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(PairbenchError::Config(
                "data.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestSettings {
    pub initial_capital: Decimal,
    pub fee_pct: Decimal,
    pub slippage_pct: Decimal,
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            initial_capital: dec!(1000),
            fee_pct: dec!(0.001),
            slippage_pct: dec!(0.001),
        }
    }
}

impl BacktestSettings {
    fn validate(&self) -> Result<(), PairbenchError> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(PairbenchError::Config(
                "backtest.initial_capital must be positive".to_string(),
            ));
        }
        for (name, value) in [("fee_pct", self.fee_pct), ("slippage_pct", self.slippage_pct)] {
            if value < Decimal::ZERO || value >= Decimal::ONE {
                return Err(PairbenchError::Config(format!(
                    "backtest.{} must be in [0, 1), got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Per-strategy parameter sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrategySettings {
    #[serde(default)]
    pub vwap_reversion: VwapReversionConfig,
    #[serde(default)]
    pub rsi_bollinger: RsiBollingerConfig,
    #[serde(default)]
    pub sma_crossover: SmaCrossoverConfig,
}

impl StrategySettings {
    fn validate(&self) -> Result<(), PairbenchError> {
        self.vwap_reversion.validate()?;
        self.rsi_bollinger.validate()?;
        self.sma_crossover.validate()?;
        Ok(())
    }

    /// Parameters for a strategy id as a JSON value, registry-ready.
    pub fn params_for(&self, id: &str) -> Option<serde_json::Value> {
        match id {
            "vwap_reversion" => serde_json::to_value(&self.vwap_reversion).ok(),
            "rsi_bollinger" => serde_json::to_value(&self.rsi_bollinger).ok(),
            "sma_crossover" => serde_json::to_value(&self.sma_crossover).ok(),
            _ => None,
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Root directory for CSV, HTML, and PNG artifacts
    pub results_dir: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
        }
    }
}

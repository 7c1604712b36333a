//! Strategy registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pairbench_core::{error::StrategyError, traits::Strategy, traits::StrategyConfig};

use crate::{
    RsiBollingerConfig, RsiBollingerStrategy, SmaCrossoverConfig, SmaCrossoverStrategy,
    VwapReversionConfig, VwapReversionStrategy,
};

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Stable identifier (also the CSV/report file prefix)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: Value,
}

/// Registry over the closed set of strategy variants.
///
/// Ordered map so batch runs and listings are deterministic.
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a registry with all built-in strategies.
    pub fn new() -> Self {
        let mut strategies = BTreeMap::new();

        strategies.insert(
            "vwap_reversion",
            StrategyInfo {
                id: "vwap_reversion".to_string(),
                name: "VWAP Reversion".to_string(),
                description: "Buys below the running VWAP, sells above it".to_string(),
                default_config: serde_json::to_value(VwapReversionConfig::default()).unwrap(),
            },
        );

        strategies.insert(
            "rsi_bollinger",
            StrategyInfo {
                id: "rsi_bollinger".to_string(),
                name: "RSI and Bollinger Bands".to_string(),
                description:
                    "Buys oversold dips below the lower band, sells overbought rallies above the upper band"
                        .to_string(),
                default_config: serde_json::to_value(RsiBollingerConfig::default()).unwrap(),
            },
        );

        strategies.insert(
            "sma_crossover",
            StrategyInfo {
                id: "sma_crossover".to_string(),
                name: "SMA Crossover".to_string(),
                description: "Follows fast/slow moving average crossovers".to_string(),
                default_config: serde_json::to_value(SmaCrossoverConfig::default()).unwrap(),
            },
        );

        Self { strategies }
    }

    /// List all available strategies.
    pub fn list(&self) -> Vec<&StrategyInfo> {
        self.strategies.values().collect()
    }

    /// Get strategy info by id.
    pub fn get(&self, id: &str) -> Option<&StrategyInfo> {
        self.strategies.get(id)
    }

    /// Check if a strategy exists.
    pub fn exists(&self, id: &str) -> bool {
        self.strategies.contains_key(id)
    }

    /// Get all strategy ids.
    pub fn ids(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }

    /// Create a strategy instance from a JSON configuration.
    pub fn create(&self, id: &str, config: Value) -> Result<Box<dyn Strategy>, StrategyError> {
        match id {
            "vwap_reversion" => {
                let config: VwapReversionConfig = serde_json::from_value(config)
                    .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
                config.validate()?;
                Ok(Box::new(VwapReversionStrategy::new(config)))
            }
            "rsi_bollinger" => {
                let config: RsiBollingerConfig = serde_json::from_value(config)
                    .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
                config.validate()?;
                Ok(Box::new(RsiBollingerStrategy::new(config)))
            }
            "sma_crossover" => {
                let config: SmaCrossoverConfig = serde_json::from_value(config)
                    .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
                config.validate()?;
                Ok(Box::new(SmaCrossoverStrategy::new(config)))
            }
            other => Err(StrategyError::NotFound(other.to_string())),
        }
    }

    /// Create a strategy instance with its default configuration.
    pub fn create_default(&self, id: &str) -> Result<Box<dyn Strategy>, StrategyError> {
        let info = self
            .get(id)
            .ok_or_else(|| StrategyError::NotFound(id.to_string()))?;
        self.create(id, info.default_config.clone())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Market type selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which exchange market the data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    /// Spot market
    #[default]
    Spot,
    /// USD-margined perpetual futures
    Futures,
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketType::Spot => write!(f, "spot"),
            MarketType::Futures => write!(f, "futures"),
        }
    }
}

impl FromStr for MarketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spot" => Ok(MarketType::Spot),
            "futures" | "usdm" => Ok(MarketType::Futures),
            other => Err(format!("market type must be 'spot' or 'futures', got {}", other)),
        }
    }
}

//! Trading strategy implementations.
//!
//! This crate provides the closed set of strategy variants the batch runs:
//! - VWAP Reversion
//! - RSI + Bollinger Bands
//! - SMA Crossover
//!
//! Each strategy is a pure mapping from a bar series to an aligned signal
//! series; adding a strategy means adding a variant and registering it,
//! not modifying a dispatch chain.

mod rsi_bollinger;
mod registry;
mod sma_crossover;
mod state;
mod vwap_reversion;

pub use registry::{StrategyInfo, StrategyRegistry};
pub use rsi_bollinger::{RsiBollingerConfig, RsiBollingerStrategy};
pub use sma_crossover::{SmaCrossoverConfig, SmaCrossoverStrategy};
pub use vwap_reversion::{VwapReversionConfig, VwapReversionStrategy};

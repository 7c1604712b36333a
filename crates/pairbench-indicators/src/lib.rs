//! Technical indicators.
//!
//! This crate provides the derived series the strategies consume:
//! - Moving averages (SMA, EMA)
//! - Momentum (RSI with Wilder's smoothing)
//! - Volatility (standard deviation, Bollinger Bands)
//! - Volume (deviation from the cumulative VWAP)
//!
//! Every indicator returns a vector index-aligned with its input; the
//! first `window - 1` elements (one full `period` for RSI) are `None`
//! while the rolling window fills. Downstream signal generation relies
//! on this alignment.

pub mod momentum;
pub mod moving_average;
pub mod volatility;
pub mod volume;

pub use momentum::Rsi;
pub use moving_average::{Ema, Sma};
pub use volatility::{BollingerBands, BollingerOutput, StdDev};
pub use volume::VwapDeviation;

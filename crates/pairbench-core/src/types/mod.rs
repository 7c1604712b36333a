//! Core data types for the backtesting pipeline.

mod market;
mod ohlcv;
mod signal;
mod summary;
mod timeframe;
mod trade;

pub use market::MarketType;
pub use ohlcv::{Bar, BarSeries};
pub use signal::{SignalAction, SignalSeries};
pub use summary::PerformanceSummary;
pub use timeframe::Timeframe;
pub use trade::{EquityPoint, Simulation, TradeRecord};

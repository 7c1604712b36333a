//! Core types and traits for the pairbench backtesting pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, Timeframe, MarketType)
//! - Signal and trade types (SignalSeries, TradeRecord, PerformanceSummary)
//! - Trait seams for strategies, indicators, data sources, and the
//!   simulation engine

pub mod error;
pub mod traits;
pub mod types;

pub use error::{
    DataError, EngineError, IndicatorError, PairbenchError, PairbenchResult, ReportError,
    StrategyError,
};
pub use traits::*;
pub use types::*;

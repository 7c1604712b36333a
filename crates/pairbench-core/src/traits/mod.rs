//! Trait seams between the pipeline stages.

mod data_source;
mod engine;
mod indicator;
mod strategy;

pub use data_source::MarketDataSource;
pub use engine::SimulationEngine;
pub use indicator::{Indicator, MultiOutputIndicator};
pub use strategy::{Strategy, StrategyConfig};

//! Trade simulation and batch orchestration.
//!
//! The engine here is the pipeline's execution collaborator: strategies
//! hand it aligned bar and signal series, it hands back immutable trades
//! and an equity curve. The runner sequences (symbol, strategy) pairs and
//! isolates per-pair failures; statistics condense a simulation into a
//! [`PerformanceSummary`].
//!
//! [`PerformanceSummary`]: pairbench_core::types::PerformanceSummary

mod engine;
mod runner;
pub mod statistics;

pub use engine::{EngineConfig, VectorEngine};
pub use runner::{BacktestRunner, RunResult};

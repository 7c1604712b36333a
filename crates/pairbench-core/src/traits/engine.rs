//! Simulation engine seam.

use crate::error::EngineError;
use crate::types::{BarSeries, SignalSeries, Simulation};

/// Vectorized trade simulation.
///
/// The engine owns order execution, fee and slippage modeling; callers
/// supply aligned bar and signal series and consume immutable results.
pub trait SimulationEngine: Send + Sync {
    /// Simulate the signal series against the bars.
    ///
    /// Fails with [`EngineError::MisalignedSeries`] when the two series
    /// differ in length; such a failure aborts that (symbol, strategy)
    /// pair only.
    fn simulate(
        &self,
        series: &BarSeries,
        signals: &SignalSeries,
        strategy_id: &str,
    ) -> Result<Simulation, EngineError>;

    /// Get the engine name.
    fn name(&self) -> &str;
}

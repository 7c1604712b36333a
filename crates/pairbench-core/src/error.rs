//! Error types for the backtesting pipeline.

use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum PairbenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Data source and cache errors.
///
/// A per-symbol failure (`SymbolNotFound`, `NoDataAvailable`) is skipped and
/// logged by the loader; `NoSymbolsLoaded` aborts the run.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No historical data available for {0}")]
    NoDataAvailable(String),

    #[error("No data could be loaded for any symbol")]
    NoSymbolsLoaded,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Timestamps not strictly increasing for {symbol}")]
    NonMonotonicTimestamps { symbol: String },
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),

    #[error("Insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Simulation engine errors. Each aborts a single (symbol, strategy) pair,
/// never the whole batch.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Signal series length {signals} does not match bar series length {bars}")]
    MisalignedSeries { bars: usize, signals: usize },

    #[error("Cannot simulate an empty bar series")]
    EmptySeries,

    #[error("Initial capital must be positive, got {0}")]
    InvalidCapital(rust_decimal::Decimal),
}

/// Report generation errors. Write failures are fatal to the run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Chart rendering error: {0}")]
    Render(String),
}

/// Result type alias for pipeline operations.
pub type PairbenchResult<T> = Result<T, PairbenchError>;

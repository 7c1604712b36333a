//! Historical data loading.
//!
//! The loader answers one question for the rest of the pipeline: "give me
//! bar series for the top-N pairs by volume". It checks the on-disk cache
//! first, otherwise ranks symbols through the exchange REST API, fetches
//! each one's bars, and writes the cache for the next run. A symbol that
//! fails to fetch is skipped and logged, never fatal; an empty universe is.

mod binance;
mod cache;
mod loader;
mod selector;

pub use binance::BinanceSource;
pub use cache::BarCache;
pub use loader::DataLoader;
pub use selector::SymbolSelector;

//! Command implementations.

pub mod download;
pub mod run;
pub mod strategies;
pub mod validate;

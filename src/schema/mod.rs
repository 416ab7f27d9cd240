//! Schema module - Configuration and input types for sorting runs.

mod algorithm;
mod config;
mod snapshot;

pub use algorithm::*;
pub use config::*;
pub use snapshot::*;

//! Opening Stats - aggregation core for a chess opening explorer
//!
//! This crate provides the per-position statistics entry and the merge
//! semantics used to combine partial results built independently, e.g.
//! across shards of an import or incremental ingestion batches.

pub mod config;
pub mod error;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::EntryLimits;
pub use error::{Result, StatsError};
pub use stats::AggregateEntry;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

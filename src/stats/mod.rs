//! Per-position statistics aggregation
//!
//! This module defines the immutable aggregate entry kept for each grouping
//! key (an opening line or reached position) and the operations that fold
//! games into it and merge independently built entries.

pub mod entry;

// Re-export commonly used types
pub use entry::AggregateEntry;

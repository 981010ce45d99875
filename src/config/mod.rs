//! Configuration for the statistics core
//!
//! This module holds the knobs the surrounding system controls, with
//! defaults and validation.

pub mod limits;

// Re-export commonly used types
pub use limits::EntryLimits;

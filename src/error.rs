//! Error types for the statistics core
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate. The aggregation algebra itself is total;
//! only configuration validation can fail.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for the statistics core
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

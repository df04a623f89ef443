//! Error types for cluster differencing.

use thiserror::Error;

/// Errors that can occur while preparing or running a cluster diff.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    /// A cluster polygon has a NaN or infinite coordinate.
    #[error("cluster {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Identifier of the offending cluster.
        id: i64,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for cluster diff operations.
pub type Result<T> = std::result::Result<T, DiffError>;

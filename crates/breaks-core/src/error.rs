//! Error types for class break computation
//!
//! Provides a unified error type for all choropleth-breaks crates.

use thiserror::Error;

/// Core error type for classification operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data (empty sample, non-finite values, malformed breaks)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a strategy
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Strategy name that does not map to any known classification style
    #[error("Unsupported strategy: {0}")]
    StrategyUnsupported(String),

    /// Iterative method failed to converge
    #[error("Did not converge: {0}")]
    NonConvergence(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a finite sample whose spread overflows `f64`
    pub fn range_overflow(context: &str) -> Self {
        Self::InvalidInput(format!("{context} range max - min is not representable"))
    }

    /// Create an error for a class count below one
    pub fn invalid_class_count(k: usize) -> Self {
        Self::InvalidInput(format!("class count must be at least 1, got {k}"))
    }

    /// Create an error for more classes than the sample can support
    pub fn too_many_classes(k: usize, distinct: usize) -> Self {
        Self::InvalidInput(format!(
            "{k} classes requested but the sample has only {distinct} distinct values"
        ))
    }

    /// Returns true for the `InvalidInput` family of errors
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }
}

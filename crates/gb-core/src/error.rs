//! Error types for GridBayes

use thiserror::Error;

/// GridBayes error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// A grid or vector to be normalized has zero or non-finite mass.
    ///
    /// Typically means every density evaluation underflowed to zero
    /// (grid too coarse for how peaked the density is). Reported
    /// explicitly rather than dividing through and emitting NaN.
    #[error("Degenerate normalization: {0}")]
    DegenerateNormalization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for Picar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Picar operations.
///
/// Covers misconfiguration (invalid hyperparameters, dimension
/// mismatches) and interrupted batch ingestion.
///
/// # Examples
///
/// ```
/// use picar::error::PicarError;
///
/// let err = PicarError::InvalidHyperparameter {
///     param: "bucket_count".to_string(),
///     value: "0".to_string(),
///     constraint: ">0".to_string(),
/// };
/// assert!(err.to_string().contains("bucket_count"));
/// ```
#[derive(Debug)]
pub enum PicarError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Batch ingestion stopped at a document boundary.
    Interrupted {
        /// Number of documents fully committed before the stop
        completed: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PicarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PicarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PicarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            PicarError::Interrupted { completed } => {
                write!(f, "Interrupted after {completed} completed documents")
            }
            PicarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PicarError {}

impl From<&str> for PicarError {
    fn from(msg: &str) -> Self {
        PicarError::Other(msg.to_string())
    }
}

impl From<String> for PicarError {
    fn from(msg: String) -> Self {
        PicarError::Other(msg)
    }
}

impl PicarError {
    /// Create an invalid hyperparameter error with descriptive context.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PicarError>;

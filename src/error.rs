//! Error types for the TSP engine.
//!
//! All validation happens before any computation starts, so a caller either
//! gets a complete result or one of these errors, never a partial tour.

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type TspResult<T> = Result<T, TspError>;

/// Errors reported by the TSP engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// The problem data is unusable: too few points, non-finite coordinates,
    /// or a tour that is not a permutation of the city indices.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A strategy parameter is outside its allowed range.
    #[error("invalid parameters: {message}")]
    InvalidParameters {
        /// Which parameter was rejected and why.
        message: String,
    },
}

impl TspError {
    pub(crate) fn input(message: impl Into<String>) -> Self {
        TspError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn parameters(message: impl Into<String>) -> Self {
        TspError::InvalidParameters {
            message: message.into(),
        }
    }
}

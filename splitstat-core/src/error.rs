//! Structured error types for the splitstat workspace.

use thiserror::Error;

/// Unified error type for all splitstat operations.
///
/// Every failure is deterministic and surfaced to the immediate caller;
/// nothing is retried, logged, or silently defaulted.
#[derive(Debug, Error)]
pub enum SplitstatError {
    /// A group is empty, or too small for the requested statistic
    /// (e.g. a single observation where a sample variance is needed).
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A parameter is outside its domain (significance or confidence level
    /// outside (0, 1), malformed table dimensions, etc.).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Fewer than two experiment arms were supplied for a comparison.
    #[error("fewer than two groups: {0}")]
    FewerThanTwoGroups(String),

    /// An observation is NaN or infinite; the analyzer only accepts
    /// finite numeric samples.
    #[error("non-numeric observation: {0}")]
    NonNumeric(String),
}

/// Convenience alias used throughout the splitstat workspace.
pub type Result<T> = std::result::Result<T, SplitstatError>;

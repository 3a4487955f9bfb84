//! Error types for formica.
//!
//! All fallible operations return `Result<T, AcoError>` instead of panicking.
//! Invariant violations (non-positive tour length, non-finite probability
//! mass) indicate a logic or numeric-underflow bug and are fatal; they are
//! never silently special-cased.

use thiserror::Error;

/// Result type alias for formica operations.
pub type AcoResult<T> = Result<T, AcoError>;

/// Unified error type for all formica operations.
#[derive(Debug, Error)]
pub enum AcoError {
    // ===== Input Errors =====
    /// Malformed or unusable edge-list input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what made the input unusable.
        message: String,
    },

    /// A solver invariant was violated mid-run.
    #[error("invariant violated: {message}")]
    InvariantViolation {
        /// Description of the broken invariant.
        message: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcoError {
    /// Create an invalid-input error with a message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invariant-violation error with a message.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error indicates an internal bug rather than bad input.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

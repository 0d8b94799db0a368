//! Error handling module for bundletui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for bundletui
#[derive(Error, Debug)]
pub enum BundleError {
    /// IO errors (terminal, log file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport and status errors from the catalog endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog fetch failures surfaced to the user
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Validation errors (user input, settings, discount rules)
    #[error("Validation error: {0}")]
    Validation(String),

    /// State errors (missing entries, stale references)
    #[error("State error: {0}")]
    State(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for bundletui operations
pub type Result<T> = std::result::Result<T, BundleError>;

// Convenient error constructors
impl BundleError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BundleError::validation("discount value must be non-negative");
        assert_eq!(
            err.to_string(),
            "Validation error: discount value must be non-negative"
        );

        let err = BundleError::fetch("catalog endpoint returned 503");
        assert_eq!(err.to_string(), "Fetch failed: catalog endpoint returned 503");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BundleError = io_err.into();
        assert!(matches!(err, BundleError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = BundleError::state("entry not found");
        assert!(matches!(err, BundleError::State(_)));

        let err = BundleError::terminal("raw mode unavailable");
        assert!(matches!(err, BundleError::Terminal(_)));
    }
}

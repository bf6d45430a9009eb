//! Error types for Hampel filtering
//!
//! Provides a unified error type for all hampel crates.

use thiserror::Error;

/// Core error type for outlier detection and correction
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a window size outside `[1, ∞)`
    pub fn invalid_window(window_size: usize) -> Self {
        Self::InvalidParameter(format!("Window size {window_size} must be at least 1"))
    }

    /// Create an error for a non-positive or non-finite threshold
    pub fn invalid_threshold(threshold: f64) -> Self {
        Self::InvalidParameter(format!(
            "Threshold {threshold} must be a positive finite number"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values in the input
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("window must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: window must be positive");

        let err = Error::InvalidInput("index out of range".to_string());
        assert_eq!(err.to_string(), "Invalid input: index out of range");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 10 samples, got 5");

        let err = Error::Computation("median undefined".to_string());
        assert_eq!(err.to_string(), "Computation error: median undefined");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("median") {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_window(0);
        assert_eq!(err.to_string(), "Invalid parameter: Window size 0 must be at least 1");

        let err = Error::invalid_threshold(-1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Threshold -1.5 must be a positive finite number"
        );

        let err = Error::size_mismatch(100, 50, "cleaned signal");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in cleaned signal: expected 100, got 50"
        );

        let err = Error::non_finite("signal");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: signal contains NaN or infinite values");
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}

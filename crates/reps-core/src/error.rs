//! Error types for Reps core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages. Note that "record not found" on update or
//! delete is reported as a value (`None` / `false`), not as an error.

use thiserror::Error;

/// Result type alias for Reps operations.
pub type Result<T> = std::result::Result<T, RepsError>;

/// Core error type for Reps operations.
#[derive(Debug, Error)]
pub enum RepsError {
    /// Key/value backend error (I/O, permissions)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted blob has an unknown or unsupported layout
    #[error("Schema error: {0}")]
    Schema(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Weather lookup failed (network, status, malformed body)
    #[error("Weather error: {0}")]
    Weather(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for RepsError {
    fn from(err: std::io::Error) -> Self {
        RepsError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RepsError {
    fn from(err: serde_json::Error) -> Self {
        RepsError::Schema(err.to_string())
    }
}

impl From<reqwest::Error> for RepsError {
    fn from(err: reqwest::Error) -> Self {
        RepsError::Weather(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: RepsError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
        assert!(matches!(err, RepsError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: disk gone");
    }

    #[test]
    fn test_json_error_maps_to_schema() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: RepsError = parse.unwrap_err().into();
        assert!(matches!(err, RepsError::Schema(_)));
    }
}

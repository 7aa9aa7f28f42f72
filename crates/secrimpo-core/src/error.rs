//! Error types for the secrimpo-core library.
//!
//! Field extraction itself never fails: a field that cannot be found is
//! `None`. The errors here cover the fallible edges of the crate, which is
//! loading and saving configuration.

use thiserror::Error;

/// Main error type for the secrimpo library.
#[derive(Error, Debug)]
pub enum SecrimpoError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the secrimpo library.
pub type Result<T> = std::result::Result<T, SecrimpoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SecrimpoError::Config("unknown key: output.colour".to_string());
        assert_eq!(err.to_string(), "configuration error: unknown key: output.colour");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
        let err: SecrimpoError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}

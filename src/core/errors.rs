//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// API key missing or still set to the placeholder
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable description of what to fix
        message: String,
    },

    /// Connection refused, DNS failure, broken response stream
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Invalid response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TranslationError {
    /// Build a configuration error from any message
    pub fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }

    /// Whether the failure happened before any network call was made
    pub fn is_config(&self) -> bool {
        matches!(self, TranslationError::ConfigError { .. })
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

//! Error types for core module
//!
//! Provides custom error types for the terminal front end: settings
//! persistence, input parsing, logging setup, and errors surfaced from the
//! rules engine.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A line of input that is neither a square nor a command
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Rules engine rejected a call
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// Log subscriber could not be installed
    #[error("Logging initialization failed: {message}")]
    Logging { message: String },
}

impl CoreError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

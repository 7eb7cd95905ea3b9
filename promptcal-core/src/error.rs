//! Error types for the promptcal ecosystem.

use thiserror::Error;

/// Errors that can occur in promptcal operations.
#[derive(Error, Debug)]
pub enum PromptCalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for promptcal operations.
pub type PromptCalResult<T> = Result<T, PromptCalError>;

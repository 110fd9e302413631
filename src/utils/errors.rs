use thiserror::Error;

use crate::core::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed JSON payload: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Payload rejected: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Error {
    /// Process exit code: 1 for a rejected payload, 2 when no verdict was reached.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ValidationError(_) => 1,
            _ => 2,
        }
    }
}

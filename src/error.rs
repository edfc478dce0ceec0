//! Error types for task-cli
//!
//! Every failure aborts the command with a printed message. The process
//! exit code does not distinguish between failure kinds:
//! - 0: Success
//! - 1: Any failure

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the task-cli binary
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Main error type for task-cli operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors
    #[error("task not found: {0}")]
    TaskNotFound(u64),

    #[error("no task id available after {0}")]
    IdsExhausted(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to replace store file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Coarse classification reported in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Error::TaskNotFound(_) | Error::InvalidArgument(_) | Error::InvalidConfig(_) => {
                "user_error"
            }
            Error::IdsExhausted(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::Persist { .. } => "operation_failed",
        }
    }
}

/// Result type alias for task-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error body of the JSON output envelope
#[derive(serde::Serialize)]
pub struct JsonError {
    pub message: String,
    pub code: i32,
    pub kind: &'static str,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            message: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
        }
    }
}

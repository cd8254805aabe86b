//! Application Error Types

use crate::core::error_handling::ContextualError;
use crate::core::validation::ValidationError;
use crate::queue::QueueError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid command '{line}': {message}")]
    Command { line: String, message: String },

    #[error("Path does not exist or is not a file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AppError {
    pub fn command(line: &str, message: impl Into<String>) -> Self {
        AppError::Command {
            line: line.to_string(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Queue(err) => err.is_user_actionable(),
            AppError::Validation(_) => true,
            AppError::Command { .. } => true,
            AppError::MissingFile { .. } => true,
            AppError::Config { .. } => true,
            AppError::Io { .. } => false,
            AppError::Snapshot { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AppError::Queue(err) => err.user_message(),
            AppError::Validation(err) => Some(err.message()),
            AppError::Command { message, .. } => Some(message),
            AppError::MissingFile { .. } => Some("File not found"),
            AppError::Config { .. } => Some("Configuration file could not be parsed"),
            AppError::Io { .. } | AppError::Snapshot { .. } => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

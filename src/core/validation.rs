//! Validation utilities for configuration and command arguments

use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};
use crate::queue::Discipline;

/// A configuration or argument value that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl crate::core::error_handling::ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Validate a discipline name such as `priority-high`
pub fn validate_discipline(name: &str) -> Result<Discipline, ValidationError> {
    Discipline::from_name(name).map_err(|_| {
        ValidationError::new(&format!(
            "Unknown discipline '{}' (expected one of: {})",
            name,
            Discipline::all_names()
        ))
    })
}

/// Validate a capacity limit; 0 means unbounded
pub fn validate_limit(limit: i64) -> Result<usize, ValidationError> {
    usize::try_from(limit).map_err(|_| {
        ValidationError::new(&format!("Limit must not be negative, got {}", limit))
    })
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<String, ValidationError> {
    let lowered = level.to_ascii_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(&format!(
            "Invalid log level '{}' (expected one of: {})",
            level,
            LOG_LEVELS.join(", ")
        )))
    }
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<String, ValidationError> {
    let lowered = format.to_ascii_lowercase();
    if LOG_FORMATS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(&format!(
            "Invalid log format '{}' (expected one of: {})",
            format,
            LOG_FORMATS.join(", ")
        )))
    }
}

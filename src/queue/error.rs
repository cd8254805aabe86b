//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Queue is empty")]
    Empty,

    #[error("Index {index} is out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid discipline: {tag}")]
    InvalidDiscipline { tag: String },

    #[error("Invalid capacity limit: {limit}")]
    InvalidCapacity { limit: i64 },
}

impl crate::core::error_handling::ContextualError for QueueError {
    fn is_user_actionable(&self) -> bool {
        // Every queue error is a condition the caller checks and branches on
        true
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            QueueError::Empty => Some("Queue is empty"),
            QueueError::IndexOutOfBounds { .. } => Some("Index is out of bounds"),
            QueueError::InvalidDiscipline { .. } => Some("Unknown queue discipline"),
            QueueError::InvalidCapacity { .. } => Some("Capacity limit must not be negative"),
        }
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

//! Generic error handling utilities
//!
//! Provides unified error reporting that works across the crate's error types
//! while keeping user-facing output short.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When it returns
/// `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific message that should be
    /// shown to the user as-is
    ///
    /// Examples of user-actionable errors:
    /// - Removing from an empty queue
    /// - An unknown discipline name in the configuration
    ///
    /// Examples of system errors:
    /// - IO failures while reading a script or snapshot
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with a detail level based on error specificity
///
/// User-actionable errors show their own message; system errors show the
/// operation context. Full details are always logged at debug level.
///
/// # Examples
/// ```rust,no_run
/// # use ordqueue::core::error_handling::log_error_with_context;
/// # use ordqueue::queue::QueueError;
/// log_error_with_context(&QueueError::Empty, "Removing next element");
/// // Logs: "Removing next element: Queue is empty"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message().filter(|_| error.is_user_actionable()) {
        Some(user_msg) => log::error!("{}: {}", operation_context, user_msg),
        None => log::error!("{} failed", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

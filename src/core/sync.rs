//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning in a consistent
//! manner across the codebase.

use std::sync::{LockResult, Mutex, MutexGuard};

/// Recover the guard from a possibly poisoned lock result
///
/// A mutex becomes poisoned when a thread panics while holding it. Structures
/// guarded here keep their own invariants across such a panic (every mutation
/// is a single `Vec` operation), so the guard is taken back and the event is
/// logged instead of being surfaced to callers.
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use ordqueue::core::sync::recover_mutex_poison;
///
/// let mutex = Mutex::new(42);
/// let guard = recover_mutex_poison(mutex.lock(), "example");
/// assert_eq!(*guard, 42);
/// ```
pub fn recover_mutex_poison<'a, T>(
    result: LockResult<MutexGuard<'a, T>>,
    context: &str,
) -> MutexGuard<'a, T> {
    result.unwrap_or_else(|poison_err| {
        log::warn!(
            "{}: recovered from poisoned lock (a panic occurred while it was held)",
            context
        );
        poison_err.into_inner()
    })
}

/// Lock `mutex`, recovering from poisoning
pub fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    recover_mutex_poison(mutex.lock(), context)
}

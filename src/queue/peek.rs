//! Read-only inspection of an ordered queue
//!
//! Peeks return copies of the stored values. Store `Arc<T>` payloads to make
//! those copies cheap.

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::ordered::OrderedQueue;

impl<T: Clone> OrderedQueue<T> {
    /// `(priority, content)` of the element the next `remove()` would return
    pub fn peek_elem(&self) -> QueueResult<(f64, T)> {
        let state = self.lock();
        let element = state.buffer.back().ok_or(QueueError::Empty)?;
        Ok((element.priority(), element.content().clone()))
    }

    /// `(priority, content)` of the element `index` positions away from the
    /// removal end; index 0 is the same as [`peek_elem`](Self::peek_elem)
    pub fn peek_elem_at_index(&self, index: usize) -> QueueResult<(f64, T)> {
        let state = self.lock();
        let len = state.buffer.len();
        if len == 0 {
            return Err(QueueError::Empty);
        }
        if index >= len {
            return Err(QueueError::IndexOutOfBounds { index, len });
        }

        let element = state
            .buffer
            .get(len - 1 - index)
            .ok_or(QueueError::IndexOutOfBounds { index, len })?;
        Ok((element.priority(), element.content().clone()))
    }

    /// Copy of every stored payload in insertion order (oldest live insertion
    /// first), whatever the discipline
    pub fn get_all_elements(&self) -> Vec<T> {
        self.snapshot()
            .into_iter()
            .map(|(_, content)| content)
            .collect()
    }

    /// `(priority, content)` of every stored element in insertion order
    ///
    /// Elements repositioned by `update_priority` count as inserted when they
    /// were reinserted. Re-inserting a snapshot in order into an empty queue of
    /// the same discipline reproduces the removal order, ties included, unless
    /// `append` was used to bypass the discipline.
    pub fn snapshot(&self) -> Vec<(f64, T)> {
        let state = self.lock();
        let mut slots: Vec<_> = state.buffer.slots().iter().collect();
        slots.sort_by_key(|slot| slot.stamp);
        slots
            .into_iter()
            .map(|slot| (slot.element.priority(), slot.element.content().clone()))
            .collect()
    }
}

//! Backing storage for the ordered queue
//!
//! A contiguous, index-addressed buffer of element slots. Removal from the
//! back is O(1); extracting from the middle shifts the tail toward the front.
//! After removals the buffer releases memory with a hysteresis policy: once
//! the live length drops below `SHRINK_FACTOR` of the allocated capacity, the
//! allocation is reduced to `AFTER_SHRINK_FACTOR` of what it was.

use crate::queue::element::Element;
use crate::queue::error::{QueueError, QueueResult};

/// Fraction of allocated capacity below which a shrink is triggered
pub const SHRINK_FACTOR: f64 = 0.5;

/// Fraction of the current capacity kept after a shrink
pub const AFTER_SHRINK_FACTOR: f64 = 0.75;

/// Stored element plus the queue-local stamp of its insertion
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) stamp: u64,
    pub(crate) element: Element<T>,
}

#[derive(Debug)]
pub(crate) struct ElementBuffer<T> {
    slots: Vec<Slot<T>>,
    next_stamp: u64,
    shrink_factor: f64,
    after_shrink_factor: f64,
}

impl<T> ElementBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_stamp: 0,
            shrink_factor: SHRINK_FACTOR,
            after_shrink_factor: AFTER_SHRINK_FACTOR,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn priority_at(&self, index: usize) -> f64 {
        self.slots[index].element.priority()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Element<T>> {
        self.slots.get(index).map(|slot| &slot.element)
    }

    pub(crate) fn back(&self) -> Option<&Element<T>> {
        self.slots.last().map(|slot| &slot.element)
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    pub(crate) fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element<T>> {
        self.slots.iter_mut().map(|slot| &mut slot.element)
    }

    /// Stamp a freshly inserted element
    pub(crate) fn stamp(&mut self, element: Element<T>) -> Slot<T> {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        Slot { stamp, element }
    }

    pub(crate) fn push_back(&mut self, slot: Slot<T>) {
        self.slots.push(slot);
    }

    /// Insert at `index`, shifting later slots one toward the back
    pub(crate) fn insert_at(&mut self, index: usize, slot: Slot<T>) {
        self.slots.insert(index, slot);
    }

    /// Take the back slot and release memory if the buffer became sparse
    pub(crate) fn pop_back(&mut self) -> QueueResult<Slot<T>> {
        let slot = self.slots.pop().ok_or(QueueError::Empty)?;
        self.shrink_if_sparse();
        Ok(slot)
    }

    /// Delete the slot at `index`, shifting later slots one toward the front.
    ///
    /// Does not shrink; callers apply the shrink policy once they are done.
    pub(crate) fn remove_at(&mut self, index: usize) -> QueueResult<Slot<T>> {
        if self.slots.is_empty() {
            return Err(QueueError::Empty);
        }
        if index >= self.slots.len() {
            return Err(QueueError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            });
        }
        Ok(self.slots.remove(index))
    }

    /// Remove every slot matching `predicate`, returning them front to back
    pub(crate) fn extract_where(
        &mut self,
        mut predicate: impl FnMut(&Element<T>) -> bool,
    ) -> Vec<Slot<T>> {
        let mut extracted = Vec::new();
        let mut start = 0;
        loop {
            let found = self.slots[start..]
                .iter()
                .position(|slot| predicate(&slot.element));
            let Some(offset) = found else {
                break;
            };
            let index = start + offset;
            match self.remove_at(index) {
                Ok(slot) => extracted.push(slot),
                Err(_) => break,
            }
            start = index;
        }
        extracted
    }

    pub(crate) fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        let len = self.slots.len();
        if (len as f64) < self.shrink_factor * capacity as f64 {
            let target = (self.after_shrink_factor * capacity as f64).ceil() as usize;
            self.slots.shrink_to(target);
            if self.capacity() < capacity {
                log::trace!(
                    "shrunk queue storage from {} to {} slots ({} live)",
                    capacity,
                    self.capacity(),
                    len
                );
            }
        }
    }
}

impl<T> Default for ElementBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Removal, out-of-order deletion and priority maintenance

use crate::queue::element::{Element, ElementId};
use crate::queue::error::QueueResult;
use crate::queue::ordered::OrderedQueue;

impl<T> OrderedQueue<T> {
    /// Pop the next element, returning `(content, priority)`
    ///
    /// Among equal ordering keys the earliest inserted element comes out first.
    pub fn remove(&self) -> QueueResult<(T, f64)> {
        self.remove_element().map(Element::into_parts)
    }

    /// Pop the next element itself, identity included
    pub fn remove_element(&self) -> QueueResult<Element<T>> {
        let mut state = self.lock();
        state.buffer.pop_back().map(|slot| slot.element)
    }

    /// Delete every stored element with the identity `id`
    ///
    /// Works independently of the discipline. Scans the whole sequence rather
    /// than stopping at the first match; returns the number of deleted
    /// elements, 0 or 1 in practice since identities are unique.
    pub fn delete_pointer(&self, id: ElementId) -> usize {
        let mut state = self.lock();
        let deleted = state.buffer.extract_where(|e| e.id() == id).len();
        if deleted > 0 {
            state.buffer.shrink_if_sparse();
        }
        deleted
    }

    /// Update the priority of every element at `old_priority` to `new_priority`
    ///
    /// `Fifo`, `Lifo` and `FifoLimited` retag in place since priority does not
    /// affect their order. Priority disciplines extract the matching elements
    /// and reinsert them at the new priority, behind the elements already in
    /// that tier:
    /// - with `fast_mode` unset, oldest first, preserving their relative order
    /// - with `fast_mode` set, in scan order (front to back), which may reverse
    ///   the order of elements that tie at the new priority
    ///
    /// Returns the number of updated elements.
    pub fn update_priority(&self, old_priority: f64, new_priority: f64, fast_mode: bool) -> usize {
        let mut state = self.lock();

        if !self.discipline().is_priority_ordered() {
            let mut updated = 0;
            for element in state.buffer.elements_mut() {
                if element.has_priority(old_priority) {
                    element.set_priority(new_priority);
                    updated += 1;
                }
            }
            return updated;
        }

        let mut matched = state
            .buffer
            .extract_where(|e| e.has_priority(old_priority));
        let updated = matched.len();

        if !fast_mode {
            // Scanning front to back meets newer elements before older ones
            matched.reverse();
        }
        for slot in matched {
            let mut element = slot.element;
            element.set_priority(new_priority);
            // Restamped in reinsertion order so snapshots follow the new placement
            let slot = state.buffer.stamp(element);
            state.splice(self.discipline(), slot);
        }

        log::trace!(
            "updated priority {} -> {} for {} element(s)",
            old_priority,
            new_priority,
            updated
        );
        updated
    }
}

impl<T: PartialEq> OrderedQueue<T> {
    /// Delete every stored element value-equal to `element`
    ///
    /// Compares priority and content, ignoring identity. Returns the number of
    /// deleted elements.
    pub fn delete_elem(&self, element: &Element<T>) -> usize {
        let mut state = self.lock();
        let deleted = state.buffer.extract_where(|e| e.value_eq(element)).len();
        if deleted > 0 {
            state.buffer.shrink_if_sparse();
        }
        deleted
    }
}

//! OrderedQueue - the queue core
//!
//! Owns the backing sequence, the discipline, the optional capacity limit and
//! the single lock that serialises every operation. Insertion is dispatched to
//! the discipline's placement rule; removal, deletion and priority updates live
//! in the `removal` module and read-only inspection in `peek`.

use crate::core::sync::lock_or_recover;
use crate::queue::discipline::Discipline;
use crate::queue::element::Element;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::storage::{ElementBuffer, Slot};
use std::sync::{Mutex, MutexGuard};

/// Mutable state guarded by the queue lock
#[derive(Debug)]
pub(crate) struct QueueState<T> {
    pub(crate) buffer: ElementBuffer<T>,
    /// Maximum element count for `FifoLimited`; 0 means unbounded
    pub(crate) limit: usize,
}

impl<T> QueueState<T> {
    /// Make room for one more element in a bounded `FifoLimited` queue by
    /// removing the oldest elements. Returns the number of evicted elements.
    pub(crate) fn evict_for(&mut self, discipline: Discipline) -> QueueResult<usize> {
        let mut evicted = 0;
        if discipline == Discipline::FifoLimited && self.limit > 0 {
            while self.buffer.len() >= self.limit {
                self.buffer.pop_back()?;
                evicted += 1;
            }
        }
        Ok(evicted)
    }

    /// Splice a stamped slot where `discipline` requires it
    pub(crate) fn splice(&mut self, discipline: Discipline, slot: Slot<T>) {
        let buffer = &self.buffer;
        let index = discipline.place(
            buffer.len(),
            |i| buffer.priority_at(i),
            slot.element.priority(),
        );
        self.buffer.insert_at(index, slot);
    }
}

/// Thread-safe ordered queue
///
/// Every public operation takes the queue-wide lock for its whole duration,
/// so operations from different threads are totally ordered. The queue can be
/// shared across threads with `Arc<OrderedQueue<T>>` when `T: Send`.
///
/// # Example
///
/// ```rust
/// use ordqueue::queue::{Discipline, Element, OrderedQueue};
///
/// let queue = OrderedQueue::new(Discipline::Fifo);
/// for job in ["build", "test", "deploy"] {
///     queue.insert(Element::without_priority(job)).unwrap();
/// }
///
/// assert_eq!(queue.remove().unwrap().0, "build");
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug)]
pub struct OrderedQueue<T> {
    discipline: Discipline,
    state: Mutex<QueueState<T>>,
}

impl<T> OrderedQueue<T> {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            state: Mutex::new(QueueState {
                buffer: ElementBuffer::new(),
                limit: 0,
            }),
        }
    }

    /// Create a queue from a numeric discipline tag
    ///
    /// Unknown tags fail here rather than at the first insertion.
    pub fn from_tag(tag: i64) -> QueueResult<Self> {
        Discipline::from_tag(tag).map(Self::new)
    }

    /// Create a queue with a capacity limit (enforced by `FifoLimited` only)
    pub fn with_limit(discipline: Discipline, limit: usize) -> Self {
        let queue = Self::new(discipline);
        queue.lock().limit = limit;
        queue
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        lock_or_recover(&self.state, "ordered queue")
    }

    /// Push `element` to the back, bypassing the discipline.
    ///
    /// The element becomes the next one removed. This breaks the ordering
    /// invariant unless the caller bulk-loads elements already in order.
    pub fn append(&self, element: Element<T>) {
        let mut state = self.lock();
        let slot = state.buffer.stamp(element);
        state.buffer.push_back(slot);
    }

    /// Insert `element` where the discipline requires it
    ///
    /// For `FifoLimited` queues at their limit the oldest elements are evicted
    /// to make room.
    pub fn insert(&self, element: Element<T>) -> QueueResult<()> {
        let mut state = self.lock();
        let evicted = state.evict_for(self.discipline)?;
        let slot = state.buffer.stamp(element);
        state.splice(self.discipline, slot);
        if evicted > 0 {
            log::debug!(
                "evicted {} element(s) from {} queue at limit {}",
                evicted,
                self.discipline,
                state.limit
            );
        }
        Ok(())
    }

    /// Set the capacity limit; 0 removes the bound
    ///
    /// Only `FifoLimited` enforces the limit. Lowering it below the current
    /// length takes effect at the next insertion.
    pub fn set_limit(&self, limit: i64) -> QueueResult<()> {
        let limit = usize::try_from(limit).map_err(|_| QueueError::InvalidCapacity { limit })?;
        self.lock().limit = limit;
        Ok(())
    }

    /// Current capacity limit, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        match self.lock().limit {
            0 => None,
            limit => Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

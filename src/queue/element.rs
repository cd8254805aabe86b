//! Element - the unit of storage in an ordered queue
//!
//! An element pairs an opaque, caller-supplied content value with a floating
//! point priority. The queue never inspects the content; it only stores it and
//! hands it back.
//!
//! Every element carries an [`ElementId`] assigned when it is created. The id is
//! what identity-based deletion compares, so two elements with equal priority
//! and content are still distinct. Elements are deliberately not `Clone`.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Element`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "elem-{}", self.0)
    }
}

/// A content slot with a mutable priority
///
/// # Example
///
/// ```rust
/// use ordqueue::queue::{Discipline, Element, OrderedQueue};
///
/// let queue = OrderedQueue::new(Discipline::PriorityHigh);
/// let urgent = Element::new("page the on-call", 10.0);
/// let urgent_id = urgent.id();
/// queue.insert(urgent).unwrap();
/// queue.insert(Element::new("rotate logs", 1.0)).unwrap();
///
/// assert_eq!(queue.delete_pointer(urgent_id), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct Element<T> {
    id: ElementId,
    priority: f64,
    content: T,
}

impl<T> Element<T> {
    pub fn new(content: T, priority: f64) -> Self {
        Self {
            id: ElementId::next(),
            priority,
            content,
        }
    }

    /// Element for disciplines that ignore priority (priority is 0.0)
    pub fn without_priority(content: T) -> Self {
        Self::new(content, 0.0)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn set_content(&mut self, content: T) {
        self.content = content;
    }

    /// Consume the element, returning `(content, priority)`
    pub fn into_parts(self) -> (T, f64) {
        (self.content, self.priority)
    }

    /// Same underlying instance
    pub fn is_same(&self, other: &Element<T>) -> bool {
        self.id == other.id
    }

    pub(crate) fn has_priority(&self, priority: f64) -> bool {
        compare_priority(self.priority, priority) == CmpOrdering::Equal
    }
}

impl<T: PartialEq> Element<T> {
    /// Value equality: equal priority and equal content, identity ignored
    pub fn value_eq(&self, other: &Element<T>) -> bool {
        self.has_priority(other.priority) && self.content == other.content
    }
}

/// Total order over priorities used by every placement and matching decision.
///
/// NaN sorts above positive infinity and `-0.0` below `0.0`.
pub(crate) fn compare_priority(a: f64, b: f64) -> CmpOrdering {
    a.total_cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_element_gets_a_distinct_id() {
        let a = Element::new("job", 1.0);
        let b = Element::new("job", 1.0);

        assert_ne!(a.id(), b.id());
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a));
        assert!(a.value_eq(&b));
    }

    #[test]
    fn test_without_priority_defaults_to_zero() {
        let elem = Element::without_priority(7u32);
        assert_eq!(elem.priority(), 0.0);
        assert_eq!(*elem.content(), 7);
    }

    #[test]
    fn test_setters_and_into_parts() {
        let mut elem = Element::new(String::from("old"), 1.5);
        let id = elem.id();
        elem.set_priority(4.0);
        elem.set_content(String::from("new"));

        assert_eq!(elem.id(), id, "mutation must not change identity");
        assert_eq!(elem.into_parts(), (String::from("new"), 4.0));
    }

    #[test]
    fn test_value_eq_compares_priority_and_content() {
        let a = Element::new(1, 2.0);
        assert!(!a.value_eq(&Element::new(1, 3.0)));
        assert!(!a.value_eq(&Element::new(2, 2.0)));
        assert!(Element::new(1, f64::NAN).value_eq(&Element::new(1, f64::NAN)));
    }
}

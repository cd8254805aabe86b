//! Edge case and error condition tests for the queue engine
//!
//! These tests verify that the engine handles error conditions gracefully and
//! keeps its state consistent.

#[cfg(test)]
mod tests {
    use crate::queue::api::{Discipline, Element, OrderedQueue, QueueError};

    #[test]
    fn test_repeated_remove_on_empty_queue() {
        let queue: OrderedQueue<u32> = OrderedQueue::new(Discipline::PriorityLow);
        for _ in 0..100 {
            assert_eq!(queue.remove(), Err(QueueError::Empty));
            assert_eq!(queue.len(), 0);
        }

        // State is still usable afterwards
        queue.insert(Element::new(1, 1.0)).unwrap();
        assert_eq!(queue.remove().unwrap(), (1, 1.0));
        assert_eq!(queue.remove(), Err(QueueError::Empty));
    }

    #[test]
    fn test_extreme_priorities() {
        let queue = OrderedQueue::new(Discipline::PriorityHigh);
        queue.insert(Element::new("max", f64::MAX)).unwrap();
        queue.insert(Element::new("neg-inf", f64::NEG_INFINITY)).unwrap();
        queue.insert(Element::new("inf", f64::INFINITY)).unwrap();
        queue.insert(Element::new("min", f64::MIN)).unwrap();

        let order: Vec<&str> = std::iter::from_fn(|| queue.remove().ok().map(|(c, _)| c)).collect();
        assert_eq!(order, vec!["inf", "max", "min", "neg-inf"]);
    }

    #[test]
    fn test_nan_priority_does_not_corrupt_order() {
        let queue = OrderedQueue::new(Discipline::PriorityLow);
        queue.insert(Element::new("nan", f64::NAN)).unwrap();
        queue.insert(Element::new("one", 1.0)).unwrap();
        queue.insert(Element::new("zero", 0.0)).unwrap();

        assert_eq!(queue.remove().unwrap().0, "zero");
        assert_eq!(queue.remove().unwrap().0, "one");
        assert_eq!(queue.remove().unwrap().0, "nan");
    }

    #[test]
    fn test_signed_zero_priorities_are_distinct() {
        let queue = OrderedQueue::new(Discipline::PriorityHigh);
        queue.insert(Element::new("negative", -0.0)).unwrap();
        queue.insert(Element::new("positive", 0.0)).unwrap();

        assert_eq!(queue.update_priority(0.0, 5.0, false), 1);
        assert_eq!(queue.remove().unwrap().0, "positive");
        assert_eq!(queue.remove().unwrap().0, "negative");
    }

    #[test]
    fn test_large_payloads_are_stored_without_inspection() {
        let queue = OrderedQueue::new(Discipline::Lifo);
        let large = "x".repeat(1024 * 1024);
        queue.insert(Element::without_priority(large.clone())).unwrap();

        assert_eq!(queue.peek_elem().unwrap().1.len(), large.len());
        assert_eq!(queue.remove().unwrap().0, large);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(QueueError::Empty.to_string(), "Queue is empty");
        assert_eq!(
            QueueError::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "Index 4 is out of bounds (len: 2)"
        );
        assert_eq!(
            QueueError::InvalidCapacity { limit: -3 }.to_string(),
            "Invalid capacity limit: -3"
        );
    }

    #[test]
    fn test_single_element_every_discipline() {
        for tag in 0..5 {
            let queue = OrderedQueue::from_tag(tag).unwrap();
            queue.insert(Element::new("only", 1.0)).unwrap();
            assert_eq!(queue.peek_elem_at_index(0).unwrap(), (1.0, "only"));
            assert_eq!(queue.remove().unwrap(), ("only", 1.0));
            assert!(queue.is_empty());
        }
    }
}

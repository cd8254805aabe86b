//! Tests for storage shrinking while the queue drains

#[cfg(test)]
mod tests {
    use crate::queue::api::{Discipline, Element, OrderedQueue};

    #[test]
    fn test_shrink_does_not_lose_elements() {
        let queue = OrderedQueue::new(Discipline::Fifo);
        let mut expected: std::collections::VecDeque<u32> = Default::default();
        let mut next = 0u32;

        // Grow, drain most of it, grow again: several shrink reallocations
        for (grow, shrink) in [(2000, 1900), (500, 550), (3000, 2990), (10, 60)] {
            for _ in 0..grow {
                queue.insert(Element::without_priority(next)).unwrap();
                expected.push_back(next);
                next += 1;
            }
            for _ in 0..shrink {
                let (content, _) = queue.remove().unwrap();
                assert_eq!(Some(content), expected.pop_front());
            }
            assert_eq!(
                queue.get_all_elements(),
                expected.iter().copied().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_capacity_is_released_after_draining() {
        let queue = OrderedQueue::new(Discipline::Lifo);
        for i in 0..4096 {
            queue.insert(Element::without_priority(i)).unwrap();
        }
        let grown = queue.lock().buffer.capacity();

        while queue.len() > 8 {
            queue.remove().unwrap();
        }
        let drained = queue.lock().buffer.capacity();

        assert!(
            drained < grown / 2,
            "expected capacity to shrink: grown {}, drained {}",
            grown,
            drained
        );
        assert_eq!(queue.get_all_elements(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_deleting_many_elements_shrinks_storage() {
        let queue = OrderedQueue::new(Discipline::PriorityHigh);
        for i in 0..1000 {
            queue.insert(Element::new(i, (i % 2) as f64)).unwrap();
        }
        let grown = queue.lock().buffer.capacity();

        assert_eq!(queue.delete_elem(&Element::new(0, 0.0)), 1);
        for i in (2..1000).step_by(2) {
            assert_eq!(queue.delete_elem(&Element::new(i, 0.0)), 1);
        }

        assert_eq!(queue.len(), 500);
        assert!(queue.lock().buffer.capacity() < grown);
        assert!(queue.get_all_elements().iter().all(|i| i % 2 == 1));
    }
}

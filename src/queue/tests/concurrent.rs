//! Tests for concurrent queue operations

#[cfg(test)]
mod tests {
    use crate::queue::api::{Discipline, Element, OrderedQueue, QueueError};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        let queue = Arc::new(OrderedQueue::new(Discipline::Fifo));
        let producers = 8;
        let per_producer = 500;

        thread::scope(|scope| {
            for producer in 0..producers {
                let queue = Arc::clone(&queue);
                scope.spawn(move || {
                    for i in 0..per_producer {
                        queue
                            .insert(Element::without_priority((producer, i)))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(queue.len(), producers * per_producer);

        // Fifo keeps each producer's own sequence in order
        let mut last_seen = vec![None; producers];
        while let Ok(((producer, i), _)) = queue.remove() {
            if let Some(previous) = last_seen[producer] {
                assert!(i > previous, "producer {} out of order", producer);
            }
            last_seen[producer] = Some(i);
        }
        assert!(last_seen.iter().all(|seen| *seen == Some(per_producer - 1)));
    }

    #[test]
    fn test_concurrent_producers_and_consumers() {
        let queue = Arc::new(OrderedQueue::new(Discipline::PriorityHigh));
        let total = 4000usize;

        let consumed: Vec<usize> = thread::scope(|scope| {
            for producer in 0..4 {
                let queue = Arc::clone(&queue);
                scope.spawn(move || {
                    for i in (producer..total).step_by(4) {
                        queue.insert(Element::new(i, (i % 10) as f64)).unwrap();
                    }
                });
            }

            let consumers: Vec<_> = (0..4)
                .map(|_| {
                    let queue = Arc::clone(&queue);
                    scope.spawn(move || {
                        let mut taken = Vec::new();
                        let mut idle_rounds = 0;
                        while idle_rounds < 1000 {
                            match queue.remove() {
                                Ok((content, _)) => {
                                    taken.push(content);
                                    idle_rounds = 0;
                                }
                                Err(QueueError::Empty) => {
                                    idle_rounds += 1;
                                    thread::yield_now();
                                }
                                Err(e) => panic!("unexpected error: {}", e),
                            }
                        }
                        taken
                    })
                })
                .collect();

            consumers
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        // Whatever the consumers did not pick up is still queued
        let consumed_count = consumed.len();
        let mut seen: HashSet<usize> = consumed.into_iter().collect();
        assert_eq!(seen.len(), consumed_count, "an element was delivered twice");
        while let Ok((content, _)) = queue.remove() {
            assert!(seen.insert(content), "element {} delivered twice", content);
        }
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_concurrent_maintenance_operations() {
        let queue = Arc::new(OrderedQueue::new(Discipline::PriorityLow));
        for i in 0..1000 {
            queue.insert(Element::new(i, (i % 5) as f64)).unwrap();
        }

        thread::scope(|scope| {
            let updater = Arc::clone(&queue);
            scope.spawn(move || {
                for _ in 0..50 {
                    updater.update_priority(1.0, 6.0, false);
                    updater.update_priority(6.0, 1.0, true);
                }
            });
            let reader = Arc::clone(&queue);
            scope.spawn(move || {
                for i in 0..200 {
                    let _ = reader.peek_elem_at_index(i);
                    assert_eq!(reader.get_all_elements().len(), 1000);
                }
            });
        });

        assert_eq!(queue.len(), 1000);
        // Order invariant still holds: priorities come out non-decreasing
        let mut last = f64::NEG_INFINITY;
        while let Ok((_, priority)) = queue.remove() {
            assert!(priority >= last);
            last = priority;
        }
    }
}

//! Insertion strategies
//!
//! One placement rule per discipline. Given the current sequence (viewed only
//! through its length and a priority accessor) and the priority of a new
//! element, a strategy returns the index at which the element is spliced in.
//! Strategies never mutate the sequence.
//!
//! All rules preserve two invariants:
//! - the element due for removal next sits at the back of the sequence
//! - among equal ordering keys, the earlier inserted element sits closer to
//!   the back, so it is removed first

use crate::queue::discipline::Discipline;
use crate::queue::element::compare_priority;
use std::cmp::Ordering;

impl Discipline {
    /// Index at which an element with `priority` must be inserted
    pub(crate) fn place(self, len: usize, priority_at: impl Fn(usize) -> f64, priority: f64) -> usize {
        match self {
            Discipline::Fifo | Discipline::FifoLimited => 0,
            Discipline::Lifo => len,
            // The back holds the maximum
            Discipline::PriorityHigh => place_sorted(len, priority_at, priority, Ordering::Greater),
            // The back holds the minimum
            Discipline::PriorityLow => place_sorted(len, priority_at, priority, Ordering::Less),
        }
    }
}

/// Insertion-sort placement for priority disciplines.
///
/// `toward_back` is the ordering a priority has relative to every priority in
/// front of it (`Greater` for high-first, `Less` for low-first).
fn place_sorted(
    len: usize,
    priority_at: impl Fn(usize) -> f64,
    priority: f64,
    toward_back: Ordering,
) -> usize {
    if len == 0 {
        return 0;
    }

    let back = compare_priority(priority, priority_at(len - 1));
    if back == toward_back {
        // Strictly extends the current extreme
        return len;
    }

    if back == Ordering::Equal {
        // Land in front of the trailing run of equal priorities
        let mut index = len - 1;
        while index > 0 && compare_priority(priority_at(index - 1), priority) == Ordering::Equal {
            index -= 1;
        }
        return index;
    }

    // First element that does not sort strictly in front of the new priority
    (0..len)
        .find(|&i| compare_priority(priority, priority_at(i)) != toward_back)
        .unwrap_or(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_in(discipline: Discipline, sequence: &[f64], priority: f64) -> usize {
        discipline.place(sequence.len(), |i| sequence[i], priority)
    }

    /// Run every insertion through the strategy and return the final sequence
    fn build(discipline: Discipline, priorities: &[f64]) -> Vec<(f64, usize)> {
        let mut sequence: Vec<(f64, usize)> = Vec::new();
        for (order, &priority) in priorities.iter().enumerate() {
            let index = discipline.place(sequence.len(), |i| sequence[i].0, priority);
            sequence.insert(index, (priority, order));
        }
        sequence
    }

    /// Reference placement using only the general forward scan
    fn build_general_only(discipline: Discipline, priorities: &[f64]) -> Vec<(f64, usize)> {
        let toward_back = match discipline {
            Discipline::PriorityHigh => Ordering::Greater,
            _ => Ordering::Less,
        };
        let mut sequence: Vec<(f64, usize)> = Vec::new();
        for (order, &priority) in priorities.iter().enumerate() {
            let index = (0..sequence.len())
                .find(|&i| compare_priority(priority, sequence[i].0) != toward_back)
                .unwrap_or(sequence.len());
            sequence.insert(index, (priority, order));
        }
        sequence
    }

    #[test]
    fn test_fifo_and_lifo_placement() {
        let sequence = [3.0, 1.0, 2.0];
        assert_eq!(place_in(Discipline::Fifo, &sequence, 9.0), 0);
        assert_eq!(place_in(Discipline::FifoLimited, &sequence, 9.0), 0);
        assert_eq!(place_in(Discipline::Lifo, &sequence, 9.0), 3);
        assert_eq!(place_in(Discipline::Lifo, &[], 9.0), 0);
    }

    #[test]
    fn test_priority_fast_paths() {
        let ascending = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(place_in(Discipline::PriorityHigh, &[], 5.0), 0);
        assert_eq!(place_in(Discipline::PriorityHigh, &ascending, 4.0), 4);
        // Equal to the back: in front of the run of 3.0
        assert_eq!(place_in(Discipline::PriorityHigh, &ascending, 3.0), 3);
        assert_eq!(place_in(Discipline::PriorityHigh, &[2.0, 2.0, 2.0], 2.0), 0);

        let descending = [3.0, 2.0, 1.0, 1.0];
        assert_eq!(place_in(Discipline::PriorityLow, &descending, 0.5), 4);
        assert_eq!(place_in(Discipline::PriorityLow, &descending, 1.0), 2);
    }

    #[test]
    fn test_priority_general_path() {
        let ascending = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(place_in(Discipline::PriorityHigh, &ascending, 2.0), 1);
        assert_eq!(place_in(Discipline::PriorityHigh, &ascending, 0.0), 0);
        assert_eq!(place_in(Discipline::PriorityHigh, &ascending, 2.5), 3);

        let descending = [3.0, 2.0, 2.0, 1.0];
        assert_eq!(place_in(Discipline::PriorityLow, &descending, 2.0), 1);
        assert_eq!(place_in(Discipline::PriorityLow, &descending, 4.0), 0);
    }

    #[test]
    fn test_ties_keep_oldest_closest_to_back() {
        // Insertion order 0..5 with priorities [1, 1, 2, 2, 1]
        let sequence = build(Discipline::PriorityHigh, &[1.0, 1.0, 2.0, 2.0, 1.0]);
        let removal_order: Vec<usize> = sequence.iter().rev().map(|&(_, order)| order).collect();
        assert_eq!(removal_order, vec![2, 3, 0, 1, 4]);

        let sequence = build(Discipline::PriorityLow, &[1.0, 1.0, 2.0, 2.0, 1.0]);
        let removal_order: Vec<usize> = sequence.iter().rev().map(|&(_, order)| order).collect();
        assert_eq!(removal_order, vec![0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_fast_paths_agree_with_general_scan() {
        // Deterministic pseudo-random priorities with many ties
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let priorities: Vec<f64> = (0..400)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 7) as f64
            })
            .collect();

        for discipline in [Discipline::PriorityHigh, Discipline::PriorityLow] {
            assert_eq!(
                build(discipline, &priorities),
                build_general_only(discipline, &priorities),
                "placement diverged for {discipline}"
            );
        }
    }

    #[test]
    fn test_nan_priority_is_orderable() {
        let sequence = build(Discipline::PriorityHigh, &[1.0, f64::NAN, 2.0, f64::NAN]);
        assert_eq!(sequence.len(), 4);
        assert!(sequence[3].0.is_nan());
        assert_eq!(sequence[3].1, 1, "older NaN is removed first");
    }
}

//! Ordered Queue Engine
//!
//! A thread-safe container that stores opaque payloads under one of several
//! admission/removal disciplines.
//!
//! # Overview
//!
//! - **Fifo / Lifo**: insertion order decides removal order
//! - **PriorityHigh / PriorityLow**: highest (or lowest) priority first
//! - **FifoLimited**: Fifo bounded by a capacity limit, evicting the oldest
//!   element when a new one arrives at the limit
//! - **Tie-break**: among equal ordering keys the earliest inserted element is
//!   always removed first
//!
//! # Architecture
//!
//! ```text
//!            insert(elem)                               remove()
//!                 │                                        ▲
//!                 ▼                                        │
//!      ┌─────────────────────┐                             │
//!      │ Discipline::place() │ picks the splice index      │
//!      └──────────┬──────────┘                             │
//!                 ▼                                        │
//! ┌───────────────────────────────────────────────────────┴──┐
//! │ ElementBuffer   [ front ... ... ... ... ... ... ... back ] │
//! │                   inserted last       removed next ───┘   │
//! └──────────────────────────────────────────────────────────┘
//!          all operations serialise on one queue-wide lock
//! ```
//!
//! The element due for removal is always the last slot of the buffer, so all
//! disciplines share one removal primitive and differ only in placement.
//!
//! # Example Usage
//!
//! ```rust
//! use ordqueue::queue::{Discipline, Element, OrderedQueue};
//!
//! let queue = OrderedQueue::new(Discipline::PriorityHigh);
//! queue.insert(Element::new("minor", 1.0)).unwrap();
//! queue.insert(Element::new("critical", 9.0)).unwrap();
//! queue.insert(Element::new("also minor", 1.0)).unwrap();
//!
//! assert_eq!(queue.remove().unwrap(), ("critical", 9.0));
//! assert_eq!(queue.remove().unwrap(), ("minor", 1.0));
//! assert_eq!(queue.remove().unwrap(), ("also minor", 1.0));
//! ```

pub mod api;
mod discipline;
mod element;
mod error;
mod ordered;
mod peek;
mod removal;
mod storage;
mod strategy;

pub use discipline::Discipline;
pub use element::{Element, ElementId};
pub use error::{QueueError, QueueResult};
pub use ordered::OrderedQueue;
pub use storage::{AFTER_SHRINK_FACTOR, SHRINK_FACTOR};

#[cfg(test)]
mod tests;

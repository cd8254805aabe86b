//! Public API for the ordered queue engine
//!
//! External modules should import from here rather than directly from internal
//! modules. See the module documentation for usage and architecture details.

// Queue core
pub use crate::queue::ordered::OrderedQueue;

// Elements and disciplines
pub use crate::queue::discipline::Discipline;
pub use crate::queue::element::{Element, ElementId};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

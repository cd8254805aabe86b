//! Test modules for the ordered queue engine
//!
//! Tests are organized by functional area for better maintainability.

mod concurrent;
mod edge_cases;
mod memory;

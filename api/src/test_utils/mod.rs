//! Test utilities
//!
//! Manual in-memory port implementations and test fixtures for unit testing.
//!
//! The in-memory repository covers the normal read/write paths. Store races
//! (a conflict reported while the record still exists) are easier to stage
//! with the mockall-generated `MockEmployeeRepository`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod employee;

pub use employee::{fold_name, Employee, EmployeeFields, EmployeeId, NewEmployee};

//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain rules, ports, and external systems.

pub mod employee_service;

pub use employee_service::EmployeeService;

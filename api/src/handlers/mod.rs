//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod employees;

pub use employees::{
    calculate_salary, create_employee, delete_employee, get_employee_by_name, list_employees,
    update_employee,
};

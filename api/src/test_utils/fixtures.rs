//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};

/// Midnight on the given calendar day
pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid test date")
}

/// Create a valid, not yet stored employee with the given name
pub fn test_new_employee(name: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        age: 30,
        date_of_joining: day(2023, 1, 1),
        salary: Decimal::from(30_000),
        position: "Developer".to_string(),
    }
}

/// Create a stored employee with a fixed id and name
pub fn test_employee(id: i32, name: &str) -> Employee {
    test_new_employee(name).with_id(EmployeeId(id))
}

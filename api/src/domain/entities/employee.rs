//! Employee domain entity
//!
//! The only record kept by the service. Employees are independent of each
//! other; `id` is assigned by the store and never changes afterwards.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i32);

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to the fields the validator cares about.
///
/// Implemented by both the stored record and the creation payload so that a
/// single rule set covers create and replace.
pub trait EmployeeFields {
    fn name(&self) -> &str;
    fn position(&self) -> &str;
    fn salary(&self) -> Decimal;
}

/// A stored employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Not validated; any value the caller sends is kept.
    pub age: i32,
    pub date_of_joining: NaiveDateTime,
    /// Monthly salary
    pub salary: Decimal,
    pub position: String,
}

impl Employee {
    /// Case-insensitive name comparison, locale independent
    pub fn has_name(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }
}

impl EmployeeFields for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> &str {
        &self.position
    }

    fn salary(&self) -> Decimal {
        self.salary
    }
}

/// Data needed to create a new employee (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub date_of_joining: NaiveDateTime,
    pub salary: Decimal,
    pub position: String,
}

impl NewEmployee {
    /// Attach a store-assigned id
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            date_of_joining: self.date_of_joining,
            salary: self.salary,
            position: self.position,
        }
    }
}

impl EmployeeFields for NewEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> &str {
        &self.position
    }

    fn salary(&self) -> Decimal {
        self.salary
    }
}

/// Fold a name for case-insensitive matching.
///
/// Uses Unicode lowercase mapping, which does not depend on the process
/// locale, so "ИГОРЬ", "Игорь" and "игорь" all fold to the same key.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::error::DomainError;

/// Lookup predicate understood by every store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Exact id match
    ById(EmployeeId),
    /// Name equality after lowercase folding of both sides
    NameIgnoreCase(String),
}

/// Result of a full-record overwrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No row accepted the write, e.g. it was deleted concurrently
    Conflict,
}

/// Repository for Employee records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Store a new employee and return it with its assigned id
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// All employees, ordered by id
    async fn all(&self) -> Result<Vec<Employee>, DomainError>;

    /// First employee matching the filter (lowest id wins on duplicates)
    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError>;

    /// Overwrite the record whose id equals `employee.id`
    async fn update(&self, employee: &Employee) -> Result<UpdateOutcome, DomainError>;

    /// Remove an employee by id
    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError>;
}

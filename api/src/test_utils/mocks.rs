//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::{EmployeeFilter, EmployeeRepository, UpdateOutcome};
use crate::error::DomainError;

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

/// Keyed by id, so iteration order is ascending id like the SQL adapter
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
    next_id: AtomicI32,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            employees: Arc::default(),
            next_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        self.next_id.fetch_max(employee.id.0 + 1, Ordering::SeqCst);
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee);
        self
    }

    fn matches(employee: &Employee, filter: &EmployeeFilter) -> bool {
        match filter {
            EmployeeFilter::ById(id) => employee.id == *id,
            EmployeeFilter::NameIgnoreCase(name) => employee.has_name(name),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let id = EmployeeId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = employee.clone().with_id(id);
        self.employees.write().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn all(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.employees.read().unwrap().values().cloned().collect())
    }

    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees
            .values()
            .find(|e| Self::matches(e, filter))
            .cloned())
    }

    async fn update(&self, employee: &Employee) -> Result<UpdateOutcome, DomainError> {
        let mut employees = self.employees.write().unwrap();
        match employees.get_mut(&employee.id) {
            Some(existing) => {
                *existing = employee.clone();
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::Conflict),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        self.employees
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Employee {}", id)))
    }
}

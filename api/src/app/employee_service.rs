//! Employee service
//!
//! Implements the record operations on top of an [`EmployeeRepository`]:
//! validation runs first, then the store is read or written.
//!
//! Lookup and delete are keyed by name, which is not unique. When several
//! employees share a name the store decides which one is "first" (lowest id
//! for the bundled adapters).

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::{EmployeeFilter, EmployeeRepository, UpdateOutcome};
use crate::domain::salary::{self, SalaryError};
use crate::domain::validation;
use crate::error::{AppError, DomainError};

/// Service for managing employee records
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository + ?Sized,
{
    employees: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository + ?Sized,
{
    pub fn new(employees: Arc<ER>) -> Self {
        Self { employees }
    }

    /// All employees
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.all().await?)
    }

    /// Case-insensitive exact lookup by name
    pub async fn find_by_name(&self, name: &str) -> Result<Employee, AppError> {
        validation::ensure_valid_search_name(name)?;
        tracing::debug!(name, "Looking up employee by name");
        self.require_by_name(name).await
    }

    /// Validate and store a new employee
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, AppError> {
        validation::ensure_valid(&employee)?;

        let created = self.employees.insert(&employee).await?;
        tracing::info!(id = %created.id, name = %created.name, "Employee created");
        Ok(created)
    }

    /// Overwrite the employee stored under `id` with `employee`
    ///
    /// The body id must match the route id before anything else is checked.
    /// A store conflict is resolved by re-reading: a vanished record becomes
    /// `NotFound`, anything else is passed back as a retryable conflict.
    pub async fn replace(&self, id: EmployeeId, employee: Employee) -> Result<(), AppError> {
        if employee.id != id {
            return Err(AppError::IdMismatch {
                path_id: id.0,
                body_id: employee.id.0,
            });
        }

        validation::ensure_valid(&employee)?;

        match self.employees.update(&employee).await? {
            UpdateOutcome::Updated => {
                tracing::info!(%id, name = %employee.name, "Employee replaced");
                Ok(())
            }
            UpdateOutcome::Conflict => {
                let still_exists = self
                    .employees
                    .find_one(&EmployeeFilter::ById(id))
                    .await?
                    .is_some();

                if still_exists {
                    tracing::warn!(%id, "Concurrent write detected while replacing employee");
                    Err(DomainError::Conflict(format!(
                        "Employee {} was modified concurrently, retry the request",
                        id
                    ))
                    .into())
                } else {
                    Err(AppError::NotFound(format!("Employee {} not found", id)))
                }
            }
        }
    }

    /// Remove the first employee whose name matches, ignoring case
    pub async fn delete_by_name(&self, name: &str) -> Result<(), AppError> {
        validation::ensure_valid_search_name(name)?;

        let employee = self.require_by_name(name).await?;
        self.employees.delete(&employee.id).await?;

        tracing::info!(id = %employee.id, name = %employee.name, "Employee deleted");
        Ok(())
    }

    /// Prorated salary of the named employee for `[start, end]`
    pub async fn calculate_salary(
        &self,
        name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Decimal, AppError> {
        validation::ensure_valid_search_name(name)?;
        if end < start {
            return Err(SalaryError::InvalidRange { start, end }.into());
        }

        let employee = self.require_by_name(name).await?;
        let total = salary::compute_salary(employee.salary, start, end)?;

        tracing::debug!(id = %employee.id, %start, %end, %total, "Salary calculated");
        Ok(total)
    }

    async fn require_by_name(&self, name: &str) -> Result<Employee, AppError> {
        self.employees
            .find_one(&EmployeeFilter::NameIgnoreCase(name.to_string()))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with name '{}' not found", name)))
    }
}

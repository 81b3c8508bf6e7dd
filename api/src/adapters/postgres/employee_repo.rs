//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{fold_name, Employee, EmployeeId, NewEmployee};
use crate::domain::ports::{EmployeeFilter, EmployeeRepository, UpdateOutcome};
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let model = employees::ActiveModel {
            name: Set(employee.name.clone()),
            name_folded: Set(fold_name(&employee.name)),
            age: Set(employee.age),
            date_of_joining: Set(employee.date_of_joining),
            salary: Set(employee.salary),
            position: Set(employee.position.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn all(&self) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError> {
        let query = match filter {
            EmployeeFilter::ById(id) => employees::Entity::find_by_id(id.0),
            EmployeeFilter::NameIgnoreCase(name) => employees::Entity::find()
                .filter(employees::Column::NameFolded.eq(fold_name(name)))
                .order_by_asc(employees::Column::Id),
        };

        let result = query
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn update(&self, employee: &Employee) -> Result<UpdateOutcome, DomainError> {
        let result = employees::ActiveModel {
            id: Set(employee.id.0),
            name: Set(employee.name.clone()),
            name_folded: Set(fold_name(&employee.name)),
            age: Set(employee.age),
            date_of_joining: Set(employee.date_of_joining),
            salary: Set(employee.salary),
            position: Set(employee.position.clone()),
        }
        .update(&self.db)
        .await;

        match result {
            Ok(_) => Ok(UpdateOutcome::Updated),
            Err(DbErr::RecordNotUpdated) => Ok(UpdateOutcome::Conflict),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Employee {}", id)));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            name: model.name,
            age: model.age,
            date_of_joining: model.date_of_joining,
            salary: model.salary,
            position: model.position,
        }
    }
}

//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod employee_repo;


use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

pub use employee_repo::PostgresEmployeeRepository;

const SCHEMA: &str = include_str!("../../../migrations/001_create_employees.sql");

/// Create the tables this service needs if they are missing
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        db.execute_unprepared(statement).await?;
    }
    Ok(())
}

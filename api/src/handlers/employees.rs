//! Employee handlers
//!
//! Endpoints for employee records under `/api/employees`.
//!
//! Extractor rejections are taken as `Result` and converted into `AppError`
//! so malformed input gets the same JSON error body as failed validation.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    Json,
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::error::AppError;
use crate::AppState;

/// Request body for create and replace
///
/// Missing text and salary fields default to empty/zero so that they are
/// reported by the validator instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Ignored on create; must match the route id on replace
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default, deserialize_with = "flexible_datetime::deserialize")]
    pub date_of_joining: NaiveDateTime,
    #[serde(default)]
    pub salary: Decimal,
    #[serde(default)]
    pub position: String,
}

impl EmployeeRequest {
    fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            age: self.age,
            date_of_joining: self.date_of_joining,
            salary: self.salary,
            position: self.position,
        }
    }

    fn into_employee(self) -> Employee {
        let id = EmployeeId(self.id);
        self.into_new_employee().with_id(id)
    }
}

/// Employee as returned to clients
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub date_of_joining: NaiveDateTime,
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub salary: Decimal,
    pub position: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.0,
            name: e.name,
            age: e.age,
            date_of_joining: e.date_of_joining,
            salary: e.salary,
            position: e.position,
        }
    }
}

/// Query parameters for salary calculation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryQuery {
    pub name: String,
    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub end_date: NaiveDateTime,
}

/// Prorated amount, emitted as a bare JSON number carrying every digit
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SalaryAmount(
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")] Decimal,
);

/// GET /api/employees
///
/// List every employee.
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// GET /api/employees/name/:name
///
/// Case-insensitive lookup by name.
pub async fn get_employee_by_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let Path(name) = name?;
    let employee = state.employee_service.find_by_name(&name).await?;
    Ok(Json(employee.into()))
}

/// POST /api/employees
///
/// Create an employee. Responds 201 with a `Location` pointing at the
/// by-name lookup.
pub async fn create_employee(
    State(state): State<AppState>,
    request: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<EmployeeResponse>), AppError> {
    let Json(request) = request?;
    let employee = state
        .employee_service
        .create(request.into_new_employee())
        .await?;

    let location = format!(
        "/api/employees/name/{}",
        urlencoding::encode(&employee.name)
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee.into()),
    ))
}

/// PUT /api/employees/:id
///
/// Replace every field of an existing employee.
pub async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    state
        .employee_service
        .replace(EmployeeId(id), request.into_employee())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/employees/name/:name
///
/// Remove the first employee with this name.
pub async fn delete_employee(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(name) = name?;
    state.employee_service.delete_by_name(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/employees/salary?name=..&startDate=..&endDate=..
///
/// Prorated pay for an inclusive date range.
pub async fn calculate_salary(
    State(state): State<AppState>,
    query: Result<Query<SalaryQuery>, QueryRejection>,
) -> Result<Json<SalaryAmount>, AppError> {
    let Query(query) = query?;
    let total = state
        .employee_service
        .calculate_salary(&query.name, query.start_date, query.end_date)
        .await?;
    Ok(Json(SalaryAmount(total)))
}

/// Accepts `2023-01-05`, `2023-01-05T10:00:00[.fff]` or an RFC 3339
/// timestamp (its local wall-clock time is kept).
mod flexible_datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(dt) = raw.parse::<NaiveDateTime>() {
            return Some(dt);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        raw.parse::<NaiveDate>()
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

//! Employee MCP Server implementation
//!
//! Each tool maps to one request against the employee API. Inputs that the
//! API would reject for format reasons (dates, ranges) are checked here first
//! so the agent gets a precise message without a round trip.

use crate::client::{ClientConfig, Employee, EmployeeClient};
use anyhow::Result;
use chrono::NaiveDate;
use rmcp::handler::server::wrapper::Parameters;
use rust_decimal::Decimal;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Employee MCP Server
///
/// Provides tools for managing employee records through the HTTP API.
#[derive(Clone)]
pub struct EmployeeServer {
    client: EmployeeClient,
    tool_router: ToolRouter<Self>,
}

impl EmployeeServer {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: EmployeeClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NameParams {
    /// Employee name (letters and spaces only, case-insensitive)
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Part of a name to search for (case-insensitive)
    pub term: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddEmployeeParams {
    /// Full name (letters and spaces only)
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Job title (letters and spaces only)
    pub position: String,
    /// Monthly salary, must be positive; a decimal string such as "1234.56"
    /// keeps every digit
    #[schemars(with = "String")]
    pub salary: Decimal,
    /// Date of joining, YYYY-MM-DD
    pub date_of_joining: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateEmployeeParams {
    /// Id of the employee to replace
    pub id: i32,
    /// Full name (letters and spaces only)
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Job title (letters and spaces only)
    pub position: String,
    /// Monthly salary, must be positive; a decimal string such as "1234.56"
    /// keeps every digit
    #[schemars(with = "String")]
    pub salary: Decimal,
    /// Date of joining, YYYY-MM-DD
    pub date_of_joining: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SalaryParams {
    /// Employee name
    pub name: String,
    /// First day of the period, YYYY-MM-DD
    pub start_date: String,
    /// Last day of the period (inclusive), YYYY-MM-DD
    pub end_date: String,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

fn build_employee(
    id: i32,
    name: String,
    age: i32,
    position: String,
    salary: Decimal,
    date_of_joining: &str,
) -> Result<Employee, String> {
    let joined = parse_date(date_of_joining)?;
    Ok(Employee {
        id,
        name,
        age,
        date_of_joining: format!("{}T00:00:00", joined.format(DATE_FORMAT)),
        salary,
        position,
    })
}

fn check_period(start: &str, end: &str) -> Result<(), String> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end < start {
        return Err(format!(
            "End date {} must be on or after start date {}",
            end, start
        ));
    }
    Ok(())
}

/// One line per employee: id, name, age, position, salary, date of joining
fn format_employees(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.".to_string();
    }
    employees
        .iter()
        .map(|e| {
            format!(
                "{}, {}, {}, {}, {}, {}",
                e.id, e.name, e.age, e.position, e.salary, e.date_of_joining
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_result(result: anyhow::Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

fn input_error(message: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(message)]))
}

#[tool_router]
impl EmployeeServer {
    // === Lookup ===

    #[tool(description = "List every employee: id, name, age, position, salary, date of joining.")]
    async fn list_employees(&self) -> Result<CallToolResult, McpError> {
        text_result(
            self.client
                .list_employees()
                .await
                .map(|employees| format_employees(&employees)),
        )
    }

    #[tool(description = "Find employees whose name contains the given text (case-insensitive).")]
    async fn search_employees(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(
            self.client
                .search_employees(&params.0.term)
                .await
                .map(|employees| format_employees(&employees)),
        )
    }

    #[tool(description = "Get one employee by exact name (case-insensitive).")]
    async fn find_employee(&self, params: Parameters<NameParams>) -> Result<CallToolResult, McpError> {
        text_result(self.client.find_employee(&params.0.name).await)
    }

    // === Changes ===

    #[tool(description = "Add a new employee. The id is assigned by the server.")]
    async fn add_employee(
        &self,
        params: Parameters<AddEmployeeParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let employee = match build_employee(0, p.name, p.age, p.position, p.salary, &p.date_of_joining) {
            Ok(employee) => employee,
            Err(message) => return input_error(message),
        };
        text_result(
            self.client
                .add_employee(&employee)
                .await
                .map(|body| format!("Employee added.\n{}", body)),
        )
    }

    #[tool(description = "Replace all fields of the employee with the given id.")]
    async fn update_employee(
        &self,
        params: Parameters<UpdateEmployeeParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let employee =
            match build_employee(p.id, p.name, p.age, p.position, p.salary, &p.date_of_joining) {
                Ok(employee) => employee,
                Err(message) => return input_error(message),
            };
        text_result(
            self.client
                .update_employee(&employee)
                .await
                .map(|_| "Employee updated.".to_string()),
        )
    }

    #[tool(description = "Delete the employee with the given name (case-insensitive).")]
    async fn delete_employee(
        &self,
        params: Parameters<NameParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(
            self.client
                .delete_employee(&params.0.name)
                .await
                .map(|_| "Employee deleted.".to_string()),
        )
    }

    // === Payroll ===

    #[tool(
        description = "Calculate an employee's pay for an inclusive date range, prorated from the monthly salary over a 30-day month."
    )]
    async fn calculate_salary(
        &self,
        params: Parameters<SalaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if let Err(message) = check_period(&p.start_date, &p.end_date) {
            return input_error(message);
        }
        text_result(
            self.client
                .calculate_salary(&p.name, p.start_date.trim(), p.end_date.trim())
                .await
                .map(|total| {
                    format!(
                        "Total pay for {} from {} to {}: {}",
                        p.name,
                        p.start_date.trim(),
                        p.end_date.trim(),
                        total
                    )
                }),
        )
    }
}

#[tool_handler]
impl ServerHandler for EmployeeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "employees".into(),
                title: Some("Employee Records MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Employee records

TOOLS:
1. 'list_employees' - See every employee
2. 'search_employees' - Find employees by part of a name
3. 'find_employee' - Get one employee by exact name
4. 'add_employee' - Create a record
5. 'update_employee' - Replace a record by id
6. 'delete_employee' - Remove a record by name
7. 'calculate_salary' - Pay for a date range

RULES:
- Names and positions may contain only letters and spaces
- Salary must be positive
- Dates use YYYY-MM-DD; the end date must not be before the start date
- Names are not unique: lookups and deletes act on the first match"#
                    .into(),
            ),
        }
    }
}

//! HTTP client for the employee API
//!
//! The client is built from an explicit [`ClientConfig`]; nothing about the
//! target service lives in global state.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the employee API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables
    ///
    /// Optional env vars:
    /// - EMPLOYEE_API_URL: Base URL of the API (default http://localhost:8080)
    /// - EMPLOYEE_API_TIMEOUT_SECS: Request timeout in seconds (default 30)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("EMPLOYEE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match std::env::var("EMPLOYEE_API_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid EMPLOYEE_API_TIMEOUT_SECS: {}", raw))?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }
}

/// Employee as exchanged with the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub date_of_joining: String,
    /// Sent as a JSON number with every digit kept
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub salary: Decimal,
    pub position: String,
}

/// HTTP client for communicating with the employee API
#[derive(Clone)]
pub struct EmployeeClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmployeeClient {
    /// Create a new client with explicit configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every employee
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let body = self.get_text("/api/employees").await?;
        serde_json::from_str(&body).context("Failed to parse employee list")
    }

    /// Employees whose name contains `term`, ignoring case.
    ///
    /// Filtering happens here, on the full list, because the API only offers
    /// exact-name lookup.
    pub async fn search_employees(&self, term: &str) -> Result<Vec<Employee>> {
        let employees = self.list_employees().await?;
        Ok(filter_by_name(employees, term))
    }

    /// Exact, case-insensitive lookup by name
    pub async fn find_employee(&self, name: &str) -> Result<String> {
        self.get_text(&name_path(name)).await
    }

    /// Create an employee; the server assigns the id
    pub async fn add_employee(&self, employee: &Employee) -> Result<String> {
        self.send_text(reqwest::Method::POST, "/api/employees", Some(employee))
            .await
    }

    /// Replace the employee stored under `employee.id`
    pub async fn update_employee(&self, employee: &Employee) -> Result<String> {
        self.send_text(
            reqwest::Method::PUT,
            &format!("/api/employees/{}", employee.id),
            Some(employee),
        )
        .await
    }

    /// Delete the first employee with this name
    pub async fn delete_employee(&self, name: &str) -> Result<String> {
        self.send_text::<Employee>(reqwest::Method::DELETE, &name_path(name), None)
            .await
    }

    /// Prorated salary for `[start_date, end_date]` (YYYY-MM-DD)
    pub async fn calculate_salary(
        &self,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<String> {
        self.get_text(&format!(
            "/api/employees/salary?name={}&startDate={}&endDate={}",
            urlencoding::encode(name),
            urlencoding::encode(start_date),
            urlencoding::encode(end_date)
        ))
        .await
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }

    async fn send_text<T: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to {} {}", method, path))?;

        handle_text_response(response).await
    }
}

fn name_path(name: &str) -> String {
    format!("/api/employees/name/{}", urlencoding::encode(name))
}

fn filter_by_name(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let term = term.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&term))
        .collect()
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}

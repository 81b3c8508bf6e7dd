//! Employee API Server
//!
//! Manages employee records: create, look up by name, replace, delete and
//! compute prorated salary for a date range.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresEmployeeRepository;
use app::EmployeeService;
use config::{Config, RateLimit};
use domain::ports::EmployeeRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService<dyn EmployeeRepository>>,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_service: Arc::new(EmployeeService::new(employees)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router. Mutating routes are rate limited when configured.
pub fn build_router(state: AppState, rate_limit: Option<RateLimit>) -> Result<Router> {
    let mut mutating_routes = Router::new()
        .route("/api/employees", post(handlers::create_employee))
        .route("/api/employees/:id", put(handlers::update_employee))
        .route("/api/employees/name/:name", delete(handlers::delete_employee));

    if let Some(limit) = rate_limit {
        // Uses PeerIpKeyExtractor to get client IP from socket connection
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(limit.per_second)
                .burst_size(limit.burst_size)
                .finish()
                .context("Failed to build governor config")?,
        );
        mutating_routes = mutating_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Reads
        .route("/api/employees", get(handlers::list_employees))
        .route("/api/employees/salary", get(handlers::calculate_salary))
        .route(
            "/api/employees/name/:name",
            get(handlers::get_employee_by_name),
        )
        .merge(mutating_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,employee_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting employee API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    adapters::ensure_schema(&db)
        .await
        .context("Failed to prepare database schema")?;
    tracing::info!("Database connected");

    // Create adapters and app state
    let employee_repo: Arc<dyn EmployeeRepository> = Arc::new(PostgresEmployeeRepository::new(db));
    let state = AppState::new(employee_repo);

    if config.rate_limit.is_none() {
        tracing::warn!("Rate limiting disabled");
    }
    let app = build_router(state, config.rate_limit)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

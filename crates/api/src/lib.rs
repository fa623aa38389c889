//! Address Book API Server
//!
//! REST surface over the address book service: CRUD plus radius queries.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod error;
mod routes;

pub use config::{ServerConfig, StorageMode};

use address_book::{AddressBook, AddressRepository};
use storage::{MemoryRepository, SqliteRepository};

/// Application state shared across handlers
pub struct AppState {
    /// Address book service
    pub address_book: AddressBook,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus render handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: String,
    pub address_count: Option<usize>,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/addresses",
            get(routes::addresses::list_addresses).post(routes::addresses::create_address),
        )
        .route(
            "/api/v1/addresses/:id",
            get(routes::addresses::get_address)
                .put(routes::addresses::replace_address)
                .delete(routes::addresses::delete_address),
        )
        .route(
            "/api/v1/addresses/:id/within/:radius_km",
            get(routes::addresses::find_within_radius),
        )
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let address_count = state.address_book.repository().count().await.ok();
    let (status, database) = match address_count {
        Some(_) => ("healthy", "ok"),
        None => ("degraded", "unavailable"),
    };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database: database.to_string(),
        address_count,
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}

/// Initialize logging
pub fn init_logging(
    level: &str,
    json: bool,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}

/// Install the process-wide Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Open the repository selected by `config`
pub async fn open_repository(
    config: &ServerConfig,
) -> Result<Arc<dyn AddressRepository>, Box<dyn std::error::Error>> {
    let repository: Arc<dyn AddressRepository> = match config.storage {
        StorageMode::Sqlite => Arc::new(SqliteRepository::connect(&config.database_url).await?),
        StorageMode::Memory => Arc::new(MemoryRepository::new()),
    };
    Ok(repository)
}

/// Run the server until the listener fails
pub async fn run_server(
    config: &ServerConfig,
    metrics: Option<PrometheusHandle>,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(config).await?;
    let mut state = AppState::new(AddressBook::new(repository));
    if let Some(handle) = metrics {
        state = state.with_metrics(handle);
    }
    let app = create_router(Arc::new(state));

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! # gwstyles Catalog Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//!
//! ## Overview
//!
//! The Axum application behind `gwstyles srv`. Every request rediscovers the
//! stylesheet directory, so edits to a stylesheet show up on the next reload.
//! Discovery is blocking filesystem work and runs on `spawn_blocking`; the
//! shared state is an immutable `Arc<AppState>`.
//!
//! ## Routes
//!
//! | Route                       | Response                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `GET /`                     | HTML catalog tree, `?q=` opens matching sections |
//! | `GET /api/styles`           | Catalog JSON                                    |
//! | `GET /api/styles/search?q=` | `{ "query", "matches", "catalog" }`             |
//! | `GET /api/categories`       | Active category priority table                  |
//! | anything else               | `404 { "status": false, "error": ... }`         |
//!
//! ## Examples
//!
//! ```rust
//! let config = config::load_and_merge_config(args).await?;
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::ServerConfig;
use crate::catalog::filter::{self, SearchSummary};
use crate::catalog::{Catalog, CategoryRank, StyleDiscoverer};
use crate::core::error::Result;
use crate::core::templating::{self, PageOptions};
use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub style_dir: PathBuf,
    pub discoverer: StyleDiscoverer,
}

/// `?q=` query string. A missing `q` is an empty query.
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// A handler failure, reported as `500 { "status": false, "error": ... }`.
struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": false, "error": format!("{:#}", self.0) })),
        )
            .into_response()
    }
}

/// # Run Server (`run_server`)
///
/// Binds to the first free port at or after `config.port` and serves the
/// catalog until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let app = create_app(&config);

    println!("\n=================================================================");
    println!("📂 Stylesheets:      {}", config.style_dir.display());
    println!("🌐 Catalog:          http://{}/", addr);
    println!("🧾 JSON API:         http://{}/api/styles", addr);
    println!("🔒 CORS enabled:     {}", config.enable_cors);
    println!("=================================================================\n");

    info!(
        "Starting server on {} for stylesheet directory {}",
        addr,
        config.style_dir.display()
    );
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Completes on Ctrl+C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Tries `start_port`, then the following ports, returning the first that binds.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = current_port.checked_add(1).ok_or_else(|| {
                    anyhow::anyhow!("Ran out of port numbers after port {}", current_port)
                })?;
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// Builds the router with its middleware.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let state = Arc::new(AppState {
        style_dir: config.style_dir.clone(),
        discoverer: config.discoverer.clone(),
    });

    Router::new()
        .route("/", get(catalog_page))
        .route("/api/styles", get(styles_json))
        .route("/api/styles/search", get(search_json))
        .route("/api/categories", get(categories_json))
        .fallback(not_found)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

/// Runs discovery off the async workers.
async fn discover(state: Arc<AppState>) -> std::result::Result<Catalog, ApiError> {
    let catalog = tokio::task::spawn_blocking(move || state.discoverer.discover(&state.style_dir))
        .await
        .context("Discovery task failed")?;
    Ok(catalog)
}

async fn styles_json(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<Catalog>, ApiError> {
    Ok(Json(discover(state).await?))
}

async fn search_json(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> std::result::Result<Json<SearchSummary>, ApiError> {
    let catalog = discover(state).await?;
    let view = filter::filter(&catalog, &params.q);
    Ok(Json(SearchSummary::from(&view)))
}

async fn categories_json(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryRank>> {
    Json(state.discoverer.category_order().entries().to_vec())
}

async fn catalog_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> std::result::Result<Html<String>, ApiError> {
    let catalog = discover(state).await?;
    let view = filter::filter(&catalog, &params.q);
    let options = PageOptions {
        search_form: true,
        ..Default::default()
    };
    Ok(Html(templating::render_catalog_page(&view, &options)?))
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": false, "error": "Not found" })),
    )
}

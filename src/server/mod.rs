//! HTTP search server
//!
//! Architecture:
//! - `service`: `SearchService`, the two matchers behind one `search` call
//! - `handlers`: axum handlers, one per route
//! - `protocol`: query parameters, response bodies, error messages
//!
//! The service is built once before the listener binds and shared read-only
//! with every request task through an `Arc`.

mod handlers;
pub mod protocol;
pub mod service;

pub use handlers::{handle_health, handle_search, handle_search_all, handle_search_context};
pub use service::{SearchMode, SearchService};

use crate::config::ServiceConfig;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Extension, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the router; static files are served at `/` if `static_dir` exists
pub fn router(service: Arc<SearchService>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/search", get(handle_search))
        .route("/search-context", get(handle_search_context))
        .route("/search-all", get(handle_search_all))
        .route("/health", get(handle_health));

    match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "serving static files");
            app = app.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "static directory not found, skipping");
        }
        None => {}
    }

    app.layer(Extension(service))
}

/// Bind the configured address and serve until Ctrl+C
pub async fn serve(config: &ServiceConfig, service: Arc<SearchService>) -> Result<()> {
    let app = router(service, Some(&config.static_dir));
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

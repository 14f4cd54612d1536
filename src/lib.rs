//! Fruit service: CRUD over fruit records, with a Postgres or in-memory store behind an axum router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use id::{IdFormat, PatternFormat, UuidFormat};
pub use model::{DeletedFruit, Fruit};
pub use routes::{common_routes, common_routes_with_ready, fruit_routes, stub_routes};
pub use service::{FruitService, RequestValidator};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_fruits_table, FruitStore, MemoryFruitStore, PgFruitStore};

use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Fruit API plus health/readiness/version, with request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(fruit_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Stub API with the same layers.
pub fn stub_app() -> Router {
    Router::new()
        .merge(common_routes())
        .merge(stub_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}

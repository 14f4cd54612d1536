//! Fruit API server: reads settings from the environment, connects the store,
//! serves until Ctrl-C or SIGTERM, then closes the store connection.

use fruit_service::{
    app, ensure_database_exists, ensure_fruits_table, shutdown_signal, AppState, FruitStore, MemoryFruitStore,
    PgFruitStore, ServerConfig, StoreKind, UuidFormat,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fruit_service=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let mut pg_store = None;
    let store: Arc<dyn FruitStore> = match config.store {
        StoreKind::Postgres => {
            if config.create_database {
                ensure_database_exists(&config.database_url).await?;
            }
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_fruits_table(&pool).await?;
            let store = PgFruitStore::new(pool);
            pg_store = Some(store.clone());
            Arc::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            Arc::new(MemoryFruitStore::new())
        }
    };

    let state = AppState::new(store, Arc::new(UuidFormat));
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = pg_store {
        store.close().await;
        tracing::info!("database connection closed");
    }
    Ok(())
}

//! Stub fruit server: every route answers with a fixed or echoed text message.
//!
//! Run from repo root: `cargo run -p fruit-stub-server`

use fruit_service::{config::port_from_env, shutdown_signal, stub_app};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fruit_service=info")),
        )
        .init();

    let port = port_from_env()?;
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    tracing::info!("Server running at http://localhost:{}", listener.local_addr()?.port());
    axum::serve(listener, stub_app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

// file: src/server/mod.rs
// description: HTTP server bootstrap and graceful shutdown
// reference: https://docs.rs/axum

pub mod routes;

pub use routes::{AppState, create_router};

use crate::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn serve(address: &str, state: Arc<AppState>) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Cannot listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

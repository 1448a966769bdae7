use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod repositories;
mod routes;
mod server;
mod services;

use crate::config::Config;
use crate::server::AppState;
use crate::services::MemoryService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let state = AppState::new();

    // Connect in the background; the server takes requests right away and
    // memory routes answer 503 until the connection is up.
    {
        let state = state.clone();
        let mongo = config.mongodb.clone();
        tokio::spawn(async move {
            match repositories::connect(&mongo).await {
                Ok(repo) => {
                    tracing::info!("MongoDB connected");
                    state
                        .set_ready(Arc::new(MemoryService::new(Arc::new(repo))))
                        .await;
                }
                Err(e) => {
                    tracing::error!("MongoDB connection failed: {}", e);
                    state.set_failed().await;
                }
            }
        });
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    server::start_server(addr, state).await?;
    Ok(())
}

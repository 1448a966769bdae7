use axum::http::Method;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{AppError, Result};
use crate::routes::create_routes;
use crate::services::MemoryService;

/// Connectivity lifecycle of the storage backend. The server starts taking
/// requests before the connection attempt finishes, so every memory route
/// checks this instead of hanging on an unreachable backend.
pub enum StorageState {
    Connecting,
    Ready(Arc<MemoryService>),
    Failed,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<RwLock<StorageState>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(StorageState::Connecting)),
        }
    }

    pub async fn memories(&self) -> Result<Arc<MemoryService>> {
        match &*self.storage.read().await {
            StorageState::Ready(service) => Ok(service.clone()),
            StorageState::Connecting | StorageState::Failed => Err(AppError::Unavailable),
        }
    }

    pub async fn set_ready(&self, service: Arc<MemoryService>) {
        *self.storage.write().await = StorageState::Ready(service);
    }

    pub async fn set_failed(&self) {
        *self.storage.write().await = StorageState::Failed;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn start_server(
    addr: SocketAddr,
    state: AppState,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = create_routes().with_state(state).layer(cors);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

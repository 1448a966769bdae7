use axum::{routing::get, Router};

use crate::server::AppState;

pub fn create_health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness only; never touches storage.
async fn health() -> &'static str {
    "OK"
}

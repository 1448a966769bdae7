use axum::Router;

use crate::server::AppState;

mod health;
mod memories;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(memories::create_memory_routes())
        .merge(health::create_health_routes())
}

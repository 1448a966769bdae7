use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{
    error::Result,
    repositories::{Memory, MemoryPayload},
    server::AppState,
};

pub fn create_memory_routes() -> Router<AppState> {
    Router::new()
        .route("/memories", post(create_memory))
        .route("/memories", get(list_memories))
        .route("/memories/{id}", get(get_memory))
        .route("/memories/{id}", put(update_memory))
        .route("/memories/{id}", delete(delete_memory))
}

async fn create_memory(
    State(state): State<AppState>,
    Json(payload): Json<MemoryPayload>,
) -> Result<(StatusCode, Json<Memory>)> {
    let memory = state.memories().await?.create(payload).await?;
    Ok((StatusCode::CREATED, Json(memory)))
}

async fn list_memories(State(state): State<AppState>) -> Result<Json<Vec<Memory>>> {
    let memories = state.memories().await?.find_all().await?;
    Ok(Json(memories))
}

async fn get_memory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Memory>> {
    let memory = state.memories().await?.find_by_id(&id).await?;
    Ok(Json(memory))
}

async fn update_memory(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemoryPayload>,
) -> Result<Json<Memory>> {
    let memory = state.memories().await?.update_by_id(&id, payload).await?;
    Ok(Json(memory))
}

async fn delete_memory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    state.memories().await?.delete_by_id(&id).await?;
    Ok(Json(json!({ "message": "Deleted successfully" })))
}

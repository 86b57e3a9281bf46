//! Route configuration for the todos API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/health | `health_check` |
//! | GET | /api/todos | `list_todos` |
//! | POST | /api/todos | `create_todo` |
//! | PUT | /api/todos/{id} | `update_todo` |
//! | DELETE | /api/todos/{id} | `delete_todo` |

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;

use crate::handlers::{create_todo, delete_todo, list_todos, update_todo};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /api/health - liveness probe; never touches the store.
pub async fn health_check(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: todolist_core::core_version().to_string(),
    })
}

/// Builds the router over an explicitly constructed state value.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(state)
}

//! HTTP handlers for the todos collection.
//!
//! # Responsibility
//! - One handler per CRUD verb; each is a single atomic store call.
//! - Enforce identifier validity before touching the store.
//!
//! # Invariants
//! - Updates always replace `status` and `todo` together.
//! - A failed request reports an error and mutates nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todolist_core::{SqliteTodoRepository, Todo, TodoId, TodoService};

use crate::error::ApiError;
use crate::state::AppState;

const LIST_CONTEXT: &str = "Error retrieving todos";
const CREATE_CONTEXT: &str = "Error creating todo";
const UPDATE_CONTEXT: &str = "Error updating todo";
const DELETE_CONTEXT: &str = "Error deleting todo";

/// POST /api/todos request body.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub todo: String,
}

/// PUT /api/todos/{id} request body. Both fields are always supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub status: bool,
    pub todo: String,
}

/// DELETE /api/todos/{id} confirmation body.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}

/// GET /api/todos - returns the whole collection in store order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let conn = state
        .connection()
        .map_err(|err| ApiError::store(LIST_CONTEXT, err))?;
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    let todos = service
        .list_todos()
        .map_err(|err| ApiError::from_repo(LIST_CONTEXT, err))?;

    log::info!(
        "event=todo_list module=server status=ok count={}",
        todos.len()
    );
    Ok(Json(todos))
}

/// POST /api/todos - creates one item, `status = false`.
///
/// Empty text is accepted; the API applies no trimming or non-empty check.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let conn = state
        .connection()
        .map_err(|err| ApiError::store(CREATE_CONTEXT, err))?;
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    let created = service
        .create_todo(&request.todo)
        .map_err(|err| ApiError::from_repo(CREATE_CONTEXT, err))?;

    log::info!("event=todo_create module=server status=ok id={}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/todos/{id} - replaces both fields of one item.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;

    let conn = state
        .connection()
        .map_err(|err| ApiError::store(UPDATE_CONTEXT, err))?;
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    let updated = service
        .update_todo(id, request.status, &request.todo)
        .map_err(|err| ApiError::from_repo(UPDATE_CONTEXT, err))?;

    log::info!(
        "event=todo_update module=server status=ok id={id} completed={}",
        updated.status
    );
    Ok(Json(updated))
}

/// DELETE /api/todos/{id} - permanently removes one item.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    let id = parse_todo_id(&id)?;

    let conn = state
        .connection()
        .map_err(|err| ApiError::store(DELETE_CONTEXT, err))?;
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    service
        .delete_todo(id)
        .map_err(|err| ApiError::from_repo(DELETE_CONTEXT, err))?;

    log::info!("event=todo_delete module=server status=ok id={id}");
    Ok(Json(DeleteTodoResponse {
        message: format!("Todo with ID {id} deleted successfully"),
    }))
}

/// Identifier validity gate; runs before any store access.
fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse::<TodoId>().map_err(|_| {
        log::warn!("event=todo_id_rejected module=server status=error raw_len={}", raw.len());
        ApiError::InvalidId
    })
}

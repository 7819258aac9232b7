//! Todo CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use tend_core::models::{NewTodo, Todo, UpdateTodo};

use crate::{AppError, AppState, MAX_TITLE_LEN};

/// Request body for creating a todo
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

/// Request body for updating a todo (all fields optional)
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Response body for deletions
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn validate_title(title: &str) -> Result<(), AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Title is required"));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::bad_request("Title is too long"));
    }
    Ok(())
}

/// GET /api/todos - List all todos, newest first
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.db.list_todos()?;
    Ok(Json(todos))
}

/// POST /api/todos - Create a todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let title = body.title.as_deref().unwrap_or("");
    validate_title(title)?;

    let todo = state.db.insert_todo(&NewTodo {
        title: title.to_string(),
    })?;
    tracing::debug!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos/:id - Get a single todo
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .db
        .get_todo(id)?
        .ok_or_else(|| AppError::not_found("Todo not found"))?;

    Ok(Json(todo))
}

/// PUT /api/todos/:id - Partially update a todo
///
/// Absent fields keep their stored values.
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    if let Some(ref title) = body.title {
        validate_title(title)?;
    }

    let update = UpdateTodo {
        title: body.title,
        completed: body.completed,
    };
    let todo = state
        .db
        .update_todo(id, &update)?
        .ok_or_else(|| AppError::not_found("Todo not found"))?;
    tracing::debug!(id = todo.id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/:id - Delete a todo
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.db.delete_todo(id)? {
        return Err(AppError::not_found("Todo not found"));
    }
    tracing::debug!(id, "Todo deleted");

    Ok(Json(MessageResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}

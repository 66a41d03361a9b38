use super::extract::{TodoBody, TodoId};
use crate::error::TodoError;
use crate::server::router::TodoState;
use axum::{Json, extract::State, http::StatusCode};
use todo_schema::Todo;
use tracing::{debug, info};

/// GET /todos/info
pub(super) async fn info_handler() -> &'static str {
    debug!("Service status checked.");
    "up"
}

/// GET /todos
pub(super) async fn list_todos_handler(
    State(state): State<TodoState>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    let todos = state.service.get_all_todos().await?;
    Ok(Json(todos))
}

/// GET /todos/{id}
pub(super) async fn get_todo_handler(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.service.get_todo_by_id(id).await?;
    Ok(Json(todo))
}

/// POST /todos
pub(super) async fn create_todo_handler(
    State(state): State<TodoState>,
    TodoBody(payload): TodoBody,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let created = state.service.create_todo(payload).await?;
    info!(id = created.id, "Todo item created.");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /todos/{id}
pub(super) async fn update_todo_handler(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
    TodoBody(payload): TodoBody,
) -> Result<Json<Todo>, TodoError> {
    let updated = state.service.update_todo(id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /todos/{id}
pub(super) async fn delete_todo_handler(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
) -> Result<StatusCode, TodoError> {
    state.service.delete_todo_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

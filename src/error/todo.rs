use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error as ThisError;
use todo_schema::ErrorReport;
use tracing::{debug, error};

use super::StoreError;

/// Typed failure surfaced by `TodoService`.
///
/// `IntoResponse` is the single place where a failure kind becomes a status code.
#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl TodoError {
    pub fn no_items() -> Self {
        TodoError::NotFound("No Todo items found.".to_string())
    }

    pub fn missing_id(id: i64) -> Self {
        TodoError::NotFound(format!("No Todo item found with ID {id}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TodoError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "Rejected Todo request body");
        TodoError::InvalidInput(format!("Invalid Todo body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for TodoError {
    fn from(rejection: PathRejection) -> Self {
        debug!(error = %rejection.body_text(), "Rejected Todo id");
        TodoError::InvalidInput(format!("Invalid Todo id: {}", rejection.body_text()))
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let report = match self {
            TodoError::NotFound(message) | TodoError::InvalidInput(message) => {
                ErrorReport::new(message)
            }
            TodoError::Storage(e) => {
                error!(error = %e, "Storage failure while serving request");
                ErrorReport::new("An internal server error occurred.")
            }
        };
        (status, Json(report)).into_response()
    }
}

use std::sync::Arc;

use todo_schema::{Todo, TodoPayload};
use tracing::{error, info, warn};

use crate::db::{NewTodo, TodoRepository};
use crate::error::TodoError;

const CREATE_MISSING_DESCRIPTION: &str =
    "Failed to create Todo item: description is null or empty.";
const UPDATE_MISSING_DESCRIPTION: &str =
    "Failed to update Todo item: description is null or empty.";

/// Validation and failure semantics on top of a [`TodoRepository`].
///
/// The repository reports absence as `None`/`false`; this layer turns that into
/// [`TodoError::NotFound`] and rejects empty descriptions with
/// [`TodoError::InvalidInput`] before anything is written.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        info!(backend = %repo.backend(), "TodoService initialized.");
        Self { repo }
    }

    /// All Todo items. An empty store is reported as `NotFound`, not an empty list.
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.repo.find_all().await?;
        if todos.is_empty() {
            warn!("No Todo items found.");
            return Err(TodoError::no_items());
        }
        info!(count = todos.len(), "Retrieved Todo items.");
        Ok(todos)
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<Todo, TodoError> {
        match self.repo.find_by_id(id).await {
            Some(todo) => Ok(todo),
            None => {
                warn!(id, "Todo item not found.");
                Err(TodoError::missing_id(id))
            }
        }
    }

    /// Persists a new item. Any client-supplied `id` is ignored and `completed`
    /// defaults to `false`.
    pub async fn create_todo(&self, payload: TodoPayload) -> Result<Todo, TodoError> {
        let Some(description) = payload.non_empty_description() else {
            error!("{CREATE_MISSING_DESCRIPTION}");
            return Err(TodoError::InvalidInput(
                CREATE_MISSING_DESCRIPTION.to_string(),
            ));
        };

        let new = NewTodo {
            description: description.to_string(),
            completed: payload.completed.unwrap_or(false),
        };
        let created = self.repo.save(new).await?;
        info!(id = created.id, "Created Todo item.");
        Ok(created)
    }

    /// Merges `payload` into the stored item: `completed` only when supplied,
    /// `description` when supplied. The merged description must be non-empty.
    pub async fn update_todo(&self, id: i64, payload: TodoPayload) -> Result<Todo, TodoError> {
        let Some(mut todo) = self.repo.find_by_id(id).await else {
            warn!(id, "Failed to update Todo item: not found.");
            return Err(TodoError::missing_id(id));
        };

        if let Some(completed) = payload.completed {
            todo.completed = completed;
        }
        if let Some(description) = payload.description {
            todo.description = description;
        }
        if todo.description.is_empty() {
            error!(id, "{UPDATE_MISSING_DESCRIPTION}");
            return Err(TodoError::InvalidInput(
                UPDATE_MISSING_DESCRIPTION.to_string(),
            ));
        }

        match self.repo.update_by_id(todo).await? {
            Some(updated) => {
                info!(id, "Updated Todo item.");
                Ok(updated)
            }
            // Deleted between the lookup and the write.
            None => Err(TodoError::missing_id(id)),
        }
    }

    pub async fn delete_todo_by_id(&self, id: i64) -> Result<bool, TodoError> {
        if !self.repo.exists_by_id(id).await? {
            warn!(id, "Todo item does not exist, cannot delete.");
            return Err(TodoError::missing_id(id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "Deleted Todo item.");
        Ok(true)
    }
}

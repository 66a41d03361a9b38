//! Hand-written SQL backend.
//!
//! Ids are assigned here as `MAX(id) + 1` rather than by SQLite, so `save` is a
//! read followed by an insert. Two concurrent creators can pick the same id;
//! the primary key turns the loser's insert into a storage error.

use async_trait::async_trait;
use sqlx::SqlitePool;
use todo_schema::Todo;
use tracing::{error, info, warn};

use crate::config::StorageBackend;
use crate::db::models::{DbTodo, NewTodo};
use crate::db::repository::TodoRepository;
use crate::error::StoreError;

const QUERY_FETCH_ALL: &str = "SELECT id, description, completed FROM todo ORDER BY id";
const QUERY_FETCH_BY_ID: &str = "SELECT id, description, completed FROM todo WHERE id = ?";
const QUERY_DELETE_BY_ID: &str = "DELETE FROM todo WHERE id = ?";
const QUERY_INSERT: &str = "INSERT INTO todo (id, description, completed) VALUES (?, ?, ?)";
const QUERY_UPDATE: &str = "UPDATE todo SET description = ?, completed = ? WHERE id = ?";
const QUERY_MAX_ID: &str = "SELECT MAX(id) FROM todo";
const QUERY_COUNT_BY_ID: &str = "SELECT COUNT(*) FROM todo WHERE id = ?";

#[derive(Clone)]
pub struct SqlTodoDao {
    pool: SqlitePool,
}

impl SqlTodoDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqlTodoDao {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Sql
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        info!("Fetching all Todo items.");
        let rows = sqlx::query_as::<_, DbTodo>(QUERY_FETCH_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Option<Todo> {
        info!(id, "Fetching Todo item.");
        match sqlx::query_as::<_, DbTodo>(QUERY_FETCH_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row.map(Todo::from),
            Err(e) => {
                error!(id, error = %e, "Error fetching Todo item; treating as absent.");
                None
            }
        }
    }

    async fn save(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        info!("Saving a new Todo item.");
        let next_id = self.get_max_id().await? + 1;

        let res = sqlx::query(QUERY_INSERT)
            .bind(next_id)
            .bind(&todo.description)
            .bind(todo.completed)
            .execute(&self.pool)
            .await?;

        let affected = res.rows_affected();
        if affected != 1 {
            return Err(StoreError::RowCount {
                expected: 1,
                actual: affected,
            });
        }

        info!(id = next_id, "Todo item saved.");
        Ok(todo.into_todo(next_id))
    }

    async fn update_by_id(&self, todo: Todo) -> Result<Option<Todo>, StoreError> {
        info!(id = todo.id, "Updating Todo item.");
        let res = sqlx::query(QUERY_UPDATE)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 1 {
            info!(id = todo.id, "Todo item updated.");
            Ok(Some(todo))
        } else {
            warn!(id = todo.id, affected = res.rows_affected(), "Failed to update Todo item.");
            Ok(None)
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        info!(id, "Deleting Todo item.");
        sqlx::query(QUERY_DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar(QUERY_COUNT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        let exists = count > 0;
        if !exists {
            warn!(id, "Todo item does not exist.");
        }
        Ok(exists)
    }

    async fn get_max_id(&self) -> Result<i64, StoreError> {
        let max: Option<i64> = sqlx::query_scalar(QUERY_MAX_ID)
            .fetch_one(&self.pool)
            .await?;
        Ok(max.unwrap_or(0))
    }
}

use async_trait::async_trait;
use todo_schema::Todo;

use crate::config::StorageBackend;
use crate::db::models::NewTodo;
use crate::error::StoreError;

/// Storage operations on the `todo` table, one logical row at a time.
///
/// Every method is a single round trip except `save` on backends that compute
/// ids themselves, where the max-id read and the insert are not atomic.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Which backend this is, for logging.
    fn backend(&self) -> StorageBackend;

    /// All rows ordered by id. An empty table is `Ok(vec![])`.
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// The row with `id`, or `None` when it is absent or the lookup failed.
    /// Lookup failures are logged and never surfaced to the caller.
    async fn find_by_id(&self, id: i64) -> Option<Todo>;

    /// Inserts `todo` under a freshly assigned id and returns the stored row.
    async fn save(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    /// Overwrites description and completed of the row with `todo.id`.
    /// `None` when no single row was affected.
    async fn update_by_id(&self, todo: Todo) -> Result<Option<Todo>, StoreError>;

    /// Removes the row with `id`; a missing row is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Largest id in use, `0` for an empty table.
    async fn get_max_id(&self) -> Result<i64, StoreError>;
}

use thiserror::Error as ThisError;

/// Failure raised by a `TodoRepository` implementation.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("ORM error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("Unexpected row count: expected {expected}, got {actual}")]
    RowCount { expected: u64, actual: u64 },
}

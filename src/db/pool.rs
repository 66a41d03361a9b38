use crate::config::{StorageBackend, StorageConfig};
use crate::db::dao::SqlTodoDao;
use crate::db::orm::OrmTodoRepository;
use crate::db::repository::TodoRepository;
use crate::db::schema::SQLITE_INIT;
use crate::error::StoreError;
use sea_orm::SqlxSqliteConnector;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, sync::Arc};
use tracing::info;

/// Open the SQLite pool described by `cfg` and make sure the `todo` table exists.
pub async fn connect(cfg: &StorageConfig) -> Result<SqlitePool, StoreError> {
    let connect_opts = SqliteConnectOptions::from_str(cfg.database_url.as_str())?
        .create_if_missing(true)
        .busy_timeout(cfg.busy_timeout())
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_opts)
        .await?;

    apply_schema(&pool).await?;

    info!(database_url = %cfg.database_url, "SQLite pool initialized");
    Ok(pool)
}

/// Wrap `pool` in the repository implementation selected by `backend`.
pub fn repository_for(backend: StorageBackend, pool: SqlitePool) -> Arc<dyn TodoRepository> {
    match backend {
        StorageBackend::Sql => Arc::new(SqlTodoDao::new(pool)),
        StorageBackend::Orm => Arc::new(OrmTodoRepository::new(
            SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        )),
    }
}

/// Connect and build the configured repository in one step.
pub async fn open_repository(cfg: &StorageConfig) -> Result<Arc<dyn TodoRepository>, StoreError> {
    let pool = connect(cfg).await?;
    info!(backend = %cfg.backend, "Todo repository ready");
    Ok(repository_for(cfg.backend, pool))
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

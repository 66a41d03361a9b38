#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use todo_server::config::{StorageBackend, StorageConfig};
use todo_server::db::TodoRepository;

/// A throwaway SQLite file; removed (with its WAL/SHM siblings) on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub cfg: StorageConfig,
}

impl TempDb {
    pub fn new(tag: &str, backend: StorageBackend) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "todo-{tag}-{backend}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let cfg = StorageConfig {
            database_url: format!("sqlite:{}", path.display()),
            backend,
            ..StorageConfig::default()
        };
        Self { path, cfg }
    }

    pub async fn repository(&self) -> Arc<dyn TodoRepository> {
        todo_server::db::open_repository(&self.cfg)
            .await
            .expect("failed to open repository")
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let base = self.path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(format!("{base}-wal"));
        let _ = std::fs::remove_file(format!("{base}-shm"));
        let _ = std::fs::remove_file(&self.path);
    }
}

pub const BACKENDS: [StorageBackend; 2] = [StorageBackend::Sql, StorageBackend::Orm];

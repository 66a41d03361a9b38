pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;

pub use error::{StoreError, TodoError};
pub use service::TodoService;

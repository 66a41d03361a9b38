//! Database module: the `TodoRepository` contract and its two backends.
//!
//! Layout:
//! - `repository.rs`: the capability set shared by both backends
//! - `dao.rs`: hand-written SQL over `sqlx`
//! - `orm.rs`: `sea-orm` entity and repository
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `pool.rs`: pool setup and backend selection

pub mod dao;
pub mod models;
pub mod orm;
pub mod pool;
pub mod repository;
pub mod schema;

pub use dao::SqlTodoDao;
pub use models::{DbTodo, NewTodo};
pub use orm::OrmTodoRepository;
pub use pool::{connect, open_repository, repository_for};
pub use repository::TodoRepository;
pub use schema::SQLITE_INIT;

use crate::server::router::TodoState;
use axum::{
    Router,
    routing::{get, patch},
};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<TodoState> {
    Router::new()
        .route("/todos/info", get(handlers::info_handler))
        .route(
            "/todos",
            get(handlers::list_todos_handler).post(handlers::create_todo_handler),
        )
        .route(
            "/todos/{id}",
            patch(handlers::update_todo_handler)
                .get(handlers::get_todo_handler)
                .delete(handlers::delete_todo_handler),
        )
}

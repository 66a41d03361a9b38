//! Wire types shared by the Todo service and its clients.

pub mod error_report;
pub mod todo;

pub use error_report::ErrorReport;
pub use todo::{Todo, TodoPayload};

mod store;
mod todo;

pub use store::StoreError;
pub use todo::TodoError;

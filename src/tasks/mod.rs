pub mod model;
pub mod store;

pub use model::{Task, TaskPatch};
pub use store::{new_shared_store, SharedTaskStore, TaskStore};

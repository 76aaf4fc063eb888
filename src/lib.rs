// todolist - In-memory to-do list with eager sorting and inline editing

pub mod command;
pub mod config;
pub mod edit;
pub mod sort;
pub mod store;
pub mod task;
pub mod view;

// Re-export main types for convenience
pub use command::{Command, Outcome};
pub use config::Config;
pub use edit::EditSession;
pub use sort::{SortConfig, SortDirection, SortKey};
pub use store::TaskStore;
pub use task::{Task, TaskId, now_ms};

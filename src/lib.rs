// TaskList - single-user task storage with JSON persistence, filtering, and sorting

pub mod error;
pub mod filter;
pub mod json;
pub mod sort;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use error::{Result, StoreError};
pub use filter::TaskFilter;
pub use sort::{SortKey, SortOrder};
pub use store::TaskStore;
pub use task::{Entry, Priority, Task, TaskId};

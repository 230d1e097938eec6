pub mod filter;
pub mod reorder;
pub mod search;
pub mod stats;
pub mod task;
pub mod visibility;

pub use filter::ListFilter;
pub use reorder::{apply_drop, ordered_ids};
pub use search::{DescriptionSearcher, TaskSearcher};
pub use stats::TaskStats;
pub use task::{Priority, Task, TaskId};
pub use visibility::VisibilityRule;

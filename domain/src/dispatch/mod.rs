//! Tiered dispatch building blocks: tiers, tasks, task sets and completion.

pub mod completion;
pub mod task;
pub mod task_set;
pub mod tier;

pub use completion::{CompletionTracker, PolicyTypeCompletion};
pub use task::{AdapterKey, AdapterTask, TaskResult};
pub use task_set::{DispatchMode, build_task_set};
pub use tier::Tier;

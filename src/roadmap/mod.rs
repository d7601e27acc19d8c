//! Roadmap: ordered stages of tasks.
//!
//! ## Key Types
//!
//! - `RoadmapStage`: A column with a contiguous `index`
//! - `RoadmapTask`: A task, optionally linked to a card in the roadmap deck
//! - `TaskStatus`: Locked / Active / Completed
//! - `AddTaskOptions`: Card-linking behavior of `add_task`
//! - `TaskRemoval`: Report returned by `delete_task`
//!
//! Transitions on these types live on `Store`; this module holds data only.

pub mod stage;

pub use stage::{AddTaskOptions, RoadmapStage, RoadmapTask, TaskRemoval, TaskStatus};
pub(crate) use stage::reindex;

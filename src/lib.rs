//! # lifedeck
//!
//! State core for a deck-builder style life planner: tasks are cards,
//! cards are grouped into decks, played onto a field, and laid out on a
//! multi-stage roadmap.
//!
//! ## Design Principles
//!
//! 1. **Explicit Store**: All state lives in a [`Store`] the host owns.
//!    No globals.
//!
//! 2. **Total Transitions**: Unknown ids and out-of-range indices leave the
//!    state unchanged instead of failing.
//!
//! 3. **Configuration Over Convention**: Catalogs, stage counts, seed decks,
//!    and id seeding come from `StoreConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`, so
//!   hosts can keep history for undo or change detection.
//!
//! - **Commands**: Every transition is also a serializable [`Command`]
//!   applied with [`Store::dispatch`].
//!
//! - **Typed Drag Ids**: Drag sources and targets are parsed once into
//!   [`DragId`] and resolved by per-board coordinators.
//!
//! ## Modules
//!
//! - `core`: Ids, state, commands, configuration, ordering helpers
//! - `cards`: Cards, decks, deck drafts
//! - `roadmap`: Stages and tasks
//! - `store`: The store and its transitions
//! - `dnd`: Drag-and-drop coordinators

pub mod core;
pub mod cards;
pub mod roadmap;
pub mod store;
pub mod dnd;

// Re-export commonly used types
pub use crate::core::{
    CardId, DeckId, StageId, TaskId,
    IdGenerator, IdGeneratorState,
    StoreConfig, StoreState,
    Command, Outcome,
};

pub use crate::cards::{Card, Deck, DeckDraft};

pub use crate::roadmap::{AddTaskOptions, RoadmapStage, RoadmapTask, TaskRemoval, TaskStatus};

pub use crate::store::{Snapshot, Store, StoreError, SNAPSHOT_VERSION};

pub use crate::dnd::{DragId, PlaygroundDnd, RoadmapDnd};

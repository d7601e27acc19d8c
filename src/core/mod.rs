//! Core store types: ids, state, commands, configuration.
//!
//! Everything the transitions in [`crate::store`] operate on lives here.
//! Hosts configure the store through `StoreConfig` rather than by editing
//! state directly.

pub mod ids;
pub mod ordering;
pub mod config;
pub mod command;
pub mod state;

pub use ids::{CardId, DeckId, StageId, TaskId, IdGenerator, IdGeneratorState};
pub use config::StoreConfig;
pub use command::{Command, Outcome};
pub use state::StoreState;

//! Commands: serializable descriptions of store transitions.
//!
//! Every store transition has a `Command` counterpart. The drag-and-drop
//! coordinator resolves gestures into commands and hands them to
//! `Store::dispatch`; hosts can log, replay, or forward them the same way.
//!
//! A command describes intent only. Whether it changes anything is decided
//! when it is applied and reported as an [`Outcome`].

use serde::{Deserialize, Serialize};

use super::ids::{CardId, DeckId, StageId, TaskId};
use crate::cards::Card;
use crate::roadmap::{AddTaskOptions, TaskRemoval};

/// A store transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    // === Playground ===
    /// Select the deck in play. Clears the field when the id changes.
    SetActiveDeck(Option<DeckId>),
    /// Put a card on the field (appended, duplicates allowed).
    MoveCardToField(Card),
    /// Take a card off the field and back to its deck.
    MoveCardToDeck(CardId),
    /// Remove a card from the field.
    RemoveCardFromField(CardId),
    /// Reorder the field.
    ReorderFieldCards { old_index: usize, new_index: usize },
    /// Empty the field.
    ClearField,

    // === Decks ===
    /// Create an empty deck.
    CreateDeck { title: String },
    /// Replace a deck's cards.
    UpdateDeck { deck_id: DeckId, cards: Vec<Card> },
    /// Delete a deck.
    DeleteDeck(DeckId),
    /// Select the roadmap-linked deck.
    SetRoadmapDeck(Option<DeckId>),

    // === Roadmap ===
    /// Insert an empty stage.
    AddStage { index: usize },
    /// Delete a stage (rejected at the minimum stage count).
    DeleteStage(StageId),
    /// Rename a stage.
    UpdateStageTitle { stage_id: StageId, title: String },
    /// Append a task to a stage.
    AddTask {
        stage_id: StageId,
        title: String,
        options: AddTaskOptions,
    },
    /// Delete a task. Its linked card is untouched.
    DeleteTask { stage_id: StageId, task_id: TaskId },
    /// Rename a task.
    UpdateTask {
        stage_id: StageId,
        task_id: TaskId,
        title: String,
    },
    /// Reorder a task within its stage or transfer it to another.
    MoveTask {
        active_id: TaskId,
        over_id: Option<TaskId>,
        active_stage_id: StageId,
        over_stage_id: StageId,
    },

    // === Catalog ===
    /// Replace the card type list.
    SetCardTypes(Vec<String>),
    /// Add a card type if absent.
    AddCardType(String),
    /// Remove a card type.
    RemoveCardType(String),
    /// Replace the cost unit list.
    SetCostUnits(Vec<String>),
    /// Add a cost unit if absent.
    AddCostUnit(String),
    /// Remove a cost unit.
    RemoveCostUnit(String),
}

impl Command {
    /// Stable short name, used in log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetActiveDeck(_) => "set_active_deck",
            Command::MoveCardToField(_) => "move_card_to_field",
            Command::MoveCardToDeck(_) => "move_card_to_deck",
            Command::RemoveCardFromField(_) => "remove_card_from_field",
            Command::ReorderFieldCards { .. } => "reorder_field_cards",
            Command::ClearField => "clear_field",
            Command::CreateDeck { .. } => "create_deck",
            Command::UpdateDeck { .. } => "update_deck",
            Command::DeleteDeck(_) => "delete_deck",
            Command::SetRoadmapDeck(_) => "set_roadmap_deck",
            Command::AddStage { .. } => "add_stage",
            Command::DeleteStage(_) => "delete_stage",
            Command::UpdateStageTitle { .. } => "update_stage_title",
            Command::AddTask { .. } => "add_task",
            Command::DeleteTask { .. } => "delete_task",
            Command::UpdateTask { .. } => "update_task",
            Command::MoveTask { .. } => "move_task",
            Command::SetCardTypes(_) => "set_card_types",
            Command::AddCardType(_) => "add_card_type",
            Command::RemoveCardType(_) => "remove_card_type",
            Command::SetCostUnits(_) => "set_cost_units",
            Command::AddCostUnit(_) => "add_cost_unit",
            Command::RemoveCostUnit(_) => "remove_cost_unit",
        }
    }
}

/// Result of applying a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (unknown id, out-of-range index, rejected delete...).
    Unchanged,
    /// State changed.
    Applied,
    /// A deck was created.
    DeckCreated(DeckId),
    /// A stage was created.
    StageCreated(StageId),
    /// A task was created.
    TaskCreated(TaskId),
    /// A task was removed.
    TaskRemoved(TaskRemoval),
}

impl Outcome {
    /// Outcome for transitions that only report whether they changed state.
    #[must_use]
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }

    /// Check if the command changed state.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

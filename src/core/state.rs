//! Store state and read-only selectors.
//!
//! ## StoreState
//!
//! The single source of truth:
//! - Decks and the active / roadmap-linked deck ids
//! - The field (cards in play for the active deck)
//! - Roadmap stages and their tasks
//! - Catalog lists (card types, cost units)
//!
//! Uses `im` persistent data structures, so cloning a state is O(1) and a
//! host can keep previous states around for undo or change detection.
//!
//! Selectors live here rather than on `Store` so they work equally on a live
//! store and on a retained snapshot.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::ids::{CardId, DeckId, StageId, TaskId};
use crate::cards::{Card, Deck};
use crate::roadmap::{RoadmapStage, RoadmapTask};

/// Complete store state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    // === Playground ===
    /// Cards in play, in display order.
    pub(crate) field: Vector<Card>,

    /// Deck whose cards feed the field.
    pub(crate) active_deck_id: Option<DeckId>,

    // === Decks ===
    pub(crate) decks: Vector<Deck>,

    /// Deck that receives cards synthesized from roadmap tasks.
    pub(crate) roadmap_deck_id: Option<DeckId>,

    // === Roadmap ===
    pub(crate) roadmap_stages: Vector<RoadmapStage>,

    // === Catalog ===
    pub(crate) card_types: Vector<String>,
    pub(crate) cost_units: Vector<String>,
}

impl StoreState {
    /// Create an empty state with no stages.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            field: Vector::new(),
            active_deck_id: None,
            decks: Vector::new(),
            roadmap_deck_id: None,
            roadmap_stages: Vector::new(),
            card_types: Vector::new(),
            cost_units: Vector::new(),
        }
    }

    // === Raw Accessors ===

    /// Cards on the field.
    #[must_use]
    pub fn field(&self) -> &Vector<Card> {
        &self.field
    }

    /// All decks.
    #[must_use]
    pub fn decks(&self) -> &Vector<Deck> {
        &self.decks
    }

    /// Active deck id.
    #[must_use]
    pub fn active_deck_id(&self) -> Option<&DeckId> {
        self.active_deck_id.as_ref()
    }

    /// Roadmap-linked deck id.
    #[must_use]
    pub fn roadmap_deck_id(&self) -> Option<&DeckId> {
        self.roadmap_deck_id.as_ref()
    }

    /// Roadmap stages, ordered by index.
    #[must_use]
    pub fn roadmap_stages(&self) -> &Vector<RoadmapStage> {
        &self.roadmap_stages
    }

    /// Card types catalog.
    #[must_use]
    pub fn card_types(&self) -> &Vector<String> {
        &self.card_types
    }

    /// Cost units catalog.
    #[must_use]
    pub fn cost_units(&self) -> &Vector<String> {
        &self.cost_units
    }

    // === Decks ===

    /// Find a deck by id.
    #[must_use]
    pub fn deck(&self, id: &DeckId) -> Option<&Deck> {
        self.decks.iter().find(|d| &d.id == id)
    }

    /// The deck currently in play.
    #[must_use]
    pub fn active_deck(&self) -> Option<&Deck> {
        self.active_deck_id.as_ref().and_then(|id| self.deck(id))
    }

    /// The roadmap-linked deck, if set and present.
    #[must_use]
    pub fn roadmap_deck(&self) -> Option<&Deck> {
        self.roadmap_deck_id.as_ref().and_then(|id| self.deck(id))
    }

    /// Active deck cards that are not on the field.
    ///
    /// This is what the deck sidebar lists; cards on the field are filtered
    /// out, not removed from the deck.
    #[must_use]
    pub fn sidebar_cards(&self) -> Vec<Card> {
        let Some(deck) = self.active_deck() else {
            return Vec::new();
        };
        let on_field: FxHashSet<&CardId> = self.field.iter().map(|c| &c.id).collect();
        deck.cards
            .iter()
            .filter(|c| !on_field.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Whether a card is on the field.
    #[must_use]
    pub fn is_on_field(&self, id: &CardId) -> bool {
        self.field.iter().any(|c| &c.id == id)
    }

    /// Position of a card on the field.
    #[must_use]
    pub fn field_index(&self, id: &CardId) -> Option<usize> {
        self.field.iter().position(|c| &c.id == id)
    }

    // === Roadmap ===

    /// Find a stage by id.
    #[must_use]
    pub fn stage(&self, id: &StageId) -> Option<&RoadmapStage> {
        self.roadmap_stages.iter().find(|s| &s.id == id)
    }

    /// The stage currently holding a task.
    #[must_use]
    pub fn stage_of_task(&self, task_id: &TaskId) -> Option<&RoadmapStage> {
        self.roadmap_stages.iter().find(|s| s.contains(task_id))
    }

    /// Find a task anywhere on the roadmap, with its stage id.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&StageId, &RoadmapTask)> {
        self.roadmap_stages
            .iter()
            .find_map(|s| s.task(task_id).map(|t| (&s.id, t)))
    }

    /// Total number of tasks across all stages.
    #[must_use]
    pub fn total_task_count(&self) -> usize {
        self.roadmap_stages.iter().map(|s| s.tasks.len()).sum()
    }

    /// Card ids referenced by any task.
    #[must_use]
    pub fn linked_card_ids(&self) -> FxHashSet<&CardId> {
        self.roadmap_stages
            .iter()
            .flat_map(|s| s.tasks.iter())
            .filter_map(|t| t.linked_card_id.as_ref())
            .collect()
    }

    /// Roadmap deck cards not yet linked by any task.
    ///
    /// These are the cards the roadmap sidebar offers for dragging onto a
    /// stage.
    #[must_use]
    pub fn roadmap_deck_cards(&self) -> Vec<Card> {
        let Some(deck) = self.roadmap_deck() else {
            return Vec::new();
        };
        let linked = self.linked_card_ids();
        deck.cards
            .iter()
            .filter(|c| !linked.contains(&c.id))
            .cloned()
            .collect()
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::empty()
    }
}

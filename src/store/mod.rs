//! The state store.
//!
//! `Store` owns a [`StoreState`] plus the configuration and id generator the
//! transitions need. There is no global instance: hosts construct a store and
//! pass it to whatever needs it.
//!
//! ## Transitions
//!
//! Transitions are synchronous and total. Unknown ids and out-of-range
//! indices leave the state unchanged and are logged at `debug`. Each
//! transition is available both as a method and as a [`Command`] applied
//! with [`Store::dispatch`].
//!
//! ## Example
//!
//! ```
//! use lifedeck::store::Store;
//! use lifedeck::core::{Command, StoreConfig, DeckId};
//!
//! let mut store = Store::new(StoreConfig::demo().with_id_seed(1)).unwrap();
//! store.set_active_deck(Some(DeckId::new("deck-1")));
//!
//! let card = store.state().sidebar_cards()[0].clone();
//! store.dispatch(Command::MoveCardToField(card.clone()));
//! assert_eq!(store.state().field().len(), 1);
//!
//! store.move_card_to_deck(&card.id);
//! assert!(store.state().field().is_empty());
//! ```

mod catalog;
mod decks;
mod error;
mod playground;
mod roadmap;
mod snapshot;

pub use error::StoreError;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use im::Vector;
use log::{debug, trace};

use crate::cards::Card;
use crate::core::command::{Command, Outcome};
use crate::core::config::StoreConfig;
use crate::core::ids::IdGenerator;
use crate::core::state::StoreState;
use crate::roadmap::RoadmapStage;

/// The state store.
#[derive(Clone, Debug)]
pub struct Store {
    state: StoreState,
    config: StoreConfig,
    ids: IdGenerator,
}

impl Store {
    /// Create a store from configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem reported by [`StoreConfig::validate`].
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StoreConfig) -> Self {
        let mut ids = match config.id_seed {
            Some(seed) => IdGenerator::new(seed),
            None => IdGenerator::from_entropy(),
        };

        let roadmap_stages: Vector<RoadmapStage> = (0..config.initial_stage_count)
            .map(|i| RoadmapStage::new(ids.stage_id(), i))
            .collect();

        let state = StoreState {
            decks: config
                .decks
                .iter()
                .cloned()
                .map(|mut deck| {
                    deck.cards = deck.cards.into_iter().map(Card::sanitized).collect();
                    deck
                })
                .collect(),
            roadmap_stages,
            card_types: config.card_types.iter().cloned().collect(),
            cost_units: config.cost_units.iter().cloned().collect(),
            ..StoreState::empty()
        };

        debug!(
            "event=store_init module=store decks={} stages={} seeded={}",
            state.decks.len(),
            state.roadmap_stages.len(),
            config.id_seed.is_some()
        );

        Self { state, config, ids }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    /// Configuration the store was built with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Apply a command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        let outcome = match command {
            Command::SetActiveDeck(id) => Outcome::from_changed(self.set_active_deck(id)),
            Command::MoveCardToField(card) => {
                self.move_card_to_field(card);
                Outcome::Applied
            }
            Command::MoveCardToDeck(id) => Outcome::from_changed(self.move_card_to_deck(&id)),
            Command::RemoveCardFromField(id) => {
                Outcome::from_changed(self.remove_card_from_field(&id))
            }
            Command::ReorderFieldCards {
                old_index,
                new_index,
            } => Outcome::from_changed(self.reorder_field_cards(old_index, new_index)),
            Command::ClearField => Outcome::from_changed(self.clear_field()),

            Command::CreateDeck { title } => Outcome::DeckCreated(self.create_deck(title)),
            Command::UpdateDeck { deck_id, cards } => {
                Outcome::from_changed(self.update_deck(&deck_id, cards))
            }
            Command::DeleteDeck(id) => Outcome::from_changed(self.delete_deck(&id)),
            Command::SetRoadmapDeck(id) => Outcome::from_changed(self.set_roadmap_deck(id)),

            Command::AddStage { index } => Outcome::StageCreated(self.add_stage(index)),
            Command::DeleteStage(id) => Outcome::from_changed(self.delete_stage(&id)),
            Command::UpdateStageTitle { stage_id, title } => {
                Outcome::from_changed(self.update_stage_title(&stage_id, title))
            }
            Command::AddTask {
                stage_id,
                title,
                options,
            } => self
                .add_task(&stage_id, title, options)
                .map_or(Outcome::Unchanged, Outcome::TaskCreated),
            Command::DeleteTask { stage_id, task_id } => self
                .delete_task(&stage_id, &task_id)
                .map_or(Outcome::Unchanged, Outcome::TaskRemoved),
            Command::UpdateTask {
                stage_id,
                task_id,
                title,
            } => Outcome::from_changed(self.update_task(&stage_id, &task_id, title)),
            Command::MoveTask {
                active_id,
                over_id,
                active_stage_id,
                over_stage_id,
            } => Outcome::from_changed(self.move_task(
                &active_id,
                over_id.as_ref(),
                &active_stage_id,
                &over_stage_id,
            )),

            Command::SetCardTypes(types) => Outcome::from_changed(self.set_card_types(types)),
            Command::AddCardType(t) => Outcome::from_changed(self.add_card_type(t)),
            Command::RemoveCardType(t) => Outcome::from_changed(self.remove_card_type(&t)),
            Command::SetCostUnits(units) => Outcome::from_changed(self.set_cost_units(units)),
            Command::AddCostUnit(u) => Outcome::from_changed(self.add_cost_unit(u)),
            Command::RemoveCostUnit(u) => Outcome::from_changed(self.remove_cost_unit(&u)),
        };

        trace!(
            "event=dispatch module=store command={} applied={}",
            name,
            outcome.is_applied()
        );
        outcome
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::build(StoreConfig::default())
    }
}

//! Deck lifecycle transitions.

use im::Vector;
use log::debug;
use rustc_hash::FxHashSet;

use super::Store;
use crate::cards::{Card, Deck};
use crate::core::ids::{CardId, DeckId};

impl Store {
    /// Issue a fresh card id for a card the host is about to create.
    pub fn next_card_id(&mut self) -> CardId {
        self.ids.card_id()
    }

    /// Create an empty deck and return its id.
    pub fn create_deck(&mut self, title: impl Into<String>) -> DeckId {
        let id = self.ids.deck_id();
        self.state.decks.push_back(Deck::new(id.clone(), title));
        id
    }

    /// Replace a deck's cards.
    ///
    /// Card ids must be unique within a deck; later duplicates are dropped.
    /// When the deck is in play, the field is synced to the new card list.
    pub fn update_deck(&mut self, deck_id: &DeckId, cards: impl IntoIterator<Item = Card>) -> bool {
        let Some(pos) = self.state.decks.iter().position(|d| &d.id == deck_id) else {
            debug!(
                "event=update_deck module=store status=ignored reason=unknown_deck deck={}",
                deck_id
            );
            return false;
        };

        let mut seen = FxHashSet::default();
        let mut dropped = 0usize;
        let unique: Vector<Card> = cards
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.id.clone());
                if !fresh {
                    dropped += 1;
                }
                fresh
            })
            .map(Card::sanitized)
            .collect();
        if dropped > 0 {
            debug!(
                "event=update_deck module=store status=deduplicated deck={} dropped={}",
                deck_id, dropped
            );
        }

        if let Some(deck) = self.state.decks.get_mut(pos) {
            deck.cards = unique;
        }

        if self.state.active_deck_id.as_ref() == Some(deck_id) {
            self.sync_field_with_active_deck();
        }
        true
    }

    /// Delete a deck.
    ///
    /// Clears the roadmap link if it pointed here. Deleting the deck in play
    /// also clears the active deck and the field. Tasks linked to the
    /// deck's cards keep their (now dangling) links.
    pub fn delete_deck(&mut self, deck_id: &DeckId) -> bool {
        let before = self.state.decks.len();
        self.state.decks.retain(|d| &d.id != deck_id);
        if self.state.decks.len() == before {
            debug!(
                "event=delete_deck module=store status=ignored reason=unknown_deck deck={}",
                deck_id
            );
            return false;
        }

        if self.state.roadmap_deck_id.as_ref() == Some(deck_id) {
            self.state.roadmap_deck_id = None;
        }
        if self.state.active_deck_id.as_ref() == Some(deck_id) {
            self.state.active_deck_id = None;
            self.state.field = Vector::new();
        }
        true
    }

    /// Select the deck that receives cards synthesized from roadmap tasks.
    ///
    /// Unknown ids are ignored; `None` unlinks.
    pub fn set_roadmap_deck(&mut self, id: Option<DeckId>) -> bool {
        if self.state.roadmap_deck_id == id {
            return false;
        }
        if let Some(deck_id) = &id {
            if self.state.deck(deck_id).is_none() {
                debug!(
                    "event=set_roadmap_deck module=store status=ignored reason=unknown_deck deck={}",
                    deck_id
                );
                return false;
            }
        }
        self.state.roadmap_deck_id = id;
        true
    }
}

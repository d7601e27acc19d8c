//! Deck draft: an uncommitted edit buffer over a deck's cards.
//!
//! Edits stay local to the draft until [`DeckDraft::commit`], which applies
//! them through [`Store::update_deck`]. Dropping a draft discards it.

use im::Vector;

use super::card::Card;
use super::deck::Deck;
use crate::core::ids::{CardId, DeckId};
use crate::store::Store;

/// Title given to cards added from the editor.
pub const BLANK_CARD_TITLE: &str = "새 카드";

/// Pending edits to one deck.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckDraft {
    deck_id: DeckId,
    original: Vector<Card>,
    cards: Vector<Card>,
}

impl DeckDraft {
    /// Start editing a deck.
    #[must_use]
    pub fn new(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id.clone(),
            original: deck.cards.clone(),
            cards: deck.cards.clone(),
        }
    }

    /// Deck being edited.
    #[must_use]
    pub fn deck_id(&self) -> &DeckId {
        &self.deck_id
    }

    /// Cards as currently edited.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Append a blank card (zero cost, no unit, no type) and return its id.
    pub fn add_card(&mut self, store: &mut Store) -> CardId {
        let id = store.next_card_id();
        self.cards
            .push_back(Card::new(id.clone(), BLANK_CARD_TITLE, 0.0, "", ""));
        id
    }

    /// Replace the card with `card_id`.
    ///
    /// The replacement keeps its own id, so an editor can rename a card's id
    /// here as well.
    pub fn update_card(&mut self, card_id: &CardId, card: Card) -> bool {
        match self.cards.iter_mut().find(|c| &c.id == card_id) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }

    /// Remove a card from the draft.
    pub fn remove_card(&mut self, card_id: &CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| &c.id != card_id);
        self.cards.len() != before
    }

    /// Whether the draft differs from the deck it was opened from.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.cards != self.original
    }

    /// Write the draft back to the store.
    ///
    /// Returns `false` if the deck no longer exists.
    pub fn commit(self, store: &mut Store) -> bool {
        store.update_deck(&self.deck_id, self.cards)
    }
}

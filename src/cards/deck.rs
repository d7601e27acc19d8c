//! Decks: named, ordered card collections owned by the user.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::ids::{CardId, DeckId};

/// A deck of cards.
///
/// The deck owns its cards exclusively. Putting a card on the field does not
/// remove it from the deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck identifier.
    pub id: DeckId,

    /// Display title.
    pub title: String,

    /// Cards in display order.
    pub cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(id: DeckId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vector::new(),
        }
    }

    /// Create a deck holding the given cards.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// Find a card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Check whether the deck holds a card.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.card(id).is_some()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id), id, 1.0, "시간", "action")
    }

    #[test]
    fn test_deck_lookup() {
        let deck = Deck::new(DeckId::new("d1"), "Daily").with_cards([card("c1"), card("c2")]);

        assert_eq!(deck.len(), 2);
        assert!(deck.contains(&CardId::new("c2")));
        assert!(!deck.contains(&CardId::new("c3")));
        assert_eq!(deck.card(&CardId::new("c1")).map(|c| c.title.as_str()), Some("c1"));
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::new(DeckId::new("d1"), "Empty");
        assert!(deck.is_empty());
    }
}

//! Playground transitions: the field and the active deck.

use im::Vector;
use log::debug;

use super::Store;
use crate::cards::Card;
use crate::core::ids::{CardId, DeckId};
use crate::core::ordering::array_move;

impl Store {
    /// Select the deck in play.
    ///
    /// The field is emptied whenever the id changes, even if the new deck
    /// shares card ids with the old one. Returns `false` if the id was
    /// already active or names no deck.
    pub fn set_active_deck(&mut self, id: Option<DeckId>) -> bool {
        if self.state.active_deck_id == id {
            return false;
        }
        if let Some(deck_id) = &id {
            if self.state.deck(deck_id).is_none() {
                debug!(
                    "event=set_active_deck module=store status=ignored reason=unknown_deck deck={}",
                    deck_id
                );
                return false;
            }
        }
        self.state.active_deck_id = id;
        self.state.field = Vector::new();
        true
    }

    /// Put a card on the field.
    ///
    /// Appends without a duplicate check: calling twice with the same card
    /// puts it on the field twice.
    pub fn move_card_to_field(&mut self, card: Card) {
        self.state.field.push_back(card.sanitized());
    }

    /// Return a card from the field to its deck.
    ///
    /// Removes every field entry with that id. The deck itself is untouched
    /// since the card never left it.
    pub fn move_card_to_deck(&mut self, card_id: &CardId) -> bool {
        self.remove_from_field(card_id, "move_card_to_deck")
    }

    /// Remove a card from the field.
    pub fn remove_card_from_field(&mut self, card_id: &CardId) -> bool {
        self.remove_from_field(card_id, "remove_card_from_field")
    }

    /// Move the field card at `old_index` to `new_index`.
    ///
    /// Out-of-range indices leave the field unchanged.
    pub fn reorder_field_cards(&mut self, old_index: usize, new_index: usize) -> bool {
        if !array_move(&mut self.state.field, old_index, new_index) {
            debug!(
                "event=reorder_field_cards module=store status=ignored old_index={} new_index={} len={}",
                old_index,
                new_index,
                self.state.field.len()
            );
            return false;
        }
        old_index != new_index
    }

    /// Empty the field.
    pub fn clear_field(&mut self) -> bool {
        if self.state.field.is_empty() {
            return false;
        }
        self.state.field = Vector::new();
        true
    }

    fn remove_from_field(&mut self, card_id: &CardId, event: &str) -> bool {
        let before = self.state.field.len();
        self.state.field.retain(|c| &c.id != card_id);
        let removed = before - self.state.field.len();
        if removed == 0 {
            debug!(
                "event={} module=store status=ignored reason=not_on_field card={}",
                event, card_id
            );
        }
        removed > 0
    }

    /// Bring the field back in line with the active deck after the deck
    /// changed: drop entries whose card left the deck and refresh the rest
    /// with the deck's current card data.
    pub(super) fn sync_field_with_active_deck(&mut self) {
        let Some(deck) = self.state.active_deck() else {
            return;
        };
        let synced: Vector<Card> = self
            .state
            .field
            .iter()
            .filter_map(|c| deck.card(&c.id).cloned())
            .collect();
        self.state.field = synced;
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::StoreConfig;
    use crate::core::ids::{CardId, DeckId};
    use crate::store::Store;

    fn demo_store() -> Store {
        let mut store = Store::new(StoreConfig::demo().with_id_seed(1)).unwrap();
        store.set_active_deck(Some(DeckId::new("deck-1")));
        store
    }

    fn deploy(store: &mut Store, id: &str) {
        let card = store
            .state()
            .active_deck()
            .and_then(|d| d.card(&CardId::new(id)))
            .cloned()
            .unwrap();
        store.move_card_to_field(card);
    }

    fn field_ids(store: &Store) -> Vec<String> {
        store
            .state()
            .field()
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_field_round_trip() {
        let mut store = demo_store();

        deploy(&mut store, "card-1");
        assert_eq!(field_ids(&store), vec!["card-1"]);

        assert!(store.move_card_to_deck(&CardId::new("card-1")));
        assert!(store.state().field().is_empty());

        // Card never left the deck
        assert_eq!(store.state().active_deck().map(|d| d.len()), Some(5));
    }

    #[test]
    fn test_duplicate_deploy_is_permitted() {
        let mut store = demo_store();

        deploy(&mut store, "card-2");
        deploy(&mut store, "card-2");
        assert_eq!(field_ids(&store), vec!["card-2", "card-2"]);

        // Returning removes every copy
        store.move_card_to_deck(&CardId::new("card-2"));
        assert!(store.state().field().is_empty());
    }

    #[test]
    fn test_return_unknown_card_is_noop() {
        let mut store = demo_store();
        deploy(&mut store, "card-1");

        assert!(!store.move_card_to_deck(&CardId::new("card-9")));
        assert!(!store.remove_card_from_field(&CardId::new("card-9")));
        assert_eq!(field_ids(&store), vec!["card-1"]);
    }

    #[test]
    fn test_reorder() {
        let mut store = demo_store();
        for id in ["card-1", "card-2", "card-3"] {
            deploy(&mut store, id);
        }

        assert!(store.reorder_field_cards(0, 2));
        assert_eq!(field_ids(&store), vec!["card-2", "card-3", "card-1"]);

        assert!(!store.reorder_field_cards(1, 1));
        assert!(!store.reorder_field_cards(0, 3));
        assert!(!store.reorder_field_cards(5, 0));
        assert_eq!(field_ids(&store), vec!["card-2", "card-3", "card-1"]);
    }

    #[test]
    fn test_switching_deck_clears_field() {
        let mut store = demo_store();
        deploy(&mut store, "card-1");

        // deck-2 shares card-1 by id; the field still empties
        assert!(store.set_active_deck(Some(DeckId::new("deck-2"))));
        assert!(store.state().field().is_empty());
    }

    #[test]
    fn test_reselecting_same_deck_keeps_field() {
        let mut store = demo_store();
        deploy(&mut store, "card-1");

        assert!(!store.set_active_deck(Some(DeckId::new("deck-1"))));
        assert_eq!(field_ids(&store), vec!["card-1"]);
    }

    #[test]
    fn test_clear_field() {
        let mut store = demo_store();
        assert!(!store.clear_field());

        deploy(&mut store, "card-1");
        assert!(store.clear_field());
        assert!(store.state().field().is_empty());
    }
}

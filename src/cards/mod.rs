//! Card system: cards, decks, and the deck draft editor.
//!
//! ## Key Types
//!
//! - `Card`: A task unit with a cost and a type
//! - `Deck`: Named, ordered card collection
//! - `DeckDraft`: Uncommitted edit buffer over a deck's cards
//!
//! ## Field Semantics
//!
//! Putting a card on the field copies a reference; the card stays in its
//! deck and is only filtered out of the sidebar listing.

pub mod card;
pub mod deck;
pub mod draft;

pub use card::Card;
pub use deck::Deck;
pub use draft::DeckDraft;

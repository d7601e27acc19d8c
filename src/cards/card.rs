//! Cards: the task units users collect into decks.
//!
//! A card's `card_type` and `cost_unit` are free-form strings. The catalog
//! lists in the store only feed selection menus; removing a type or unit
//! from the catalog never invalidates cards that already use it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::ids::CardId;

/// A single card.
///
/// `cost_value` is finite and non-negative for every card a store holds.
/// [`Card::new`], [`Card::with_cost`] and deserialization clamp anything
/// else to zero, and the store clamps cards it is handed directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier, unique within the owning deck.
    pub id: CardId,

    /// Display title.
    pub title: String,

    /// Cost amount (hours, minutes, money... see `cost_unit`).
    #[serde(deserialize_with = "deserialize_cost")]
    pub cost_value: f64,

    /// Unit of `cost_value`.
    pub cost_unit: String,

    /// Card type (action, resource, skill...).
    pub card_type: String,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        cost_value: f64,
        cost_unit: impl Into<String>,
        card_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            cost_value: sanitize_cost(cost_value),
            cost_unit: cost_unit.into(),
            card_type: card_type.into(),
        }
    }

    /// Replace the cost value.
    #[must_use]
    pub fn with_cost(mut self, cost_value: f64) -> Self {
        self.cost_value = sanitize_cost(cost_value);
        self
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Clamp a cost set through the public field.
    #[must_use]
    pub(crate) fn sanitized(mut self) -> Self {
        self.cost_value = sanitize_cost(self.cost_value);
        self
    }
}

fn deserialize_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(sanitize_cost)
}

fn sanitize_cost(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new() {
        let card = Card::new(CardId::new("c1"), "Deep work", 2.0, "시간", "skill");

        assert_eq!(card.id, CardId::new("c1"));
        assert_eq!(card.title, "Deep work");
        assert_eq!(card.cost_value, 2.0);
        assert_eq!(card.cost_unit, "시간");
        assert_eq!(card.card_type, "skill");
    }

    #[test]
    fn test_cost_is_clamped() {
        let card = Card::new(CardId::new("c1"), "x", -3.0, "분", "action");
        assert_eq!(card.cost_value, 0.0);

        let card = card.with_cost(f64::NAN);
        assert_eq!(card.cost_value, 0.0);

        let card = card.with_cost(1.5);
        assert_eq!(card.cost_value, 1.5);
    }

    #[test]
    fn test_deserialize_clamps_cost() {
        let json = r#"{"id":"c1","title":"x","cost_value":-5.0,"cost_unit":"분","card_type":"action"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.cost_value, 0.0);

        let json = r#"{"id":"c1","title":"x","cost_value":2.5,"cost_unit":"분","card_type":"action"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.cost_value, 2.5);
    }

    #[test]
    fn test_sanitized_clamps_public_field() {
        let mut card = Card::new(CardId::new("c1"), "x", 1.0, "분", "action");
        card.cost_value = f64::NAN;
        assert_eq!(card.sanitized().cost_value, 0.0);
    }
}

//! Store configuration.
//!
//! Hosts configure the store at startup by providing a `StoreConfig`:
//! - Catalog lists (card types, cost units) and their fallbacks
//! - Roadmap stage counts
//! - Seed decks
//! - An optional id seed for deterministic sessions
//!
//! `StoreConfig` deserializes with every field optional, so a host can ship
//! a partial JSON/TOML document and inherit the rest from `Default`.

use serde::{Deserialize, Serialize};

use super::ids::{CardId, DeckId};
use crate::cards::{Card, Deck};
use crate::store::StoreError;

/// Complete store configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Card types offered by selection menus.
    pub card_types: Vec<String>,

    /// Cost units offered by selection menus.
    pub cost_units: Vec<String>,

    /// Card type given to synthesized cards when `card_types` is empty.
    pub fallback_card_type: String,

    /// Cost unit given to synthesized cards when `cost_units` is empty.
    pub fallback_cost_unit: String,

    /// Number of empty stages the roadmap starts with.
    pub initial_stage_count: usize,

    /// Stage deletion is rejected below this count.
    pub min_stage_count: usize,

    /// Decks present at startup.
    pub decks: Vec<Deck>,

    /// Seed for id generation. `None` seeds from OS entropy.
    pub id_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            card_types: ["action", "resource", "skill", "event", "wild"]
                .into_iter()
                .map(String::from)
                .collect(),
            cost_units: ["시간", "분", "원"].into_iter().map(String::from).collect(),
            fallback_card_type: "action".to_string(),
            fallback_cost_unit: "시간".to_string(),
            initial_stage_count: 2,
            min_stage_count: 2,
            decks: Vec::new(),
            id_seed: None,
        }
    }
}

impl StoreConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration seeded with the two sample decks.
    #[must_use]
    pub fn demo() -> Self {
        let sample = vec![
            Card::new(CardId::new("card-1"), "모닝 루틴", 1.0, "시간", "action"),
            Card::new(CardId::new("card-2"), "딥 워크", 2.0, "시간", "skill"),
            Card::new(CardId::new("card-3"), "에너지 충전", 0.0, "시간", "resource"),
            Card::new(CardId::new("card-4"), "미팅 정리", 1.0, "시간", "event"),
            Card::new(CardId::new("card-5"), "자유 선택", 1.0, "시간", "wild"),
        ];
        let weekly: Vec<_> = sample.iter().take(3).cloned().collect();

        Self::default()
            .with_deck(Deck::new(DeckId::new("deck-1"), "기본 덱").with_cards(sample))
            .with_deck(Deck::new(DeckId::new("deck-2"), "주간 루틴").with_cards(weekly))
    }

    /// Replace the card type list.
    #[must_use]
    pub fn with_card_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.card_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the cost unit list.
    #[must_use]
    pub fn with_cost_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cost_units = units.into_iter().map(Into::into).collect();
        self
    }

    /// Add a seed deck.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.decks.push(deck);
        self
    }

    /// Set the initial stage count.
    #[must_use]
    pub fn with_initial_stages(mut self, count: usize) -> Self {
        self.initial_stage_count = count;
        self
    }

    /// Set the minimum stage count.
    #[must_use]
    pub fn with_min_stages(mut self, count: usize) -> Self {
        self.min_stage_count = count;
        self
    }

    /// Use a fixed id seed.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }

    /// Check the configuration for values the store cannot honor.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ZeroMinimumStages`] when `min_stage_count` is 0.
    /// - [`StoreError::TooFewInitialStages`] when `initial_stage_count` is
    ///   below `min_stage_count`.
    /// - [`StoreError::DuplicateDeck`] when two seed decks share an id.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.min_stage_count == 0 {
            return Err(StoreError::ZeroMinimumStages);
        }
        if self.initial_stage_count < self.min_stage_count {
            return Err(StoreError::TooFewInitialStages {
                initial: self.initial_stage_count,
                minimum: self.min_stage_count,
            });
        }
        let mut seen = rustc_hash::FxHashSet::default();
        for deck in &self.decks {
            if !seen.insert(&deck.id) {
                return Err(StoreError::DuplicateDeck(deck.id.clone()));
            }
        }
        Ok(())
    }

    /// Card type for a synthesized card.
    #[must_use]
    pub fn default_card_type<'a>(&'a self, first: Option<&'a str>) -> &'a str {
        first.unwrap_or(&self.fallback_card_type)
    }

    /// Cost unit for a synthesized card.
    #[must_use]
    pub fn default_cost_unit<'a>(&'a self, first: Option<&'a str>) -> &'a str {
        first.unwrap_or(&self.fallback_cost_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.card_types.len(), 5);
        assert_eq!(config.cost_units, vec!["시간", "분", "원"]);
        assert_eq!(config.initial_stage_count, 2);
        assert_eq!(config.min_stage_count, 2);
        assert!(config.decks.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_config() {
        let config = StoreConfig::demo();

        assert_eq!(config.decks.len(), 2);
        assert_eq!(config.decks[0].len(), 5);
        assert_eq!(config.decks[1].len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new()
            .with_card_types(["quest"])
            .with_cost_units(Vec::<String>::new())
            .with_initial_stages(4)
            .with_min_stages(1)
            .with_id_seed(9);

        assert_eq!(config.card_types, vec!["quest"]);
        assert!(config.cost_units.is_empty());
        assert_eq!(config.initial_stage_count, 4);
        assert_eq!(config.min_stage_count, 1);
        assert_eq!(config.id_seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_zero_minimum() {
        let config = StoreConfig::new().with_min_stages(0);
        assert!(matches!(config.validate(), Err(StoreError::ZeroMinimumStages)));
    }

    #[test]
    fn test_validate_rejects_too_few_initial() {
        let config = StoreConfig::new().with_initial_stages(1);
        assert!(matches!(
            config.validate(),
            Err(StoreError::TooFewInitialStages { initial: 1, minimum: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_decks() {
        let config = StoreConfig::new()
            .with_deck(Deck::new(DeckId::new("d1"), "a"))
            .with_deck(Deck::new(DeckId::new("d1"), "b"));
        assert!(matches!(config.validate(), Err(StoreError::DuplicateDeck(_))));
    }

    #[test]
    fn test_defaults_fall_back_when_lists_empty() {
        let config = StoreConfig::default();

        assert_eq!(config.default_card_type(None), "action");
        assert_eq!(config.default_cost_unit(None), "시간");
        assert_eq!(config.default_cost_unit(Some("분")), "분");
    }

    #[test]
    fn test_partial_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "card_types": ["habit"], "min_stage_count": 1 }"#).unwrap();

        assert_eq!(config.card_types, vec!["habit"]);
        assert_eq!(config.min_stage_count, 1);
        assert_eq!(config.initial_stage_count, 2);
        assert_eq!(config.cost_units.len(), 3);
    }
}

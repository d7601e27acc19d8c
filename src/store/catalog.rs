//! Card type and cost unit catalogs.
//!
//! Both lists behave like ordered sets: adding an existing entry changes
//! nothing and replacing a list drops later duplicates.

use im::Vector;
use log::debug;
use rustc_hash::FxHashSet;

use super::Store;

impl Store {
    /// Replace the card type list.
    pub fn set_card_types(&mut self, types: Vec<String>) -> bool {
        replace_list(&mut self.state.card_types, types)
    }

    /// Add a card type if it is not listed yet.
    pub fn add_card_type(&mut self, card_type: impl Into<String>) -> bool {
        add_entry(&mut self.state.card_types, card_type.into(), "add_card_type")
    }

    /// Remove a card type. Cards already using it keep it.
    pub fn remove_card_type(&mut self, card_type: &str) -> bool {
        remove_entry(&mut self.state.card_types, card_type, "remove_card_type")
    }

    /// Replace the cost unit list.
    pub fn set_cost_units(&mut self, units: Vec<String>) -> bool {
        replace_list(&mut self.state.cost_units, units)
    }

    /// Add a cost unit if it is not listed yet.
    pub fn add_cost_unit(&mut self, unit: impl Into<String>) -> bool {
        add_entry(&mut self.state.cost_units, unit.into(), "add_cost_unit")
    }

    /// Remove a cost unit. Cards already using it keep it.
    pub fn remove_cost_unit(&mut self, unit: &str) -> bool {
        remove_entry(&mut self.state.cost_units, unit, "remove_cost_unit")
    }
}

fn replace_list(list: &mut Vector<String>, entries: Vec<String>) -> bool {
    let mut seen = FxHashSet::default();
    let unique: Vector<String> = entries
        .into_iter()
        .filter(|e| seen.insert(e.clone()))
        .collect();
    if *list == unique {
        return false;
    }
    *list = unique;
    true
}

fn add_entry(list: &mut Vector<String>, entry: String, event: &str) -> bool {
    if list.contains(&entry) {
        debug!(
            "event={} module=store status=ignored reason=already_listed value={}",
            event, entry
        );
        return false;
    }
    list.push_back(entry);
    true
}

fn remove_entry(list: &mut Vector<String>, entry: &str, event: &str) -> bool {
    let before = list.len();
    list.retain(|e| e != entry);
    if list.len() == before {
        debug!(
            "event={} module=store status=ignored reason=not_listed value={}",
            event, entry
        );
        return false;
    }
    true
}

//! Playground drag coordinator.
//!
//! Nothing moves while a playground card is being dragged; the whole gesture
//! resolves on drop:
//!
//! - sidebar card onto the field zone or any field card: deploy
//! - field card dropped nowhere or onto the return zone: return to deck
//! - field card onto another field card: reorder

use log::trace;

use super::drag_id::DragId;
use crate::cards::Card;
use crate::core::command::{Command, Outcome};
use crate::core::state::StoreState;
use crate::store::Store;

/// Transient drag state for the playground.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaygroundDnd {
    active: Option<DragId>,
}

impl PlaygroundDnd {
    /// Create an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id being dragged, if any.
    #[must_use]
    pub fn active(&self) -> Option<&DragId> {
        self.active.as_ref()
    }

    /// Record the drag source.
    pub fn drag_start(&mut self, active: DragId) {
        trace!("event=drag_start module=dnd board=playground active={}", active);
        self.active = Some(active);
    }

    /// Abandon the gesture. Nothing was applied, so nothing is undone.
    pub fn drag_cancel(&mut self) {
        self.active = None;
    }

    /// Resolve the drop and apply it.
    ///
    /// `over` is the drop target, `None` when released outside any target.
    /// The active id is cleared whatever the result.
    pub fn drag_end(&mut self, store: &mut Store, over: Option<&DragId>) -> Outcome {
        let Some(active) = self.active.take() else {
            return Outcome::Unchanged;
        };
        let Some(command) = resolve_drop(store.state(), &active, over) else {
            trace!(
                "event=drag_end module=dnd board=playground active={} status=no_op",
                active
            );
            return Outcome::Unchanged;
        };
        store.dispatch(command)
    }

    /// Card shown under the drag overlay.
    ///
    /// Sidebar cards come from the active deck, field cards from the field.
    #[must_use]
    pub fn active_card<'s>(&self, state: &'s StoreState) -> Option<&'s Card> {
        match self.active.as_ref()? {
            DragId::DeckCard(id) => state.active_deck()?.card(id),
            DragId::FieldCard(id) => state.field().iter().find(|c| &c.id == id),
            _ => None,
        }
    }
}

/// Map a drop onto the command it stands for.
fn resolve_drop(state: &StoreState, active: &DragId, over: Option<&DragId>) -> Option<Command> {
    match (active, over) {
        (DragId::DeckCard(id), Some(DragId::PlaygroundField | DragId::FieldCard(_))) => {
            // Already deployed cards are hidden from the sidebar
            if state.is_on_field(id) {
                return None;
            }
            let card = state.active_deck()?.card(id)?;
            Some(Command::MoveCardToField(card.clone()))
        }
        (DragId::FieldCard(id), None | Some(DragId::DeckReturn)) => {
            Some(Command::MoveCardToDeck(id.clone()))
        }
        (DragId::FieldCard(id), Some(DragId::FieldCard(over_id))) if id != over_id => {
            Some(Command::ReorderFieldCards {
                old_index: state.field_index(id)?,
                new_index: state.field_index(over_id)?,
            })
        }
        _ => None,
    }
}

//! Drag ids: the string tags drag sources and drop targets carry.
//!
//! A drag id names both where a gesture started (sidebar card, field card,
//! task...) and the entity it refers to, as `{prefix}{entity id}`. Two fixed
//! ids name the playground drop zones.
//!
//! | variant | encoding |
//! |---|---|
//! | `DeckCard` | `deck-{card}` |
//! | `FieldCard` | `field-{card}` |
//! | `Task` | `task-{task}` |
//! | `Stage` | `stage-{stage}` |
//! | `RoadmapDeckCard` | `roadmap-deck-{card}` |
//! | `PlaygroundField` | `playground-field` |
//! | `DeckReturn` | `deck-return` |
//!
//! Parsing matches the fixed ids first, then the longest prefix, so
//! `roadmap-deck-x` is never read as a deck card. A card whose id is
//! literally `return` cannot be dragged from the sidebar.

use std::fmt;

use crate::core::ids::{CardId, StageId, TaskId};

const PLAYGROUND_FIELD: &str = "playground-field";
const DECK_RETURN: &str = "deck-return";

const ROADMAP_DECK_PREFIX: &str = "roadmap-deck-";
const DECK_PREFIX: &str = "deck-";
const FIELD_PREFIX: &str = "field-";
const TASK_PREFIX: &str = "task-";
const STAGE_PREFIX: &str = "stage-";

/// A parsed drag id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragId {
    /// Card in the playground sidebar.
    DeckCard(CardId),
    /// Card on the field.
    FieldCard(CardId),
    /// Roadmap task.
    Task(TaskId),
    /// Roadmap stage container.
    Stage(StageId),
    /// Card in the roadmap deck sidebar.
    RoadmapDeckCard(CardId),
    /// The field drop zone.
    PlaygroundField,
    /// The sidebar drop zone that returns field cards.
    DeckReturn,
}

impl DragId {
    /// Parse a raw drag id.
    ///
    /// Returns `None` for ids from outside the crate: unknown prefixes and
    /// prefixes with nothing after them.
    ///
    /// ```
    /// use lifedeck::core::CardId;
    /// use lifedeck::dnd::DragId;
    ///
    /// assert_eq!(
    ///     DragId::parse("roadmap-deck-c1"),
    ///     Some(DragId::RoadmapDeckCard(CardId::new("c1")))
    /// );
    /// assert_eq!(DragId::parse("deck-return"), Some(DragId::DeckReturn));
    /// assert_eq!(DragId::parse("sidebar-c1"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            PLAYGROUND_FIELD => return Some(Self::PlaygroundField),
            DECK_RETURN => return Some(Self::DeckReturn),
            _ => {}
        }

        let entity = |prefix: &str| raw.strip_prefix(prefix).filter(|rest| !rest.is_empty());

        if let Some(id) = entity(ROADMAP_DECK_PREFIX) {
            Some(Self::RoadmapDeckCard(CardId::new(id)))
        } else if let Some(id) = entity(DECK_PREFIX) {
            Some(Self::DeckCard(CardId::new(id)))
        } else if let Some(id) = entity(FIELD_PREFIX) {
            Some(Self::FieldCard(CardId::new(id)))
        } else if let Some(id) = entity(TASK_PREFIX) {
            Some(Self::Task(TaskId::new(id)))
        } else {
            entity(STAGE_PREFIX).map(|id| Self::Stage(StageId::new(id)))
        }
    }

    /// Task referenced by a `Task` id.
    #[must_use]
    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for DragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeckCard(id) => write!(f, "{DECK_PREFIX}{id}"),
            Self::FieldCard(id) => write!(f, "{FIELD_PREFIX}{id}"),
            Self::Task(id) => write!(f, "{TASK_PREFIX}{id}"),
            Self::Stage(id) => write!(f, "{STAGE_PREFIX}{id}"),
            Self::RoadmapDeckCard(id) => write!(f, "{ROADMAP_DECK_PREFIX}{id}"),
            Self::PlaygroundField => f.write_str(PLAYGROUND_FIELD),
            Self::DeckReturn => f.write_str(DECK_RETURN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(DragId::parse("deck-c1"), Some(DragId::DeckCard(CardId::new("c1"))));
        assert_eq!(DragId::parse("field-c1"), Some(DragId::FieldCard(CardId::new("c1"))));
        assert_eq!(DragId::parse("task-t1"), Some(DragId::Task(TaskId::new("t1"))));
        assert_eq!(DragId::parse("stage-s1"), Some(DragId::Stage(StageId::new("s1"))));
        assert_eq!(
            DragId::parse("roadmap-deck-c1"),
            Some(DragId::RoadmapDeckCard(CardId::new("c1")))
        );
    }

    #[test]
    fn test_entity_ids_keep_their_own_dashes() {
        // Generated ids carry their own prefix
        let id = DragId::parse("task-task-3-a1b2c3d").unwrap();
        assert_eq!(id, DragId::Task(TaskId::new("task-3-a1b2c3d")));
    }

    #[test]
    fn test_fixed_ids() {
        assert_eq!(DragId::parse("playground-field"), Some(DragId::PlaygroundField));
        assert_eq!(DragId::parse("deck-return"), Some(DragId::DeckReturn));
    }

    #[test]
    fn test_foreign_ids() {
        assert_eq!(DragId::parse(""), None);
        assert_eq!(DragId::parse("deck-"), None);
        assert_eq!(DragId::parse("roadmap-deck-"), None);
        assert_eq!(DragId::parse("column-3"), None);
        assert_eq!(DragId::parse("Task-t1"), None);
    }

    #[test]
    fn test_display_round_trip() {
        let ids = [
            DragId::DeckCard(CardId::new("card-1")),
            DragId::FieldCard(CardId::new("card-1")),
            DragId::Task(TaskId::new("task-2-zzzzzzz")),
            DragId::Stage(StageId::new("stage-1-0000000")),
            DragId::RoadmapDeckCard(CardId::new("card-9")),
            DragId::PlaygroundField,
            DragId::DeckReturn,
        ];
        for id in ids {
            assert_eq!(DragId::parse(&id.to_string()), Some(id));
        }
    }

    #[test]
    fn test_task_id() {
        assert_eq!(DragId::Task(TaskId::new("t")).task_id(), Some(&TaskId::new("t")));
        assert_eq!(DragId::Stage(StageId::new("s")).task_id(), None);
    }
}

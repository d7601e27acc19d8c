//! Roadmap drag coordinator.
//!
//! Tasks move live: every `drag_over` issues a `move_task` as soon as the
//! pointer enters a new target, so the board already shows the final layout
//! when the task is dropped. A pointer resting on one target fires `over`
//! repeatedly; the last issued `(task, target)` pair is remembered and
//! repeats are skipped.
//!
//! The only drop-time action is turning a roadmap deck card into a task.

use log::trace;

use super::drag_id::DragId;
use crate::cards::Card;
use crate::core::command::{Command, Outcome};
use crate::core::ids::{StageId, TaskId};
use crate::core::state::StoreState;
use crate::roadmap::{AddTaskOptions, RoadmapTask};
use crate::store::Store;

/// Transient drag state for the roadmap board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadmapDnd {
    active: Option<DragId>,
    last_move: Option<(TaskId, DragId)>,
}

impl RoadmapDnd {
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
        trace!("event=drag_start module=dnd board=roadmap active={}", active);
        self.active = Some(active);
        self.last_move = None;
    }

    /// Move the dragged task toward the hovered target.
    ///
    /// Only task drags move anything. The target stage is the hovered
    /// task's stage or the hovered stage itself. The move always starts
    /// from the stage the task is in now, which may differ from where the
    /// gesture began.
    pub fn drag_over(&mut self, store: &mut Store, over: Option<&DragId>) -> Outcome {
        let (Some(DragId::Task(task_id)), Some(over)) = (self.active.as_ref(), over) else {
            return Outcome::Unchanged;
        };

        let state = store.state();
        let Some(over_stage_id) = target_stage(state, over) else {
            return Outcome::Unchanged;
        };

        let key = (task_id.clone(), over.clone());
        if self.last_move.as_ref() == Some(&key) {
            return Outcome::Unchanged;
        }

        let Some(active_stage_id) = state.stage_of_task(task_id).map(|s| s.id.clone()) else {
            return Outcome::Unchanged;
        };
        self.last_move = Some(key);

        trace!(
            "event=drag_over module=dnd board=roadmap task={} over={}",
            task_id,
            over
        );
        store.dispatch(Command::MoveTask {
            active_id: task_id.clone(),
            over_id: over.task_id().cloned(),
            active_stage_id,
            over_stage_id,
        })
    }

    /// Finish the gesture.
    ///
    /// A roadmap deck card dropped on a stage or a task becomes a task at
    /// the end of that stage, linked to the card. Task drops need no work
    /// here since `drag_over` already placed the task.
    pub fn drag_end(&mut self, store: &mut Store, over: Option<&DragId>) -> Outcome {
        self.last_move = None;
        let Some(active) = self.active.take() else {
            return Outcome::Unchanged;
        };

        let (DragId::RoadmapDeckCard(card_id), Some(over)) = (&active, over) else {
            return Outcome::Unchanged;
        };

        let state = store.state();
        let Some(stage_id) = target_stage(state, over) else {
            return Outcome::Unchanged;
        };
        let Some(card) = state.roadmap_deck().and_then(|d| d.card(card_id)) else {
            return Outcome::Unchanged;
        };
        if state.linked_card_ids().contains(card_id) {
            trace!(
                "event=drag_end module=dnd board=roadmap card={} status=already_linked",
                card_id
            );
            return Outcome::Unchanged;
        }

        let title = card.title.clone();
        store.dispatch(Command::AddTask {
            stage_id,
            title,
            options: AddTaskOptions::linked_to(card_id.clone()),
        })
    }

    /// Abandon the gesture.
    ///
    /// Moves already issued by `drag_over` stay applied.
    pub fn drag_cancel(&mut self) {
        self.active = None;
        self.last_move = None;
    }

    /// Task shown under the drag overlay.
    #[must_use]
    pub fn active_task<'s>(&self, state: &'s StoreState) -> Option<&'s RoadmapTask> {
        let task_id = self.active.as_ref()?.task_id()?;
        state.find_task(task_id).map(|(_, task)| task)
    }

    /// Roadmap deck card shown under the drag overlay.
    #[must_use]
    pub fn active_card<'s>(&self, state: &'s StoreState) -> Option<&'s Card> {
        match self.active.as_ref()? {
            DragId::RoadmapDeckCard(id) => state.roadmap_deck()?.card(id),
            _ => None,
        }
    }
}

/// Stage a drop target stands for.
fn target_stage(state: &StoreState, over: &DragId) -> Option<StageId> {
    match over {
        DragId::Task(id) => state.stage_of_task(id).map(|s| s.id.clone()),
        DragId::Stage(id) => state.stage(id).map(|s| s.id.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StoreConfig;
    use crate::core::ids::{CardId, DeckId};

    struct Board {
        store: Store,
        s1: StageId,
        s2: StageId,
    }

    fn board() -> Board {
        let store = Store::new(StoreConfig::demo().with_id_seed(6)).unwrap();
        let s1 = store.state().roadmap_stages()[0].id.clone();
        let s2 = store.state().roadmap_stages()[1].id.clone();
        Board { store, s1, s2 }
    }

    fn add(store: &mut Store, stage: &StageId, title: &str) -> TaskId {
        store.add_task(stage, title, AddTaskOptions::unlinked()).unwrap()
    }

    fn titles(store: &Store, stage: &StageId) -> Vec<String> {
        store.state().stage(stage).unwrap().tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_drag_over_moves_live() {
        let Board { mut store, s1, s2 } = board();
        let t1 = add(&mut store, &s1, "t1");
        add(&mut store, &s1, "t2");
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::Task(t1.clone()));
        let outcome = dnd.drag_over(&mut store, Some(&DragId::Stage(s2.clone())));

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(titles(&store, &s1), vec!["t2"]);
        assert_eq!(titles(&store, &s2), vec!["t1"]);
    }

    #[test]
    fn test_repeated_over_is_deduplicated() {
        let Board { mut store, s1, s2 } = board();
        let t1 = add(&mut store, &s1, "t1");
        let mut dnd = RoadmapDnd::new();
        let over = DragId::Stage(s2.clone());

        dnd.drag_start(DragId::Task(t1));
        assert_eq!(dnd.drag_over(&mut store, Some(&over)), Outcome::Applied);
        let after = store.snapshot();

        assert_eq!(dnd.drag_over(&mut store, Some(&over)), Outcome::Unchanged);
        assert_eq!(store.state(), &after);
    }

    #[test]
    fn test_over_uses_current_stage() {
        let Board { mut store, s1, s2 } = board();
        let t1 = add(&mut store, &s1, "t1");
        let u1 = add(&mut store, &s2, "u1");
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::Task(t1.clone()));
        // Crosses into s2 over u1, then back to the s1 container
        dnd.drag_over(&mut store, Some(&DragId::Task(u1)));
        assert_eq!(titles(&store, &s2), vec!["t1", "u1"]);

        dnd.drag_over(&mut store, Some(&DragId::Stage(s1.clone())));
        assert_eq!(titles(&store, &s1), vec!["t1"]);
        assert_eq!(titles(&store, &s2), vec!["u1"]);
        assert_eq!(store.state().total_task_count(), 2);
    }

    #[test]
    fn test_non_task_drag_over_is_ignored() {
        let Board { mut store, s2, .. } = board();
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-1")));
        assert_eq!(
            dnd.drag_over(&mut store, Some(&DragId::Stage(s2))),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_over_foreign_target_is_ignored() {
        let Board { mut store, s1, .. } = board();
        let t1 = add(&mut store, &s1, "t1");
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::Task(t1));
        assert_eq!(dnd.drag_over(&mut store, None), Outcome::Unchanged);
        assert_eq!(
            dnd.drag_over(&mut store, Some(&DragId::PlaygroundField)),
            Outcome::Unchanged
        );
        assert_eq!(
            dnd.drag_over(&mut store, Some(&DragId::Stage(StageId::new("gone")))),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_drop_roadmap_card_creates_linked_task() {
        let Board { mut store, s1, s2 } = board();
        store.set_roadmap_deck(Some(DeckId::new("deck-1")));
        let hovered = add(&mut store, &s2, "existing");
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-2")));
        let outcome = dnd.drag_end(&mut store, Some(&DragId::Task(hovered)));

        let task_id = match outcome {
            Outcome::TaskCreated(id) => id,
            other => panic!("expected a task, got {other:?}"),
        };
        let (stage_id, task) = store.state().find_task(&task_id).unwrap();
        assert_eq!(stage_id, &s2);
        assert_eq!(task.title, "딥 워크");
        assert_eq!(task.linked_card_id, Some(CardId::new("card-2")));
        // No card synthesized
        assert_eq!(store.state().roadmap_deck().unwrap().len(), 5);
        assert!(titles(&store, &s1).is_empty());
    }

    #[test]
    fn test_drop_already_linked_card_is_ignored() {
        let Board { mut store, s1, .. } = board();
        store.set_roadmap_deck(Some(DeckId::new("deck-1")));
        let mut dnd = RoadmapDnd::new();

        for expected_tasks in [1, 1] {
            dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-1")));
            dnd.drag_end(&mut store, Some(&DragId::Stage(s1.clone())));
            assert_eq!(store.state().total_task_count(), expected_tasks);
        }
    }

    #[test]
    fn test_drop_without_target_or_deck() {
        let Board { mut store, s1, .. } = board();
        let mut dnd = RoadmapDnd::new();

        // No roadmap deck set
        dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-1")));
        assert_eq!(
            dnd.drag_end(&mut store, Some(&DragId::Stage(s1))),
            Outcome::Unchanged
        );

        store.set_roadmap_deck(Some(DeckId::new("deck-1")));
        dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-1")));
        assert_eq!(dnd.drag_end(&mut store, None), Outcome::Unchanged);
        assert_eq!(store.state().total_task_count(), 0);
    }

    #[test]
    fn test_end_and_cancel_reset_dedup_key() {
        let Board { mut store, s1, s2 } = board();
        let t1 = add(&mut store, &s1, "t1");
        let mut dnd = RoadmapDnd::new();
        let over = DragId::Stage(s2.clone());

        dnd.drag_start(DragId::Task(t1.clone()));
        dnd.drag_over(&mut store, Some(&over));
        dnd.drag_cancel();
        assert!(dnd.active().is_none());

        // Cancel keeps the live move
        assert_eq!(titles(&store, &s2), vec!["t1"]);

        store.move_task(&t1, None, &s2, &s1);
        dnd.drag_start(DragId::Task(t1));
        assert_eq!(dnd.drag_over(&mut store, Some(&over)), Outcome::Applied);
        assert_eq!(dnd.drag_end(&mut store, Some(&over)), Outcome::Unchanged);
        assert_eq!(dnd, RoadmapDnd::new());
    }

    #[test]
    fn test_overlay_lookups() {
        let Board { mut store, s1, .. } = board();
        store.set_roadmap_deck(Some(DeckId::new("deck-2")));
        let t1 = add(&mut store, &s1, "t1");
        let mut dnd = RoadmapDnd::new();

        dnd.drag_start(DragId::Task(t1));
        assert_eq!(dnd.active_task(store.state()).map(|t| t.title.as_str()), Some("t1"));
        assert!(dnd.active_card(store.state()).is_none());

        dnd.drag_start(DragId::RoadmapDeckCard(CardId::new("card-3")));
        assert!(dnd.active_task(store.state()).is_none());
        assert_eq!(
            dnd.active_card(store.state()).map(|c| c.title.as_str()),
            Some("에너지 충전")
        );
    }
}

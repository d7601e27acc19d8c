//! Roadmap stages and the tasks they hold.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::ids::{CardId, StageId, TaskId};

/// Progress of a roadmap task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not yet reachable.
    Locked,
    /// Open for work. New tasks start here.
    #[default]
    Active,
    /// Done.
    Completed,
}

/// A task inside a roadmap stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapTask {
    /// Task identifier.
    pub id: TaskId,

    /// Display title.
    pub title: String,

    /// Progress.
    pub status: TaskStatus,

    /// Card in the roadmap deck this task stands for.
    ///
    /// A weak reference: deleting the task leaves the card alone, and a
    /// dangling id is tolerated.
    pub linked_card_id: Option<CardId>,
}

impl RoadmapTask {
    /// Create an active, unlinked task.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Active,
            linked_card_id: None,
        }
    }

    /// Link the task to a card.
    #[must_use]
    pub fn linked_to(mut self, card_id: CardId) -> Self {
        self.linked_card_id = Some(card_id);
        self
    }
}

/// A column of the roadmap.
///
/// `index` mirrors the stage's position in the store and is rewritten after
/// every insert or delete so indices stay contiguous from 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStage {
    /// Stage identifier.
    pub id: StageId,

    /// Position among stages.
    pub index: usize,

    /// Display title (empty by default).
    pub title: String,

    /// Tasks in display order.
    pub tasks: Vector<RoadmapTask>,
}

impl RoadmapStage {
    /// Create an empty, untitled stage.
    #[must_use]
    pub fn new(id: StageId, index: usize) -> Self {
        Self {
            id,
            index,
            title: String::new(),
            tasks: Vector::new(),
        }
    }

    /// Position of a task in this stage.
    #[must_use]
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Find a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&RoadmapTask> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Check whether the stage holds a task.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_index(id).is_some()
    }
}

/// Options for adding a task.
///
/// With the defaults, a task added while a roadmap deck is set gets a fresh
/// card synthesized in that deck and is linked to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddTaskOptions {
    /// Synthesize a linked card in the roadmap deck. Ignored when
    /// `linked_card_id` is set.
    pub link_card: bool,

    /// Link to an existing card instead of synthesizing one.
    pub linked_card_id: Option<CardId>,
}

impl Default for AddTaskOptions {
    fn default() -> Self {
        Self {
            link_card: true,
            linked_card_id: None,
        }
    }
}

impl AddTaskOptions {
    /// Create an unlinked task, even when a roadmap deck is set.
    #[must_use]
    pub fn unlinked() -> Self {
        Self {
            link_card: false,
            linked_card_id: None,
        }
    }

    /// Link to an existing card.
    #[must_use]
    pub fn linked_to(card_id: CardId) -> Self {
        Self {
            link_card: true,
            linked_card_id: Some(card_id),
        }
    }
}

/// What a task deletion left behind.
///
/// Views use `stage_now_empty` and `stage_deletable` to decide whether to
/// offer deleting the emptied stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRemoval {
    /// The removed task.
    pub task: RoadmapTask,

    /// Stage the task was removed from.
    pub stage_id: StageId,

    /// The stage has no tasks left.
    pub stage_now_empty: bool,

    /// Deleting the stage now would be accepted.
    pub stage_deletable: bool,
}

/// Rewrite stage indices to match their positions.
pub(crate) fn reindex(stages: &mut Vector<RoadmapStage>) {
    for (i, stage) in stages.iter_mut().enumerate() {
        stage.index = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_active_and_unlinked() {
        let task = RoadmapTask::new(TaskId::new("t1"), "Write report");

        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.linked_card_id, None);

        let linked = task.linked_to(CardId::new("c1"));
        assert_eq!(linked.linked_card_id, Some(CardId::new("c1")));
    }

    #[test]
    fn test_task_lookup() {
        let mut stage = RoadmapStage::new(StageId::new("s1"), 0);
        stage.tasks.push_back(RoadmapTask::new(TaskId::new("t1"), "a"));
        stage.tasks.push_back(RoadmapTask::new(TaskId::new("t2"), "b"));

        assert_eq!(stage.task_index(&TaskId::new("t2")), Some(1));
        assert!(stage.contains(&TaskId::new("t1")));
        assert!(stage.task(&TaskId::new("t3")).is_none());
    }

    #[test]
    fn test_reindex() {
        let mut stages: Vector<_> = [5, 9, 2]
            .into_iter()
            .enumerate()
            .map(|(i, idx)| RoadmapStage::new(StageId::new(format!("s{i}")), idx))
            .collect();

        reindex(&mut stages);

        let indices: Vec<_> = stages.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}

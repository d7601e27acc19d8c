//! Roadmap transitions: stages, tasks, and task moves.
//!
//! ## Stage Indices
//!
//! Every insert or delete rewrites `index` on all stages so indices stay
//! contiguous from 0.
//!
//! ## Task Moves
//!
//! `move_task` resolves its target index from the hovered task when there is
//! one. For drops on the stage container itself (no task under the pointer)
//! the target depends on the direction:
//!
//! - same stage: the last existing position, `max(0, len - 1)`
//! - other stage: the end, `len` (append)
//!
//! A same-stage drop that resolves to the task's own position changes
//! nothing.

use log::debug;

use super::Store;
use crate::cards::Card;
use crate::core::ids::{CardId, StageId, TaskId};
use crate::core::ordering::{array_move, insert_clamped};
use crate::roadmap::{reindex, AddTaskOptions, RoadmapStage, RoadmapTask, TaskRemoval};

impl Store {
    // === Stages ===

    /// Insert an empty stage at `index` (clamped to the end) and return its id.
    pub fn add_stage(&mut self, index: usize) -> StageId {
        let id = self.ids.stage_id();
        let stages = &mut self.state.roadmap_stages;
        insert_clamped(stages, index, RoadmapStage::new(id.clone(), index));
        reindex(stages);
        id
    }

    /// Delete a stage.
    ///
    /// Rejected when fewer than `min_stage_count` stages would remain.
    pub fn delete_stage(&mut self, stage_id: &StageId) -> bool {
        let Some(pos) = self.stage_position(stage_id) else {
            debug!(
                "event=delete_stage module=store status=ignored reason=unknown_stage stage={}",
                stage_id
            );
            return false;
        };
        let remaining = self.state.roadmap_stages.len() - 1;
        if remaining < self.config.min_stage_count {
            debug!(
                "event=delete_stage module=store status=rejected reason=minimum_stages stage={} remaining={} minimum={}",
                stage_id, remaining, self.config.min_stage_count
            );
            return false;
        }

        self.state.roadmap_stages.remove(pos);
        reindex(&mut self.state.roadmap_stages);
        true
    }

    /// Rename a stage.
    pub fn update_stage_title(&mut self, stage_id: &StageId, title: impl Into<String>) -> bool {
        let Some(stage) = self.stage_mut(stage_id) else {
            debug!(
                "event=update_stage_title module=store status=ignored reason=unknown_stage stage={}",
                stage_id
            );
            return false;
        };
        stage.title = title.into();
        true
    }

    // === Tasks ===

    /// Append an active task to a stage and return its id.
    ///
    /// Linking, in order of precedence:
    /// 1. `options.linked_card_id` is stored as-is; no card is created.
    /// 2. With `options.link_card` and a roadmap deck set, a new card (cost
    ///    0, first cost unit, first card type, task title) is appended to
    ///    that deck and linked.
    /// 3. Otherwise the task is unlinked.
    ///
    /// An unknown stage changes nothing, including the roadmap deck.
    pub fn add_task(
        &mut self,
        stage_id: &StageId,
        title: impl Into<String>,
        options: AddTaskOptions,
    ) -> Option<TaskId> {
        let Some(pos) = self.stage_position(stage_id) else {
            debug!(
                "event=add_task module=store status=ignored reason=unknown_stage stage={}",
                stage_id
            );
            return None;
        };

        let title = title.into();
        let task_id = self.ids.task_id();
        let linked_card_id = match options.linked_card_id {
            Some(card_id) => Some(card_id),
            None if options.link_card => self.synthesize_roadmap_card(&title),
            None => None,
        };

        let mut task = RoadmapTask::new(task_id.clone(), title);
        task.linked_card_id = linked_card_id;
        if let Some(stage) = self.state.roadmap_stages.get_mut(pos) {
            stage.tasks.push_back(task);
        }
        Some(task_id)
    }

    /// Delete a task. The linked card, if any, stays in its deck.
    pub fn delete_task(&mut self, stage_id: &StageId, task_id: &TaskId) -> Option<TaskRemoval> {
        let stage_count = self.state.roadmap_stages.len();
        let min_stages = self.config.min_stage_count;

        let Some(stage) = self.stage_mut(stage_id) else {
            debug!(
                "event=delete_task module=store status=ignored reason=unknown_stage stage={}",
                stage_id
            );
            return None;
        };
        let Some(index) = stage.task_index(task_id) else {
            debug!(
                "event=delete_task module=store status=ignored reason=unknown_task stage={} task={}",
                stage_id, task_id
            );
            return None;
        };

        let task = stage.tasks.remove(index);
        let stage_now_empty = stage.tasks.is_empty();
        Some(TaskRemoval {
            task,
            stage_id: stage_id.clone(),
            stage_now_empty,
            stage_deletable: stage_now_empty && stage_count > min_stages,
        })
    }

    /// Rename a task.
    pub fn update_task(
        &mut self,
        stage_id: &StageId,
        task_id: &TaskId,
        title: impl Into<String>,
    ) -> bool {
        let task = self
            .stage_mut(stage_id)
            .and_then(|s| s.tasks.iter_mut().find(|t| &t.id == task_id));
        match task {
            Some(task) => {
                task.title = title.into();
                true
            }
            None => {
                debug!(
                    "event=update_task module=store status=ignored reason=unknown_task stage={} task={}",
                    stage_id, task_id
                );
                false
            }
        }
    }

    /// Reorder a task within its stage or transfer it to another stage.
    ///
    /// `over_id` is the task under the pointer; `None` (or an id not in the
    /// over stage) means the drop landed on the stage container. Both stages
    /// are updated in the same call.
    pub fn move_task(
        &mut self,
        active_id: &TaskId,
        over_id: Option<&TaskId>,
        active_stage_id: &StageId,
        over_stage_id: &StageId,
    ) -> bool {
        let (Some(active_pos), Some(over_pos)) = (
            self.stage_position(active_stage_id),
            self.stage_position(over_stage_id),
        ) else {
            debug!(
                "event=move_task module=store status=ignored reason=unknown_stage active_stage={} over_stage={}",
                active_stage_id, over_stage_id
            );
            return false;
        };

        let stages = &mut self.state.roadmap_stages;
        let Some(active_index) = stages[active_pos].task_index(active_id) else {
            debug!(
                "event=move_task module=store status=ignored reason=unknown_task task={} stage={}",
                active_id, active_stage_id
            );
            return false;
        };

        let over_stage = &stages[over_pos];
        let same_stage = active_pos == over_pos;
        let over_index = match over_id.and_then(|id| over_stage.task_index(id)) {
            Some(i) => i,
            None if same_stage => over_stage.tasks.len().saturating_sub(1),
            None => over_stage.tasks.len(),
        };

        if same_stage {
            if active_index == over_index {
                return false;
            }
            let Some(stage) = stages.get_mut(active_pos) else {
                return false;
            };
            return array_move(&mut stage.tasks, active_index, over_index);
        }

        let Some(task) = stages
            .get_mut(active_pos)
            .map(|stage| stage.tasks.remove(active_index))
        else {
            return false;
        };
        if let Some(stage) = stages.get_mut(over_pos) {
            insert_clamped(&mut stage.tasks, over_index, task);
        }
        true
    }

    // === Helpers ===

    fn stage_position(&self, stage_id: &StageId) -> Option<usize> {
        self.state
            .roadmap_stages
            .iter()
            .position(|s| &s.id == stage_id)
    }

    fn stage_mut(&mut self, stage_id: &StageId) -> Option<&mut RoadmapStage> {
        self.state
            .roadmap_stages
            .iter_mut()
            .find(|s| &s.id == stage_id)
    }

    /// Append a fresh card to the roadmap deck and return its id.
    fn synthesize_roadmap_card(&mut self, title: &str) -> Option<CardId> {
        let deck_id = self.state.roadmap_deck_id.clone()?;
        let pos = self.state.decks.iter().position(|d| d.id == deck_id)?;

        let cost_unit = self
            .config
            .default_cost_unit(self.state.cost_units.front().map(String::as_str))
            .to_string();
        let card_type = self
            .config
            .default_card_type(self.state.card_types.front().map(String::as_str))
            .to_string();
        let card = Card::new(self.ids.card_id(), title, 0.0, cost_unit, card_type);
        let card_id = card.id.clone();

        if let Some(deck) = self.state.decks.get_mut(pos) {
            deck.cards.push_back(card);
        }
        if self.state.active_deck_id.as_ref() == Some(&deck_id) {
            self.sync_field_with_active_deck();
        }
        Some(card_id)
    }
}

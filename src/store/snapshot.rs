//! Versioned binary snapshots of a store.
//!
//! A snapshot carries the state and the id generator position, so a restored
//! store keeps issuing ids that never collide with ones already in the state.
//! The encoding is bincode with the version as the leading `u16`.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Store, StoreError};
use crate::core::config::StoreConfig;
use crate::core::ids::{IdGenerator, IdGeneratorState};
use crate::core::state::StoreState;
use crate::roadmap::{reindex, RoadmapStage};

/// Current snapshot format.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Serialized form of a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version. Always the first field.
    pub version: u16,
    pub state: StoreState,
    pub ids: IdGeneratorState,
}

impl Store {
    /// Encode the store as snapshot bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] if encoding fails.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            state: self.state.clone(),
            ids: self.ids.state(),
        };
        let bytes = bincode::serialize(&snapshot)?;
        debug!(
            "event=export_snapshot module=store version={} bytes={}",
            SNAPSHOT_VERSION,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Rebuild a store from snapshot bytes.
    ///
    /// The restored state is normalized: stage indices are rewritten, deck
    /// links naming missing decks are cleared, and the field is synced to
    /// the active deck.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnsupportedSnapshot`] for another format version.
    /// - [`StoreError::Codec`] for truncated or malformed bytes.
    /// - Any error from [`StoreConfig::validate`].
    pub fn restore(bytes: &[u8], config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;

        let version: u16 = bincode::deserialize(bytes)?;
        if version != SNAPSHOT_VERSION {
            warn!(
                "event=restore_snapshot module=store status=rejected found={} expected={}",
                version, SNAPSHOT_VERSION
            );
            return Err(StoreError::UnsupportedSnapshot {
                found: version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let Snapshot { state, ids, .. } = bincode::deserialize(bytes)?;
        let mut store = Self {
            state,
            config,
            ids: IdGenerator::from_state(&ids),
        };
        store.normalize();

        debug!(
            "event=restore_snapshot module=store decks={} stages={} tasks={}",
            store.state.decks.len(),
            store.state.roadmap_stages.len(),
            store.state.total_task_count()
        );
        Ok(store)
    }

    fn normalize(&mut self) {
        reindex(&mut self.state.roadmap_stages);

        let missing = self
            .config
            .min_stage_count
            .saturating_sub(self.state.roadmap_stages.len());
        if missing > 0 {
            for _ in 0..missing {
                let index = self.state.roadmap_stages.len();
                let stage = RoadmapStage::new(self.ids.stage_id(), index);
                self.state.roadmap_stages.push_back(stage);
            }
            debug!(
                "event=restore module=store status=padded_stages added={} stages={}",
                missing,
                self.state.roadmap_stages.len()
            );
        }

        if let Some(id) = self.state.roadmap_deck_id.clone() {
            if self.state.deck(&id).is_none() {
                self.state.roadmap_deck_id = None;
            }
        }
        match self.state.active_deck_id.clone() {
            Some(id) if self.state.deck(&id).is_none() => {
                self.state.active_deck_id = None;
                self.state.field = im::Vector::new();
            }
            Some(_) => self.sync_field_with_active_deck(),
            None => {}
        }
    }
}

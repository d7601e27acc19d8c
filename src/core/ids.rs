//! Identity scheme: typed string ids and their generator.
//!
//! Every card, deck, stage, and task carries a prefix-tagged string id:
//!
//! - `card-{sequence}-{suffix}`
//! - `deck-{sequence}-{suffix}`
//! - `stage-{sequence}-{suffix}`
//! - `task-{sequence}-{suffix}`
//!
//! The sequence is monotonic per generator, so ids from one generator never
//! collide. The suffix is seven base-36 characters drawn from a seedable
//! ChaCha8 stream, which keeps ids from different sessions apart.
//!
//! Ids supplied by callers (seed decks, imported cards) are accepted as-is;
//! the prefix is a convention of generated ids, not a requirement.
//!
//! ## Usage
//!
//! ```
//! use lifedeck::core::{IdGenerator, CardId};
//!
//! let mut ids = IdGenerator::new(42);
//! let card: CardId = ids.card_id();
//! assert!(card.as_str().starts_with("card-1-"));
//!
//! // Same seed, same ids
//! let mut again = IdGenerator::new(42);
//! assert_eq!(again.card_id(), card);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used by generated ids of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Wrap an existing id string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a card. Unique within its owning deck.
    CardId,
    "card"
);

string_id!(
    /// Identifier of a deck. Unique within the deck collection.
    DeckId,
    "deck"
);

string_id!(
    /// Identifier of a roadmap stage.
    StageId,
    "stage"
);

string_id!(
    /// Identifier of a roadmap task. Unique within its stage.
    TaskId,
    "task"
);

/// Generator for prefix-tagged ids.
///
/// Deterministic for a given seed; use [`IdGenerator::from_entropy`] for
/// interactive sessions.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    inner: ChaCha8Rng,
    seed: u64,
    sequence: u64,
}

impl IdGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            sequence: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Generate a raw id string with the given prefix.
    pub fn next_with_prefix(&mut self, prefix: &str) -> String {
        self.sequence += 1;
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| {
                let i = self.inner.gen_range(0..SUFFIX_ALPHABET.len());
                SUFFIX_ALPHABET[i] as char
            })
            .collect();
        format!("{prefix}-{}-{suffix}", self.sequence)
    }

    /// Generate a card id.
    pub fn card_id(&mut self) -> CardId {
        CardId(self.next_with_prefix(CardId::PREFIX))
    }

    /// Generate a deck id.
    pub fn deck_id(&mut self) -> DeckId {
        DeckId(self.next_with_prefix(DeckId::PREFIX))
    }

    /// Generate a stage id.
    pub fn stage_id(&mut self) -> StageId {
        StageId(self.next_with_prefix(StageId::PREFIX))
    }

    /// Generate a task id.
    pub fn task_id(&mut self) -> TaskId {
        TaskId(self.next_with_prefix(TaskId::PREFIX))
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> IdGeneratorState {
        IdGeneratorState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            sequence: self.sequence,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &IdGeneratorState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            sequence: state.sequence,
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Serializable generator state for snapshots.
///
/// Restoring resumes both the sequence and the ChaCha8 stream, so ids issued
/// after a restore never repeat ids issued before it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGeneratorState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Ids issued so far
    pub sequence: u64,
}

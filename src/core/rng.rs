//! Dice and deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Validated rolls**: `DieRoll` can only hold 1-6
//! - **Injectable**: the engine only sees the `Die` trait
//! - **Deterministic**: same seed produces identical rolls
//! - **Resumable**: `GameRngState` picks the roll sequence up where it stopped
//!
//! ## Usage
//!
//! ```
//! use ludo_engine::core::{roll_die, Die, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = roll_die(&mut rng);
//! assert!((1..=6).contains(&roll.value()));
//!
//! // Same seed, same rolls
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::{RulesError, RulesResult};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// A single die value, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    /// The roll that lets a token leave the yard and grants an extra turn.
    pub const SIX: DieRoll = DieRoll(6);

    /// Validate a raw die value.
    pub fn new(value: u8) -> RulesResult<Self> {
        if (1..=DIE_FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RulesError::InvalidDieValue(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == DIE_FACES
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of die rolls.
///
/// The engine never rolls on its own; callers inject a `Die`.
/// Production code uses a uniformly distributed source such as `GameRng`.
pub trait Die {
    /// Roll once.
    fn roll(&mut self) -> DieRoll;
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> DieRoll {
        (**self).roll()
    }
}

/// Roll the injected die once.
pub fn roll_die(die: &mut impl Die) -> DieRoll {
    die.roll()
}

/// Seeded die and tie-break source.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Where the stream stands, for resuming a stopped game.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue the stream recorded in `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Die for GameRng {
    fn roll(&mut self) -> DieRoll {
        DieRoll(self.inner.gen_range(1..=DIE_FACES))
    }
}

/// Position in a seeded roll stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// A die that replays a fixed sequence of rolls.
///
/// Used for tests and for replaying a recorded game. Once the script is
/// exhausted it falls back to the seeded RNG.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    script: VecDeque<DieRoll>,
    fallback: GameRng,
}

impl ScriptedDie {
    /// Create a die from raw values, validating each one.
    pub fn new(values: impl IntoIterator<Item = u8>) -> RulesResult<Self> {
        let script = values
            .into_iter()
            .map(DieRoll::new)
            .collect::<RulesResult<VecDeque<_>>>()?;
        Ok(Self {
            script,
            fallback: GameRng::new(0),
        })
    }

    /// Rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> DieRoll {
        match self.script.pop_front() {
            Some(roll) => roll,
            None => self.fallback.roll(),
        }
    }
}

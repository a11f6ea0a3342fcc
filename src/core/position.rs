//! Token positions across the three coordinate spaces.
//!
//! A token is always in exactly one of:
//! - the yard (not yet entered),
//! - the shared ring, at an absolute cell `1..=52`,
//! - its color's private home stretch, at a step `1..=5`,
//! - finished.
//!
//! Step 6 of the home stretch is never stored: landing on it means
//! `Finished`. All arithmetic that moves a token between variants lives in
//! [`crate::board`]; nothing here adds integers across variant boundaries.

use serde::{Deserialize, Serialize};

use crate::board::{HOME_STRETCH_LENGTH, RING_LENGTH};

/// Where a single token is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered.
    #[default]
    Yard,
    /// Absolute cell on the shared ring, `1..=52`.
    Ring(u8),
    /// Step on the owning color's home stretch, `1..=5`.
    HomeStretch(u8),
    /// Completed the course.
    Finished,
}

impl Position {
    #[must_use]
    pub const fn is_yard(self) -> bool {
        matches!(self, Position::Yard)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Position::Finished)
    }

    /// The ring cell, if the token is on the ring.
    #[must_use]
    pub const fn ring_cell(self) -> Option<u8> {
        match self {
            Position::Ring(cell) => Some(cell),
            _ => None,
        }
    }

    /// Check the payload is inside its variant's range.
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        match self {
            Position::Yard | Position::Finished => true,
            Position::Ring(cell) => cell >= 1 && cell <= RING_LENGTH,
            Position::HomeStretch(step) => step >= 1 && step < HOME_STRETCH_LENGTH,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Yard => f.write_str("yard"),
            Position::Ring(cell) => write!(f, "ring {}", cell),
            Position::HomeStretch(step) => write!(f, "home {}", step),
            Position::Finished => f.write_str("finished"),
        }
    }
}

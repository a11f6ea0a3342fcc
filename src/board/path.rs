//! Variant-aware position arithmetic.
//!
//! A token's place along its own course is measured as *progress*: steps
//! travelled since its entry cell. Progress `0..=50` is on the ring; the
//! color's home entrance is always progress 50. Moving past it diverts
//! onto the home stretch. Every color uses the same arithmetic in its own
//! frame, so ring wraparound never interferes with home-entry detection.

use crate::core::{Color, DieRoll, Position};

use super::topology::{entry_cell, HOME_STRETCH_LENGTH, RING_LENGTH};

/// Progress of the home-entrance cell, identical for every color.
pub const LAST_RING_PROGRESS: u8 = RING_LENGTH - 2;

/// Steps from `color`'s entry cell to ring `cell`, in `0..52`.
#[must_use]
pub const fn progress(color: Color, cell: u8) -> u8 {
    (cell + RING_LENGTH - entry_cell(color)) % RING_LENGTH
}

/// The absolute ring cell at `progress` steps past `color`'s entry cell.
#[must_use]
pub const fn ring_cell_at(color: Color, progress: u8) -> u8 {
    (entry_cell(color) - 1 + progress) % RING_LENGTH + 1
}

/// Check whether `color` can ever occupy `position`.
///
/// Rejects out-of-range payloads and the one ring cell between a color's
/// home entrance and its entry cell, which that color never visits.
#[must_use]
pub fn is_reachable(color: Color, position: Position) -> bool {
    match position {
        Position::Ring(cell) => position.is_well_formed() && progress(color, cell) <= LAST_RING_PROGRESS,
        other => other.is_well_formed(),
    }
}

/// Where a token of `color` at `from` ends up after `roll`.
///
/// Returns `None` if the token cannot move: a yard token without a six,
/// a finished token, or a home-stretch overshoot.
#[must_use]
pub fn advance(color: Color, from: Position, roll: DieRoll) -> Option<Position> {
    let steps = roll.value();
    match from {
        Position::Yard => roll.is_six().then_some(Position::Ring(entry_cell(color))),
        Position::Finished => None,
        Position::HomeStretch(step) => home_stretch_step(step + steps),
        Position::Ring(cell) => {
            let travelled = progress(color, cell) + steps;
            if travelled > LAST_RING_PROGRESS {
                home_stretch_step(travelled - LAST_RING_PROGRESS)
            } else {
                Some(Position::Ring(ring_cell_at(color, travelled)))
            }
        }
    }
}

/// Steps `color`'s token at `position` has travelled along its course.
///
/// Yard is 0, the entry cell 1, the home entrance 51, and finishing 57.
/// Every legal move strictly increases this, except captures which reset
/// the victim to 0.
#[must_use]
pub fn distance_travelled(color: Color, position: Position) -> u8 {
    match position {
        Position::Yard => 0,
        Position::Ring(cell) => progress(color, cell) + 1,
        Position::HomeStretch(step) => LAST_RING_PROGRESS + 1 + step,
        Position::Finished => LAST_RING_PROGRESS + 1 + HOME_STRETCH_LENGTH,
    }
}

fn home_stretch_step(step: u8) -> Option<Position> {
    match step.cmp(&HOME_STRETCH_LENGTH) {
        std::cmp::Ordering::Less => Some(Position::HomeStretch(step)),
        std::cmp::Ordering::Equal => Some(Position::Finished),
        std::cmp::Ordering::Greater => None,
    }
}

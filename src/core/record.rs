//! Move records and capture events.
//!
//! Every applied move is logged as a `MoveRecord` so a game can be
//! replayed or inspected after the fact. Captures travel with the move
//! that caused them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::position::Position;
use super::rng::DieRoll;
use super::token::TokenId;

/// An opponent token sent back to the yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureEvent {
    /// Color of the moving token.
    pub attacker: Color,
    /// Color of the captured token.
    pub victim: Color,
    /// Which of the victim's tokens was captured.
    pub victim_token: TokenId,
    /// Ring cell where the capture happened.
    pub cell: u8,
}

/// Captures caused by a single move.
///
/// Usually empty or a single event; stacked opponents produce several.
pub type Captures = SmallVec<[CaptureEvent; 2]>;

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Post-game statistics
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number (resolved rolls so far) when the move was made.
    pub turn: u32,

    /// The color that moved.
    pub color: Color,

    /// The token that moved.
    pub token: TokenId,

    /// The roll used.
    pub roll: DieRoll,

    /// Position before the move.
    pub from: Position,

    /// Position after the move.
    pub to: Position,

    /// Opponent tokens sent back to the yard.
    pub captures: Captures,
}

impl MoveRecord {
    /// Check if this move finished the token.
    #[must_use]
    pub fn finished_token(&self) -> bool {
        self.to.is_finished()
    }
}

//! Error types for rules operations.
//!
//! Every error is reported before any state is touched: a rejected call
//! leaves the game exactly as it was.

use thiserror::Error;

use crate::core::{Color, Position, TokenId};

/// Errors that can occur when driving the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The token cannot move with this roll, or the color/roll is stale.
    #[error("illegal move: {color} token {token} cannot move with a roll of {roll}")]
    IllegalMove { color: Color, token: TokenId, roll: u8 },

    /// A mutating call was made after the game was won.
    #[error("game is already over: {winner} has won")]
    GameAlreadyOver { winner: Color },

    /// The die source produced a value outside 1-6.
    #[error("invalid die value: {0} (must be 1-6)")]
    InvalidDieValue(u8),

    /// A turn-controller call was made in the wrong phase.
    #[error("unexpected phase: expected {expected}, found {found}")]
    UnexpectedPhase {
        expected: &'static str,
        found: &'static str,
    },

    /// A hand-built state holds a position its color can never reach.
    #[error("invalid position for {color} token {token}: {position}")]
    InvalidPosition {
        color: Color,
        token: TokenId,
        position: Position,
    },

    /// A decoded state names a winner its tokens do not back up.
    #[error("recorded winner {recorded:?} does not match finished tokens ({finished:?})")]
    WinnerMismatch {
        recorded: Option<Color>,
        finished: Option<Color>,
    },
}

/// Result type alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = RulesError::IllegalMove {
            color: Color::Red,
            token: TokenId::new(1),
            roll: 2,
        };
        assert_eq!(
            err.to_string(),
            "illegal move: Red token 1 cannot move with a roll of 2"
        );
    }

    #[test]
    fn test_game_over_display() {
        let err = RulesError::GameAlreadyOver { winner: Color::Blue };
        assert_eq!(err.to_string(), "game is already over: Blue has won");
    }

    #[test]
    fn test_invalid_die_display() {
        assert_eq!(
            RulesError::InvalidDieValue(7).to_string(),
            "invalid die value: 7 (must be 1-6)"
        );
    }

    #[test]
    fn test_invalid_position_display() {
        let err = RulesError::InvalidPosition {
            color: Color::Green,
            token: TokenId::new(4),
            position: Position::Ring(13),
        };
        assert_eq!(err.to_string(), "invalid position for Green token 4: ring 13");
    }

    #[test]
    fn test_winner_mismatch_display() {
        let err = RulesError::WinnerMismatch {
            recorded: Some(Color::Red),
            finished: None,
        };
        assert_eq!(
            err.to_string(),
            "recorded winner Some(Red) does not match finished tokens (None)"
        );
    }
}

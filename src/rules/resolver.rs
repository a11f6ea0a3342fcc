//! Move resolver: which tokens can move, and what moving one does.
//!
//! Both `movable_tokens` and `apply_move` go through [`preview_move`], so
//! a token is movable exactly when applying it would succeed.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::advance;
use crate::core::{Captures, Color, DieRoll, GameState, MoveRecord, Position, TokenId};
use crate::error::{RulesError, RulesResult};

use super::capture::resolve_captures;

/// Tokens that can legally move, in ascending id order.
pub type MovableSet = SmallVec<[TokenId; 4]>;

/// Result of applying one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The color that moved.
    pub color: Color,
    /// The token that moved.
    pub token: TokenId,
    /// Position before the move.
    pub from: Position,
    /// Position after the move.
    pub to: Position,
    /// Opponent tokens sent back to the yard.
    pub captures: Captures,
}

impl MoveOutcome {
    #[must_use]
    pub fn captured(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Where `token` would end up with `roll`, without touching the state.
///
/// Returns `None` if the token cannot move.
#[must_use]
pub fn preview_move(state: &GameState, color: Color, token: TokenId, roll: DieRoll) -> Option<Position> {
    advance(color, state.position(color, token), roll)
}

/// Compute the tokens `color` may move with `roll`.
///
/// - Yard: only on a six
/// - Ring: always
/// - Home stretch: only if the roll does not overshoot the last step
/// - Finished: never
///
/// Returns an empty set once the game is over.
#[must_use]
pub fn movable_tokens(state: &GameState, color: Color, roll: DieRoll) -> MovableSet {
    if state.is_over() {
        return MovableSet::new();
    }

    let movable: MovableSet = TokenId::ALL
        .into_iter()
        .filter(|&token| preview_move(state, color, token, roll).is_some())
        .collect();

    trace!(%color, %roll, ?movable, "movable tokens");
    movable
}

/// Move `token` of `color` by `roll`.
///
/// Fails without mutating anything if the game is over, if `color` is not
/// the active color, or if the token is not movable with this roll.
/// Captures are resolved whenever the token lands on a ring cell, and the
/// winner is declared when the move finishes `color`'s last token.
///
/// The active color only moves on through [`end_turn`](super::end_turn).
/// Callers that don't want to sequence turns themselves should drive a
/// [`Game`](super::Game) instead.
pub fn apply_move(
    state: &mut GameState,
    color: Color,
    token: TokenId,
    roll: DieRoll,
) -> RulesResult<MoveOutcome> {
    if let Some(winner) = state.winner() {
        return Err(RulesError::GameAlreadyOver { winner });
    }

    let illegal = RulesError::IllegalMove {
        color,
        token,
        roll: roll.value(),
    };

    if color != state.active_color() {
        return Err(illegal);
    }

    let from = state.position(color, token);
    let to = preview_move(state, color, token, roll).ok_or(illegal)?;

    state.set_position(color, token, to);

    let captures = match to {
        Position::Ring(cell) => resolve_captures(state, color, cell),
        _ => Captures::new(),
    };

    debug!(%color, %token, %roll, %from, %to, captures = captures.len(), "token moved");

    state.record_move(MoveRecord {
        turn: state.turn_number(),
        color,
        token,
        roll,
        from,
        to,
        captures: captures.clone(),
    });

    if check_win(state, color) {
        state.declare_winner(color);
    }

    Ok(MoveOutcome {
        color,
        token,
        from,
        to,
        captures,
    })
}

/// Check if every token of `color` has finished.
#[must_use]
pub fn check_win(state: &GameState, color: Color) -> bool {
    state.tokens(color).all_finished()
}

/// Number of `color`'s tokens that have finished.
#[must_use]
pub fn tokens_finished(state: &GameState, color: Color) -> usize {
    state.tokens(color).count(Position::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorMap;

    fn roll(value: u8) -> DieRoll {
        DieRoll::new(value).unwrap()
    }

    fn state_with(active: Color, setup: &[(Color, u8, Position)]) -> GameState {
        let mut positions = ColorMap::with_value([Position::Yard; 4]);
        for &(color, token, position) in setup {
            positions[color][token as usize - 1] = position;
        }
        GameState::from_positions(active, positions).unwrap()
    }

    #[test]
    fn test_new_game_needs_six() {
        let state = GameState::new();

        for value in 1..6 {
            assert!(movable_tokens(&state, Color::Red, roll(value)).is_empty());
        }
        assert_eq!(movable_tokens(&state, Color::Red, roll(6)).as_slice(), &TokenId::ALL);
    }

    #[test]
    fn test_movable_mixed() {
        let state = state_with(
            Color::Red,
            &[
                (Color::Red, 1, Position::Ring(10)),
                (Color::Red, 2, Position::HomeStretch(4)),
                (Color::Red, 3, Position::Finished),
            ],
        );

        let movable = movable_tokens(&state, Color::Red, roll(3));
        assert_eq!(movable.as_slice(), &[TokenId::new(1)]);

        let movable = movable_tokens(&state, Color::Red, roll(2));
        assert_eq!(movable.as_slice(), &[TokenId::new(1), TokenId::new(2)]);

        let movable = movable_tokens(&state, Color::Red, roll(6));
        assert_eq!(movable.as_slice(), &[TokenId::new(1), TokenId::new(4)]);
    }

    #[test]
    fn test_enter_from_yard() {
        let mut state = GameState::new();
        let outcome = apply_move(&mut state, Color::Red, TokenId::new(1), roll(6)).unwrap();

        assert_eq!(outcome.from, Position::Yard);
        assert_eq!(outcome.to, Position::Ring(1));
        assert!(!outcome.captured());
        assert_eq!(state.position(Color::Red, TokenId::new(1)), Position::Ring(1));
    }

    #[test]
    fn test_apply_rejects_wrong_color() {
        let mut state = GameState::new();
        let before = state.clone();

        let err = apply_move(&mut state, Color::Green, TokenId::new(1), roll(6)).unwrap_err();
        assert!(matches!(err, RulesError::IllegalMove { color: Color::Green, .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_rejects_immovable_token() {
        let mut state = state_with(Color::Red, &[(Color::Red, 1, Position::HomeStretch(5))]);
        let before = state.clone();

        let err = apply_move(&mut state, Color::Red, TokenId::new(1), roll(2)).unwrap_err();
        assert_eq!(
            err,
            RulesError::IllegalMove {
                color: Color::Red,
                token: TokenId::new(1),
                roll: 2,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_after_win_rejected() {
        let mut state = state_with(
            Color::Green,
            &[
                (Color::Red, 1, Position::Finished),
                (Color::Red, 2, Position::Finished),
                (Color::Red, 3, Position::Finished),
                (Color::Red, 4, Position::Finished),
                (Color::Green, 1, Position::Ring(20)),
            ],
        );

        let err = apply_move(&mut state, Color::Green, TokenId::new(1), roll(3)).unwrap_err();
        assert_eq!(err, RulesError::GameAlreadyOver { winner: Color::Red });
        assert!(movable_tokens(&state, Color::Green, roll(3)).is_empty());
    }

    #[test]
    fn test_apply_declares_winner_on_last_token() {
        let mut state = state_with(
            Color::Red,
            &[
                (Color::Red, 1, Position::Finished),
                (Color::Red, 2, Position::Finished),
                (Color::Red, 3, Position::Finished),
                (Color::Red, 4, Position::HomeStretch(5)),
                (Color::Green, 1, Position::Ring(20)),
            ],
        );

        let outcome = apply_move(&mut state, Color::Red, TokenId::new(4), roll(1)).unwrap();
        assert_eq!(outcome.to, Position::Finished);
        assert_eq!(state.winner(), Some(Color::Red));
        assert!(state.is_over());

        assert!(movable_tokens(&state, Color::Green, roll(3)).is_empty());

        let before = state.clone();
        let err = apply_move(&mut state, Color::Red, TokenId::new(4), roll(1)).unwrap_err();
        assert_eq!(err, RulesError::GameAlreadyOver { winner: Color::Red });
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_records_history() {
        let mut state = GameState::new();
        apply_move(&mut state, Color::Red, TokenId::new(2), roll(6)).unwrap();

        let record = state.history().back().unwrap();
        assert_eq!(record.color, Color::Red);
        assert_eq!(record.token, TokenId::new(2));
        assert_eq!(record.from, Position::Yard);
        assert_eq!(record.to, Position::Ring(1));
        assert_eq!(record.roll, roll(6));
    }

    #[test]
    fn test_home_stretch_finish() {
        let mut state = state_with(Color::Blue, &[(Color::Blue, 3, Position::HomeStretch(2))]);

        let outcome = apply_move(&mut state, Color::Blue, TokenId::new(3), roll(4)).unwrap();
        assert_eq!(outcome.to, Position::Finished);
        assert_eq!(tokens_finished(&state, Color::Blue), 1);
        assert!(!check_win(&state, Color::Blue));
    }

    #[test]
    fn test_check_win() {
        let state = state_with(
            Color::Red,
            &[
                (Color::Yellow, 1, Position::Finished),
                (Color::Yellow, 2, Position::Finished),
                (Color::Yellow, 3, Position::Finished),
                (Color::Yellow, 4, Position::HomeStretch(5)),
            ],
        );
        assert!(!check_win(&state, Color::Yellow));
        assert_eq!(tokens_finished(&state, Color::Yellow), 3);
        assert!(!check_win(&state, Color::Red));
    }
}

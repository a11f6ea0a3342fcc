//! Token-choice policies.
//!
//! Policies are trait-based so front ends can plug in a human prompt, a
//! scripted choice, or a heuristic:
//! - `FirstMovable`: lowest token id
//! - `RandomPolicy`: uniform over the movable set
//! - `GreedyPolicy`: capture, then finish, then leave the yard, then
//!   push the most advanced token

use crate::board::{distance_travelled, is_safe_cell};
use crate::core::{Color, DieRoll, GameRng, GameState, Position, TokenId};
use crate::rules::preview_move;

/// Picks which token to move.
pub trait TokenPolicy {
    /// Choose one token from `movable`.
    ///
    /// `movable` is never empty and holds only legal tokens for `roll`.
    fn choose(&mut self, state: &GameState, color: Color, roll: DieRoll, movable: &[TokenId]) -> TokenId;
}

impl<P: TokenPolicy + ?Sized> TokenPolicy for &mut P {
    fn choose(&mut self, state: &GameState, color: Color, roll: DieRoll, movable: &[TokenId]) -> TokenId {
        (**self).choose(state, color, roll, movable)
    }
}

/// Always moves the lowest-numbered movable token.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovable;

impl TokenPolicy for FirstMovable {
    fn choose(&mut self, _state: &GameState, _color: Color, _roll: DieRoll, movable: &[TokenId]) -> TokenId {
        movable[0]
    }
}

/// Picks uniformly among movable tokens.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl TokenPolicy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, _color: Color, _roll: DieRoll, movable: &[TokenId]) -> TokenId {
        movable[self.rng.gen_range_usize(0..movable.len())]
    }
}

/// One-ply heuristic.
///
/// Scores each move by what it achieves and breaks ties toward the token
/// that has travelled furthest, then the lowest id.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn score(state: &GameState, color: Color, token: TokenId, roll: DieRoll) -> (u8, u8) {
        let from = state.position(color, token);
        let priority = match preview_move(state, color, token, roll) {
            Some(Position::Ring(cell))
                if !is_safe_cell(cell) && state.opponents_at(color, cell).next().is_some() =>
            {
                3
            }
            Some(Position::Finished) => 2,
            Some(_) if from.is_yard() => 1,
            _ => 0,
        };
        (priority, distance_travelled(color, from))
    }
}

impl TokenPolicy for GreedyPolicy {
    fn choose(&mut self, state: &GameState, color: Color, roll: DieRoll, movable: &[TokenId]) -> TokenId {
        let mut best = movable[0];
        let mut best_score = Self::score(state, color, best, roll);

        for &token in &movable[1..] {
            let score = Self::score(state, color, token, roll);
            if score > best_score {
                best = token;
                best_score = score;
            }
        }

        best
    }
}

//! Ludo rules: move resolution, captures, and turn control.
//!
//! - `resolver`: which tokens can move and what moving one does
//! - `capture`: sending opponents back to the yard
//! - `engine`: the turn cycle (`Game`), extra turns, and the winner

pub mod resolver;
pub mod capture;
pub mod engine;

pub use resolver::{
    apply_move, check_win, movable_tokens, preview_move, tokens_finished, MovableSet, MoveOutcome,
};
pub use capture::resolve_captures;
pub use engine::{end_turn, Game, RollOutcome, TurnOutcome, TurnPhase};

//! Headless play: token-choice policies and the driver loop.
//!
//! The driver owns the I/O-free half of a game loop: it rolls the injected
//! die, asks a policy which token to move, and feeds both into the turn
//! controller. Console or network front ends sit on top of this.

pub mod policy;
pub mod driver;

pub use policy::{FirstMovable, GreedyPolicy, RandomPolicy, TokenPolicy};
pub use driver::{play_game, play_game_with, play_turn, resume_game, GameSummary, TurnReport};

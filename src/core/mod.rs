//! Core engine types: colors, tokens, positions, dice, state, configuration.
//!
//! This module holds the data the rules operate on. It contains no rule
//! logic beyond range checks; see `board` and `rules` for that.

pub mod color;
pub mod token;
pub mod position;
pub mod rng;
pub mod record;
pub mod config;
pub mod state;
pub mod view;

pub use color::{Color, ColorMap};
pub use token::{PlayerTokens, TokenId, TOKENS_PER_COLOR};
pub use position::Position;
pub use rng::{roll_die, Die, DieRoll, GameRng, GameRngState, ScriptedDie, DIE_FACES};
pub use record::{CaptureEvent, Captures, MoveRecord};
pub use config::PlayConfig;
pub use state::{new_game, GameState};
pub use view::{BoardView, TokenView};

//! # ludo-engine
//!
//! Rules engine for four-player Ludo: token positions, legal moves for a
//! die roll, captures, home-stretch entry, turn order and the winner.
//!
//! ## Design Principles
//!
//! 1. **Tagged positions**: a token is in the yard, on the ring, on its
//!    home stretch, or finished. No integer encoding can alias two of
//!    these.
//!
//! 2. **Owned state**: `GameState` is read-only outside the crate. It only
//!    changes through the resolver and the turn controller, and a rejected
//!    call never leaves a partial change behind.
//!
//! 3. **Injected randomness**: the engine never rolls on its own. Callers
//!    supply a `Die`; `GameRng` is the seeded production source.
//!
//! 4. **No I/O**: rendering and prompting live outside. `BoardView` and
//!    `TokenPolicy` are the seams.
//!
//! ## Modules
//!
//! - `core`: colors, tokens, positions, dice, state, configuration
//! - `board`: fixed topology and position arithmetic
//! - `rules`: move resolver, captures, turn controller
//! - `play`: token-choice policies and the headless driver loop
//! - `error`: rules errors
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{Color, DieRoll, Game, Position, RollOutcome, TokenId};
//!
//! let mut game = Game::new();
//!
//! let outcome = game.roll(DieRoll::SIX).unwrap();
//! assert!(matches!(outcome, RollOutcome::MustChoose { color: Color::Red, .. }));
//!
//! let turn = game.choose(TokenId::new(1)).unwrap();
//! assert_eq!(turn.outcome.to, Position::Ring(1));
//! assert!(turn.extra_turn);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod play;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    new_game, roll_die, BoardView, CaptureEvent, Captures, Color, ColorMap, Die, DieRoll, GameRng,
    GameRngState, GameState, MoveRecord, PlayConfig, PlayerTokens, Position, ScriptedDie, TokenId,
    TokenView,
};

pub use crate::board::{entry_cell, home_entrance, is_safe_cell, HOME_STRETCH_LENGTH, RING_LENGTH, SAFE_CELLS};

pub use crate::rules::{
    apply_move, check_win, end_turn, movable_tokens, preview_move, resolve_captures, tokens_finished, Game,
    MovableSet, MoveOutcome, RollOutcome, TurnOutcome, TurnPhase,
};

pub use crate::play::{
    play_game, play_game_with, play_turn, resume_game, FirstMovable, GameSummary, GreedyPolicy, RandomPolicy,
    TokenPolicy, TurnReport,
};

pub use crate::error::{RulesError, RulesResult};

//! Driver loop: roll, choose, apply, repeat.
//!
//! Runs games with no console or network attached. A front end that
//! wants to prompt a human implements `TokenPolicy` and calls
//! [`play_turn`] in its own loop.
//!
//! A seeded game stopped by the turn cap can be continued with
//! [`resume_game`] from its summary's state and roll-stream position.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Color, ColorMap, Die, DieRoll, GameRng, GameRngState, GameState, PlayConfig};
use crate::error::{RulesError, RulesResult};
use crate::rules::{Game, RollOutcome, TurnOutcome};

use super::policy::TokenPolicy;

/// What happened during one roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnReport {
    /// Nothing could move.
    Skipped {
        color: Color,
        roll: DieRoll,
        extra_turn: bool,
    },
    /// A token moved.
    Moved(TurnOutcome),
}

impl TurnReport {
    /// Check if the same color rolls again.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        match self {
            TurnReport::Skipped { extra_turn, .. } => *extra_turn,
            TurnReport::Moved(turn) => turn.extra_turn,
        }
    }
}

/// Summary of a finished (or abandoned) game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSummary {
    /// Winner, or `None` if the turn cap was hit first.
    pub winner: Option<Color>,
    /// Resolved rolls since the start of the game.
    pub turns: u32,
    /// Rolls that moved a token in this run.
    pub moves: u32,
    /// Rolls with nothing to move in this run.
    pub skips: u32,
    /// Opponent tokens each color sent back to the yard in this run.
    pub captures: ColorMap<u32>,
    /// Final state, including history if it was recorded.
    pub state: GameState,
    /// Where the seeded die stopped. `None` when the caller supplied the die.
    pub rng: Option<GameRngState>,
}

/// Run one roll of the active color to completion.
pub fn play_turn(
    game: &mut Game,
    die: &mut impl Die,
    policy: &mut impl TokenPolicy,
) -> RulesResult<TurnReport> {
    let report = match game.roll_with(die)? {
        RollOutcome::Skipped {
            color,
            roll,
            extra_turn,
        } => TurnReport::Skipped {
            color,
            roll,
            extra_turn,
        },
        RollOutcome::MustChoose {
            color,
            roll,
            movable,
        } => {
            let token = policy.choose(game.state(), color, roll, &movable);
            TurnReport::Moved(game.choose(token)?)
        }
    };

    debug!(turn = game.state().turn_number(), ?report, "turn resolved");
    Ok(report)
}

/// Play a seeded game with the same policy for every color.
pub fn play_game(config: &PlayConfig, policy: &mut impl TokenPolicy) -> RulesResult<GameSummary> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = play_game_with(config, &mut rng, policy)?;
    summary.rng = Some(rng.state());
    Ok(summary)
}

/// Play a game with an explicit die.
///
/// Stops at the first winner or when `config.max_turns` rolls have been
/// resolved.
pub fn play_game_with(
    config: &PlayConfig,
    die: &mut impl Die,
    policy: &mut impl TokenPolicy,
) -> RulesResult<GameSummary> {
    let state = GameState::new().with_history(config.record_history);
    run(config, Game::from_state(state), die, policy)
}

/// Continue a seeded game from `state`, rolling on from `rng`.
///
/// `config.max_turns` still counts from the start of the game, and
/// `config.seed` is ignored in favour of `rng`.
pub fn resume_game(
    config: &PlayConfig,
    state: GameState,
    rng: &GameRngState,
    policy: &mut impl TokenPolicy,
) -> RulesResult<GameSummary> {
    if let Some(winner) = state.winner() {
        return Err(RulesError::GameAlreadyOver { winner });
    }

    let mut die = GameRng::from_state(rng);
    debug!(turn = state.turn_number(), seed = rng.seed, "resuming game");

    let mut summary = run(config, Game::from_state(state), &mut die, policy)?;
    summary.rng = Some(die.state());
    Ok(summary)
}

fn run(
    config: &PlayConfig,
    mut game: Game,
    die: &mut impl Die,
    policy: &mut impl TokenPolicy,
) -> RulesResult<GameSummary> {
    let mut moves = 0;
    let mut skips = 0;
    let mut captures: ColorMap<u32> = ColorMap::with_value(0);

    while !game.is_over() && !config.turn_limit_reached(game.state().turn_number()) {
        match play_turn(&mut game, die, policy)? {
            TurnReport::Skipped { .. } => skips += 1,
            TurnReport::Moved(turn) => {
                moves += 1;
                captures[turn.outcome.color] += turn.outcome.captures.len() as u32;
            }
        }
    }

    let state = game.into_state();
    let summary = GameSummary {
        winner: state.winner(),
        turns: state.turn_number(),
        moves,
        skips,
        captures,
        state,
        rng: None,
    };

    info!(
        winner = ?summary.winner,
        turns = summary.turns,
        moves = summary.moves,
        skips = summary.skips,
        "game finished"
    );

    Ok(summary)
}

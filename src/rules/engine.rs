//! Turn controller.
//!
//! `Game` owns a `GameState` and walks it through the turn cycle:
//!
//! ```text
//! AwaitingRoll(c) --roll--> AwaitingTokenChoice(c, roll, movable) --choose--> AwaitingRoll(..)
//!        |                                                            \
//!        +--roll, nothing movable--> AwaitingRoll(..)                  +--> GameOver(c)
//! ```
//!
//! A six always earns another roll for the same color, even when no token
//! could move. Any other roll passes the turn to the next color.
//!
//! [`end_turn`] is the same hand-off as a free function, for callers that
//! sequence [`apply_move`] calls themselves.

use tracing::{debug, info};

use crate::core::{Color, Die, DieRoll, GameState, TokenId};
use crate::error::{RulesError, RulesResult};

use super::resolver::{apply_move, movable_tokens, MovableSet, MoveOutcome};

/// Close out a resolved roll of the active color.
///
/// Counts the roll as a turn and passes play to the next color unless
/// `roll` is a six. Returns the color that rolls next.
pub fn end_turn(state: &mut GameState, roll: DieRoll) -> RulesResult<Color> {
    if let Some(winner) = state.winner() {
        return Err(RulesError::GameAlreadyOver { winner });
    }

    let color = state.active_color();
    let next = if roll.is_six() { color } else { color.next() };

    state.advance_turn_number();
    state.set_active_color(next);
    Ok(next)
}

/// Where the game is in the turn cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for `color` to roll.
    AwaitingRoll(Color),
    /// `color` rolled and must pick one of `movable`.
    AwaitingTokenChoice {
        color: Color,
        roll: DieRoll,
        movable: MovableSet,
    },
    /// `winner` has finished all four tokens.
    GameOver(Color),
}

impl TurnPhase {
    /// Short phase name for error reporting.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll(_) => "awaiting roll",
            TurnPhase::AwaitingTokenChoice { .. } => "awaiting token choice",
            TurnPhase::GameOver(_) => "game over",
        }
    }
}

/// What a roll led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// No token could move; the turn was skipped.
    Skipped {
        color: Color,
        roll: DieRoll,
        /// True on a six: the same color rolls again.
        extra_turn: bool,
    },
    /// At least one token can move; call [`Game::choose`].
    MustChoose {
        color: Color,
        roll: DieRoll,
        movable: MovableSet,
    },
}

/// What a chosen move led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The applied move.
    pub outcome: MoveOutcome,
    /// The roll used.
    pub roll: DieRoll,
    /// True if the same color rolls again.
    pub extra_turn: bool,
    /// Set when this move won the game.
    pub winner: Option<Color>,
}

/// A game in progress: state plus turn phase.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    phase: TurnPhase,
}

impl Game {
    /// Start a new game with Red to roll.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Resume from an existing state.
    ///
    /// The phase is `GameOver` if the state has a winner, otherwise the
    /// state's active color is waiting to roll.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let phase = match state.winner() {
            Some(winner) => TurnPhase::GameOver(winner),
            None => TurnPhase::AwaitingRoll(state.active_color()),
        };
        Self { state, phase }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.state.active_color()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver(_))
    }

    /// Feed a roll to the active color.
    ///
    /// If nothing can move the turn is resolved immediately as a skip.
    pub fn roll(&mut self, roll: DieRoll) -> RulesResult<RollOutcome> {
        let color = match &self.phase {
            TurnPhase::AwaitingRoll(color) => *color,
            TurnPhase::GameOver(winner) => {
                return Err(RulesError::GameAlreadyOver { winner: *winner });
            }
            other => {
                return Err(RulesError::UnexpectedPhase {
                    expected: "awaiting roll",
                    found: other.name(),
                });
            }
        };

        let movable = movable_tokens(&self.state, color, roll);

        if movable.is_empty() {
            debug!(%color, %roll, "no movable tokens, turn skipped");
            let extra_turn = self.pass_turn(roll)?;
            return Ok(RollOutcome::Skipped {
                color,
                roll,
                extra_turn,
            });
        }

        self.phase = TurnPhase::AwaitingTokenChoice {
            color,
            roll,
            movable: movable.clone(),
        };

        Ok(RollOutcome::MustChoose {
            color,
            roll,
            movable,
        })
    }

    /// Roll the injected die for the active color.
    pub fn roll_with(&mut self, die: &mut impl Die) -> RulesResult<RollOutcome> {
        let roll = die.roll();
        self.roll(roll)
    }

    /// Move the chosen token with the pending roll.
    ///
    /// An illegal choice is rejected and the same choice is still pending.
    pub fn choose(&mut self, token: TokenId) -> RulesResult<TurnOutcome> {
        let (color, roll) = match &self.phase {
            TurnPhase::AwaitingTokenChoice {
                color,
                roll,
                movable,
            } => {
                if !movable.contains(&token) {
                    return Err(RulesError::IllegalMove {
                        color: *color,
                        token,
                        roll: roll.value(),
                    });
                }
                (*color, *roll)
            }
            TurnPhase::GameOver(winner) => {
                return Err(RulesError::GameAlreadyOver { winner: *winner });
            }
            other => {
                return Err(RulesError::UnexpectedPhase {
                    expected: "awaiting token choice",
                    found: other.name(),
                });
            }
        };

        let outcome = apply_move(&mut self.state, color, token, roll)?;

        if let Some(winner) = self.state.winner() {
            self.state.advance_turn_number();
            self.phase = TurnPhase::GameOver(winner);
            info!(%winner, turns = self.state.turn_number(), "game won");
            return Ok(TurnOutcome {
                outcome,
                roll,
                extra_turn: false,
                winner: Some(winner),
            });
        }

        let extra_turn = self.pass_turn(roll)?;
        Ok(TurnOutcome {
            outcome,
            roll,
            extra_turn,
            winner: None,
        })
    }

    /// Returns true if the same color keeps the turn.
    fn pass_turn(&mut self, roll: DieRoll) -> RulesResult<bool> {
        let color = self.state.active_color();
        let next = end_turn(&mut self.state, roll)?;
        self.phase = TurnPhase::AwaitingRoll(next);
        Ok(next == color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

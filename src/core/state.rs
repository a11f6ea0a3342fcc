//! Game state: token positions, turn pointer, winner, history.
//!
//! ## GameState
//!
//! - Four `PlayerTokens`, one per color
//! - Active color (whose turn it is)
//! - Winner, set once and never cleared
//! - Turn counter and move history
//!
//! Fields are private. Outside the crate the state is read-only; it only
//! changes through the resolver and turn-controller operations in
//! [`crate::rules`]. Decoding a serialized state runs the same checks as
//! [`GameState::from_positions`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};
use super::position::Position;
use super::record::MoveRecord;
use super::token::{PlayerTokens, TokenId};
use super::view::{BoardView, TokenView};
use crate::board::is_reachable;
use crate::error::{RulesError, RulesResult};

/// Complete state of one game.
///
/// Uses an `im` vector for history so clones (move previews, policy lookahead)
/// are O(1) regardless of game length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct GameState {
    tokens: ColorMap<PlayerTokens>,
    active_color: Color,
    winner: Option<Color>,
    turn_number: u32,
    record_history: bool,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a new game: every token in the yard, Red to play.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: ColorMap::with_default(),
            active_color: Color::ALL[0],
            winner: None,
            turn_number: 0,
            record_history: true,
            history: Vector::new(),
        }
    }

    /// Build a mid-game state from explicit positions.
    ///
    /// Every position is checked against its color's course; the first
    /// unreachable one is reported as `InvalidPosition`. A color whose
    /// tokens have all finished is recorded as the winner. A second such
    /// color is rejected as `InvalidPosition` on its last token.
    pub fn from_positions(
        active_color: Color,
        positions: ColorMap<[Position; 4]>,
    ) -> RulesResult<Self> {
        for (color, tokens) in positions.iter() {
            for (token, &position) in TokenId::ALL.iter().zip(tokens.iter()) {
                if !is_reachable(color, position) {
                    return Err(RulesError::InvalidPosition {
                        color,
                        token: *token,
                        position,
                    });
                }
            }
        }

        let tokens = ColorMap::new(|color| PlayerTokens::from_positions(positions[color]));
        let mut finished = Color::ALL.into_iter().filter(|&c| tokens[c].all_finished());
        let winner = finished.next();
        if let Some(second) = finished.next() {
            return Err(RulesError::InvalidPosition {
                color: second,
                token: TokenId::ALL[3],
                position: Position::Finished,
            });
        }

        Ok(Self {
            tokens,
            active_color,
            winner,
            ..Self::new()
        })
    }

    /// Disable or enable the move log.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    // === Read Accessors ===

    /// Position of a single token.
    #[must_use]
    pub fn position(&self, color: Color, token: TokenId) -> Position {
        self.tokens[color].get(token)
    }

    /// All four tokens of a color.
    #[must_use]
    pub fn tokens(&self, color: Color) -> &PlayerTokens {
        &self.tokens[color]
    }

    /// The color whose turn it is.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Resolved rolls so far (moves and skipped turns).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Applied moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every token of another color currently on ring `cell`.
    pub fn opponents_at(&self, color: Color, cell: u8) -> impl Iterator<Item = (Color, TokenId)> + '_ {
        color.opponents().flat_map(move |other| {
            self.tokens[other]
                .iter()
                .filter(move |&(_, p)| p == Position::Ring(cell))
                .map(move |(token, _)| (other, token))
        })
    }

    /// Snapshot of every token for display layers.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let tokens = self
            .tokens
            .iter()
            .flat_map(|(color, tokens)| {
                tokens.iter().map(move |(token, position)| TokenView {
                    color,
                    token,
                    position,
                })
            })
            .collect();

        BoardView {
            tokens,
            active_color: self.active_color,
            winner: self.winner,
            turn_number: self.turn_number,
        }
    }

    // === Mutation (crate-internal) ===

    pub(crate) fn set_position(&mut self, color: Color, token: TokenId, position: Position) {
        self.tokens[color][token] = position;
    }

    pub(crate) fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub(crate) fn declare_winner(&mut self, color: Color) {
        debug_assert!(self.winner.is_none(), "winner is set once");
        self.winner = Some(color);
    }

    pub(crate) fn advance_turn_number(&mut self) {
        self.turn_number += 1;
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        if self.record_history {
            self.history.push_back(record);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire form of [`GameState`].
#[derive(Serialize, Deserialize)]
struct StateRecord {
    tokens: ColorMap<PlayerTokens>,
    active_color: Color,
    winner: Option<Color>,
    turn_number: u32,
    record_history: bool,
    history: Vector<MoveRecord>,
}

impl From<GameState> for StateRecord {
    fn from(state: GameState) -> Self {
        Self {
            tokens: state.tokens,
            active_color: state.active_color,
            winner: state.winner,
            turn_number: state.turn_number,
            record_history: state.record_history,
            history: state.history,
        }
    }
}

impl TryFrom<StateRecord> for GameState {
    type Error = RulesError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let positions = ColorMap::new(|color| {
            let tokens = &record.tokens[color];
            TokenId::ALL.map(|token| tokens.get(token))
        });
        let state = GameState::from_positions(record.active_color, positions)?;

        if state.winner != record.winner {
            return Err(RulesError::WinnerMismatch {
                recorded: record.winner,
                finished: state.winner,
            });
        }

        Ok(Self {
            turn_number: record.turn_number,
            record_history: record.record_history,
            history: record.history,
            ..state
        })
    }
}

/// Create a fresh game state.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

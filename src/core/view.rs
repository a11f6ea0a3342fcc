//! Read-only board snapshot for display layers.
//!
//! The engine never formats or prints the board. Renderers take a
//! `BoardView` and lay it out however they like.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::position::Position;
use super::token::TokenId;

/// One token's place on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub color: Color,
    pub token: TokenId,
    pub position: Position,
}

/// Snapshot of the whole board, colors in turn order and tokens in id order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub tokens: Vec<TokenView>,
    pub active_color: Color,
    pub winner: Option<Color>,
    pub turn_number: u32,
}

impl BoardView {
    /// Tokens of a single color.
    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = &TokenView> {
        self.tokens.iter().filter(move |t| t.color == color)
    }

    /// Tokens sitting on ring `cell`, any color.
    pub fn tokens_at(&self, cell: u8) -> impl Iterator<Item = &TokenView> {
        self.tokens
            .iter()
            .filter(move |t| t.position == Position::Ring(cell))
    }
}

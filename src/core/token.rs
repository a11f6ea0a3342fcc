//! Token identification and per-color token sets.
//!
//! Every color owns exactly four tokens, numbered 1 to 4. The set is
//! created once at game start; tokens are never added or removed, only
//! moved.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::Position;

/// Number of tokens each color plays with.
pub const TOKENS_PER_COLOR: usize = 4;

/// Token identifier within one color, `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(u8);

impl TokenId {
    /// All token IDs in ascending order.
    pub const ALL: [TokenId; TOKENS_PER_COLOR] = [TokenId(1), TokenId(2), TokenId(3), TokenId(4)];

    /// Create a token ID.
    ///
    /// Panics if `id` is not in `1..=4`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id >= 1 && id <= TOKENS_PER_COLOR as u8, "Token id must be 1-4");
        Self(id)
    }

    /// Create a token ID, returning `None` if out of range.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if id >= 1 && id <= TOKENS_PER_COLOR as u8 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw 1-based ID.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four token positions of one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTokens {
    positions: [Position; TOKENS_PER_COLOR],
}

impl PlayerTokens {
    /// All four tokens in the yard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit positions (token 1 first).
    #[must_use]
    pub const fn from_positions(positions: [Position; TOKENS_PER_COLOR]) -> Self {
        Self { positions }
    }

    #[must_use]
    pub fn get(&self, token: TokenId) -> Position {
        self.positions[token.index()]
    }

    /// Iterate over (TokenId, Position) pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, Position)> + '_ {
        TokenId::ALL.into_iter().zip(self.positions.iter().copied())
    }

    /// Count tokens at the given position.
    #[must_use]
    pub fn count(&self, position: Position) -> usize {
        self.positions.iter().filter(|&&p| p == position).count()
    }

    /// Check if every token has finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.positions.iter().all(|p| p.is_finished())
    }
}

impl Index<TokenId> for PlayerTokens {
    type Output = Position;

    fn index(&self, token: TokenId) -> &Self::Output {
        &self.positions[token.index()]
    }
}

impl IndexMut<TokenId> for PlayerTokens {
    fn index_mut(&mut self, token: TokenId) -> &mut Self::Output {
        &mut self.positions[token.index()]
    }
}

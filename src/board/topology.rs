//! Fixed board constants.

use crate::core::Color;

/// Cells on the shared ring, numbered `1..=52`.
pub const RING_LENGTH: u8 = 52;

/// Steps on each color's home stretch. Reaching the last step finishes the token.
pub const HOME_STRETCH_LENGTH: u8 = 6;

/// Ring cells on which a token can never be captured.
///
/// Each color's entry cell plus the cell eight steps past it.
pub const SAFE_CELLS: [u8; 8] = [1, 9, 14, 22, 27, 35, 40, 48];

/// The ring cell a token lands on when it leaves the yard.
#[must_use]
pub const fn entry_cell(color: Color) -> u8 {
    match color {
        Color::Red => 1,
        Color::Green => 14,
        Color::Yellow => 27,
        Color::Blue => 40,
    }
}

/// The last ring cell a color visits before branching onto its home stretch.
#[must_use]
pub const fn home_entrance(color: Color) -> u8 {
    match color {
        Color::Red => 51,
        Color::Green => 12,
        Color::Yellow => 25,
        Color::Blue => 38,
    }
}

/// Check if a ring cell is safe from capture.
#[must_use]
pub fn is_safe_cell(cell: u8) -> bool {
    SAFE_CELLS.contains(&cell)
}

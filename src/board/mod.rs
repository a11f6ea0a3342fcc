//! Board topology and position arithmetic.
//!
//! The board is fixed: a shared ring of 52 cells, one private 6-step home
//! stretch per color, and eight safe cells. This module holds those
//! constants and the only code allowed to move a token from one
//! coordinate space to another.

pub mod topology;
pub mod path;

pub use topology::{
    entry_cell, home_entrance, is_safe_cell, HOME_STRETCH_LENGTH, RING_LENGTH, SAFE_CELLS,
};
pub use path::{
    advance, distance_travelled, is_reachable, progress, ring_cell_at, LAST_RING_PROGRESS,
};

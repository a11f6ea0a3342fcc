//! Capture check.

use tracing::info;

use crate::board::is_safe_cell;
use crate::core::{CaptureEvent, Captures, Color, GameState, Position};

/// Send every opponent token on ring `cell` back to the yard.
///
/// Safe cells never capture. Stacked opponents are all captured: the
/// engine enforces no single-occupancy rule.
pub fn resolve_captures(state: &mut GameState, attacker: Color, cell: u8) -> Captures {
    if is_safe_cell(cell) {
        return Captures::new();
    }

    let captures: Captures = state
        .opponents_at(attacker, cell)
        .map(|(victim, victim_token)| CaptureEvent {
            attacker,
            victim,
            victim_token,
            cell,
        })
        .collect();

    for event in &captures {
        state.set_position(event.victim, event.victim_token, Position::Yard);
        info!(
            %attacker,
            victim = %event.victim,
            token = %event.victim_token,
            cell,
            "token captured"
        );
    }

    captures
}

//! Game rules.
//!
//! Two layers:
//! - phase primitives (`place_marble`, `remove_ring`, `skip_ring_removal`,
//!   `execute_capture`) that mutate the state they are given and report
//!   illegal input with `false`, leaving the state unchanged
//! - [`commit_move`], which takes a complete move, validates it and returns a
//!   new state with the phase settled
//!
//! Callers that need the previous state must clone before calling a
//! primitive. State clones are O(1).

pub mod capture;
pub mod commit;
pub mod moves;
pub mod placement;
pub mod win;

pub use capture::{
    captures_from, execute_capture, execute_capture_step, get_available_captures,
    get_capture_chains, has_available_captures,
};
pub use commit::{commit_move, CaptureReport, CommitOutcome};
pub use moves::{get_available_moves, legal_moves, AvailableMoves};
pub use placement::{
    can_place_marble, handle_isolation, place_marble, placement_colors, remove_ring,
    skip_ring_removal,
};
pub use win::{check_win_condition, get_win_type, WinType};

use crate::core::{GameConfig, GameState};

/// Fresh game: full board, configured reserve, no captures, player one to
/// place, move number 1.
#[must_use]
pub fn create_initial_state(config: GameConfig) -> GameState {
    GameState::new(config)
}

//! Placement, ring removal and isolation capture.

use crate::core::{GameState, MarbleColor, MarbleCounts, PendingPlacement, Phase, RingId};

/// The pool the current player must draw from.
///
/// While any marble of any color remains in the shared reserve, marbles come
/// from the reserve; once it is completely empty they come from the current
/// player's own captures.
fn source_pool(state: &GameState) -> &MarbleCounts {
    if state.reserve.total() > 0 {
        &state.reserve
    } else {
        &state.captures[state.current_player]
    }
}

fn source_pool_mut(state: &mut GameState) -> &mut MarbleCounts {
    if state.reserve.total() > 0 {
        &mut state.reserve
    } else {
        &mut state.captures[state.current_player]
    }
}

/// Whether the current player can place a marble of `color` somewhere.
#[must_use]
pub fn can_place_marble(state: &GameState, color: MarbleColor) -> bool {
    source_pool(state)[color] > 0
}

/// Colors the current player can place, in notation order.
#[must_use]
pub fn placement_colors(state: &GameState) -> Vec<MarbleColor> {
    source_pool(state).available().collect()
}

/// Place a marble and enter `RingRemoval`.
///
/// Returns false without touching the state if the ring is missing, removed
/// or occupied, or if the source pool has no marble of that color.
pub fn place_marble(state: &mut GameState, ring: RingId, color: MarbleColor) -> bool {
    if !state.board.get(ring).is_some_and(|r| r.is_vacant()) {
        return false;
    }
    if !can_place_marble(state, color) {
        return false;
    }

    source_pool_mut(state)[color] -= 1;
    state.board.set_marble(ring, Some(color));
    state.pending_placement = Some(PendingPlacement { ring, color });
    state.phase = Phase::RingRemoval;
    true
}

/// Remove a free ring and finish the turn.
///
/// Runs isolation capture, clears the pending placement, returns to
/// `Placement` and hands the turn over. Returns false without touching the
/// state if the ring is not currently removable.
pub fn remove_ring(state: &mut GameState, ring: RingId) -> bool {
    if !state.board.is_free_ring(ring) {
        return false;
    }

    state.board.mark_removed(ring);
    handle_isolation(state);
    finish_placement_turn(state);
    true
}

/// Finish the turn without removing a ring, allowed only when no ring is
/// removable. Returns whether the turn was finished.
pub fn skip_ring_removal(state: &mut GameState) -> bool {
    if !state.board.valid_removable_rings().is_empty() {
        return false;
    }
    finish_placement_turn(state);
    true
}

fn finish_placement_turn(state: &mut GameState) {
    state.pending_placement = None;
    state.phase = Phase::Placement;
    state.advance_turn();
}

/// Capture fully occupied groups cut off from the main board.
///
/// The largest component is the main board; among equally large components
/// the first in enumeration order (row-major by first ring) wins. Every
/// other component with no empty ring has its marbles credited to the
/// current player and its rings removed. Components that still have an
/// empty ring stay in play.
///
/// Returns the marbles captured this way.
pub fn handle_isolation(state: &mut GameState) -> MarbleCounts {
    let mut captured = MarbleCounts::default();
    let groups = state.board.isolated_groups();
    if groups.len() <= 1 {
        return captured;
    }

    let mut main = 0;
    for (i, group) in groups.iter().enumerate() {
        if group.len() > groups[main].len() {
            main = i;
        }
    }

    let player = state.current_player;
    for (i, group) in groups.iter().enumerate() {
        if i == main {
            continue;
        }
        let fully_occupied = group.iter().all(|&id| state.board.marble_at(id).is_some());
        if !fully_occupied {
            continue;
        }

        for &id in group {
            if let Some(color) = state.board.take_marble(id) {
                state.captures[player][color] += 1;
                captured[color] += 1;
            }
            state.board.mark_removed(id);
        }
    }

    captured
}

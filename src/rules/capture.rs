//! Jump captures and capture-chain search.

use crate::board::Board;
use crate::core::{CaptureChain, CaptureStep, GameState, RingId};

/// Single jumps available to the marble on `from`.
///
/// Empty if `from` holds no marble. Jumps are listed in direction order.
#[must_use]
pub fn captures_from(board: &Board, from: RingId) -> Vec<CaptureStep> {
    if board.marble_at(from).is_none() {
        return Vec::new();
    }

    board
        .neighbors(from)
        .into_iter()
        .filter(|&middle| board.marble_at(middle).is_some())
        .filter_map(|middle| {
            let to = board.ring_behind(from, middle)?;
            board
                .marble_at(to)
                .is_none()
                .then_some(CaptureStep::new(from, middle, to))
        })
        .collect()
}

/// Every single jump on the board, for every marble.
#[must_use]
pub fn get_available_captures(state: &GameState) -> Vec<CaptureStep> {
    state
        .board
        .active_ids()
        .flat_map(|id| captures_from(&state.board, id))
        .collect()
}

/// Whether the player to move has any capture.
#[must_use]
pub fn has_available_captures(state: &GameState) -> bool {
    state
        .board
        .active_ids()
        .any(|id| !captures_from(&state.board, id).is_empty())
}

/// All maximal capture chains for the marble on `from`.
///
/// Each jump is simulated on a cloned state and the search continues from the
/// landing ring. A chain is recorded only once no further jump is possible,
/// so a prefix of a longer chain never appears on its own. Branches that end
/// early are still recorded: maximal does not mean longest.
#[must_use]
pub fn get_capture_chains(state: &GameState, from: RingId) -> Vec<CaptureChain> {
    let mut chains = Vec::new();
    let mut path = CaptureChain::new();
    extend_chains(state, from, &mut path, &mut chains);
    chains
}

fn extend_chains(
    state: &GameState,
    at: RingId,
    path: &mut CaptureChain,
    out: &mut Vec<CaptureChain>,
) {
    let steps = captures_from(&state.board, at);
    if steps.is_empty() {
        if !path.is_empty() {
            out.push(path.clone());
        }
        return;
    }

    for step in steps {
        let mut next = state.clone_state();
        execute_capture_step(&mut next, &step);
        path.push(step);
        extend_chains(&next, step.to, path, out);
        path.pop();
    }
}

/// Move the jumping marble and credit the captured one to the current player.
///
/// Silently does nothing if `from` or `captured` holds no marble, or if the
/// landing ring is missing or occupied. Returns whether the step was applied.
pub fn execute_capture_step(state: &mut GameState, step: &CaptureStep) -> bool {
    let board = &state.board;
    let (Some(jumper), Some(_)) = (board.marble_at(step.from), board.marble_at(step.captured))
    else {
        return false;
    };
    if !board.get(step.to).is_some_and(|r| r.is_vacant()) {
        return false;
    }

    let board = &mut state.board;
    board.take_marble(step.from);
    board.set_marble(step.to, Some(jumper));
    if let Some(color) = board.take_marble(step.captured) {
        state.captures[state.current_player][color] += 1;
    }
    true
}

/// Apply a whole chain, then hand the turn over.
///
/// Phase is left alone: the caller decides between `Placement`, `Capture` and
/// `GameOver`. The chain is trusted to be maximal; use
/// [`commit_move`](super::commit_move) for a checked commit.
pub fn execute_capture(state: &mut GameState, steps: &[CaptureStep]) {
    for step in steps {
        execute_capture_step(state, step);
    }
    state.advance_turn();
}

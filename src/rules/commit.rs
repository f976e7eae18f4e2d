//! Checked commit of a complete move.
//!
//! This is the one transition every consumer goes through: it validates the
//! move, applies it through the phase primitives on a clone, settles the
//! phase and reports what happened.

use serde::{Deserialize, Serialize};

use super::capture::{
    captures_from, execute_capture, execute_capture_step, has_available_captures,
};
use super::placement::{can_place_marble, place_marble, remove_ring, skip_ring_removal};
use super::win::{check_win_condition, get_win_type, WinType};
use crate::core::{
    CaptureMove, GameState, MarbleColor, MarbleCounts, Move, Phase, PlacementMove, Player,
};
use crate::error::MoveError;
use crate::notation::move_to_notation;

/// Marbles the mover gained in one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Jumped marbles.
    pub by_jump: MarbleCounts,
    /// Marbles on isolated groups taken after the ring removal.
    pub by_isolation: MarbleCounts,
}

impl CaptureReport {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.by_jump.total() + self.by_isolation.total()
    }
}

/// Result of a successful commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub state: GameState,
    pub notation: String,
    /// Who made the move.
    pub mover: Player,
    /// Move number the move was made at.
    pub move_number: u32,
    pub winner: Option<Player>,
    pub win_type: Option<WinType>,
    pub captured: CaptureReport,
}

/// Validate and apply a complete move. `state` is never modified.
///
/// Placements are refused while a capture is available, and must name a
/// removable ring whenever one exists. Capture chains must be contiguous,
/// legal at every step and maximal.
///
/// After the move the phase is `GameOver` if someone won, otherwise
/// `Capture` if the next player has a capture, otherwise `Placement`.
pub fn commit_move(state: &GameState, mv: &Move) -> Result<CommitOutcome, MoveError> {
    if state.is_game_over() || state.winner.is_some() {
        return Err(MoveError::GameOver);
    }
    if state.phase == Phase::RingRemoval {
        return Err(MoveError::WrongPhase(state.phase));
    }

    let mover = state.current_player;
    let mut next = state.clone_state();
    let mut captured = CaptureReport::default();
    let mut jumper = None;

    match mv {
        Move::Placement(p) => {
            captured.by_isolation = commit_placement(&mut next, p)?;
        }
        Move::Capture(c) => {
            jumper = next.board.marble_at(c.start());
            captured.by_jump = commit_capture(&mut next, c)?;
        }
    }

    next.pending_placement = None;
    let winner = check_win_condition(&next);
    next.phase = if winner.is_some() {
        next.winner = winner;
        Phase::GameOver
    } else if has_available_captures(&next) {
        Phase::Capture
    } else {
        Phase::Placement
    };

    Ok(CommitOutcome {
        notation: move_to_notation(mv, state.config.board_size, jumper),
        mover,
        move_number: state.move_number,
        winner,
        win_type: winner.and_then(|w| get_win_type(&next, w)),
        captured,
        state: next,
    })
}

fn commit_placement(state: &mut GameState, p: &PlacementMove) -> Result<MarbleCounts, MoveError> {
    if has_available_captures(state) {
        return Err(MoveError::CaptureRequired);
    }
    if !state.board.get(p.ring).is_some_and(|r| r.is_vacant()) {
        return Err(MoveError::InvalidPlacement(p.ring));
    }
    if !can_place_marble(state, p.color) {
        return Err(MoveError::MarbleUnavailable(p.color));
    }
    place_marble(state, p.ring, p.color);

    let mover = state.current_player;
    let before = state.captures[mover];
    match p.removed_ring {
        Some(ring) => {
            if !remove_ring(state, ring) {
                return Err(MoveError::InvalidRemoval(ring));
            }
        }
        None => {
            if !skip_ring_removal(state) {
                return Err(MoveError::RemovalRequired);
            }
        }
    }
    Ok(gained(&before, &state.captures[mover]))
}

fn commit_capture(state: &mut GameState, c: &CaptureMove) -> Result<MarbleCounts, MoveError> {
    let steps = c.to_chain();

    let mut scratch = state.clone_state();
    let mut at = c.start();
    for step in &steps {
        if step.from != at {
            return Err(MoveError::BrokenChain);
        }
        if !captures_from(&scratch.board, at).contains(step) {
            return Err(MoveError::IllegalCapture {
                from: step.from,
                over: step.captured,
            });
        }
        execute_capture_step(&mut scratch, step);
        at = step.to;
    }
    if !captures_from(&scratch.board, at).is_empty() {
        return Err(MoveError::IncompleteChain(at));
    }

    let mover = state.current_player;
    let before = state.captures[mover];
    execute_capture(state, &steps);
    Ok(gained(&before, &state.captures[mover]))
}

fn gained(before: &MarbleCounts, after: &MarbleCounts) -> MarbleCounts {
    let mut diff = MarbleCounts::default();
    for color in MarbleColor::ALL {
        diff[color] = after[color].saturating_sub(before[color]);
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CaptureStep, RingId};

    fn id(q: i8, r: i8) -> RingId {
        RingId::new(q, r)
    }

    #[test]
    fn test_opening_placement() {
        let state = GameState::default();
        let mv = Move::place(MarbleColor::White, id(0, 3), Some(id(0, 0)));

        let outcome = commit_move(&state, &mv).unwrap();

        assert_eq!(outcome.notation, "Wd4 -d7");
        assert_eq!(outcome.mover, Player::One);
        assert_eq!(outcome.move_number, 1);
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.captured, CaptureReport::default());

        let next = &outcome.state;
        assert_eq!(next.current_player, Player::Two);
        assert_eq!(next.move_number, 2);
        assert_eq!(next.phase, Phase::Placement);
        assert_eq!(next.pending_placement, None);
        // Input untouched.
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_placement_errors() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 3), Some(MarbleColor::Black));

        let occupied = Move::place(MarbleColor::White, id(0, 3), Some(id(0, 0)));
        assert_eq!(
            commit_move(&state, &occupied),
            Err(MoveError::InvalidPlacement(id(0, 3)))
        );

        let interior = Move::place(MarbleColor::White, id(0, 2), Some(id(1, 3)));
        assert_eq!(
            commit_move(&state, &interior),
            Err(MoveError::InvalidRemoval(id(1, 3)))
        );

        let no_removal = Move::place(MarbleColor::White, id(0, 2), None);
        assert_eq!(commit_move(&state, &no_removal), Err(MoveError::RemovalRequired));

        state.reserve.gray = 0;
        let no_gray = Move::place(MarbleColor::Gray, id(0, 2), Some(id(0, 0)));
        assert_eq!(
            commit_move(&state, &no_gray),
            Err(MoveError::MarbleUnavailable(MarbleColor::Gray))
        );
    }

    #[test]
    fn test_removing_the_placed_ring_is_rejected() {
        let state = GameState::default();
        let mv = Move::place(MarbleColor::White, id(0, 0), Some(id(0, 0)));
        assert_eq!(commit_move(&state, &mv), Err(MoveError::InvalidRemoval(id(0, 0))));
    }

    #[test]
    fn test_capture_is_mandatory() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 0), Some(MarbleColor::White));
        state.board.set_marble(id(1, 0), Some(MarbleColor::Black));

        let mv = Move::place(MarbleColor::White, id(0, 3), Some(id(-3, 6)));
        assert_eq!(commit_move(&state, &mv), Err(MoveError::CaptureRequired));
    }

    #[test]
    fn test_capture_commit() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 3), Some(MarbleColor::White));
        state.board.set_marble(id(1, 3), Some(MarbleColor::Black));
        state.board.set_marble(id(2, 2), Some(MarbleColor::Gray));
        state.phase = Phase::Capture;

        let mv = Move::capture(&[
            CaptureStep::new(id(0, 3), id(1, 3), id(2, 3)),
            CaptureStep::new(id(2, 3), id(2, 2), id(2, 1)),
        ])
        .unwrap();
        let outcome = commit_move(&state, &mv).unwrap();

        assert_eq!(outcome.notation, "Wd4-f4-f6");
        assert_eq!(outcome.captured.by_jump, MarbleCounts::new(0, 1, 1));
        assert_eq!(outcome.captured.total(), 2);
        assert_eq!(outcome.state.captures[Player::One], MarbleCounts::new(0, 1, 1));
        assert_eq!(outcome.state.current_player, Player::Two);
        assert_eq!(outcome.state.phase, Phase::Placement);
    }

    #[test]
    fn test_partial_chain_rejected() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 3), Some(MarbleColor::White));
        state.board.set_marble(id(1, 3), Some(MarbleColor::Black));
        state.board.set_marble(id(2, 2), Some(MarbleColor::Gray));

        let short = Move::capture(&[CaptureStep::new(id(0, 3), id(1, 3), id(2, 3))]).unwrap();
        assert_eq!(
            commit_move(&state, &short),
            Err(MoveError::IncompleteChain(id(2, 3)))
        );
    }

    #[test]
    fn test_broken_and_illegal_chains() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 3), Some(MarbleColor::White));
        state.board.set_marble(id(1, 3), Some(MarbleColor::Black));

        let illegal = Move::capture(&[CaptureStep::new(id(0, 3), id(0, 2), id(0, 1))]).unwrap();
        assert_eq!(
            commit_move(&state, &illegal),
            Err(MoveError::IllegalCapture { from: id(0, 3), over: id(0, 2) })
        );

        let broken = Move::capture(&[
            CaptureStep::new(id(0, 3), id(1, 3), id(2, 3)),
            CaptureStep::new(id(0, 0), id(1, 0), id(2, 0)),
        ])
        .unwrap();
        assert_eq!(commit_move(&state, &broken), Err(MoveError::BrokenChain));
    }

    #[test]
    fn test_winning_capture_ends_game() {
        let mut state = GameState::default();
        state.captures[Player::One].white = 3;
        state.board.set_marble(id(0, 3), Some(MarbleColor::Black));
        state.board.set_marble(id(1, 3), Some(MarbleColor::White));

        let mv = Move::capture(&[CaptureStep::new(id(0, 3), id(1, 3), id(2, 3))]).unwrap();
        let outcome = commit_move(&state, &mv).unwrap();

        assert_eq!(outcome.winner, Some(Player::One));
        assert_eq!(outcome.win_type, Some(WinType::White));
        assert_eq!(outcome.state.phase, Phase::GameOver);
        assert_eq!(outcome.state.winner, Some(Player::One));

        let again = Move::place(MarbleColor::Gray, id(0, 0), Some(id(3, 0)));
        assert_eq!(commit_move(&outcome.state, &again), Err(MoveError::GameOver));
    }

    #[test]
    fn test_capture_phase_for_next_player() {
        // After white lands next to black with an empty ring behind, the
        // opponent has a capture.
        let mut state = GameState::default();
        state.board.set_marble(id(0, 2), Some(MarbleColor::Black));
        let mv = Move::place(MarbleColor::White, id(0, 3), Some(id(0, 0)));

        let outcome = commit_move(&state, &mv).unwrap();
        assert_eq!(outcome.state.phase, Phase::Capture);
        assert_eq!(outcome.state.current_player, Player::Two);
    }

    #[test]
    fn test_ring_removal_phase_rejected() {
        let mut state = GameState::default();
        place_marble(&mut state, id(0, 3), MarbleColor::White);
        let mv = Move::place(MarbleColor::White, id(0, 2), Some(id(0, 0)));
        assert_eq!(
            commit_move(&state, &mv),
            Err(MoveError::WrongPhase(Phase::RingRemoval))
        );
    }
}

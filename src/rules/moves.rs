//! Legal move listing.

use serde::{Deserialize, Serialize};

use super::capture::{captures_from, get_capture_chains};
use super::placement::placement_colors;
use crate::core::{CaptureChain, GameState, MarbleColor, Move, Phase, RingId};

/// What the player to move may do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailableMoves {
    /// Capturing is mandatory. Maximal chains grouped by starting ring, in
    /// row-major order of the start.
    Captures(Vec<(RingId, Vec<CaptureChain>)>),
    /// Empty rings and the colors the mover can draw.
    Placements {
        rings: Vec<RingId>,
        colors: Vec<MarbleColor>,
    },
    /// A marble was placed; one of these rings must be removed. Empty when
    /// removal must be skipped.
    RingRemovals(Vec<RingId>),
    /// The game is over.
    None,
}

impl AvailableMoves {
    /// Whether the player has nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            AvailableMoves::Captures(groups) => groups.is_empty(),
            AvailableMoves::Placements { rings, colors } => rings.is_empty() || colors.is_empty(),
            // Skipping is always possible once a marble is placed.
            AvailableMoves::RingRemovals(_) => false,
            AvailableMoves::None => true,
        }
    }
}

/// Everything the player to move may do in the current phase.
#[must_use]
pub fn get_available_moves(state: &GameState) -> AvailableMoves {
    match state.phase {
        Phase::GameOver => AvailableMoves::None,
        Phase::RingRemoval => AvailableMoves::RingRemovals(state.board.valid_removable_rings()),
        Phase::Placement | Phase::Capture => {
            let groups: Vec<_> = state
                .board
                .active_ids()
                .filter(|&id| !captures_from(&state.board, id).is_empty())
                .map(|id| (id, get_capture_chains(state, id)))
                .collect();

            if groups.is_empty() {
                AvailableMoves::Placements {
                    rings: state.board.empty_rings(),
                    colors: placement_colors(state),
                }
            } else {
                AvailableMoves::Captures(groups)
            }
        }
    }
}

/// Every complete move that [`commit_move`](super::commit_move) would accept.
///
/// Placements pair each color and empty ring with every ring removable after
/// that placement (or with no removal when none is). Empty when the game is
/// over or a placement is pending.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    match get_available_moves(state) {
        AvailableMoves::Captures(groups) => groups
            .into_iter()
            .flat_map(|(_, chains)| chains)
            .filter_map(|chain| Move::capture(&chain))
            .collect(),
        AvailableMoves::Placements { rings, colors } => {
            // Marbles do not affect free edges, so the removable set only
            // loses the ring being placed on.
            let removable = state.board.valid_removable_rings();
            let mut moves = Vec::new();
            for &color in &colors {
                for &ring in &rings {
                    let mut any = false;
                    for &removed in removable.iter().filter(|&&r| r != ring) {
                        moves.push(Move::place(color, ring, Some(removed)));
                        any = true;
                    }
                    if !any {
                        moves.push(Move::place(color, ring, None));
                    }
                }
            }
            moves
        }
        AvailableMoves::RingRemovals(_) | AvailableMoves::None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaptureStep;
    use crate::rules::placement::place_marble;

    fn id(q: i8, r: i8) -> RingId {
        RingId::new(q, r)
    }

    #[test]
    fn test_opening_placements() {
        let state = GameState::default();

        match get_available_moves(&state) {
            AvailableMoves::Placements { rings, colors } => {
                assert_eq!(rings.len(), 37);
                assert_eq!(colors, MarbleColor::ALL.to_vec());
            }
            other => panic!("expected placements, got {:?}", other),
        }

        // 3 colors x (18 rim rings x 17 removals + 19 inner rings x 18 removals)
        assert_eq!(legal_moves(&state).len(), 3 * (18 * 17 + 19 * 18));
    }

    #[test]
    fn test_captures_take_precedence() {
        let mut state = GameState::default();
        state.board.set_marble(id(0, 0), Some(MarbleColor::White));
        state.board.set_marble(id(1, 0), Some(MarbleColor::Black));

        match get_available_moves(&state) {
            AvailableMoves::Captures(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].0, id(0, 0));
                assert_eq!(groups[0].1.len(), 1);
            }
            other => panic!("expected captures, got {:?}", other),
        }

        let moves = legal_moves(&state);
        assert_eq!(
            moves,
            vec![Move::capture(&[CaptureStep::new(id(0, 0), id(1, 0), id(2, 0))]).unwrap()]
        );
    }

    #[test]
    fn test_ring_removal_phase() {
        let mut state = GameState::default();
        place_marble(&mut state, id(0, 0), MarbleColor::Gray);

        match get_available_moves(&state) {
            AvailableMoves::RingRemovals(rings) => {
                assert_eq!(rings.len(), 17);
                assert!(!rings.contains(&id(0, 0)));
            }
            other => panic!("expected removals, got {:?}", other),
        }
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_game_over_has_nothing() {
        let mut state = GameState::default();
        state.phase = Phase::GameOver;
        assert_eq!(get_available_moves(&state), AvailableMoves::None);
        assert!(get_available_moves(&state).is_empty());
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_no_colors_left() {
        let mut state = GameState::default();
        state.reserve = Default::default();
        assert!(get_available_moves(&state).is_empty());
        assert!(legal_moves(&state).is_empty());
    }
}

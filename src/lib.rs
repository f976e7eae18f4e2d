//! # zertz-engine
//!
//! Rules engine for ZERTZ, the two-player game of removable rings and
//! shared marbles.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: no I/O, no globals. Every operation takes the
//!    state it works on; primitives mutate it in place, `commit_move`
//!    returns a new one.
//!
//! 2. **Coordinates, not edges**: the board is an id-keyed map and
//!    adjacency is computed from axial coordinates on demand.
//!
//! 3. **Cheap speculation**: the ring map is persistent (`im-rs`), so
//!    cloning a state for capture-chain search, undo or what-if is O(1).
//!
//! ## Modules
//!
//! - `core`: coordinates, players, marbles, configuration, state, moves
//! - `board`: layouts and topology (neighbors, free rings, connectivity)
//! - `rules`: placement, removal, isolation, captures, win detection, commit
//! - `notation`: algebraic coordinates and move notation
//! - `tree`: arena move tree with variations
//! - `session`: state + tree + cursor, undo and navigation by replay
//! - `persist`: JSON and binary snapshots
//!
//! ```
//! use zertz_engine::{commit_move, GameConfig, GameState, MarbleColor, Move, Player, RingId};
//!
//! let state = GameState::new(GameConfig::default());
//! let mv = Move::place(MarbleColor::White, RingId::new(0, 3), Some(RingId::new(0, 0)));
//! let outcome = commit_move(&state, &mv).unwrap();
//!
//! assert_eq!(outcome.notation, "Wd4 -d7");
//! assert_eq!(outcome.state.current_player, Player::Two);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod notation;
pub mod persist;
pub mod rules;
pub mod session;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, CaptureChain, CaptureMove, CaptureStep, Direction, GameConfig, GameMode, GameState,
    MarbleColor, MarbleCounts, Move, PendingPlacement, Phase, PlacementMove, Player, PlayerMap,
    Ring, RingId, WinConditions,
};

pub use crate::board::{Board, NeighborList};

pub use crate::error::{ConfigError, MoveError, NotationError, PersistError};

pub use crate::rules::{
    can_place_marble, check_win_condition, commit_move, create_initial_state, execute_capture,
    execute_capture_step, get_available_captures, get_available_moves, get_capture_chains,
    get_win_type, has_available_captures, legal_moves, place_marble, placement_colors,
    remove_ring, skip_ring_removal, AvailableMoves, CaptureReport, CommitOutcome, WinType,
};

pub use crate::notation::{algebraic_to_id, id_to_algebraic, move_to_notation};

pub use crate::tree::{GameNode, MoveTree, NodeId, TreeStats};

pub use crate::session::{replay, GameSession};

pub use crate::persist::SavedGame;

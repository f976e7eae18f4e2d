//! Game state: rings, reserve, captures, turn and phase.
//!
//! ## Phases
//!
//! ```text
//! Placement --place_marble--> RingRemoval --remove_ring / skip--> Placement | Capture
//! Capture   --capture chain-------------------------------------> Placement | Capture
//! any       --win detected--------------------------------------> GameOver (terminal)
//! ```
//!
//! `pending_placement` is `Some` exactly while the phase is `RingRemoval`.
//!
//! ## Cloning
//!
//! The board is an `im` persistent map, so `clone_state` is O(1) and the copy
//! is fully independent: mutating either side never shows through to the
//! other. Speculative search (capture chains, what-if replays) clones freely.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::coord::RingId;
use super::marble::{MarbleColor, MarbleCounts};
use super::player::{Player, PlayerMap};
use crate::board::Board;

/// A single ring of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    pub id: RingId,
    pub marble: Option<MarbleColor>,
    /// Set once, never cleared.
    pub is_removed: bool,
}

impl Ring {
    /// A present, empty ring.
    #[must_use]
    pub const fn new(id: RingId) -> Self {
        Self {
            id,
            marble: None,
            is_removed: false,
        }
    }

    /// Present and holding no marble.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        !self.is_removed && self.marble.is_none()
    }

    /// Present and holding a marble.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !self.is_removed && self.marble.is_some()
    }
}

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Placement,
    RingRemoval,
    Capture,
    GameOver,
}

/// A placed marble waiting for the ring removal that completes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingPlacement {
    pub ring: RingId,
    pub color: MarbleColor,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    /// Shared pool of unplaced marbles.
    pub reserve: MarbleCounts,
    /// Marbles each player has captured.
    pub captures: PlayerMap<MarbleCounts>,
    pub current_player: Player,
    pub phase: Phase,
    pub pending_placement: Option<PendingPlacement>,
    pub winner: Option<Player>,
    /// Starts at 1; incremented once per completed turn.
    pub move_number: u32,
}

impl GameState {
    /// Fresh game: full board, configured reserve, player one to place.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            reserve: config.initial_reserve,
            captures: PlayerMap::default(),
            current_player: Player::One,
            phase: Phase::Placement,
            pending_placement: None,
            winner: None,
            move_number: 1,
            config,
        }
    }

    /// Independent copy for speculative simulation.
    #[must_use]
    pub fn clone_state(&self) -> Self {
        self.clone()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Hand the turn to the other player and count the completed turn.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.move_number += 1;
    }

    /// Marbles currently sitting on present rings.
    #[must_use]
    pub fn board_marble_count(&self) -> u32 {
        self.board.rings().filter(|r| r.is_occupied()).count() as u32
    }

    /// Reserve + both capture pools + board. Constant over legal play.
    #[must_use]
    pub fn total_marbles(&self) -> u32 {
        self.reserve.total()
            + self.captures[Player::One].total()
            + self.captures[Player::Two].total()
            + self.board_marble_count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

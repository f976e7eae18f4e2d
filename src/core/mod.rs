//! Core value types: coordinates, players, marbles, configuration, state, moves.
//!
//! Nothing in this module knows the game rules; it only defines the data the
//! rules operate on.

pub mod action;
pub mod config;
pub mod coord;
pub mod marble;
pub mod player;
pub mod state;

pub use action::{CaptureChain, CaptureMove, CaptureStep, Move, PlacementMove};
pub use config::{BoardSize, GameConfig, GameMode, WinConditions};
pub use coord::{Direction, RingId};
pub use marble::{MarbleColor, MarbleCounts};
pub use player::{Player, PlayerMap};
pub use state::{GameState, PendingPlacement, Phase, Ring};

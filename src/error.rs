//! Error types for the fallible surfaces of the engine.
//!
//! The rule primitives (`place_marble`, `remove_ring`, ...) report illegal
//! input with a `bool` and leave the state untouched. The layers built on
//! top of them (committing whole moves, sessions, notation parsing,
//! persistence) return these errors instead.

use std::error::Error;
use std::fmt;

use crate::core::{MarbleColor, Phase, RingId};
use crate::tree::NodeId;

/// Invalid configuration input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Only 37, 48 and 61 ring boards exist.
    UnsupportedBoardSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedBoardSize(n) => {
                write!(f, "Unsupported ring count: {}. Use 37, 48, or 61.", n)
            }
        }
    }
}

impl Error for ConfigError {}

/// A move that cannot be committed in the current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already been won.
    GameOver,
    /// The move kind does not fit the current phase.
    WrongPhase(Phase),
    /// A capture is available, so placing is not allowed.
    CaptureRequired,
    /// Target ring is missing, removed or occupied.
    InvalidPlacement(RingId),
    /// The pool the marble must come from has none of that color.
    MarbleUnavailable(MarbleColor),
    /// The ring is not in the removable set.
    InvalidRemoval(RingId),
    /// A ring must be removed because at least one is removable.
    RemovalRequired,
    /// A jump that is not a legal single capture at that point of the chain.
    IllegalCapture { from: RingId, over: RingId },
    /// Steps of a chain must start where the previous one landed.
    BrokenChain,
    /// The chain stops while the marble can still capture.
    IncompleteChain(RingId),
    /// Replay reached a node that has no move attached.
    EmptyNode,
    /// The node is not in the tree or not reachable from its root.
    UnknownNode(NodeId),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::WrongPhase(phase) => write!(f, "Move not allowed in phase {:?}", phase),
            MoveError::CaptureRequired => write!(f, "A capture is available and must be made"),
            MoveError::InvalidPlacement(id) => write!(f, "Cannot place a marble on ring {}", id),
            MoveError::MarbleUnavailable(color) => write!(f, "No {} marble available", color),
            MoveError::InvalidRemoval(id) => write!(f, "Ring {} cannot be removed", id),
            MoveError::RemovalRequired => write!(f, "A free ring must be removed"),
            MoveError::IllegalCapture { from, over } => {
                write!(f, "Illegal capture from {} over {}", from, over)
            }
            MoveError::BrokenChain => write!(f, "Capture steps do not form a chain"),
            MoveError::IncompleteChain(id) => {
                write!(f, "Capture chain must continue from ring {}", id)
            }
            MoveError::EmptyNode => write!(f, "Tree node has no move"),
            MoveError::UnknownNode(id) => write!(f, "{} is not reachable from the root", id),
        }
    }
}

impl Error for MoveError {}

/// Unparseable algebraic coordinate or move notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotationError {
    /// Text is not of the form `<letter><number>`.
    InvalidFormat(String),
    /// Well-formed coordinate that is not a ring of this layout.
    OffBoard(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidFormat(text) => write!(f, "Invalid notation: '{}'", text),
            NotationError::OffBoard(text) => write!(f, "'{}' is not a ring on this board", text),
        }
    }
}

impl Error for NotationError {}

/// Snapshot encoding or decoding failure.
#[derive(Debug)]
pub enum PersistError {
    Json(serde_json::Error),
    Binary(bincode::Error),
    /// Decoded data violates a structural invariant.
    Corrupt(&'static str),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Json(e) => write!(f, "JSON error: {}", e),
            PersistError::Binary(e) => write!(f, "Binary encoding error: {}", e),
            PersistError::Corrupt(reason) => write!(f, "Corrupt snapshot: {}", reason),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersistError::Json(e) => Some(e),
            PersistError::Binary(e) => Some(e.as_ref()),
            PersistError::Corrupt(_) => None,
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Json(e)
    }
}

impl From<bincode::Error> for PersistError {
    fn from(e: bincode::Error) -> Self {
        PersistError::Binary(e)
    }
}

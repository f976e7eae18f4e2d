//! Move representation.
//!
//! A turn is either a placement (marble color + target ring, plus the ring
//! removed in the same turn) or a capture (an initial jump plus any
//! continuation jumps made by the same marble).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::RingId;
use super::marble::MarbleColor;

/// A sequence of jumps by one marble.
///
/// SmallVec keeps typical chains (1-4 jumps) off the heap.
pub type CaptureChain = SmallVec<[CaptureStep; 4]>;

/// A single jump: the marble on `from` jumps over `captured` and lands on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureStep {
    pub from: RingId,
    pub to: RingId,
    pub captured: RingId,
}

impl CaptureStep {
    #[must_use]
    pub const fn new(from: RingId, captured: RingId, to: RingId) -> Self {
        Self { from, to, captured }
    }
}

/// Placement of a marble, and the ring removed to finish the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementMove {
    pub color: MarbleColor,
    pub ring: RingId,
    /// `None` while removal is pending, or when no ring could be removed.
    pub removed_ring: Option<RingId>,
}

impl PlacementMove {
    #[must_use]
    pub const fn new(color: MarbleColor, ring: RingId, removed_ring: Option<RingId>) -> Self {
        Self {
            color,
            ring,
            removed_ring,
        }
    }
}

/// A capture turn: the first jump plus its continuation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureMove {
    pub jump: CaptureStep,
    pub chain: CaptureChain,
}

impl CaptureMove {
    /// Build from an ordered list of steps. Returns `None` for an empty list.
    #[must_use]
    pub fn from_steps(steps: &[CaptureStep]) -> Option<Self> {
        let (&jump, rest) = steps.split_first()?;
        Some(Self {
            jump,
            chain: SmallVec::from_slice(rest),
        })
    }

    /// All steps in order, starting with the initial jump.
    pub fn steps(&self) -> impl Iterator<Item = &CaptureStep> {
        std::iter::once(&self.jump).chain(self.chain.iter())
    }

    /// Steps collected into a chain.
    #[must_use]
    pub fn to_chain(&self) -> CaptureChain {
        self.steps().copied().collect()
    }

    /// Number of jumps (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.chain.len()
    }

    /// Always false; a capture has at least one jump.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ring the jumping marble started on.
    #[must_use]
    pub fn start(&self) -> RingId {
        self.jump.from
    }

    /// Ring the jumping marble ends on.
    #[must_use]
    pub fn landing(&self) -> RingId {
        self.chain.last().unwrap_or(&self.jump).to
    }
}

/// A complete turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Placement(PlacementMove),
    Capture(CaptureMove),
}

impl Move {
    /// Placement move helper.
    #[must_use]
    pub fn place(color: MarbleColor, ring: RingId, removed_ring: Option<RingId>) -> Self {
        Move::Placement(PlacementMove::new(color, ring, removed_ring))
    }

    /// Capture move helper. Returns `None` for an empty chain.
    #[must_use]
    pub fn capture(steps: &[CaptureStep]) -> Option<Self> {
        CaptureMove::from_steps(steps).map(Move::Capture)
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }
}

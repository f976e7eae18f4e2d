//! Board: the id-keyed ring map and its topology.
//!
//! Membership is fixed at creation from one of the layouts in [`layout`].
//! Rings are never added afterwards; the only membership change is a ring
//! being marked removed, which is permanent.
//!
//! The map is an `im::OrdMap` keyed by [`RingId`]:
//! - clones are O(1) and independent (speculative search clones freely)
//! - iteration is row-major and deterministic
//!
//! Serialized form is an explicit ordered list of `(id, ring)` pairs.

pub mod layout;
mod topology;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, MarbleColor, Ring, RingId};

pub use topology::NeighborList;

/// The set of rings of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    rings: OrdMap<RingId, Ring>,
}

impl Board {
    /// Create a full board for a layout.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let rings = layout::coords(size).map(|id| (id, Ring::new(id))).collect();
        Self { size, rings }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Ring record, including removed rings.
    #[must_use]
    pub fn get(&self, id: RingId) -> Option<&Ring> {
        self.rings.get(&id)
    }

    /// Ring exists and has not been removed.
    #[must_use]
    pub fn is_present(&self, id: RingId) -> bool {
        self.get(id).is_some_and(|r| !r.is_removed)
    }

    /// Marble on a present ring.
    #[must_use]
    pub fn marble_at(&self, id: RingId) -> Option<MarbleColor> {
        self.get(id).filter(|r| !r.is_removed).and_then(|r| r.marble)
    }

    /// All ring records in row-major order, removed ones included.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.rings.values()
    }

    /// Ids of present rings in row-major order.
    pub fn active_ids(&self) -> impl Iterator<Item = RingId> + '_ {
        self.rings().filter(|r| !r.is_removed).map(|r| r.id)
    }

    #[must_use]
    pub fn active_ring_count(&self) -> usize {
        self.active_ids().count()
    }

    /// Present rings without a marble.
    #[must_use]
    pub fn empty_rings(&self) -> Vec<RingId> {
        self.rings().filter(|r| r.is_vacant()).map(|r| r.id).collect()
    }

    /// Put a marble on (or clear) a present ring. Returns false if the ring is
    /// missing or removed.
    pub fn set_marble(&mut self, id: RingId, marble: Option<MarbleColor>) -> bool {
        match self.rings.get_mut(&id) {
            Some(ring) if !ring.is_removed => {
                ring.marble = marble;
                true
            }
            _ => false,
        }
    }

    /// Remove and return the marble on a present ring.
    pub fn take_marble(&mut self, id: RingId) -> Option<MarbleColor> {
        self.rings
            .get_mut(&id)
            .filter(|r| !r.is_removed)
            .and_then(|r| r.marble.take())
    }

    /// Mark a ring removed. Returns false if the ring is missing or already
    /// removed.
    pub fn mark_removed(&mut self, id: RingId) -> bool {
        match self.rings.get_mut(&id) {
            Some(ring) if !ring.is_removed => {
                ring.is_removed = true;
                true
            }
            _ => false,
        }
    }
}

/// Wire form of a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BoardRepr {
    size: BoardSize,
    rings: Vec<(RingId, Ring)>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            rings: board.rings.into_iter().collect(),
        }
    }
}

impl From<BoardRepr> for Board {
    fn from(repr: BoardRepr) -> Self {
        Self {
            size: repr.size,
            rings: repr.rings.into_iter().collect(),
        }
    }
}

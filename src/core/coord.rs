//! Axial hex coordinates.
//!
//! Every ring is identified by its axial coordinate `(q, r)`. Neighbors are
//! computed on demand from the six axial directions; no edge lists are stored.
//!
//! ## Direction order
//!
//! Directions are listed counter-clockwise starting East. Consecutive entries
//! (and `SouthEast -> East`) are adjacent edges of the hexagon, which is what
//! the free-ring rule relies on.
//!
//! ```
//! use zertz_engine::core::{Direction, RingId};
//!
//! let center = RingId::new(0, 0);
//! assert_eq!(center.step(Direction::East), Some(RingId::new(1, 0)));
//! assert_eq!(Direction::SouthEast.next(), Direction::East);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Ring identifier: an axial coordinate pair.
///
/// Ordering is row-major (`r` first, then `q`) so that iterating a board map
/// reads the board top to bottom, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RingId {
    pub q: i8,
    pub r: i8,
}

impl RingId {
    /// Create a ring ID from axial coordinates.
    #[must_use]
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// The adjacent coordinate in `dir` (it may not be a ring on the board).
    ///
    /// `None` when the coordinate does not fit an `i8`; no layout reaches
    /// that far, so callers treat it as off the board.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dq, dr) = dir.delta();
        Some(Self::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// Reflect `middle` through `self`: the coordinate one step past `middle`
    /// along the line `self -> middle`. `None` if it leaves the `i8` range.
    #[inline]
    #[must_use]
    pub fn reflect_through(self, middle: RingId) -> Option<Self> {
        let q = 2 * i16::from(middle.q) - i16::from(self.q);
        let r = 2 * i16::from(middle.r) - i16::from(self.r);
        Some(Self::new(i8::try_from(q).ok()?, i8::try_from(r).ok()?))
    }

    /// Direction from `self` to an adjacent coordinate, if adjacent.
    #[must_use]
    pub fn direction_to(self, other: RingId) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == Some(other))
    }
}

impl Ord for RingId {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.r, self.q).cmp(&(other.r, other.q))
    }
}

impl PartialOrd for RingId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// One of the six axial directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions in circular order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Axial `(dq, dr)` offset.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (0, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (0, 1),
        }
    }

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next direction counter-clockwise (wraps around).
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

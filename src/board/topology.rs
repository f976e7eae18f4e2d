//! Adjacency and connectivity queries.
//!
//! Neighbors are derived from coordinates on every call; the board never
//! stores edges. Connectivity checks run breadth-first over a snapshot and
//! never mutate the board they are asked about.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::Board;
use crate::core::{Direction, RingId};

/// Neighbor ids. A hex ring has at most 6, so this stays on the stack.
pub type NeighborList = SmallVec<[RingId; 6]>;

impl Board {
    /// Present rings adjacent to `id`, in direction order.
    #[must_use]
    pub fn neighbors(&self, id: RingId) -> NeighborList {
        Direction::ALL
            .iter()
            .filter_map(|&dir| id.step(dir))
            .filter(|&n| self.is_present(n))
            .collect()
    }

    /// Landing ring for a jump from `from` over `middle`.
    ///
    /// This is an exact linear reflection, not a neighbor lookup: the result
    /// is `middle + (middle - from)` if that ring is present.
    #[must_use]
    pub fn ring_behind(&self, from: RingId, middle: RingId) -> Option<RingId> {
        from.reflect_through(middle)
            .filter(|&behind| self.is_present(behind))
    }

    /// Whether the edge of `id` facing `dir` is free (no present neighbor).
    #[inline]
    fn is_free_edge(&self, id: RingId, dir: Direction) -> bool {
        !id.step(dir).is_some_and(|n| self.is_present(n))
    }

    /// Number of the six edges with no present neighbor.
    #[must_use]
    pub fn free_edge_count(&self, id: RingId) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.is_free_edge(id, dir))
            .count()
    }

    /// True iff two circularly adjacent edges are both free.
    ///
    /// Two free edges on opposite sides do not count: the ring could not be
    /// slid out of the board.
    #[must_use]
    pub fn has_two_adjacent_free_edges(&self, id: RingId) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.is_free_edge(id, dir) && self.is_free_edge(id, dir.next()))
    }

    /// Present, empty, and removable by the adjacent-free-edge rule.
    #[must_use]
    pub fn is_free_ring(&self, id: RingId) -> bool {
        self.get(id).is_some_and(|r| r.is_vacant()) && self.has_two_adjacent_free_edges(id)
    }

    /// Whether removing `id` would split the present rings into more than
    /// one component. Missing rings report true.
    #[must_use]
    pub fn would_disconnect_board(&self, id: RingId) -> bool {
        if self.get(id).is_none() {
            return true;
        }

        let mut scratch = self.clone();
        scratch.mark_removed(id);

        let Some(start) = scratch.active_ids().next() else {
            return false;
        };
        let reached = scratch.component_of(start, &mut FxHashSet::default()).len();
        reached != scratch.active_ring_count()
    }

    /// Every ring that may be removed this turn.
    ///
    /// Removal that disconnects the board is allowed; isolation is resolved
    /// afterwards by capture, not by rejecting the removal.
    #[must_use]
    pub fn valid_removable_rings(&self) -> Vec<RingId> {
        self.rings()
            .filter(|r| r.is_vacant())
            .map(|r| r.id)
            .filter(|&id| self.has_two_adjacent_free_edges(id))
            .collect()
    }

    /// Partition the present rings into connected components.
    ///
    /// Groups are listed in order of their first ring in row-major order;
    /// ids within a group are in breadth-first order from that ring.
    #[must_use]
    pub fn isolated_groups(&self) -> Vec<Vec<RingId>> {
        let mut visited = FxHashSet::default();
        let mut groups = Vec::new();

        for id in self.active_ids() {
            if visited.contains(&id) {
                continue;
            }
            groups.push(self.component_of(id, &mut visited));
        }

        groups
    }

    /// Breadth-first component containing `start`, marking rings visited.
    fn component_of(&self, start: RingId, visited: &mut FxHashSet<RingId>) -> Vec<RingId> {
        let mut group = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            group.push(current);
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        group
    }
}

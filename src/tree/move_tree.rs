//! Arena-based move tree.
//!
//! Nodes live in a flat `Vec<GameNode>` and refer to each other by
//! `NodeId`. Detached nodes stay in the arena so ids never shift, but are
//! unreachable from the root and have no parent. The arena therefore grows
//! with every undo; [`MoveTree::compact`] drops the dead entries.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::node::{GameNode, NodeId};
use crate::core::{BoardSize, Move, Player, RingId};
use crate::notation::move_to_notation;

/// Game history with variations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveTreeRepr")]
pub struct MoveTree {
    nodes: Vec<GameNode>,
    root: NodeId,
}

impl MoveTree {
    /// Tree holding only the root.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId::new(0);
        Self {
            nodes: vec![GameNode::root(root)],
            root,
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&GameNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> Option<&mut GameNode> {
        self.nodes.get_mut(id.index())
    }

    /// Arena size, detached nodes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the whole arena.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Children of `id`, main line first.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent of `id`. `None` for the root and for detached nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| !p.is_none())
    }

    /// Record a move under `parent`.
    ///
    /// The new node is the main line iff `parent` had no children; otherwise
    /// it is appended after the existing ones as a variation. Returns `None`
    /// if `parent` is not in the arena.
    pub fn append_move(
        &mut self,
        parent: NodeId,
        mv: Move,
        player: Player,
        move_number: u32,
    ) -> Option<NodeId> {
        let id = NodeId::new(self.nodes.len() as u32);
        let parent_node = self.get_mut(parent)?;
        let is_main_line = parent_node.children.is_empty();
        parent_node.children.push(id);

        let mut node = GameNode::new(id, parent, mv, player, move_number);
        node.is_main_line = is_main_line;
        self.nodes.push(node);
        Some(id)
    }

    /// Nodes from the first move down to `id`, root excluded.
    ///
    /// `None` if `id` is not attached to the root.
    #[must_use]
    pub fn path_from_root(&self, id: NodeId) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = id;
        // Bounded by arena size in case of a corrupt parent chain.
        for _ in 0..=self.nodes.len() {
            if current == self.root {
                path.reverse();
                return Some(path);
            }
            let node = self.get(current)?;
            if node.parent.is_none() {
                return None;
            }
            path.push(current);
            current = node.parent;
        }
        None
    }

    /// Moves along the path from the root to `id`.
    #[must_use]
    pub fn moves_to(&self, id: NodeId) -> Option<Vec<Move>> {
        self.path_from_root(id)?
            .into_iter()
            .map(|n| self.get(n).and_then(|node| node.mv.clone()))
            .collect()
    }

    /// Unlink `id` from its parent. The parent's other children keep their
    /// order; if the main line was removed the next child takes its place.
    ///
    /// Returns false for the root and for nodes that are already detached.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let Some(parent_node) = self.get_mut(parent) else {
            return false;
        };
        parent_node.children.retain(|&c| c != id);
        let new_first = parent_node.first_child();

        if let Some(first) = new_first {
            if let Some(node) = self.get_mut(first) {
                node.is_main_line = true;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.is_main_line = false;
        }
        true
    }

    /// First-child walk from the root, root excluded.
    #[must_use]
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut current = self.get(self.root).and_then(GameNode::first_child);
        while let Some(id) = current {
            line.push(id);
            current = self.get(id).and_then(GameNode::first_child);
        }
        line
    }

    pub fn set_notation(&mut self, id: NodeId, notation: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.notation = notation.into();
                true
            }
            None => false,
        }
    }

    /// Back-fill the removed ring of a placement and re-derive its notation.
    ///
    /// Returns false if `id` is missing or not a placement.
    pub fn update_removed_ring(&mut self, id: NodeId, ring: RingId, size: BoardSize) -> bool {
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        let Some(Move::Placement(placement)) = node.mv.as_mut() else {
            return false;
        };
        placement.removed_ring = Some(ring);
        if let Some(mv) = &node.mv {
            node.notation = move_to_notation(mv, size, None);
        }
        true
    }

    /// Summary of the reachable tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            stats.node_count += 1;
            stats.max_depth = stats.max_depth.max(depth);
            stats.variation_count += node.children.len().saturating_sub(1);
            stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }
        stats.main_line_length = self.main_line().len();
        stats.detached_count = self.nodes.len() - stats.node_count;
        stats
    }

    /// Drop every node not reachable from the root and renumber the rest.
    ///
    /// Surviving nodes keep their relative arena order, so a tree with
    /// nothing detached is left unchanged. Returns the old to new id map for
    /// the surviving nodes.
    pub fn compact(&mut self) -> FxHashMap<NodeId, NodeId> {
        let mut reachable = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                reachable.push(id);
                stack.extend(node.children.iter().copied());
            }
        }
        reachable.sort_unstable_by_key(|id| id.index());

        let remap: FxHashMap<NodeId, NodeId> = reachable
            .iter()
            .enumerate()
            .map(|(i, &old)| (old, NodeId::new(i as u32)))
            .collect();
        let lookup = |id: NodeId| remap.get(&id).copied().unwrap_or(NodeId::NONE);

        let mut nodes = Vec::with_capacity(reachable.len());
        for old in &reachable {
            let Some(node) = self.get(*old) else {
                continue;
            };
            let mut node = node.clone();
            node.id = lookup(node.id);
            node.parent = if node.parent.is_none() {
                NodeId::NONE
            } else {
                lookup(node.parent)
            };
            for child in &mut node.children {
                *child = lookup(*child);
            }
            nodes.push(node);
        }

        self.root = lookup(self.root);
        self.nodes = nodes;
        remap
    }

    /// Reassign every parent link by walking children from the root.
    ///
    /// Nodes not reached from the root end up detached. Fails if a child
    /// index is outside the arena or a node is reached twice.
    pub fn rebuild_parents(&mut self) -> Result<(), &'static str> {
        if self.get(self.root).is_none() {
            return Err("root node missing");
        }
        for node in &mut self.nodes {
            node.parent = NodeId::NONE;
        }

        let mut seen = FxHashSet::default();
        seen.insert(self.root);
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let children = self.children(id).to_vec();
            for child in children {
                if !seen.insert(child) {
                    return Err("node reached twice");
                }
                let node = self.get_mut(child).ok_or("child index out of range")?;
                node.parent = id;
                stack.push(child);
            }
        }
        Ok(())
    }
}

impl Default for MoveTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the reachable part of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Reachable nodes, root included.
    pub node_count: usize,
    /// Deepest move below the root.
    pub max_depth: usize,
    /// Children beyond the first, summed over every node.
    pub variation_count: usize,
    pub main_line_length: usize,
    /// Arena entries no longer reachable from the root.
    pub detached_count: usize,
}

/// Wire form: same fields, parents rebuilt on load.
#[derive(Deserialize)]
struct MoveTreeRepr {
    nodes: Vec<GameNode>,
    root: NodeId,
}

impl TryFrom<MoveTreeRepr> for MoveTree {
    type Error = &'static str;

    fn try_from(repr: MoveTreeRepr) -> Result<Self, Self::Error> {
        let mut tree = MoveTree {
            nodes: repr.nodes,
            root: repr.root,
        };
        for (i, node) in tree.nodes.iter().enumerate() {
            if node.id.index() != i {
                return Err("node id does not match its position");
            }
        }
        tree.rebuild_parents()?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MarbleColor;

    fn place(q: i8, r: i8) -> Move {
        Move::place(MarbleColor::White, RingId::new(q, r), None)
    }

    #[test]
    fn test_tree_new() {
        let tree = MoveTree::new();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert!(tree.children(tree.root()).is_empty());
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn test_append_main_line_and_variation() {
        let mut tree = MoveTree::new();
        let root = tree.root();

        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(root, place(0, 2), Player::One, 1).unwrap();

        assert_eq!(tree.children(root), &[a, b]);
        assert!(tree.get(a).unwrap().is_main_line);
        assert!(!tree.get(b).unwrap().is_main_line);
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.append_move(NodeId::new(99), place(0, 1), Player::One, 1), None);
    }

    #[test]
    fn test_path_from_root() {
        let mut tree = MoveTree::new();
        let a = tree.append_move(tree.root(), place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(a, place(0, 2), Player::Two, 2).unwrap();
        let c = tree.append_move(b, place(0, 1), Player::One, 3).unwrap();

        assert_eq!(tree.path_from_root(c), Some(vec![a, b, c]));
        assert_eq!(tree.path_from_root(tree.root()), Some(vec![]));
        assert_eq!(tree.moves_to(b), Some(vec![place(0, 3), place(0, 2)]));
    }

    #[test]
    fn test_detach() {
        let mut tree = MoveTree::new();
        let root = tree.root();
        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(root, place(0, 2), Player::One, 1).unwrap();
        let a2 = tree.append_move(a, place(0, 1), Player::Two, 2).unwrap();

        assert!(tree.detach(a));
        assert_eq!(tree.children(root), &[b]);
        assert!(tree.get(b).unwrap().is_main_line);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.path_from_root(a2), None);

        assert!(!tree.detach(a));
        assert!(!tree.detach(root));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_main_line() {
        let mut tree = MoveTree::new();
        let a = tree.append_move(tree.root(), place(0, 3), Player::One, 1).unwrap();
        tree.append_move(tree.root(), place(1, 3), Player::One, 1);
        let b = tree.append_move(a, place(0, 2), Player::Two, 2).unwrap();

        assert_eq!(tree.main_line(), vec![a, b]);
    }

    #[test]
    fn test_update_removed_ring() {
        let mut tree = MoveTree::new();
        let a = tree.append_move(tree.root(), place(0, 3), Player::One, 1).unwrap();

        assert!(tree.update_removed_ring(a, RingId::new(0, 0), BoardSize::Rings37));
        let node = tree.get(a).unwrap();
        assert_eq!(
            node.mv,
            Some(Move::place(MarbleColor::White, RingId::new(0, 3), Some(RingId::new(0, 0))))
        );
        assert_eq!(node.notation, "Wd4 -d7");

        assert!(!tree.update_removed_ring(tree.root(), RingId::new(0, 0), BoardSize::Rings37));
    }

    #[test]
    fn test_stats() {
        let mut tree = MoveTree::new();
        let root = tree.root();
        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(root, place(0, 2), Player::One, 1).unwrap();
        tree.append_move(a, place(0, 1), Player::Two, 2);
        tree.detach(b);

        let stats = tree.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.variation_count, 0);
        assert_eq!(stats.main_line_length, 2);
        assert_eq!(stats.detached_count, 1);
    }

    #[test]
    fn test_rebuild_parents_after_load() {
        let mut tree = MoveTree::new();
        let root = tree.root();
        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(root, place(0, 2), Player::One, 1).unwrap();
        let c = tree.append_move(b, place(0, 1), Player::Two, 2).unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        let back: MoveTree = serde_json::from_str(&json).unwrap();

        assert_eq!(back, tree);
        assert_eq!(back.parent(a), Some(root));
        assert_eq!(back.parent(c), Some(b));
        assert_eq!(back.path_from_root(c), Some(vec![b, c]));
    }

    #[test]
    fn test_compact_drops_detached_nodes() {
        let mut tree = MoveTree::new();
        let root = tree.root();
        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        let b = tree.append_move(a, place(0, 2), Player::Two, 2).unwrap();
        let c = tree.append_move(b, place(0, 1), Player::One, 3).unwrap();
        let d = tree.append_move(a, place(1, 2), Player::Two, 2).unwrap();
        tree.detach(b);
        assert_eq!(tree.len(), 5);

        let remap = tree.compact();

        assert_eq!(tree.len(), 3);
        assert_eq!(remap.len(), 3);
        assert!(!remap.contains_key(&b));
        assert!(!remap.contains_key(&c));
        let (a, d) = (remap[&a], remap[&d]);
        assert_eq!((a, d), (NodeId::new(1), NodeId::new(2)));
        assert_eq!(tree.children(tree.root()), &[a]);
        assert_eq!(tree.children(a), &[d]);
        assert_eq!(tree.parent(d), Some(a));
        assert_eq!(tree.get(d).unwrap().id, d);
        assert!(tree.get(d).unwrap().is_main_line);
        assert_eq!(tree.stats().detached_count, 0);
    }

    #[test]
    fn test_compact_without_detached_is_identity() {
        let mut tree = MoveTree::new();
        let root = tree.root();
        let a = tree.append_move(root, place(0, 3), Player::One, 1).unwrap();
        tree.append_move(root, place(0, 2), Player::One, 1).unwrap();
        tree.append_move(a, place(0, 1), Player::Two, 2).unwrap();
        let before = tree.clone();

        let remap = tree.compact();

        assert_eq!(tree, before);
        assert!(remap.iter().all(|(old, new)| old == new));
    }

    #[test]
    fn test_rejects_cyclic_children() {
        let mut tree = MoveTree::new();
        let a = tree.append_move(tree.root(), place(0, 3), Player::One, 1).unwrap();
        let mut value = serde_json::to_value(&tree).unwrap();
        value["nodes"][a.index()]["children"] = serde_json::json!([0]);

        assert!(serde_json::from_value::<MoveTree>(value).is_err());
    }
}

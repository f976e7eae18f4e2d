//! Move tree nodes.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player};

/// Index into the `MoveTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::NONE
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One played move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameNode {
    pub id: NodeId,
    /// Move number the move was made at (0 for the root).
    pub move_number: u32,
    /// Player who made the move.
    pub player: Player,
    /// `None` only for the root.
    pub mv: Option<Move>,
    pub notation: String,
    /// First child is the main line, later children are variations.
    pub children: Vec<NodeId>,
    /// Back-reference for traversal. Never serialized; rebuilt on load.
    #[serde(skip)]
    pub parent: NodeId,
    /// Informational. The first-child order is what defines the main line.
    pub is_main_line: bool,
}

impl GameNode {
    /// Sentinel root: move number 0, no move.
    #[must_use]
    pub fn root(id: NodeId) -> Self {
        Self {
            id,
            move_number: 0,
            player: Player::One,
            mv: None,
            notation: String::new(),
            children: Vec::new(),
            parent: NodeId::NONE,
            is_main_line: true,
        }
    }

    /// Node for a move, not yet linked into a tree.
    #[must_use]
    pub fn new(id: NodeId, parent: NodeId, mv: Move, player: Player, move_number: u32) -> Self {
        Self {
            id,
            move_number,
            player,
            mv: Some(mv),
            notation: String::new(),
            children: Vec::new(),
            parent,
            is_main_line: false,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.mv.is_none()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The main-line continuation, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MarbleColor, RingId};

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::new(0).is_none());
        assert_eq!(NodeId::default(), NodeId::NONE);
        assert_eq!(NodeId::new(3).to_string(), "NodeId(3)");
        assert_eq!(NodeId::NONE.to_string(), "NodeId(NONE)");
    }

    #[test]
    fn test_root_node() {
        let root = GameNode::root(NodeId::new(0));
        assert!(root.is_root());
        assert!(root.is_leaf());
        assert_eq!(root.move_number, 0);
        assert!(root.parent.is_none());
    }

    #[test]
    fn test_parent_not_serialized() {
        let mv = Move::place(MarbleColor::White, RingId::new(0, 3), None);
        let node = GameNode::new(NodeId::new(1), NodeId::new(0), mv, Player::One, 1);

        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("parent").is_none());

        let back: GameNode = serde_json::from_value(json).unwrap();
        assert!(back.parent.is_none());
        assert_eq!(back.mv, node.mv);
    }
}

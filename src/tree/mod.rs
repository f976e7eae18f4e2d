//! Move tree: game history with variations.
//!
//! Arena storage with parent and child ids; parent links are not serialized
//! and are rebuilt from the children lists when a tree is loaded.

pub mod move_tree;
pub mod node;

pub use move_tree::{MoveTree, TreeStats};
pub use node::{GameNode, NodeId};

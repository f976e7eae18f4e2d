//! A game in progress: current state, move tree and cursor.
//!
//! Every change goes through [`commit_move`]. Undo and navigation never try
//! to reverse a move; they rebuild the state by replaying the moves on the
//! path from the root.

use crate::core::{GameConfig, GameState, Move};
use crate::error::MoveError;
use crate::rules::{commit_move, create_initial_state, CommitOutcome};
use crate::tree::{MoveTree, NodeId};

/// Rebuild a state by committing `moves` in order from a fresh game.
pub fn replay(config: GameConfig, moves: &[Move]) -> Result<GameState, MoveError> {
    moves.iter().try_fold(create_initial_state(config), |state, mv| {
        commit_move(&state, mv).map(|outcome| outcome.state)
    })
}

/// State, history and the node the state corresponds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    state: GameState,
    tree: MoveTree,
    current: NodeId,
}

impl GameSession {
    /// New game at the root of an empty tree.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let tree = MoveTree::new();
        Self {
            state: create_initial_state(config),
            current: tree.root(),
            tree,
        }
    }

    /// Reassemble a session from a tree and cursor, replaying the moves on
    /// the path to `current`.
    pub fn from_parts(
        config: GameConfig,
        tree: MoveTree,
        current: NodeId,
    ) -> Result<Self, MoveError> {
        let state = replay_to(&tree, config, current)?;
        Ok(Self {
            state,
            tree,
            current,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }

    #[must_use]
    pub fn current(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.state.config
    }

    /// Commit a move and record it under the cursor.
    ///
    /// Playing from a position that already has continuations adds a
    /// variation. On error nothing changes.
    pub fn play(&mut self, mv: Move) -> Result<CommitOutcome, MoveError> {
        let outcome = commit_move(&self.state, &mv)?;

        let node = self
            .tree
            .append_move(self.current, mv, outcome.mover, outcome.move_number)
            .ok_or(MoveError::UnknownNode(self.current))?;
        self.tree.set_notation(node, outcome.notation.clone());

        self.current = node;
        self.state = outcome.state.clone();
        Ok(outcome)
    }

    /// Take back the move at the cursor, discarding it from the tree.
    ///
    /// Returns `Ok(false)` at the root.
    pub fn undo(&mut self) -> Result<bool, MoveError> {
        let Some(parent) = self.tree.parent(self.current) else {
            return Ok(false);
        };

        let state = replay_to(&self.tree, self.config(), parent)?;
        self.tree.detach(self.current);
        self.current = parent;
        self.state = state;
        Ok(true)
    }

    /// Move the cursor to any node reachable from the root.
    pub fn navigate_to(&mut self, node: NodeId) -> Result<(), MoveError> {
        self.state = replay_to(&self.tree, self.config(), node)?;
        self.current = node;
        Ok(())
    }
}

fn replay_to(tree: &MoveTree, config: GameConfig, node: NodeId) -> Result<GameState, MoveError> {
    let path = tree.path_from_root(node).ok_or(MoveError::UnknownNode(node))?;
    let moves = path
        .into_iter()
        .map(|id| tree.get(id).and_then(|n| n.mv.clone()).ok_or(MoveError::EmptyNode))
        .collect::<Result<Vec<_>, _>>()?;
    replay(config, &moves)
}

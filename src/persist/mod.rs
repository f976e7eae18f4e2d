//! Snapshot encoding.
//!
//! JSON (`serde_json`) for anything that leaves the process as text, compact
//! binary (`bincode`) otherwise. Storing the output is the caller's job.
//!
//! Boards encode as an ordered list of `(id, ring)` pairs. Trees encode
//! without parent links; decoding rebuilds them and rejects trees whose
//! children lists are inconsistent.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::error::PersistError;
use crate::session::GameSession;
use crate::tree::{MoveTree, NodeId};

/// A saved game: the state shown, the history and the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub state: GameState,
    pub tree: MoveTree,
    pub current: NodeId,
}

impl SavedGame {
    /// Snapshot a session. Nodes discarded by undo are not saved.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let mut tree = session.tree().clone();
        let remap = tree.compact();
        let current = remap
            .get(&session.current())
            .copied()
            .unwrap_or_else(|| tree.root());
        Self {
            state: session.state().clone(),
            tree,
            current,
        }
    }

    /// Rebuild the session by replaying the history up to the cursor.
    ///
    /// Fails if the history does not replay, or replays to a different state
    /// than the one saved.
    pub fn into_session(self) -> Result<GameSession, PersistError> {
        let session = GameSession::from_parts(self.state.config, self.tree, self.current)
            .map_err(|_| PersistError::Corrupt("move history does not replay"))?;
        if session.state() != &self.state {
            return Err(PersistError::Corrupt("state does not match move history"));
        }
        Ok(session)
    }
}

pub fn state_to_json(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

pub fn state_from_json(json: &str) -> Result<GameState, PersistError> {
    Ok(serde_json::from_str(json)?)
}

pub fn state_to_bytes(state: &GameState) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(state)?)
}

pub fn state_from_bytes(bytes: &[u8]) -> Result<GameState, PersistError> {
    Ok(bincode::deserialize(bytes)?)
}

pub fn tree_to_json(tree: &MoveTree) -> Result<String, PersistError> {
    Ok(serde_json::to_string(tree)?)
}

pub fn tree_from_json(json: &str) -> Result<MoveTree, PersistError> {
    Ok(serde_json::from_str(json)?)
}

pub fn tree_to_bytes(tree: &MoveTree) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(tree)?)
}

pub fn tree_from_bytes(bytes: &[u8]) -> Result<MoveTree, PersistError> {
    Ok(bincode::deserialize(bytes)?)
}

pub fn session_to_json(session: &GameSession) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&SavedGame::from_session(session))?)
}

pub fn session_from_json(json: &str) -> Result<GameSession, PersistError> {
    let saved: SavedGame = serde_json::from_str(json)?;
    saved.into_session()
}

pub fn session_to_bytes(session: &GameSession) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(&SavedGame::from_session(session))?)
}

pub fn session_from_bytes(bytes: &[u8]) -> Result<GameSession, PersistError> {
    let saved: SavedGame = bincode::deserialize(bytes)?;
    saved.into_session()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CaptureStep, GameConfig, MarbleColor, Move, RingId};

    fn played_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default());
        session
            .play(Move::place(MarbleColor::White, RingId::new(0, 3), Some(RingId::new(0, 0))))
            .unwrap();
        session
    }

    #[test]
    fn test_state_json_round_trip() {
        let session = played_session();
        let json = state_to_json(session.state()).unwrap();
        assert_eq!(&state_from_json(&json).unwrap(), session.state());
    }

    #[test]
    fn test_state_bytes_round_trip() {
        let session = played_session();
        let bytes = state_to_bytes(session.state()).unwrap();
        assert_eq!(&state_from_bytes(&bytes).unwrap(), session.state());
    }

    #[test]
    fn test_session_round_trip() {
        let session = played_session();

        let json = session_to_json(&session).unwrap();
        assert_eq!(session_from_json(&json).unwrap(), session);

        let bytes = session_to_bytes(&session).unwrap();
        assert_eq!(session_from_bytes(&bytes).unwrap(), session);
    }

    #[test]
    fn test_undone_moves_are_not_saved() {
        let mut session = played_session();
        session
            .play(Move::place(MarbleColor::White, RingId::new(1, 3), Some(RingId::new(3, 0))))
            .unwrap();
        let jump = CaptureStep::new(RingId::new(0, 3), RingId::new(1, 3), RingId::new(2, 3));
        session.play(Move::capture(&[jump]).unwrap()).unwrap();
        assert_eq!(session.undo(), Ok(true));
        assert_eq!(session.undo(), Ok(true));
        session
            .play(Move::place(MarbleColor::Gray, RingId::new(-2, 5), Some(RingId::new(-3, 6))))
            .unwrap();
        assert_eq!(session.tree().len(), 5);

        let saved = SavedGame::from_session(&session);
        assert_eq!(saved.tree.len(), 3);
        assert_eq!(saved.tree.stats().detached_count, 0);
        assert_eq!(saved.current, NodeId::new(2));

        let restored = session_from_json(&session_to_json(&session).unwrap()).unwrap();
        assert_eq!(restored.state(), session.state());
        assert_eq!(
            restored.tree().moves_to(restored.current()),
            session.tree().moves_to(session.current())
        );
    }

    #[test]
    fn test_tampered_state_rejected() {
        let session = played_session();
        let mut saved = SavedGame::from_session(&session);
        saved.state.reserve.white += 1;

        assert!(matches!(
            saved.into_session(),
            Err(PersistError::Corrupt("state does not match move history"))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(state_from_json("{"), Err(PersistError::Json(_))));
        assert!(matches!(tree_from_bytes(&[1, 2, 3]), Err(PersistError::Binary(_))));
    }
}

//! Move history: an arena of states linked to their predecessors.

use serde::{Deserialize, Serialize};

use crate::board::CheckersMove;

use super::state::{CheckersState, MoveError};

/// Handle of a state inside a [`GameHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("state {0:?} is not in this history")]
    UnknownState(StateId),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Every state reached during a game or search, addressed by [`StateId`].
/// States only ever point backwards, so the arena never holds a cycle.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    states: Vec<CheckersState>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Stores a root state. Any parent link it carries is cleared.
    pub fn push_root(&mut self, mut state: CheckersState) -> StateId {
        state.parent = None;
        let id = StateId(self.states.len());
        log::debug!("history: root {:?} ({} to move)", id, state.turn);
        self.states.push(state);
        id
    }

    /// Applies `mv` to the state `parent` and stores the result.
    pub fn apply(&mut self, parent: StateId, mv: &CheckersMove) -> Result<StateId, HistoryError> {
        let from = self.get(parent).ok_or(HistoryError::UnknownState(parent))?;
        let mut next = from.apply_move(mv)?;
        next.parent = Some(parent);
        let id = StateId(self.states.len());
        log::debug!("history: {:?} -> {:?} via {}", parent, id, mv);
        self.states.push(next);
        Ok(id)
    }

    pub fn get(&self, id: StateId) -> Option<&CheckersState> {
        self.states.get(id.0)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut CheckersState> {
        self.states.get_mut(id.0)
    }

    /// Explores the state in place and returns it.
    pub fn explore(&mut self, id: StateId) -> Option<&CheckersState> {
        let state = self.states.get_mut(id.0)?;
        state.explore();
        Some(state)
    }

    pub fn parent(&self, id: StateId) -> Option<StateId> {
        self.get(id).and_then(|s| s.parent)
    }

    /// Ids from `id` back to its root, `id` first.
    pub fn path_to_root(&self, id: StateId) -> Vec<StateId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(step) = current {
            path.push(step);
            current = self.parent(step);
        }
        path
    }

    /// The moves played from the root to reach `id`, in order.
    pub fn moves_to(&self, id: StateId) -> Vec<CheckersMove> {
        let mut moves: Vec<CheckersMove> = self
            .path_to_root(id)
            .into_iter()
            .filter_map(|s| self.get(s).and_then(|state| state.applied_move))
            .collect();
        moves.reverse();
        moves
    }
}

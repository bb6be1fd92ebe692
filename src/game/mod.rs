//! Checkers game states, their history, and game-tree integration.

pub mod history;
pub mod node;
pub mod state;

pub use history::{GameHistory, HistoryError, StateId};
pub use node::{add_state_node, expand, winning_children, CheckersPayload, CheckersTree, ExpandError};
pub use state::{CheckersState, MoveError};

//! Checkers payloads for the generic game tree.

use rayon::prelude::*;

use crate::board::Player;
use crate::eval::state_heuristic;
use crate::tree::{GameTree, NodeId, NodeKind, TreeError};

use super::history::HistoryError;
use super::state::{CheckersState, MoveError};

/// What a checkers tree node carries besides its value and kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckersPayload {
    pub state: CheckersState,
    /// The move into `state` left the opponent without a legal move.
    pub is_winning_move: bool,
}

pub type CheckersTree = GameTree<CheckersPayload>;

#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Adds a detached node for `state`, valued from `perspective`'s side.
/// `flip` swaps MAX and MIN for a node seen from the opponent's side.
pub fn add_state_node(
    tree: &mut CheckersTree,
    state: CheckersState,
    kind: NodeKind,
    perspective: Player,
    flip: bool,
) -> NodeId {
    let value = state_heuristic(&state.board, perspective);
    push_state(tree, state, value, kind, flip)
}

fn push_state(tree: &mut CheckersTree, state: CheckersState, value: f64, kind: NodeKind, flip: bool) -> NodeId {
    let is_winning_move = state.applied_move.is_some() && state.winner().is_some();
    tree.add_node_flipped(
        kind,
        value,
        CheckersPayload {
            state,
            is_winning_move,
        },
        flip,
    )
}

/// Expands `node` by one ply: explores its state, applies every legal move,
/// and attaches one child per resulting state, best first for `perspective`.
///
/// Children get `child_kind`, except states where the side to move is stuck,
/// which become TERMINAL. Children are built in parallel, each from its own
/// copy of the board. If the node's own side to move is stuck, the node
/// itself becomes TERMINAL and no children are added.
pub fn expand(
    tree: &mut CheckersTree,
    node: NodeId,
    child_kind: NodeKind,
    perspective: Player,
) -> Result<Vec<NodeId>, ExpandError> {
    let parent = tree
        .node_mut(node)
        .ok_or(TreeError::UnknownNode(node))?;
    parent.payload.state.explore();

    if parent.payload.state.moves.is_empty() {
        log::debug!("expand {:?}: no legal moves, now terminal", node);
        parent.kind = NodeKind::Terminal;
        return Ok(Vec::new());
    }

    let state = &parent.payload.state;
    let mut children = state
        .moves
        .par_iter()
        .map(|mv| -> Result<(CheckersState, f64), MoveError> {
            let child = state.apply_move(mv)?;
            let value = state_heuristic(&child.board, perspective);
            Ok((child, value))
        })
        .collect::<Result<Vec<(CheckersState, f64)>, MoveError>>()?;
    children.sort_by(|a, b| b.1.total_cmp(&a.1));

    log::debug!(
        "expand {:?} at depth {}: {} children",
        node,
        state.depth,
        children.len()
    );

    let ids: Vec<NodeId> = children
        .into_iter()
        .map(|(child, value)| {
            let kind = if child.winner().is_some() {
                NodeKind::Terminal
            } else {
                child_kind
            };
            push_state(tree, child, value, kind, false)
        })
        .collect();
    tree.add_children(node, ids.iter().copied())?;
    Ok(ids)
}

/// Ids of `node`'s children flagged as winning moves.
pub fn winning_children(tree: &CheckersTree, node: NodeId) -> Result<Vec<NodeId>, TreeError> {
    Ok(tree
        .children(node)?
        .iter()
        .copied()
        .filter(|&c| tree.node(c).is_some_and(|n| n.payload.is_winning_move))
        .collect())
}

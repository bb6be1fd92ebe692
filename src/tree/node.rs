//! Tree node kinds and node storage.

use serde::{Deserialize, Serialize};

/// How a node combines its children's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Minimum of the children.
    Min,
    /// Maximum of the children.
    Max,
    /// Arithmetic mean of the children (a chance node).
    Expectimax,
    /// Leaf holding a precomputed value; children are ignored.
    Terminal,
}

impl NodeKind {
    /// Swaps MAX and MIN. EXPECTIMAX is chance, not an adversary, and
    /// TERMINAL has no perspective, so both are left unchanged.
    pub const fn flipped(self) -> NodeKind {
        match self {
            NodeKind::Min => NodeKind::Max,
            NodeKind::Max => NodeKind::Min,
            NodeKind::Expectimax => NodeKind::Expectimax,
            NodeKind::Terminal => NodeKind::Terminal,
        }
    }

    /// Whether the value is derived from children.
    pub const fn is_reduction(self) -> bool {
        !matches!(self, NodeKind::Terminal)
    }
}

/// Handle of a node inside a [`GameTree`](super::GameTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node: its stored value, kind, links, and game-specific payload.
///
/// `children` are owned by this node; `parent` is a back-reference used
/// only for traversal.
#[derive(Debug, Clone)]
pub struct Node<P> {
    pub value: f64,
    pub kind: NodeKind,
    pub payload: P,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<P> Node<P> {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

//! Arena-backed adversarial game tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! Each node owns the list of its children's ids; its parent id is a plain
//! back-reference. Reduction is generic over the payload type: MIN, MAX and
//! EXPECTIMAX only ever look at children's values.
//!
//! `value` recomputes the whole subtree on every call; nothing is memoized.

use rayon::prelude::*;

use super::node::{Node, NodeId, NodeKind};

/// Errors from building or evaluating a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node {child:?} is already a child of {parent:?}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    #[error("{kind:?} node {node:?} has no children to reduce")]
    EmptyReduction { node: NodeId, kind: NodeKind },
}

#[derive(Debug, Clone)]
pub struct GameTree<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Default for GameTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> GameTree<P> {
    pub fn new() -> Self {
        GameTree { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GameTree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a detached node and returns its id.
    pub fn add_node(&mut self, kind: NodeKind, value: f64, payload: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            kind,
            payload,
            children: Vec::new(),
            parent: None,
        });
        id
    }

    /// Adds a detached node, optionally flipping MAX/MIN to represent the
    /// opponent's view of the same state.
    pub fn add_node_flipped(&mut self, kind: NodeKind, value: f64, payload: P, flip: bool) -> NodeId {
        let kind = if flip { kind.flipped() } else { kind };
        self.add_node(kind, value, payload)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<P>> {
        self.nodes.get_mut(id.0)
    }

    fn get(&self, id: NodeId) -> Result<&Node<P>, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(self.get(id)?.children())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.get(id)?.parent)
    }

    /// Number of edges between `id` and the root of its tree.
    pub fn depth(&self, id: NodeId) -> Result<usize, TreeError> {
        let mut depth = 0;
        let mut current = self.get(id)?.parent;
        while let Some(p) = current {
            depth += 1;
            current = self.get(p)?.parent;
        }
        Ok(depth)
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> Result<bool, TreeError> {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return Ok(true);
            }
            current = self.get(id)?.parent;
        }
        Ok(false)
    }

    /// Attaches `child` under `parent`. Does not check that `parent`'s kind
    /// makes sense with its new child count.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<&mut Self, TreeError> {
        self.get(parent)?;
        if let Some(existing) = self.get(child)?.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if self.is_ancestor_or_self(child, parent)? {
            return Err(TreeError::Cycle { parent, child });
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(self)
    }

    /// Attaches each of `children` under `parent`, in order.
    pub fn add_children<I>(&mut self, parent: NodeId, children: I) -> Result<&mut Self, TreeError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for child in children {
            self.add_child(parent, child)?;
        }
        Ok(self)
    }

    /// Computes the value of `id` by recursively reducing its subtree.
    pub fn value(&self, id: NodeId) -> Result<f64, TreeError> {
        let node = self.get(id)?;
        if node.kind == NodeKind::Terminal {
            return Ok(node.value);
        }
        let values = node
            .children
            .iter()
            .map(|&c| self.value(c))
            .collect::<Result<Vec<f64>, TreeError>>()?;
        reduce(id, node.kind, node.value, &values)
    }
}

impl<P: Sync> GameTree<P> {
    /// Like [`value`](Self::value), but evaluates sibling subtrees in parallel.
    pub fn par_value(&self, id: NodeId) -> Result<f64, TreeError> {
        let node = self.get(id)?;
        if node.kind == NodeKind::Terminal {
            return Ok(node.value);
        }
        let values = node
            .children
            .par_iter()
            .map(|&c| self.par_value(c))
            .collect::<Result<Vec<f64>, TreeError>>()?;
        reduce(id, node.kind, node.value, &values)
    }
}

fn reduce(id: NodeId, kind: NodeKind, stored: f64, values: &[f64]) -> Result<f64, TreeError> {
    if values.is_empty() && kind.is_reduction() {
        return Err(TreeError::EmptyReduction { node: id, kind });
    }
    Ok(match kind {
        NodeKind::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        NodeKind::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        NodeKind::Expectimax => values.iter().sum::<f64>() / values.len() as f64,
        NodeKind::Terminal => stored,
    })
}

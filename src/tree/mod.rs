//! Generic adversarial game trees.
//!
//! MIN / MAX / EXPECTIMAX / TERMINAL value reduction over an arena of
//! nodes, independent of the game the payloads describe.

pub mod arena;
pub mod node;

pub use arena::{GameTree, TreeError};
pub use node::{Node, NodeId, NodeKind};

//! Draughts engine library.
//!
//! Board geometry and move generation, territory-based position
//! evaluation, and a generic MIN/MAX/EXPECTIMAX game tree with a checkers
//! specialization.

pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod tree;

//! Board representation.
//!
//! Contains the coordinate geometry, players and pieces, the cell grid,
//! and the move type.

pub mod geometry;
pub mod grid;
pub mod moves;
pub mod piece;

pub use geometry::{
    diagonals_and_captures, in_bounds, DiagonalTargets, Direction, MoveTargets, Position,
    ALL_DIRECTIONS,
};
pub use grid::{Board, BoardError, Cell};
pub use moves::CheckersMove;
pub use piece::{Piece, PieceId, PieceIds, Player, ALL_PLAYERS};

//! Board coordinates and diagonal geometry.
//!
//! Maps a position plus a diagonal offset to a validated board position.
//! Squares that fall off the board are reported as `None`; absence is the
//! normal "no move in that direction" signal, never an error.

use serde::{Deserialize, Serialize};

/// A board square: `x` is the column, `y` the row, both 0-based.
///
/// Signed so that offsets past the board edge can be represented before
/// they are validated with [`in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the position shifted by `(dx, dy)` without bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the square halfway between two positions.
    pub const fn midpoint(self, other: Position) -> Self {
        Position {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    /// Manhattan distance to a (possibly fractional) point.
    pub fn manhattan_to(self, x: f64, y: f64) -> f64 {
        (self.y as f64 - y).abs() + (self.x as f64 - x).abs()
    }
}

/// Returns true iff `0 <= x < width` and `0 <= y < height`.
pub fn in_bounds(pos: Position, width: usize, height: usize) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
}

/// One of the four diagonal directions. "Up" is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// Column and row delta of a single diagonal step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn is_up(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::UpRight)
    }

    /// The direction pointing back along the same diagonal.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// Optional targets in each of the four diagonal directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagonalTargets {
    pub up_left: Option<Position>,
    pub up_right: Option<Position>,
    pub down_left: Option<Position>,
    pub down_right: Option<Position>,
}

impl DiagonalTargets {
    pub fn get(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::UpLeft => self.up_left,
            Direction::UpRight => self.up_right,
            Direction::DownLeft => self.down_left,
            Direction::DownRight => self.down_right,
        }
    }

    fn set(&mut self, dir: Direction, pos: Option<Position>) {
        match dir {
            Direction::UpLeft => self.up_left = pos,
            Direction::UpRight => self.up_right = pos,
            Direction::DownLeft => self.down_left = pos,
            Direction::DownRight => self.down_right = pos,
        }
    }

    /// Iterates the present targets with their direction.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Position)> + '_ {
        ALL_DIRECTIONS
            .iter()
            .filter_map(move |&dir| self.get(dir).map(|pos| (dir, pos)))
    }

    /// Directions whose target exists.
    pub fn present(&self) -> Vec<Direction> {
        self.iter().map(|(dir, _)| dir).collect()
    }
}

/// One-step diagonal neighbours and two-step capture landings of a square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveTargets {
    pub diagonal: DiagonalTargets,
    pub capture: DiagonalTargets,
}

/// Computes the diagonal and capture-landing squares around `pos`,
/// each clipped to a `width` x `height` board. Occupancy is not consulted.
pub fn diagonals_and_captures(pos: Position, width: usize, height: usize) -> MoveTargets {
    let mut targets = MoveTargets::default();
    for dir in ALL_DIRECTIONS {
        let (dx, dy) = dir.delta();
        let step = pos.offset(dx, dy);
        let jump = pos.offset(dx * 2, dy * 2);
        targets
            .diagonal
            .set(dir, in_bounds(step, width, height).then_some(step));
        targets
            .capture
            .set(dir, in_bounds(jump, width, height).then_some(jump));
    }
    targets
}

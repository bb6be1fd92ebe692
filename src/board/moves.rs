//! Checkers moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Position;

/// A single step or single jump. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersMove {
    from: Position,
    to: Position,
    capture: bool,
}

impl CheckersMove {
    pub const fn new(from: Position, to: Position, capture: bool) -> Self {
        CheckersMove { from, to, capture }
    }

    pub const fn step(from: Position, to: Position) -> Self {
        Self::new(from, to, false)
    }

    pub const fn jump(from: Position, to: Position) -> Self {
        Self::new(from, to, true)
    }

    pub const fn from(&self) -> Position {
        self.from
    }

    pub const fn to(&self) -> Position {
        self.to
    }

    pub const fn is_capture(&self) -> bool {
        self.capture
    }

    /// The jumped-over square for a capture.
    pub fn captured_square(&self) -> Option<Position> {
        self.capture.then(|| self.from.midpoint(self.to))
    }
}

impl fmt::Display for CheckersMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From ({}, {}) to ({}, {})",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let mv = CheckersMove::step(Position::new(1, 2), Position::new(2, 3));
        assert_eq!(mv.to_string(), "From (1, 2) to (2, 3)");
    }

    #[test]
    fn captured_square_only_for_jumps() {
        let step = CheckersMove::step(Position::new(1, 2), Position::new(2, 3));
        assert_eq!(step.captured_square(), None);
        let jump = CheckersMove::jump(Position::new(1, 2), Position::new(3, 4));
        assert_eq!(jump.captured_square(), Some(Position::new(2, 3)));
        assert!(jump.is_capture());
    }
}

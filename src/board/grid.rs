//! The checkers board: a fixed rectangle of cells.
//!
//! Rows are stored top to bottom (row 0 is TOP's back line), each row left
//! to right. A freshly generated cell always satisfies
//! `cell.position == (column_index, row_index)`; dimensions never change
//! after creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{in_bounds, Position};
use super::piece::{Piece, PieceId, PieceIds, Player};

/// A single square, optionally holding a piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    piece: Option<Piece>,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Cell {
            position,
            piece: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Places a piece on this cell, moving the piece's position here.
    pub fn place(&mut self, mut piece: Piece) {
        piece.position = self.position;
        self.piece = Some(piece);
    }

    pub fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Notation character: `.` for an empty cell.
    pub fn notation_char(&self) -> char {
        self.piece.map_or('.', |p| p.notation_char())
    }
}

/// Errors from loading a serialized board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {rows}x{cols} cells, row {row} has {found}")]
    Shape {
        rows: usize,
        cols: usize,
        row: usize,
        found: usize,
    },

    #[error("expected {rows} rows, found {found}")]
    RowCount { rows: usize, found: usize },

    #[error("cell at index {expected:?} claims position {found:?}")]
    MisplacedCell { expected: Position, found: Position },

    #[error("piece on {cell:?} claims position {piece:?}")]
    MisplacedPiece { cell: Position, piece: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard { rows, cols, cells } = raw;
        if cells.len() != rows {
            return Err(BoardError::RowCount {
                rows,
                found: cells.len(),
            });
        }
        for (y, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(BoardError::Shape {
                    rows,
                    cols,
                    row: y,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                let expected = Position::new(x as i32, y as i32);
                if cell.position != expected {
                    return Err(BoardError::MisplacedCell {
                        expected,
                        found: cell.position,
                    });
                }
                if let Some(piece) = cell.piece.filter(|p| p.position != expected) {
                    return Err(BoardError::MisplacedPiece {
                        cell: expected,
                        piece: piece.position,
                    });
                }
            }
        }
        Ok(Board { rows, cols, cells })
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .map(|y| {
                (0..cols)
                    .map(|x| Cell::new(Position::new(x as i32, y as i32)))
                    .collect()
            })
            .collect();
        Board { rows, cols, cells }
    }

    /// Creates a board with the standard opening placement.
    ///
    /// Each side gets `(rows - 2) / 2` rows of men on the squares where
    /// `x + y` is odd; TOP fills from row 0 down, BOTTOM from the last row up.
    pub fn standard(rows: usize, cols: usize, ids: &mut PieceIds) -> Self {
        let mut board = Board::empty(rows, cols);
        let side_rows = rows.saturating_sub(2) / 2;

        for y in 0..side_rows {
            board.fill_dark_squares(y, Player::Top, ids);
        }
        for i in 0..side_rows {
            board.fill_dark_squares(rows - 1 - i, Player::Bottom, ids);
        }
        board
    }

    fn fill_dark_squares(&mut self, y: usize, owner: Player, ids: &mut PieceIds) {
        let start = if y % 2 == 0 { 1 } else { 0 };
        for x in (start..self.cols).step_by(2) {
            let pos = Position::new(x as i32, y as i32);
            self.cells[y][x].place(Piece::new(ids.next_id(), owner, pos));
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        in_bounds(pos, self.cols, self.rows)
    }

    /// The cell at `pos`, or `None` if off the board.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self.cells[pos.y as usize][pos.x as usize])
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&mut self.cells[pos.y as usize][pos.x as usize])
    }

    /// The piece at `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).and_then(Cell::piece)
    }

    /// Places a piece at `pos`, returning false if `pos` is off the board.
    pub fn place(&mut self, pos: Position, piece: Piece) -> bool {
        match self.cell_mut(pos) {
            Some(cell) => {
                cell.place(piece);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the piece at `pos`.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cell_mut(pos).and_then(Cell::take)
    }

    /// Rows in top-to-bottom order.
    pub fn row_slices(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(Cell::piece)
    }

    pub fn pieces_of(&self, owner: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.owner == owner)
    }

    pub fn count(&self, owner: Player) -> usize {
        self.pieces_of(owner).count()
    }

    /// Finds a piece by id.
    pub fn find(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id == id)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.notation_char())?;
            }
        }
        Ok(())
    }
}

//! Per-session board information.
//!
//! Holds the board dimensions and centre, the current board, and whose
//! turn it is. Territory is derived from `(board, turn)` on each call.

use crate::board::{Board, Player};

use super::territory::{territory, territory_pair, BoardTerritory, TerritoryPair};

#[derive(Debug, Clone)]
pub struct BoardInfo {
    rows: usize,
    cols: usize,
    y_center: f64,
    x_center: f64,
    board: Option<Board>,
    turn: Player,
}

impl BoardInfo {
    /// Creates info for a `rows` x `cols` board with no board set yet.
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardInfo {
            rows,
            cols,
            y_center: rows as f64 / 2.0,
            x_center: cols as f64 / 2.0,
            board: None,
            turn: Player::Bottom,
        }
    }

    /// Creates info with `board` already set.
    pub fn for_board(board: &Board, turn: Player) -> Self {
        let mut info = BoardInfo::new(board.rows(), board.cols());
        info.set_board(board.clone());
        info.set_turn(turn);
        info
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    pub fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn y_center(&self) -> f64 {
        self.y_center
    }

    pub fn x_center(&self) -> f64 {
        self.x_center
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Owned/enemy territories for the current turn. `None` until a board is set.
    pub fn territory(&self) -> Option<TerritoryPair> {
        self.board.as_ref().map(|b| territory_pair(b, self.turn))
    }

    /// Territory of a specific player, if a board is set and the player has pieces.
    pub fn territory_of(&self, player: Player) -> Option<BoardTerritory> {
        self.board.as_ref().and_then(|b| territory(b, player))
    }
}

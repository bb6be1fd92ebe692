//! Heuristic piece and board evaluation.
//!
//! Per-piece score:
//! - base: 2 for a king, 1 for a man
//! - king inside the enemy rectangle: `| |y - midY| + |x - midX| - 10 |`,
//!   using the enemy rectangle's midpoints
//! - man inside the enemy rectangle: distance from its row to its own back row
//! - always: Manhattan distance from the board centre
//! - every man: distance to its own back row again
//!
//! "Enemy" is always relative to the piece's owner, so a piece scores the
//! same no matter whose turn it is. The board score is the side's total
//! minus the opponent's, which makes it antisymmetric under player swap.

use crate::board::{Board, Piece, Player};

use super::info::BoardInfo;
use super::territory::{territory, BoardTerritory};

/// Manhattan distance from the enemy centre at which a king's bonus is zero.
pub const KING_SWEET_SPOT: f64 = 10.0;

/// Shaping term for a king inside enemy territory, given its Manhattan
/// distance to the enemy rectangle's midpoint.
pub fn king_centering_bonus(distance: f64) -> f64 {
    (distance - KING_SWEET_SPOT).abs()
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    rows: usize,
    y_center: f64,
    x_center: f64,
}

impl Frame {
    fn of(info: &BoardInfo) -> Self {
        Frame {
            rows: info.rows(),
            y_center: info.y_center(),
            x_center: info.x_center(),
        }
    }

    fn of_board(board: &Board) -> Self {
        Frame {
            rows: board.rows(),
            y_center: board.rows() as f64 / 2.0,
            x_center: board.cols() as f64 / 2.0,
        }
    }

    fn back_row_distance(&self, piece: &Piece) -> f64 {
        (piece.position.y as f64 - piece.owner.back_row(self.rows) as f64).abs()
    }
}

fn score_piece(piece: &Piece, frame: Frame, enemy: Option<&BoardTerritory>) -> f64 {
    let mut score = if piece.is_king { 2.0 } else { 1.0 };

    if let Some(enemy) = enemy.filter(|t| t.contains(piece.position)) {
        if piece.is_king {
            let distance = piece.position.manhattan_to(enemy.mid_col(), enemy.mid_row());
            score += king_centering_bonus(distance);
        } else {
            score += frame.back_row_distance(piece);
        }
    }

    score += piece.position.manhattan_to(frame.x_center, frame.y_center);

    if !piece.is_king {
        score += frame.back_row_distance(piece);
    }

    score
}

/// Heuristic value of a single piece.
///
/// Territory terms apply only when `info` has a board and the piece's
/// opponent has at least one piece on it.
pub fn heuristic_value(piece: &Piece, info: &BoardInfo) -> f64 {
    let enemy = info.territory_of(piece.owner.flip());
    score_piece(piece, Frame::of(info), enemy.as_ref())
}

/// Sum of the heuristic values of all of `player`'s pieces.
pub fn side_heuristic(board: &Board, player: Player) -> f64 {
    let frame = Frame::of_board(board);
    let enemy = territory(board, player.flip());
    board
        .pieces_of(player)
        .map(|p| score_piece(p, frame, enemy.as_ref()))
        .sum()
}

/// Board score from `player`'s point of view: own total minus opponent total.
///
/// `board_heuristic(b, Top) == -board_heuristic(b, Bottom)` for every board.
pub fn board_heuristic(board: &Board, player: Player) -> f64 {
    side_heuristic(board, player) - side_heuristic(board, player.flip())
}

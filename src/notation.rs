//! Compact text notation for a checkers position.
//!
//! Format: `<turn>:<row0>/<row1>/.../<rowN>`
//!
//! `<turn>` is `t` (TOP to move) or `b` (BOTTOM to move). Each row lists
//! its cells left to right: `.` empty, `t`/`T` TOP man/king, `b`/`B`
//! BOTTOM man/king. Row 0 is TOP's back line.
//!
//! Example (standard 8x8 opening, BOTTOM to move):
//! `b:.t.t.t.t/t.t.t.t./.t.t.t.t/......../......../b.b.b.b./.b.b.b.b/b.b.b.b.`

use crate::board::{Board, Piece, PieceIds, Player, Position};

/// Errors that can occur while parsing position notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected '<turn>:<rows>', got '{0}'")]
    MissingSeparator(String),

    #[error("invalid turn character: '{0}'")]
    InvalidTurn(String),

    #[error("invalid cell character '{0}' in row {1}")]
    InvalidCell(char, usize),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Parses a position string into a board and the side to move.
///
/// Piece ids are drawn from `ids` in row-major order.
pub fn parse_position(s: &str, ids: &mut PieceIds) -> Result<(Board, Player), NotationError> {
    let s = s.trim();
    let (turn_str, rows_str) = s
        .split_once(':')
        .ok_or_else(|| NotationError::MissingSeparator(s.to_string()))?;

    let mut turn_chars = turn_str.chars();
    let turn = match (turn_chars.next(), turn_chars.next()) {
        (Some(c), None) => Player::from_notation_char(c),
        _ => None,
    }
    .ok_or_else(|| NotationError::InvalidTurn(turn_str.to_string()))?;

    let rows: Vec<&str> = if rows_str.is_empty() {
        Vec::new()
    } else {
        rows_str.split('/').collect()
    };
    let cols = rows.first().map_or(0, |r| r.chars().count());

    let mut board = Board::empty(rows.len(), cols);
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != cols {
            return Err(NotationError::RaggedRow {
                row: y,
                expected: cols,
                found,
            });
        }
        for (x, c) in row.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let piece = match c {
                '.' => continue,
                't' => Piece::new(ids.next_id(), Player::Top, pos),
                'T' => Piece::king(ids.next_id(), Player::Top, pos),
                'b' => Piece::new(ids.next_id(), Player::Bottom, pos),
                'B' => Piece::king(ids.next_id(), Player::Bottom, pos),
                other => return Err(NotationError::InvalidCell(other, y)),
            };
            board.place(pos, piece);
        }
    }

    Ok((board, turn))
}

/// Encodes a board and side to move. Inverse of [`parse_position`], up to ids.
pub fn encode_position(board: &Board, turn: Player) -> String {
    let rows: Vec<String> = board
        .row_slices()
        .iter()
        .map(|row| row.iter().map(|cell| cell.notation_char()).collect())
        .collect();
    format!("{}:{}", turn.notation_char(), rows.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str =
        "b:.t.t.t.t/t.t.t.t./.t.t.t.t/......../......../b.b.b.b./.b.b.b.b/b.b.b.b.";

    #[test]
    fn opening_matches_standard_board() {
        let (board, turn) = parse_position(OPENING, &mut PieceIds::sequential()).unwrap();
        assert_eq!(turn, Player::Bottom);
        let standard = Board::standard(8, 8, &mut PieceIds::sequential());
        assert_eq!(encode_position(&standard, Player::Bottom), OPENING);
        assert_eq!(board.count(Player::Top), 12);
        assert_eq!(board.count(Player::Bottom), 12);
    }

    #[test]
    fn parses_kings() {
        let (board, turn) = parse_position("t:T./.B", &mut PieceIds::sequential()).unwrap();
        assert_eq!(turn, Player::Top);
        let top = board.piece_at(Position::new(0, 0)).unwrap();
        assert!(top.is_king);
        assert_eq!(top.owner, Player::Top);
        let bottom = board.piece_at(Position::new(1, 1)).unwrap();
        assert!(bottom.is_king);
        assert_eq!(bottom.owner, Player::Bottom);
    }

    #[test]
    fn encode_round_trips_text() {
        let text = "t:..t./B.../.b..";
        let (board, turn) = parse_position(text, &mut PieceIds::sequential()).unwrap();
        assert_eq!(encode_position(&board, turn), text);
    }

    #[test]
    fn empty_board_text() {
        let (board, _) = parse_position("b:", &mut PieceIds::sequential()).unwrap();
        assert_eq!(board.rows(), 0);
        assert_eq!(board.cols(), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        let mut ids = PieceIds::sequential();
        assert_eq!(
            parse_position("....", &mut ids),
            Err(NotationError::MissingSeparator("....".to_string()))
        );
        assert_eq!(
            parse_position("x:..", &mut ids),
            Err(NotationError::InvalidTurn("x".to_string()))
        );
        assert_eq!(
            parse_position("tb:..", &mut ids),
            Err(NotationError::InvalidTurn("tb".to_string()))
        );
        assert_eq!(
            parse_position("t:../.x", &mut ids),
            Err(NotationError::InvalidCell('x', 1))
        );
        assert_eq!(
            parse_position("t:.../..", &mut ids),
            Err(NotationError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }
}

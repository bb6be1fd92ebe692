//! Legal move generation.
//!
//! Layers occupancy rules on top of the diagonal geometry: a man steps or
//! jumps forward only, a king in any direction. A step needs an empty
//! target; a jump needs an opponent piece on the jumped square and an
//! empty landing square. Captures are not forced and jumps are not chained.

use crate::board::{diagonals_and_captures, Board, CheckersMove, Direction, Piece, Player};

/// Legal moves for a single piece, in direction order, steps before jumps.
pub fn moves_for_piece(piece: &Piece, board: &Board) -> Vec<CheckersMove> {
    let from = piece.position;
    let targets = diagonals_and_captures(from, board.cols(), board.rows());
    let mut moves = Vec::new();

    for (dir, to) in targets.diagonal.iter() {
        if piece.can_move_towards(dir) && board.piece_at(to).is_none() {
            moves.push(CheckersMove::step(from, to));
        }
    }

    for (dir, to) in targets.capture.iter() {
        if can_jump(piece, dir, board) && board.piece_at(to).is_none() {
            moves.push(CheckersMove::jump(from, to));
        }
    }

    moves
}

fn can_jump(piece: &Piece, dir: Direction, board: &Board) -> bool {
    if !piece.can_move_towards(dir) {
        return false;
    }
    let (dx, dy) = dir.delta();
    let over = piece.position.offset(dx, dy);
    board
        .piece_at(over)
        .is_some_and(|p| p.owner != piece.owner)
}

/// All legal moves for `player`, pieces in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<CheckersMove> {
    board
        .pieces_of(player)
        .flat_map(|piece| moves_for_piece(piece, board))
        .collect()
}

/// Whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|piece| !moves_for_piece(piece, board).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceIds, Position};
    use crate::notation::parse_position;

    fn board(text: &str) -> Board {
        parse_position(text, &mut PieceIds::sequential()).unwrap().0
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn opening_has_seven_moves_each() {
        let b = Board::standard(8, 8, &mut PieceIds::sequential());
        let bottom = legal_moves(&b, Player::Bottom);
        assert_eq!(bottom.len(), 7);
        assert!(bottom.iter().all(|m| !m.is_capture() && m.to().y == 4));
        let top = legal_moves(&b, Player::Top);
        assert_eq!(top.len(), 7);
        assert!(top.iter().all(|m| m.to().y == 3));
    }

    #[test]
    fn men_only_move_forward() {
        let b = board("b:..../.b../..../.t..");
        let bottom = legal_moves(&b, Player::Bottom);
        assert_eq!(
            bottom,
            vec![CheckersMove::step(p(1, 1), p(0, 0)), CheckersMove::step(p(1, 1), p(2, 0))]
        );
        let top = legal_moves(&b, Player::Top);
        assert!(top.is_empty());
    }

    #[test]
    fn kings_move_both_ways() {
        let b = board("b:..../.B../..../....");
        let moves = legal_moves(&b, Player::Bottom);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn capture_needs_enemy_and_empty_landing() {
        let b = board("b:......../......../......../..t...../...b..../......../......../........");
        let moves = legal_moves(&b, Player::Bottom);
        assert!(moves.contains(&CheckersMove::jump(p(3, 4), p(1, 2))));
        assert!(moves.contains(&CheckersMove::step(p(3, 4), p(4, 3))));
        assert!(!moves.contains(&CheckersMove::step(p(3, 4), p(2, 3))));

        // Landing blocked.
        let b = board("b:......../......../.t....../..t...../...b..../......../......../........");
        let moves = legal_moves(&b, Player::Bottom);
        assert!(!moves.iter().any(|m| m.is_capture()));

        // Own piece in the way.
        let b = board("b:......../......../......../..b...../...b..../......../......../........");
        let moves = legal_moves(&b, Player::Bottom);
        assert!(!moves.iter().any(|m| m.is_capture()));
    }

    #[test]
    fn men_cannot_capture_backwards() {
        // BOTTOM man at (3,4) with a TOP man diagonally behind it at (2,5).
        let b = board("t:......../......../......../......../...b..../..t...../......../........");
        assert!(!legal_moves(&b, Player::Bottom).iter().any(|m| m.is_capture()));
        assert!(!legal_moves(&b, Player::Top).iter().any(|m| m.is_capture()));

        // Crowned, both can.
        let b = board("t:......../......../......../......../...B..../..T...../......../........");
        assert!(legal_moves(&b, Player::Bottom).contains(&CheckersMove::jump(p(3, 4), p(1, 6))));
        assert!(legal_moves(&b, Player::Top).contains(&CheckersMove::jump(p(2, 5), p(4, 3))));
    }

    #[test]
    fn no_pieces_no_moves() {
        let b = Board::empty(8, 8);
        assert!(legal_moves(&b, Player::Top).is_empty());
        assert!(!has_legal_move(&b, Player::Top));
    }

    #[test]
    fn blocked_side_has_no_moves() {
        let b = board("t:t.../.b../b.b./....");
        // TOP man at (0,0) is blocked by (1,1), whose landing (2,2) is occupied.
        assert!(!has_legal_move(&b, Player::Top));
        assert!(has_legal_move(&b, Player::Bottom));
    }
}

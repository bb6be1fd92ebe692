//! Whole-position features layered on top of the per-piece heuristic.
//!
//! Each side is measured on its own:
//! - mobility: number of legal moves
//! - vulnerable points: diagonals along which an opposing piece can jump one
//!   of the side's pieces right now
//! - safe points: diagonals with an adjacent opposing piece that cannot jump
//! - forced jumps: pieces with a capture available
//! - material: piece count
//!
//! The side score is `mobility - vulnerable + safe + forced_jumps + material`
//! and the position score is the difference between the two sides, so it
//! keeps the antisymmetry of [`board_heuristic`].

use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece, Player, ALL_DIRECTIONS};
use crate::movegen::{legal_moves, moves_for_piece};

use super::heuristic::board_heuristic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideFeatures {
    pub mobility: usize,
    pub vulnerable: usize,
    pub safe: usize,
    pub forced_jumps: usize,
    pub material: usize,
}

impl SideFeatures {
    pub fn score(&self) -> f64 {
        (self.mobility + self.safe + self.forced_jumps + self.material) as f64 - self.vulnerable as f64
    }
}

/// Diagonals along which an opposing piece can capture `piece`: the
/// attacker sits on one side, the landing square on the other is empty, and
/// the attacker may move in that direction.
pub fn vulnerable_points(piece: &Piece, board: &Board) -> usize {
    count_adjacent_enemies(piece, board, true)
}

/// Diagonals with an adjacent opposing piece that cannot capture `piece`,
/// because the landing square is occupied or off the board or because the
/// attacker is a man facing the wrong way.
pub fn safe_points(piece: &Piece, board: &Board) -> usize {
    count_adjacent_enemies(piece, board, false)
}

fn count_adjacent_enemies(piece: &Piece, board: &Board, threatening: bool) -> usize {
    let pos = piece.position;
    ALL_DIRECTIONS
        .iter()
        .filter(|&&dir| {
            let (dx, dy) = dir.delta();
            let Some(attacker) = board.piece_at(pos.offset(dx, dy)) else {
                return false;
            };
            if attacker.owner == piece.owner {
                return false;
            }
            let landing = pos.offset(-dx, -dy);
            let can_jump = board.contains(landing)
                && board.piece_at(landing).is_none()
                && attacker.can_move_towards(dir.opposite());
            can_jump == threatening
        })
        .count()
}

/// Whether `piece` has a capture available.
pub fn is_forced_jump(piece: &Piece, board: &Board) -> bool {
    moves_for_piece(piece, board).iter().any(|m| m.is_capture())
}

pub fn side_features(board: &Board, player: Player) -> SideFeatures {
    let mut features = SideFeatures {
        mobility: legal_moves(board, player).len(),
        ..SideFeatures::default()
    };
    for piece in board.pieces_of(player) {
        features.material += 1;
        features.vulnerable += vulnerable_points(piece, board);
        features.safe += safe_points(piece, board);
        features.forced_jumps += usize::from(is_forced_jump(piece, board));
    }
    features
}

/// Feature score from `player`'s point of view.
pub fn feature_score(board: &Board, player: Player) -> f64 {
    side_features(board, player).score() - side_features(board, player.flip()).score()
}

/// Full position value for `player`: the per-piece board heuristic plus
/// the feature score.
pub fn state_heuristic(board: &Board, player: Player) -> f64 {
    board_heuristic(board, player) + feature_score(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceIds, Position};
    use crate::notation::parse_position;

    fn board(text: &str) -> Board {
        parse_position(text, &mut PieceIds::sequential()).unwrap().0
    }

    fn at(b: &Board, x: i32, y: i32) -> Piece {
        *b.piece_at(Position::new(x, y)).unwrap()
    }

    #[test]
    fn opening_features_are_even() {
        let b = Board::standard(8, 8, &mut PieceIds::sequential());
        let expected = SideFeatures {
            mobility: 7,
            vulnerable: 0,
            safe: 0,
            forced_jumps: 0,
            material: 12,
        };
        assert_eq!(side_features(&b, Player::Top), expected);
        assert_eq!(side_features(&b, Player::Bottom), expected);
        assert_eq!(feature_score(&b, Player::Top), 0.0);
        assert_eq!(state_heuristic(&b, Player::Top), board_heuristic(&b, Player::Top));
    }

    #[test]
    fn facing_men_threaten_each_other() {
        let b = board("b:......../......../......../..t...../...b..../......../......../........");
        let bottom = at(&b, 3, 4);
        let top = at(&b, 2, 3);
        assert_eq!(vulnerable_points(&bottom, &b), 1);
        assert_eq!(vulnerable_points(&top, &b), 1);
        assert_eq!(safe_points(&bottom, &b), 0);
        assert!(is_forced_jump(&bottom, &b));
        assert!(is_forced_jump(&top, &b));

        let features = side_features(&b, Player::Bottom);
        assert_eq!(features.mobility, 2);
        assert_eq!(features.score(), 3.0);
        assert_eq!(feature_score(&b, Player::Bottom), 0.0);
    }

    #[test]
    fn blocked_landing_makes_a_piece_safe() {
        let b = board("b:......../......../......../..t...../...b..../....b.../......../........");
        let front = at(&b, 3, 4);
        assert_eq!(vulnerable_points(&front, &b), 0);
        assert_eq!(safe_points(&front, &b), 1);
        assert_eq!(vulnerable_points(&at(&b, 2, 3), &b), 1);
        assert!(!is_forced_jump(&at(&b, 2, 3), &b));

        let bottom = side_features(&b, Player::Bottom);
        assert_eq!(
            bottom,
            SideFeatures {
                mobility: 3,
                vulnerable: 0,
                safe: 1,
                forced_jumps: 1,
                material: 2,
            }
        );
        let top = side_features(&b, Player::Top);
        assert_eq!(top.score(), 1.0);
        assert_eq!(feature_score(&b, Player::Bottom), 6.0);
        assert_eq!(feature_score(&b, Player::Top), -6.0);
    }

    #[test]
    fn only_kings_threaten_backwards() {
        let man = board("b:......../......../......../......../...b..../..t...../......../........");
        assert_eq!(vulnerable_points(&at(&man, 3, 4), &man), 0);
        assert_eq!(safe_points(&at(&man, 3, 4), &man), 1);

        let king = board("b:......../......../......../......../...b..../..T...../......../........");
        assert_eq!(vulnerable_points(&at(&king, 3, 4), &king), 1);
        assert_eq!(safe_points(&at(&king, 3, 4), &king), 0);
    }

    #[test]
    fn edge_pieces_cannot_be_jumped() {
        let b = board("t:..../t.../.b../....");
        // Nothing can land behind (0,1) on the edge; (1,2) can be jumped to (2,3).
        assert_eq!(vulnerable_points(&at(&b, 0, 1), &b), 0);
        assert_eq!(safe_points(&at(&b, 0, 1), &b), 1);
        assert_eq!(vulnerable_points(&at(&b, 1, 2), &b), 1);
    }

    #[test]
    fn state_heuristic_is_antisymmetric() {
        let b = board("t:.t...t../......../.t.T.t../......../...b...b/b.B...../.b...b.b/........");
        assert_eq!(state_heuristic(&b, Player::Top), -state_heuristic(&b, Player::Bottom));
        assert_eq!(state_heuristic(&Board::empty(4, 4), Player::Bottom), 0.0);
    }

    #[test]
    fn more_material_scores_higher() {
        let even = board("b:..../.t../..../.b..");
        let up = board("b:..../.t../..../.b.b");
        assert!(feature_score(&up, Player::Bottom) > feature_score(&even, Player::Bottom));
    }
}

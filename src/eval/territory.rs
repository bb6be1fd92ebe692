//! Territory analysis.
//!
//! A player's territory is the smallest rectangle holding all of that
//! player's pieces, plus the ids of the player's pieces inside it.
//!
//! Rows are scanned in the player's own orientation: TOP reads the board
//! from row 0 downwards, BOTTOM from the last row upwards, so the first
//! occupied row found is always the one nearest the player's back line
//! (the "home" row) and the last is the most advanced ("front") row.
//! Columns are measured across the whole board.
//!
//! A player with no pieces has no territory (`None`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, PieceId, Player, Position};

/// The bounding rectangle of one player's pieces.
///
/// Bounds are board indices with `row_start <= row_end` and
/// `col_start <= col_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTerritory {
    pub owner: Player,
    /// Topmost occupied row in board order (row 0 first). For BOTTOM this
    /// is the front row; see [`home_row`](Self::home_row).
    pub row_start: usize,
    /// Bottommost occupied row in board order.
    pub row_end: usize,
    /// Leftmost column index whose cell holds one of the owner's pieces.
    pub col_start: usize,
    pub col_end: usize,
    pub territory_ids: BTreeSet<PieceId>,
}

impl BoardTerritory {
    /// The occupied row nearest the owner's back line.
    pub fn home_row(&self) -> usize {
        match self.owner {
            Player::Top => self.row_start,
            Player::Bottom => self.row_end,
        }
    }

    /// The owner's most advanced occupied row.
    pub fn front_row(&self) -> usize {
        match self.owner {
            Player::Top => self.row_end,
            Player::Bottom => self.row_start,
        }
    }

    /// Row midpoint of the rectangle.
    pub fn mid_row(&self) -> f64 {
        (self.row_start + self.row_end) as f64 / 2.0
    }

    /// Column midpoint of the rectangle.
    pub fn mid_col(&self) -> f64 {
        (self.col_start + self.col_end) as f64 / 2.0
    }

    /// Whether `pos` lies inside the rectangle (inclusive).
    pub fn contains(&self, pos: Position) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        (self.row_start..=self.row_end).contains(&y) && (self.col_start..=self.col_end).contains(&x)
    }

    pub fn holds(&self, id: PieceId) -> bool {
        self.territory_ids.contains(&id)
    }
}

/// Territories of the side to move ("owned") and of its opponent ("enemy").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryPair {
    pub owned: Option<BoardTerritory>,
    pub enemy: Option<BoardTerritory>,
}

impl TerritoryPair {
    /// Territory belonging to `player`.
    pub fn of(&self, player: Player) -> Option<&BoardTerritory> {
        [self.owned.as_ref(), self.enemy.as_ref()]
            .into_iter()
            .flatten()
            .find(|t| t.owner == player)
    }
}

fn row_has_piece_of(row: &[Cell], player: Player) -> bool {
    row.iter()
        .any(|cell| cell.piece().is_some_and(|p| p.owner == player))
}

/// Returns `(home, front)` board row indices for `player`.
fn row_bounds(board: &Board, player: Player) -> Option<(usize, usize)> {
    let rows = board.row_slices();
    let last = rows.len().checked_sub(1)?;

    // Oriented index 0 is the player's back line.
    let to_board = |i: usize| match player {
        Player::Top => i,
        Player::Bottom => last - i,
    };
    let oriented = |i: usize| &rows[to_board(i)];

    let home = (0..rows.len()).find(|&i| row_has_piece_of(oriented(i), player))?;
    let front = (0..rows.len())
        .rev()
        .find(|&i| row_has_piece_of(oriented(i), player))?;
    Some((to_board(home), to_board(front)))
}

/// Returns `(min, max)` indices of the columns whose cells hold a piece of
/// `player`.
fn col_bounds(board: &Board, player: Player) -> Option<(usize, usize)> {
    board
        .row_slices()
        .iter()
        .flat_map(|row| row.iter().enumerate())
        .filter(|(_, cell)| cell.piece().is_some_and(|p| p.owner == player))
        .map(|(x, _)| x)
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}

/// Computes the territory of `player`, or `None` if it has no pieces.
pub fn territory(board: &Board, player: Player) -> Option<BoardTerritory> {
    let (home, front) = row_bounds(board, player)?;
    let (col_start, col_end) = col_bounds(board, player)?;
    let row_start = home.min(front);
    let row_end = home.max(front);

    let territory_ids = board.row_slices()[row_start..=row_end]
        .iter()
        .flat_map(|row| row.get(col_start..=col_end).unwrap_or_default())
        .filter_map(|cell| cell.piece().filter(|p| p.owner == player).map(|p| p.id))
        .collect();

    Some(BoardTerritory {
        owner: player,
        row_start,
        row_end,
        col_start,
        col_end,
        territory_ids,
    })
}

/// Territories for `turn` and its opponent.
pub fn territory_pair(board: &Board, turn: Player) -> TerritoryPair {
    TerritoryPair {
        owned: territory(board, turn),
        enemy: territory(board, turn.flip()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceIds;
    use crate::notation::parse_position;

    fn board(text: &str) -> Board {
        parse_position(text, &mut PieceIds::sequential()).unwrap().0
    }

    #[test]
    fn empty_board_has_no_territory() {
        let b = Board::empty(8, 8);
        assert!(territory(&b, Player::Top).is_none());
        assert!(territory(&b, Player::Bottom).is_none());
        let pair = territory_pair(&b, Player::Top);
        assert!(pair.owned.is_none());
        assert!(pair.enemy.is_none());
    }

    #[test]
    fn zero_sized_board_has_no_territory() {
        let b = Board::empty(0, 0);
        assert!(territory(&b, Player::Top).is_none());
    }

    #[test]
    fn one_side_captured() {
        let b = board("t:..../.t../..../....");
        assert!(territory(&b, Player::Bottom).is_none());
        let top = territory(&b, Player::Top).unwrap();
        assert_eq!((top.row_start, top.row_end), (1, 1));
        assert_eq!((top.col_start, top.col_end), (1, 1));
        assert_eq!(top.territory_ids.len(), 1);
    }

    #[test]
    fn column_bounds_follow_cell_indices() {
        let b = board("b:........../.....b..../........../..b......./..........");
        let bottom = territory(&b, Player::Bottom).unwrap();
        assert_eq!((bottom.col_start, bottom.col_end), (2, 5));
        assert_eq!((bottom.row_start, bottom.row_end), (1, 3));

        let json = serde_json::to_string(&b).unwrap();
        let loaded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(territory(&loaded, Player::Bottom), Some(bottom));
    }

    #[test]
    fn standard_opening_bounds() {
        let b = Board::standard(8, 8, &mut PieceIds::sequential());
        let top = territory(&b, Player::Top).unwrap();
        assert_eq!((top.row_start, top.row_end), (0, 2));
        assert_eq!((top.home_row(), top.front_row()), (0, 2));
        assert_eq!((top.col_start, top.col_end), (0, 7));
        assert_eq!(top.territory_ids.len(), 12);

        let bottom = territory(&b, Player::Bottom).unwrap();
        assert_eq!((bottom.row_start, bottom.row_end), (5, 7));
        assert_eq!((bottom.home_row(), bottom.front_row()), (7, 5));
        assert_eq!((bottom.col_start, bottom.col_end), (0, 7));
    }

    #[test]
    fn columns_span_whole_board_not_row_band() {
        let b = board("t:t..../...../....t/...../.b...");
        let top = territory(&b, Player::Top).unwrap();
        assert_eq!((top.row_start, top.row_end), (0, 2));
        assert_eq!((top.col_start, top.col_end), (0, 4));
        assert_eq!(top.territory_ids.len(), 2);
    }

    #[test]
    fn enemy_pieces_inside_rectangle_are_excluded() {
        // The BOTTOM man at (1,1) sits inside TOP's rectangle.
        let b = board("b:t.../.b../..t./..../b...");
        let top = territory(&b, Player::Top).unwrap();
        assert!(top.contains(Position::new(1, 1)));
        let bottom_id = b.piece_at(Position::new(1, 1)).unwrap().id;
        assert!(!top.holds(bottom_id));
        assert_eq!(top.territory_ids.len(), 2);

        let bottom = territory(&b, Player::Bottom).unwrap();
        assert_eq!((bottom.row_start, bottom.row_end), (1, 4));
        assert_eq!((bottom.col_start, bottom.col_end), (0, 1));
        assert_eq!(bottom.territory_ids.len(), 2);
    }

    #[test]
    fn bounds_are_ordered_for_every_layout() {
        let layouts = [
            "t:b.../..../..../...t",
            "b:...t/..b./.t../b...",
            "t:..../..../..../bbbb",
            "b:T.../..../..../...B",
        ];
        for text in layouts {
            let b = board(text);
            for player in [Player::Top, Player::Bottom] {
                if let Some(t) = territory(&b, player) {
                    assert!(t.row_start <= t.row_end, "{text}");
                    assert!(t.col_start <= t.col_end, "{text}");
                }
            }
        }
    }

    #[test]
    fn pair_is_relative_to_turn() {
        let b = Board::standard(8, 8, &mut PieceIds::sequential());
        let pair = territory_pair(&b, Player::Bottom);
        assert_eq!(pair.owned.as_ref().unwrap().owner, Player::Bottom);
        assert_eq!(pair.enemy.as_ref().unwrap().owner, Player::Top);
        assert_eq!(pair.of(Player::Top), pair.enemy.as_ref());
    }

    #[test]
    fn midpoints() {
        let b = board("t:.t..../....../...t..");
        let top = territory(&b, Player::Top).unwrap();
        assert_eq!(top.mid_row(), 1.0);
        assert_eq!(top.mid_col(), 2.0);
        assert!(!top.contains(Position::new(-1, 0)));
        assert!(!top.contains(Position::new(4, 0)));
    }
}

//! Players, piece identity, and pieces.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Position};

/// The two sides. TOP starts on row 0, BOTTOM on the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Top,
    Bottom,
}

pub const ALL_PLAYERS: [Player; 2] = [Player::Top, Player::Bottom];

impl Player {
    /// Returns the opponent.
    pub const fn flip(self) -> Player {
        match self {
            Player::Top => Player::Bottom,
            Player::Bottom => Player::Top,
        }
    }

    /// Picks a side uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Player {
        if rng.gen_bool(0.5) {
            Player::Top
        } else {
            Player::Bottom
        }
    }

    /// Row index of this player's own back line on a board with `rows` rows.
    pub const fn back_row(self, rows: usize) -> usize {
        match self {
            Player::Top => 0,
            Player::Bottom => rows.saturating_sub(1),
        }
    }

    /// Row a man must reach to be crowned: the opponent's back line.
    pub const fn crowning_row(self, rows: usize) -> usize {
        self.flip().back_row(rows)
    }

    /// Whether a man of this player may move in `dir`.
    pub const fn moves_towards(self, dir: Direction) -> bool {
        match self {
            Player::Top => !dir.is_up(),
            Player::Bottom => dir.is_up(),
        }
    }

    /// Single-character notation: `t` or `b`.
    pub const fn notation_char(self) -> char {
        match self {
            Player::Top => 't',
            Player::Bottom => 'b',
        }
    }

    pub fn from_notation_char(c: char) -> Option<Player> {
        match c {
            't' => Some(Player::Top),
            'b' => Some(Player::Bottom),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Top => write!(f, "TOP"),
            Player::Bottom => write!(f, "BOTTOM"),
        }
    }
}

/// Stable identity of a piece, independent of where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

/// Hands out piece ids. Ids are never reused by the same allocator.
#[derive(Debug, Clone)]
pub struct PieceIds {
    next: u32,
}

impl PieceIds {
    /// Allocator starting at 0.
    pub fn sequential() -> Self {
        PieceIds { next: 0 }
    }

    /// Allocator starting at a random base drawn from `rng`.
    pub fn random(rng: &mut impl Rng) -> Self {
        PieceIds {
            next: rng.gen_range(0..u32::MAX / 2),
        }
    }

    pub fn next_id(&mut self) -> PieceId {
        let id = PieceId(self.next);
        self.next += 1;
        id
    }
}

impl Default for PieceIds {
    fn default() -> Self {
        Self::sequential()
    }
}

/// A checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub is_king: bool,
    pub position: Position,
}

impl Piece {
    pub fn new(id: PieceId, owner: Player, position: Position) -> Self {
        Piece {
            id,
            owner,
            is_king: false,
            position,
        }
    }

    pub fn king(id: PieceId, owner: Player, position: Position) -> Self {
        Piece {
            id,
            owner,
            is_king: true,
            position,
        }
    }

    /// Notation character: lowercase for men, uppercase for kings.
    pub fn notation_char(&self) -> char {
        let c = self.owner.notation_char();
        if self.is_king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Whether this piece may move in `dir` given its owner and rank.
    pub fn can_move_towards(&self, dir: Direction) -> bool {
        self.is_king || self.owner.moves_towards(dir)
    }
}

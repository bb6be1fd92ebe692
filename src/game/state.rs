//! Game states and move application.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CheckersMove, Direction, Player, Position};
use crate::eval::state_heuristic;
use crate::movegen::{has_legal_move, legal_moves};

use super::history::StateId;

/// Errors from applying a move to a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square {0:?} is off the board")]
    OutOfBounds(Position),

    #[error("no piece on {0:?}")]
    EmptySquare(Position),

    #[error("piece on {at:?} belongs to {owner}, but it is {turn}'s turn")]
    NotYourPiece {
        at: Position,
        owner: Player,
        turn: Player,
    },

    #[error("target square {0:?} is occupied")]
    Occupied(Position),

    #[error("move {0} is not a one-square step or two-square jump on a diagonal")]
    NotDiagonal(CheckersMove),

    #[error("a man cannot move {dir:?} from {from:?}")]
    WrongDirection { from: Position, dir: Direction },

    #[error("no opposing piece to capture on {0:?}")]
    NoCaptureTarget(Position),
}

/// One position in a game: the board, the side to move, and lazily
/// computed move list and heuristic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckersState {
    pub board: Board,
    pub turn: Player,
    /// Heuristic value for `turn`, valid once `explored`.
    pub value: f64,
    /// Legal moves for `turn`, valid once `explored`.
    pub moves: Vec<CheckersMove>,
    pub explored: bool,
    /// Non-owning link to the state this one was derived from, set when the
    /// state is stored in a [`GameHistory`](super::GameHistory).
    pub parent: Option<StateId>,
    /// 1 for a root state, incremented per applied move.
    pub depth: u32,
    pub applied_move: Option<CheckersMove>,
}

impl CheckersState {
    /// A root state.
    pub fn new(board: Board, turn: Player) -> Self {
        CheckersState {
            board,
            turn,
            value: 0.0,
            moves: Vec::new(),
            explored: false,
            parent: None,
            depth: 1,
            applied_move: None,
        }
    }

    /// Returns the state reached by playing `mv`. `self` is left untouched.
    pub fn apply_move(&self, mv: &CheckersMove) -> Result<CheckersState, MoveError> {
        let captured = self.validate(mv)?;

        let mut board = self.board.clone();
        let mut piece = board.take(mv.from()).ok_or(MoveError::EmptySquare(mv.from()))?;
        if let Some(square) = captured {
            board.take(square);
        }
        if !piece.is_king && mv.to().y as usize == piece.owner.crowning_row(board.rows()) {
            piece.is_king = true;
        }
        board.place(mv.to(), piece);

        log::trace!("{} plays {} at depth {}", self.turn, mv, self.depth);

        Ok(CheckersState {
            board,
            turn: self.turn.flip(),
            value: 0.0,
            moves: Vec::new(),
            explored: false,
            parent: None,
            depth: self.depth + 1,
            applied_move: Some(*mv),
        })
    }

    /// Checks `mv` against the current board and returns the square of the
    /// captured piece, if any.
    fn validate(&self, mv: &CheckersMove) -> Result<Option<Position>, MoveError> {
        let (from, to) = (mv.from(), mv.to());
        for square in [from, to] {
            if !self.board.contains(square) {
                return Err(MoveError::OutOfBounds(square));
            }
        }

        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.owner != self.turn {
            return Err(MoveError::NotYourPiece {
                at: from,
                owner: piece.owner,
                turn: self.turn,
            });
        }
        if self.board.piece_at(to).is_some() {
            return Err(MoveError::Occupied(to));
        }

        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let span = if mv.is_capture() { 2 } else { 1 };
        if dx.abs() != span || dy.abs() != span {
            return Err(MoveError::NotDiagonal(*mv));
        }
        let dir = direction_of(dx, dy);
        if !piece.can_move_towards(dir) {
            return Err(MoveError::WrongDirection { from, dir });
        }

        match mv.captured_square() {
            None => Ok(None),
            Some(mid) => match self.board.piece_at(mid) {
                Some(p) if p.owner != piece.owner => Ok(Some(mid)),
                _ => Err(MoveError::NoCaptureTarget(mid)),
            },
        }
    }

    /// Computes the legal moves and heuristic value once.
    pub fn explore(&mut self) {
        if self.explored {
            return;
        }
        self.moves = legal_moves(&self.board, self.turn);
        self.value = state_heuristic(&self.board, self.turn);
        self.explored = true;
    }

    /// The player who has won, if the side to move is out of moves.
    pub fn winner(&self) -> Option<Player> {
        let stuck = if self.explored {
            self.moves.is_empty()
        } else {
            !has_legal_move(&self.board, self.turn)
        };
        stuck.then(|| self.turn.flip())
    }
}

fn direction_of(dx: i32, dy: i32) -> Direction {
    match (dx < 0, dy < 0) {
        (true, true) => Direction::UpLeft,
        (false, true) => Direction::UpRight,
        (true, false) => Direction::DownLeft,
        (false, false) => Direction::DownRight,
    }
}

//! Game session configuration.
//!
//! Board dimensions, the random seed, and an optional fixed opening turn.
//! Loadable from JSON; any omitted field takes its default.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceIds, Player};
use crate::game::CheckersState;

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Random seed (`None` = use entropy).
    pub seed: Option<u64>,
    /// Side to move first (`None` = pick at random).
    pub starting_turn: Option<Player>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 8,
            cols: 8,
            seed: None,
            starting_turn: None,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// The session's random source: seeded if `seed` is set.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// Builds the root state with the standard opening placement.
    pub fn new_game(&self, rng: &mut impl Rng) -> CheckersState {
        let turn = match self.starting_turn {
            Some(turn) => turn,
            None => Player::random(rng),
        };
        let mut ids = PieceIds::random(rng);
        let board = Board::standard(self.rows, self.cols, &mut ids);
        CheckersState::new(board, turn)
    }
}

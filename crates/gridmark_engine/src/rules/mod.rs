//! Game rules for grid-marking games.
//!
//! Pure functions for evaluating a position. Rules are kept apart from the
//! history so any recorded ply can be re-evaluated on demand.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Winner, detect, run_lengths};

use crate::{Board, GameConfig, Player};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Status of a single ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Play continues; `next` moves from this ply.
    Ongoing {
        /// Player to move next.
        next: Player,
    },
    /// The last placed mark completed a winning line.
    Won(Winner),
    /// Every cell is occupied and nobody won.
    Drawn,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Winner> {
        match self {
            GameStatus::Won(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns true once the game has ended either way.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(winner) => write!(f, "Winner: {}", winner.player),
            GameStatus::Drawn => write!(f, "No winner! Draw!"),
            GameStatus::Ongoing { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// Derives the status of a ply.
///
/// A win on the last placed cell takes precedence over a full board.
#[instrument(skip(board, config))]
pub fn evaluate(
    board: &Board,
    placed_index: Option<usize>,
    ply_number: usize,
    config: &GameConfig,
) -> GameStatus {
    if let Some(winner) = placed_index.and_then(|index| detect(board, index, config)) {
        return GameStatus::Won(winner);
    }

    if is_full(board) {
        return GameStatus::Drawn;
    }

    GameStatus::Ongoing {
        next: Player::to_move_at(ply_number),
    }
}

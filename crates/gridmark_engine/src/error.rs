//! Engine error types.

use derive_more::{Display, Error};
use serde::Serialize;

/// Why a mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum MoveRejection {
    /// The cell already carries a mark.
    #[display("cell is already occupied")]
    CellOccupied,
    /// The index does not address a cell on this board.
    #[display("cell is outside the board")]
    OutsideBoard,
    /// The ply being viewed already has a winner.
    #[display("game is already won")]
    GameAlreadyWon,
}

/// Error that can occur when mutating game history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A mark could not be written to the requested cell.
    #[display("Illegal move at cell {index}: {reason}")]
    IllegalMove {
        /// Requested cell.
        index: usize,
        /// What made it illegal.
        reason: MoveRejection,
    },

    /// A ply number outside the recorded history.
    #[display("Ply {ply} is out of range (history has {total} plies)")]
    OutOfRange {
        /// Requested ply.
        ply: usize,
        /// Number of plies recorded.
        total: usize,
    },
}

impl EngineError {
    /// The move rejection carried by an [`EngineError::IllegalMove`].
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            EngineError::IllegalMove { reason, .. } => Some(*reason),
            EngineError::OutOfRange { .. } => None,
        }
    }
}

//! Time-travel history of board snapshots.
//!
//! History is a flat arena of plies plus a cursor. Placing a mark while the
//! cursor sits on an earlier ply truncates everything after it, so a new move
//! permanently discards the abandoned future instead of branching.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{Board, CellPosition, EngineError, GameConfig, Mark, MoveRejection, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One recorded board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ply {
    board: Board,
    placed_index: Option<usize>,
    ply_number: usize,
    position: Option<CellPosition>,
}

impl Ply {
    /// The empty-board root of every history.
    fn root(config: &GameConfig) -> Self {
        Self {
            board: Board::empty(config.rows(), config.cols()),
            placed_index: None,
            ply_number: 0,
            position: None,
        }
    }

    /// Board after this ply.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell written by this ply; `None` for the root.
    pub fn placed_index(&self) -> Option<usize> {
        self.placed_index
    }

    /// Position in the history, starting at 0 for the empty board.
    pub fn ply_number(&self) -> usize {
        self.ply_number
    }

    /// Row/column of the placed cell; `None` for the root.
    pub fn position(&self) -> Option<CellPosition> {
        self.position
    }

    /// Player who made this ply; `None` for the root.
    pub fn player(&self) -> Option<Player> {
        self.placed_index
            .and_then(|index| self.board.get(index))
            .and_then(Mark::player)
    }
}

/// Ordered plies plus the cursor currently being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    plies: Vec<Ply>,
    cursor: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty board for `config`.
    #[instrument]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            plies: vec![Ply::root(config)],
            cursor: 0,
        }
    }

    /// Discards everything and starts over from an empty board.
    #[instrument(skip(self), fields(discarded = self.plies.len()))]
    pub fn reset(&mut self, config: &GameConfig) {
        self.plies.clear();
        self.plies.push(Ply::root(config));
        self.cursor = 0;
        info!("History reset");
        self.check_invariants();
    }

    /// Records `player`'s mark at `index` on top of the cursor ply.
    ///
    /// Plies after the cursor are dropped before the new one is appended,
    /// and the cursor moves to the new ply.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if the cell is occupied or off the board.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn append(&mut self, player: Player, index: usize) -> Result<&Ply, EngineError> {
        let base = &self.current().board;
        let reason = match base.get(index) {
            Some(Mark::Empty) => None,
            Some(Mark::Placed(_)) => Some(MoveRejection::CellOccupied),
            None => Some(MoveRejection::OutsideBoard),
        };
        if let Some(reason) = reason {
            debug!(%reason, "Append rejected");
            return Err(EngineError::IllegalMove { index, reason });
        }
        let board = base
            .with_mark(index, Mark::Placed(player))
            .ok_or(EngineError::IllegalMove {
                index,
                reason: MoveRejection::OutsideBoard,
            })?;
        let position = board.position_of(index);

        let ply_number = self.cursor + 1;
        let discarded = self.plies.len() - ply_number;
        if discarded > 0 {
            debug!(discarded, "Discarding future plies");
        }
        self.plies.truncate(ply_number);
        self.plies.push(Ply {
            board,
            placed_index: Some(index),
            ply_number,
            position,
        });
        self.cursor = ply_number;
        debug!(ply_number, ?player, "Ply appended");

        self.check_invariants();
        Ok(self.current())
    }

    /// Moves the cursor to an existing ply without touching the plies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `ply_number` was never recorded.
    #[instrument(skip(self), fields(total = self.plies.len()))]
    pub fn jump(&mut self, ply_number: usize) -> Result<&Ply, EngineError> {
        if ply_number >= self.plies.len() {
            warn!("Jump target out of range");
            return Err(EngineError::OutOfRange {
                ply: ply_number,
                total: self.plies.len(),
            });
        }
        self.cursor = ply_number;
        self.check_invariants();
        Ok(self.current())
    }

    /// The ply under the cursor.
    pub fn current(&self) -> &Ply {
        &self.plies[self.cursor]
    }

    /// Every recorded ply in ascending order.
    pub fn all(&self) -> &[Ply] {
        &self.plies
    }

    /// Index of the ply under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded plies, root included.
    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    /// Checks if the cursor is on the most recent ply.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.plies.len()
    }

    #[cfg(test)]
    pub(crate) fn plies_mut(&mut self) -> &mut Vec<Ply> {
        &mut self.plies
    }

    /// Verifies structural invariants in debug builds.
    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = HistoryInvariants::check_all(self) {
                for violation in &violations {
                    warn!(description = %violation.description, "History invariant violated");
                }
                debug_assert!(violations.is_empty(), "History invariants violated");
            }
        }
    }
}

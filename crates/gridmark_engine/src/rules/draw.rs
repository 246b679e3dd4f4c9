//! Draw detection.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board whose last move did not win is a draw.
#[instrument(skip(board), fields(cells = board.cell_count()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

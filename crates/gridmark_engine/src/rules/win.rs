//! Win detection relative to the last placed cell.
//!
//! Only the move just made can complete a run, so the detector walks the
//! four axes through that cell instead of scanning the whole board.

use crate::{Board, GameConfig, Mark, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Row/column step for each axis: horizontal, vertical, down-right, down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A completed winning line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// Owner of the line.
    pub player: Player,
    /// Cells forming the line, in walk order (not spatially sorted).
    pub line: Vec<usize>,
}

impl Winner {
    /// The winning mark.
    pub fn mark(&self) -> Mark {
        Mark::Placed(self.player)
    }

    /// Checks if a cell is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Checks whether the mark at `placed_index` completes a winning run.
///
/// A run wins only when its length equals `win_length` exactly; longer runs
/// are not wins. Returns `None` for empty or out-of-board cells.
#[instrument(skip(board, config), fields(win_length = config.win_length()))]
pub fn detect(board: &Board, placed_index: usize, config: &GameConfig) -> Option<Winner> {
    let player = board.get(placed_index)?.player()?;
    let target = config.win_length();

    for (axis, run) in axis_runs(board, placed_index)?.into_iter().enumerate() {
        if run.len() == target {
            debug!(axis, ?player, line = ?run, "Winning run found");
            return Some(Winner { player, line: run });
        }
    }

    None
}

/// Length of the contiguous run through `placed_index` along each axis.
///
/// Returns `None` when the cell is empty or outside the board.
#[instrument(skip(board))]
pub fn run_lengths(board: &Board, placed_index: usize) -> Option<[usize; 4]> {
    let runs = axis_runs(board, placed_index)?;
    Some(runs.map(|run| run.len()))
}

/// Collects the cells of the run through `placed_index` on every axis.
fn axis_runs(board: &Board, placed_index: usize) -> Option<[Vec<usize>; 4]> {
    let player = board.get(placed_index)?.player()?;
    let origin = board.position_of(placed_index)?;
    let (row, col) = (origin.row as isize, origin.col as isize);

    Some(AXES.map(|(dr, dc)| {
        let forward = walk(board, player, row, col, dr, dc);
        let backward = walk(board, player, row, col, -dr, -dc);
        // Both walks start on the placed cell; keep it once.
        let mut run = forward;
        run.extend(backward.into_iter().skip(1));
        run
    }))
}

/// Steps from `(row, col)` while cells hold `player`, origin included.
fn walk(board: &Board, player: Player, row: isize, col: isize, dr: isize, dc: isize) -> Vec<usize> {
    let mut cells = Vec::new();
    let (mut r, mut c) = (row, col);
    while let Some((index, Mark::Placed(owner))) = board.get_at(r, c) {
        if owner != player {
            break;
        }
        cells.push(index);
        r += dr;
        c += dc;
    }
    cells
}

//! Core domain types for grid-marking games.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (moves on even plies, so always goes first).
    X,
    /// Player O (moves on odd plies).
    O,
}

impl Player {
    /// Returns the player who moves from the given ply.
    ///
    /// Turn order is never stored; it follows from ply parity alone.
    pub fn to_move_at(ply: usize) -> Self {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Placed(Player),
}

impl Mark {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Placed(player) => Some(player),
        }
    }

    /// Single-character symbol used when drawing boards.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::Placed(Player::X) => "X",
            Mark::Placed(Player::O) => "O",
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Placed(player)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Row/column address of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct CellPosition {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col:{}, row:{}", self.col, self.row)
    }
}

/// Rectangular grid of marks in row-major order.
///
/// Boards are values: placing a mark yields a new board and leaves the
/// original untouched, so older snapshots stay valid for time travel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board of the given shape.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Mark::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the mark at the given linear index.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Gets the mark at a signed coordinate, `None` when it falls off the grid.
    pub fn get_at(&self, row: isize, col: isize) -> Option<(usize, Mark)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row * self.cols + col;
        self.get(index).map(|mark| (index, mark))
    }

    /// Checks if a cell exists and is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Converts a linear index to a row/column position.
    pub fn position_of(&self, index: usize) -> Option<CellPosition> {
        (index < self.cell_count()).then(|| CellPosition::new(index / self.cols, index % self.cols))
    }

    /// Converts a row/column position to a linear index.
    pub fn index_of(&self, position: CellPosition) -> Option<usize> {
        (position.row < self.rows && position.col < self.cols)
            .then(|| position.row * self.cols + position.col)
    }

    /// Returns a copy of this board with `mark` written at `index`.
    ///
    /// Returns `None` if the index lies outside the board.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        if index >= self.cell_count() {
            return None;
        }
        let mut next = self.clone();
        next.cells[index] = mark;
        Some(next)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Mark]> {
        // chunks() rejects a zero size, and a zero-column board has no rows to show anyway
        self.cells.chunks(self.cols.max(1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["-"; self.cols].join("+");
        for (row, cells) in self.row_slices().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line = cells.iter().map(|mark| mark.symbol()).collect::<Vec<_>>().join("|");
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parity() {
        assert_eq!(Player::to_move_at(0), Player::X);
        assert_eq!(Player::to_move_at(1), Player::O);
        assert_eq!(Player::to_move_at(6), Player::X);
    }

    #[test]
    fn test_index_position_mapping() {
        let board = Board::empty(3, 4);
        assert_eq!(board.cell_count(), 12);
        assert_eq!(board.position_of(6), Some(CellPosition::new(1, 2)));
        assert_eq!(board.index_of(CellPosition::new(2, 3)), Some(11));
        assert_eq!(board.position_of(12), None);
        assert_eq!(board.index_of(CellPosition::new(3, 0)), None);
    }

    #[test]
    fn test_with_mark_is_copy_on_write() {
        let board = Board::empty(3, 3);
        let next = board.with_mark(4, Mark::Placed(Player::X)).unwrap();
        assert!(board.is_vacant(4));
        assert_eq!(next.get(4), Some(Mark::Placed(Player::X)));
        assert!(board.with_mark(9, Mark::Placed(Player::X)).is_none());
    }

    #[test]
    fn test_signed_lookup_bounds() {
        let board = Board::empty(2, 2);
        assert_eq!(board.get_at(-1, 0), None);
        assert_eq!(board.get_at(0, 2), None);
        assert_eq!(board.get_at(1, 1), Some((3, Mark::Empty)));
    }

    #[test]
    fn test_display() {
        let board = Board::empty(2, 3)
            .with_mark(0, Player::X.into())
            .and_then(|b| b.with_mark(5, Player::O.into()))
            .unwrap();
        assert_eq!(board.to_string(), "X| | \n-+-+-\n | |O");
    }
}

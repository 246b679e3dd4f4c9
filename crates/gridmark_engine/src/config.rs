//! Board configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Shape of the grid and the run length needed to win.
///
/// Dimensions are checked to be non-zero and the grid may hold at most
/// [`GameConfig::MAX_CELLS`] cells. Whether `win_length` can actually
/// be reached on the grid is left to the caller, see
/// [`GameConfig::is_win_reachable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

/// Unchecked form used while deserializing.
#[derive(Deserialize)]
struct RawGameConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.rows, raw.cols, raw.win_length)
    }
}

impl GameConfig {
    /// Largest accepted `rows * cols`.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Creates a configuration, rejecting zero dimensions and oversized grids.
    #[track_caller]
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || win_length == 0 {
            return Err(ConfigError::new(format!(
                "rows, cols and win_length must be positive (got {}x{}, win length {})",
                rows, cols, win_length
            )));
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= Self::MAX_CELLS => {}
            _ => {
                return Err(ConfigError::new(format!(
                    "a {}x{} grid exceeds the limit of {} cells",
                    rows,
                    cols,
                    Self::MAX_CELLS
                )));
            }
        }
        Ok(Self {
            rows,
            cols,
            win_length,
        })
    }

    /// Classic 3x3 three-in-a-row.
    pub const fn classic() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_length: 3,
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

    /// Run length that wins.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks whether a run of `win_length` fits on the grid at all.
    pub fn is_win_reachable(&self) -> bool {
        self.win_length <= self.rows.max(self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(GameConfig::new(0, 3, 3).is_err());
        assert!(GameConfig::new(3, 0, 3).is_err());
        assert!(GameConfig::new(3, 3, 0).is_err());
    }

    #[test]
    fn test_rejects_oversized_grids() {
        let err = GameConfig::new(usize::MAX, 2, 3).unwrap_err();
        assert!(err.message.contains("exceeds the limit"));
        assert!(GameConfig::new(GameConfig::MAX_CELLS, 2, 3).is_err());
        assert!(GameConfig::new(GameConfig::MAX_CELLS, 1, 3).is_ok());
        assert!(GameConfig::new(1024, 1024, 5).is_ok());
    }

    #[test]
    fn test_unreachable_win_length_is_accepted() {
        let config = GameConfig::new(3, 3, 5).unwrap();
        assert!(!config.is_win_reachable());
        assert!(GameConfig::new(2, 5, 5).unwrap().is_win_reachable());
    }

    #[test]
    fn test_error_records_location() {
        let err = GameConfig::new(0, 0, 0).unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_default_is_classic() {
        let config = GameConfig::default();
        assert_eq!((config.rows(), config.cols(), config.win_length()), (3, 3, 3));
        assert_eq!(config.cell_count(), 9);
    }
}

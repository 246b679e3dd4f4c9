//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use gridmark_engine::{ConfigError, GameConfig, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display preferences owned by the front end, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Initial move list direction.
    #[serde(default)]
    sort: SortOrder,
}

/// Complete front-end configuration.
///
/// ```toml
/// [game]
/// rows = 4
/// cols = 4
/// win_length = 4
///
/// [display]
/// sort = "descending"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GridmarkConfig {
    /// Board shape and win length.
    #[serde(default)]
    game: GameConfig,
    /// Display preferences.
    #[serde(default)]
    display: DisplaySettings,
}

impl GridmarkConfig {
    /// Creates a configuration from its parts.
    pub fn new(game: GameConfig, sort: SortOrder) -> Self {
        Self {
            game,
            display: DisplaySettings { sort },
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            rows = config.game.rows(),
            cols = config.game.cols(),
            win_length = config.game.win_length(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override makes a dimension zero.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        rows: Option<usize>,
        cols: Option<usize>,
        win_length: Option<usize>,
        descending: bool,
    ) -> Result<Self, ConfigError> {
        let game = GameConfig::new(
            rows.unwrap_or(self.game.rows()),
            cols.unwrap_or(self.game.cols()),
            win_length.unwrap_or(self.game.win_length()),
        )?;
        let sort = if descending {
            SortOrder::Descending
        } else {
            self.display.sort
        };
        Ok(Self::new(game, sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GridmarkConfig::from_toml("").unwrap();
        assert_eq!(config, GridmarkConfig::default());
        assert_eq!(config.game(), &GameConfig::classic());
        assert_eq!(config.display().sort(), &SortOrder::Ascending);
    }

    #[test]
    fn test_parse_full_config() {
        let config = GridmarkConfig::from_toml(
            "[game]\nrows = 4\ncols = 5\nwin_length = 4\n\n[display]\nsort = \"descending\"\n",
        )
        .unwrap();
        assert_eq!(config.game(), &GameConfig::new(4, 5, 4).unwrap());
        assert_eq!(config.display().sort(), &SortOrder::Descending);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = GridmarkConfig::from_toml("[game]\nrows = 0\ncols = 3\nwin_length = 3\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GridmarkConfig::default()
            .with_overrides(Some(6), None, Some(5), true)
            .unwrap();
        assert_eq!(config.game(), &GameConfig::new(6, 3, 5).unwrap());
        assert_eq!(config.display().sort(), &SortOrder::Descending);

        assert!(GridmarkConfig::default().with_overrides(None, Some(0), None, false).is_err());
    }
}

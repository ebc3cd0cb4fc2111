use std::path::Path;

use log::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{GameState, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display colors for the two players. Interpreted by the front-end only.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_color: String,
    pub two_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_color: "red".to_string(),
            two_color: "blue".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self
            .board
            .height
            .checked_mul(self.board.width)
            .map_or(true, |cells| cells > MAX_CELLS)
        {
            return Err(ConfigError::Validation(format!(
                "board.height * board.width must be <= {MAX_CELLS}"
            )));
        }
        if self.players.one_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one_color must not be empty".into(),
            ));
        }
        if self.players.two_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two_color must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Start a fresh game with these settings.
    pub fn new_game(&self) -> Result<GameState, GameError> {
        GameState::with_dimensions(
            self.players.one_color.clone(),
            self.players.two_color.clone(),
            self.board.height,
            self.board.width,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerNumber;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
one_color = "yellow"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one_color, "yellow");
        assert_eq!(config.players.two_color, "blue");
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.height = usize::MAX;
        config.board.width = 2;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_blank_color() {
        let mut config = AppConfig::default();
        config.players.two_color = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect-four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 5
width = 8
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 5);
        assert_eq!(config.board.width, 8);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[board\nheight = ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_new_game_uses_config() {
        let mut config = AppConfig::default();
        config.board.height = 4;
        config.board.width = 5;
        config.players.one_color = "green".into();

        let game = config.new_game().unwrap();
        assert_eq!((game.height(), game.width()), (4, 5));
        assert_eq!(game.player(PlayerNumber::One).color(), "green");
        assert_eq!(game.player(PlayerNumber::Two).color(), "blue");
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}

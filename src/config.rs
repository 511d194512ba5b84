use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::game::{Player, CONNECT_LENGTH};
use crate::ui::palette;

/// Largest height or width accepted; bigger boards do not fit on a terminal.
pub const MAX_BOARD_DIMENSION: usize = 100;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: 6,
            width: 7,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Number of players in turn order.
    pub count: usize,
    /// Colors for the first players; the rest get random colors.
    pub colors: Vec<String>,
    /// Seed for random colors. Unset means a fresh seed every run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            count: 2,
            colors: vec!["red".into(), "yellow".into()],
            seed: None,
        }
    }
}

impl PlayersConfig {
    /// Random source for player colors.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the turn order, numbering players from 1.
    pub fn roster<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Player> {
        let colors = (0..self.count).map(|i| match self.colors.get(i) {
            Some(color) => color.clone(),
            None => palette::random_color(rng),
        });
        Player::roster(colors)
    }
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
            log::warn!("config file '{}' not found, using defaults", path.display());
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
        if self.board.height > MAX_BOARD_DIMENSION || self.board.width > MAX_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board is {}x{}, neither dimension may exceed {MAX_BOARD_DIMENSION}",
                self.board.height, self.board.width
            )));
        }
        if self.players.count == 0 {
            return Err(ConfigError::Validation("players.count must be >= 1".into()));
        }
        if self.players.colors.len() > self.players.count {
            return Err(ConfigError::Validation(format!(
                "players.colors lists {} colors for {} players",
                self.players.colors.len(),
                self.players.count
            )));
        }
        if let Some(bad) = self
            .players
            .colors
            .iter()
            .find(|c| palette::parse_color(c).is_none())
        {
            return Err(ConfigError::Validation(format!(
                "players.colors: '{bad}' is not a color"
            )));
        }

        if self.board.height < CONNECT_LENGTH && self.board.width < CONNECT_LENGTH {
            log::warn!(
                "a {}x{} board is too small for {CONNECT_LENGTH} in a row, games can only tie",
                self.board.height,
                self.board.width
            );
        }
        if self.players.count == 1 {
            log::warn!("single player game, every move is yours");
        }

        Ok(())
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
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.count, 2);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.players.colors, vec!["red", "yellow"]);
        assert_eq!(config.players.seed, None);
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
        config.board.height = MAX_BOARD_DIMENSION + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.width = 100_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("may exceed 100"));
    }

    #[test]
    fn test_validation_accepts_largest_board() {
        let mut config = AppConfig::default();
        config.board.height = MAX_BOARD_DIMENSION;
        config.board.width = MAX_BOARD_DIMENSION;
        config.validate().expect("100x100 is within bounds");
    }

    #[test]
    fn test_validation_rejects_no_players() {
        let mut config = AppConfig::default();
        config.players.count = 0;
        config.players.colors.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_extra_colors() {
        let mut config = AppConfig::default();
        config.players.count = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_color() {
        let mut config = AppConfig::default();
        config.players.colors[1] = "#12345".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn test_single_player_is_allowed() {
        let mut config = AppConfig::default();
        config.players.count = 1;
        config.players.colors.truncate(1);
        config.validate().expect("one player is legal");
    }

    #[test]
    fn test_roster_fills_missing_colors() {
        let mut config = AppConfig::default();
        config.players.count = 4;
        config.players.seed = Some(3);
        let roster = config.players.roster(&mut config.players.rng());

        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].color(), "red");
        assert_eq!(roster[1].color(), "yellow");
        assert!(roster[2].color().starts_with('#'));
        assert_eq!(roster[3].id().get(), 4);

        let again = config.players.roster(&mut config.players.rng());
        assert_eq!(roster, again);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players.count, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r##"
[board]
height = 8

[players]
count = 3
colors = ["blue", "#FFA500"]
seed = 11
"##
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.board.width, 7);
        assert_eq!(config.players.count, 3);
        assert_eq!(config.players.seed, Some(11));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[players]\ncount = 0\ncolors = []\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[board\nheight = 6\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}

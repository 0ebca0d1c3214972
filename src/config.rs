use crate::game::{GridSize, Pacing, Settings};
use crate::highscores;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the grid & scoring
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// How fast the snake moves at each level
    #[serde(default)]
    pub(crate) pacing: Pacing,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("toxsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the gameplay settings for a new game
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            grid_size: self.game.grid_size,
            points_per_food: self.game.points_per_food,
            pacing: self.pacing,
        }
    }

    /// Return the filepath at which high scores should be stored: the file
    /// given in the configuration or, if that is not set, the default high
    /// scores file path.  Returns `None` if saving high scores is disabled or
    /// if no path is configured and the default path could not be computed.
    pub(crate) fn high_scores_file(&self) -> Option<Cow<'_, Path>> {
        if !self.files.save_high_scores {
            return None;
        }
        self.files
            .high_scores_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| highscores::default_path().map(Cow::from))
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Side length of the square grid
    pub(crate) grid_size: GridSize,

    /// Points scored per piece of food eaten
    pub(crate) points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        let settings = Settings::default();
        GameConfig {
            grid_size: settings.grid_size,
            points_per_food: settings.points_per_food,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which high scores should be stored
    pub(crate) high_scores_file: Option<PathBuf>,

    /// Whether to load & save high scores at all
    pub(crate) save_high_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: None,
            save_high_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut tmpfile = NamedTempFile::new().unwrap();
        tmpfile.write_all(src.as_bytes()).unwrap();
        tmpfile.flush().unwrap();
        Config::load(tmpfile.path(), false)
    }

    #[test]
    fn empty() {
        let cfg = load_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.settings(), Settings::default());
    }

    #[test]
    fn full() {
        let cfg = load_str(concat!(
            "[game]\n",
            "grid-size = 15\n",
            "points-per-food = 3\n",
            "\n",
            "[pacing]\n",
            "base-delay-ms = 300\n",
            "delay-step-ms = 25\n",
            "min-delay-ms = 60\n",
            "\n",
            "[files]\n",
            "high-scores-file = \"/var/games/toxsnake.txt\"\n",
        ))
        .unwrap();
        let settings = cfg.settings();
        assert_eq!(settings.grid_size.get(), 15);
        assert_eq!(settings.points_per_food, 3);
        assert_eq!(
            settings.pacing,
            Pacing {
                base_delay_ms: 300,
                delay_step_ms: 25,
                min_delay_ms: 60,
            }
        );
        assert_eq!(
            cfg.high_scores_file().as_deref(),
            Some(Path::new("/var/games/toxsnake.txt"))
        );
    }

    #[test]
    fn bad_grid_size() {
        let r = load_str("[game]\ngrid-size = 2\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_key_type() {
        let r = load_str("[pacing]\nmin-delay-ms = \"fast\"\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn high_scores_disabled() {
        let src = "[files]\nsave-high-scores = false\nhigh-scores-file = \"x.txt\"\n";
        let cfg = load_str(src).unwrap();
        assert_eq!(cfg.high_scores_file(), None);
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }
}

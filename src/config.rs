//! Kinship configuration.
//!
//! Loaded from `~/.kinship/config.toml`. Every key is optional; a missing
//! file means the defaults.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreBands;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Kinship configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// The default acting user.
    /// Used when neither `--as` nor `KINSHIP_USER` is set.
    pub user: Option<String>,

    /// Page size for every paginated list.
    pub items_per_page: usize,

    /// Default log filter, e.g. `info` or `kinship=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Cut points mapping survey scores to categories.
    pub score_bands: ScoreBands,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            items_per_page: 10,
            log_level: "info".to_string(),
            score_bands: ScoreBands::default(),
        }
    }
}

impl Config {
    /// Load config from `~/.kinship/config.toml`.
    /// Returns the defaults when the home directory or the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&contents, path)
    }

    /// Parse and validate config text. `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let invalid = |reason: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };
        if config.items_per_page == 0 {
            return Err(invalid("items-per-page must be at least 1"));
        }
        config.score_bands.validate().map_err(invalid)?;

        Ok(config)
    }

    /// The config file path: `~/.kinship/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".kinship").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_path(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.items_per_page, 10);
    }

    #[test]
    fn reads_every_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "user = \"maya\"\n\
             items-per-page = 5\n\
             log-level = \"debug\"\n\
             \n\
             [score-bands]\n\
             low-max = 20\n\
             medium-max = 80\n",
        )
        .unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.user.as_deref(), Some("maya"));
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.score_bands, ScoreBands::new(20, 80).unwrap());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("items-per-page = 3", Path::new("config.toml")).unwrap();
        assert_eq!(config.items_per_page, 3);
        assert_eq!(config.user, None);
        assert_eq!(config.score_bands, ScoreBands::default());
    }

    #[test]
    fn partial_band_table_keeps_other_edge() {
        let config =
            Config::parse("[score-bands]\nlow-max = 20", Path::new("config.toml")).unwrap();
        assert_eq!(config.score_bands, ScoreBands::new(20, 66).unwrap());
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = Config::parse("items-per-page = 0", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_inverted_bands() {
        let err = Config::parse(
            "[score-bands]\nlow-max = 70\nmedium-max = 30",
            Path::new("config.toml"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("low-max must be below medium-max"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse("items-per-page = [", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

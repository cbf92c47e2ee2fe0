//! Configuration handling
//!
//! Configuration is optional and lives in `config.toml` under the platform
//! config directory (`~/.config/library-manager/` on Linux). The
//! `LIBRARY_CONFIG` environment variable points at a different file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog file used when nothing else is configured, relative to the
/// working directory
pub const DEFAULT_LIBRARY_FILE: &str = "library.txt";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LIBRARY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Catalog file. Relative paths resolve against the config file's directory.
    pub library_file: Option<PathBuf>,

    /// Output format when `--format` is not given
    pub default_format: OutputFormat,
}

impl Config {
    /// Returns the platform config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "library", "library-manager")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the config file path, honouring `LIBRARY_CONFIG`
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => Self::config_dir().map(|dir| dir.join("config.toml")),
        }
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        if let (Some(file), Some(base)) = (&config.library_file, path.parent()) {
            if file.is_relative() {
                config.library_file = Some(base.join(file));
            }
        }

        Ok(config)
    }

    /// Parses and validates TOML configuration
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if let Some(file) = &config.library_file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "library_file must not be empty".to_string(),
                ));
            }
        }

        Ok(config)
    }

    /// Resolves the catalog file: an explicit path wins, then the configured
    /// one, then [`DEFAULT_LIBRARY_FILE`]
    pub fn library_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.library_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.library_file, None);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.library_path(None), PathBuf::from("library.txt"));
    }

    #[test]
    fn parse_config() {
        let toml = r#"
library_file = "/data/books.json"
default_format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.library_file, Some(PathBuf::from("/data/books.json")));
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parse_rejects_bad_format() {
        let err = Config::parse("default_format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn parse_rejects_empty_library_file() {
        let err = Config::parse("library_file = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn explicit_path_wins() {
        let config = Config {
            library_file: Some(PathBuf::from("configured.txt")),
            ..Config::default()
        };

        assert_eq!(
            config.library_path(Some(Path::new("flag.txt"))),
            PathBuf::from("flag.txt")
        );
        assert_eq!(config.library_path(None), PathBuf::from("configured.txt"));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_resolves_relative_library_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "library_file = \"books.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.library_file, Some(dir.path().join("books.json")));
    }

    #[test]
    fn load_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "library_file = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}

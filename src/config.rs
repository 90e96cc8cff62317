//! Gridwork configuration.
//!
//! Loaded from `~/.gridwork/config.toml`. Every key is optional and a missing
//! file means defaults. The API key is resolved through a chain:
//!
//! 1. `GEMINI_API_KEY` env var
//! 2. `api-key` in the config file
//!
//! With neither, summaries fall back to the stock blurb.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;

use crate::summary::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Environment variable holding the text-generation API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config at {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Gridwork configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Model used for job summaries.
    pub model: String,

    /// API key. `GEMINI_API_KEY` takes precedence.
    pub api_key: Option<String>,

    /// Scheme and host of the text-generation API.
    pub api_base_url: String,

    pub request_timeout_secs: u64,

    /// Fixed catalog seed. Random when unset.
    pub seed: Option<u64>,

    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 20,
            seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load config from `path`, or the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from(p),
            None => match Self::path() {
                Some(p) => Self::load_from(&p),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "request-timeout-secs must be at least 1".to_string(),
            });
        }
        if config.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "model is empty".to_string(),
            });
        }

        Ok(config)
    }

    /// The config file path: `~/.gridwork/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::home().map(|h| h.join("config.toml"))
    }

    /// The log file path for the TUI: `~/.gridwork/gridwork.log`.
    pub fn log_path() -> Option<PathBuf> {
        Self::home().map(|h| h.join("gridwork.log"))
    }

    fn home() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".gridwork"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the API key: env var first, then the config file.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .filter(|k| !k.is_empty())
        .or_else(|| from_file.filter(|k| !k.is_empty()).map(String::from))
}

/// Verbosity of the log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn reads_kebab_case_keys() {
        let (_dir, path) = write_config(
            "model = \"gemini-2.5-flash\"\n\
             api-key = \"abc\"\n\
             request-timeout-secs = 5\n\
             seed = 7\n\
             log-level = \"debug\"\n",
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_dir, path) = write_config("modle = \"typo\"\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let (_dir, path) = write_config("request-timeout-secs = 0\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn env_key_wins_over_file() {
        assert_eq!(
            resolve_api_key(Some("env".into()), Some("file")).as_deref(),
            Some("env")
        );
        assert_eq!(resolve_api_key(None, Some("file")).as_deref(), Some("file"));
        assert_eq!(
            resolve_api_key(Some(String::new()), Some("file")).as_deref(),
            Some("file")
        );
        assert_eq!(resolve_api_key(None, Some("")), None);
    }

    #[test]
    fn log_level_maps_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }
}

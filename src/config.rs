//! Application configuration: JSON file, then command-line overrides

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://hf-android-app.s3-eu-west-1.amazonaws.com/android-test/";
pub const DEFAULT_FAVOURITES_KEY: &str = "favourites_key";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory URL the recipe list is fetched from
    pub base_url: String,

    pub connect_timeout_secs: u64,

    pub read_timeout_secs: u64,

    /// Budget for the TCP connect to the recipe host made before every fetch.
    ///
    /// The check is skipped when `HTTPS_PROXY`, `HTTP_PROXY` or `ALL_PROXY`
    /// (or their lowercase forms) is set for the base URL's scheme, since
    /// requests then leave through the proxy and the host may not be
    /// directly reachable.
    pub connectivity_timeout_ms: u64,

    /// Preference file holding the favourites set
    pub preferences_path: PathBuf,

    /// Preference key of the favourites set
    pub favourites_key: String,

    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 30,
            read_timeout_secs: 30,
            connectivity_timeout_ms: 3000,
            preferences_path: PathBuf::from(".cache/preferences.json"),
            favourites_key: DEFAULT_FAVOURITES_KEY.to_string(),
            log_dir: PathBuf::from(".logs"),
        }
    }
}

impl AppConfig {
    /// Load from configuration file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File from `--config` (defaults otherwise) with flag overrides applied
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        if let Some(base_url) = &args.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(path) = &args.preferences {
            config.preferences_path = path.clone();
        }
        if let Some(dir) = &args.log_dir {
            config.log_dir = dir.clone();
        }

        config.base_url()?;
        Ok(config)
    }

    /// Parsed base URL, always ending with `/`
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "URL has no host".to_string(),
            });
        }
        Ok(url)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn connectivity_timeout(&self) -> Duration {
        Duration::from_millis(self.connectivity_timeout_ms)
    }
}

/// Terminal recipe browser
#[derive(Parser, Debug, Default)]
#[command(name = "recipes-rs", version)]
pub struct CliArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the recipe endpoint
    #[arg(long, env = "RECIPES_BASE_URL")]
    pub base_url: Option<String>,

    /// Preference file for favourites
    #[arg(long)]
    pub preferences: Option<PathBuf>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_thirty_second_timeouts() {
        let config = AppConfig::default();

        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.read_timeout(), Duration::from_secs(30));
        assert_eq!(config.favourites_key, "favourites_key");
        assert_eq!(config.base_url().unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = AppConfig {
            base_url: "http://127.0.0.1:8080/api".to_string(),
            ..Default::default()
        };

        assert_eq!(config.base_url().unwrap().as_str(), "http://127.0.0.1:8080/api/");
    }

    #[test]
    fn base_url_without_host_is_rejected() {
        let config = AppConfig {
            base_url: "mailto:cook@example.com".to_string(),
            ..Default::default()
        };

        assert!(matches!(config.base_url(), Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn partial_file_keeps_defaults_and_flags_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_url":"http://localhost:9000/","read_timeout_secs":5}"#).unwrap();

        let args = CliArgs {
            config: Some(path),
            preferences: Some(PathBuf::from("/tmp/prefs.json")),
            ..Default::default()
        };
        let config = AppConfig::from_args(&args).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.read_timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let args = CliArgs {
            config: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };

        assert!(matches!(AppConfig::from_args(&args), Err(ConfigError::Read { .. })));
    }
}

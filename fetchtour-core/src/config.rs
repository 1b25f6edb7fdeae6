//! Configuration for the tour: `~/.fetchtour/config.toml`
//!
//! Resolution order, highest first: explicit overrides (CLI flags),
//! environment (`FETCHTOUR_BASE_URL`, `FETCHTOUR_TIMEOUT_SECS`), the config
//! file, built-in defaults. A missing file is not an error.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{DEFAULT_OWNER_ID, FETCH_LIST_LIMIT, PICK_LIST_LIMIT};

/// Public JSONPlaceholder instance the tour talks to by default
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "FETCHTOUR_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FETCHTOUR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub api: ApiConfig,
    pub widgets: WidgetsConfig,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Posts kept by the read-only list
    pub list_limit: usize,
    /// Posts kept by the edit and delete lists
    pub pick_limit: usize,
    /// Owner id sent with created posts
    pub owner_id: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            widgets: WidgetsConfig::default(),
            log_level: Some("info".to_string()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("fetchtour/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            list_limit: FETCH_LIST_LIMIT,
            pick_limit: PICK_LIST_LIMIT,
            owner_id: DEFAULT_OWNER_ID,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl TourConfig {
    /// Config directory: ~/.fetchtour
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fetchtour")
    }

    /// Config file path: ~/.fetchtour/config.toml
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from the default path, then apply the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load from a specific file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply FETCHTOUR_* environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                self.api.base_url = base_url;
            }
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                field: ENV_TIMEOUT_SECS,
                reason: e.to_string(),
            })?;
            self.api.timeout_secs = secs;
        }

        self.validate()
    }

    /// Apply explicit overrides (CLI flags win over everything)
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(secs) = timeout_secs {
            self.api.timeout_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "api.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.widgets.list_limit == 0 || self.widgets.pick_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "widgets",
                reason: "list limits must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Log filter to use when RUST_LOG is unset
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Write the config as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_str = toml::to_string_pretty(self)?;

        fs::write(path, toml_str).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TourConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, TourConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.widgets.list_limit, 5);
        assert_eq!(config.widgets.pick_limit, 3);
        assert_eq!(config.widgets.owner_id, 1);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"http://127.0.0.1:4000\"\n").unwrap();

        let config = TourConfig::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.widgets, WidgetsConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = TourConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[widgets]\nlist_limit = 0\n").unwrap();

        let err = TourConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "widgets", .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = TourConfig::default();
        config.api.timeout_secs = 5;
        config.save_to(&path).unwrap();

        assert_eq!(TourConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_overrides_win() {
        let config = TourConfig::default()
            .with_overrides(Some("http://localhost:1234".to_string()), Some(2))
            .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:1234");
        assert_eq!(config.api.timeout(), Duration::from_secs(2));

        assert!(TourConfig::default().with_overrides(None, Some(0)).is_err());
    }
}

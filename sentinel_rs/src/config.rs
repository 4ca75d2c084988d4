//! Configuration file support for sentinel.
//!
//! Loads optional `.sentinel/config.toml` from the working directory, or an
//! explicit file passed with `--config`.
//!
//! ```toml
//! title = "Lab 3 Ransomware Watch"
//! recent_alerts = 20
//! dark = true
//!
//! [theme]
//! primary-color = "#0057b8"
//!
//! [inputs]
//! status = "status.json"
//! alerts = "logs/alerts.log"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dashboard_leptos::theme::Theme;
use serde::Deserialize;
use tracing::warn;

use crate::alerts::DEFAULT_RECENT_ALERTS;
use crate::error::{Result, SentinelError};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Page title (default: "Ransomware Detection System")
    pub title: Option<String>,
    /// How many alerts the event log shows
    pub recent_alerts: usize,
    /// Start from the dark palette
    pub dark: bool,
    /// Design token overrides, e.g. `primary-color = "#000"`
    pub theme: BTreeMap<String, String>,
    pub inputs: InputsConfig,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            title: None,
            recent_alerts: DEFAULT_RECENT_ALERTS,
            dark: false,
            theme: BTreeMap::new(),
            inputs: InputsConfig::default(),
        }
    }
}

/// Default input locations; command-line flags take precedence.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub status: Option<PathBuf>,
    pub alerts: Option<PathBuf>,
    pub activity: Option<PathBuf>,
    pub previous: Option<PathBuf>,
}

impl SentinelConfig {
    /// Load config from `.sentinel/config.toml` under `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".sentinel").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Lenient load: problems are logged and defaults returned.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Strict load for files the user named explicitly.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SentinelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SentinelError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Theme from the configured palette and overrides. `force_dark`
    /// (the `--dark` flag) wins over the file.
    pub fn theme(&self, force_dark: bool) -> Result<Theme> {
        let base = if self.dark || force_dark {
            Theme::dark()
        } else {
            Theme::default()
        };
        Ok(base.with_overrides(&self.theme)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SentinelConfig::default();
        assert_eq!(config.recent_alerts, 10);
        assert!(!config.dark);
        assert!(config.theme.is_empty());
        assert!(config.inputs.status.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SentinelConfig::load(temp.path());
        assert!(config.title.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".sentinel");
        std::fs::create_dir_all(&dir).expect("create .sentinel");

        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r##"
title = "Lab Watch"
recent_alerts = 3
dark = true

[theme]
primary-color = "#000000"

[inputs]
alerts = "logs/alerts.log"
"##
        )
        .expect("write config");

        let config = SentinelConfig::load(temp.path());
        assert_eq!(config.title.as_deref(), Some("Lab Watch"));
        assert_eq!(config.recent_alerts, 3);
        assert_eq!(config.inputs.alerts, Some(PathBuf::from("logs/alerts.log")));

        let theme = config.theme(false).expect("theme");
        assert_eq!(theme.get("--primary-color"), Some("#000000"));
        assert_eq!(theme.get("--background-color"), Theme::dark().get("--background-color"));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "recent_alerts = \"many\"").expect("write");

        let config = SentinelConfig::load_from_path(&path);
        assert_eq!(config.recent_alerts, 10);
        assert!(SentinelConfig::try_load(&path).is_err());
    }

    #[test]
    fn test_unknown_theme_token_is_an_error() {
        let mut config = SentinelConfig::default();
        config.theme.insert("glitter".into(), "#fff".into());
        assert!(config.theme(false).is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use terramap::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TerraMap";

/// Endpoint queried for the region listing when neither the CLI nor the
/// config file overrides it.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/regions";

/// Default bounds and starting value for the year timeline.
pub const DEFAULT_TIMELINE_MIN_YEAR: i32 = 2005;
pub const DEFAULT_TIMELINE_MAX_YEAR: i32 = 2025;
pub const DEFAULT_TIMELINE_YEAR: i32 = 2015;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme: ThemeMode,
    /// Region listing endpoint; `None` falls back to [`DEFAULT_API_URL`].
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeline_min_year: Option<i32>,
    #[serde(default)]
    pub timeline_max_year: Option<i32>,
    #[serde(default)]
    pub timeline_default_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme: ThemeMode::default(),
            api_url: None,
            timeline_min_year: Some(DEFAULT_TIMELINE_MIN_YEAR),
            timeline_max_year: Some(DEFAULT_TIMELINE_MAX_YEAR),
            timeline_default_year: Some(DEFAULT_TIMELINE_YEAR),
        }
    }
}

impl Config {
    /// Resolved region listing endpoint.
    pub fn endpoint(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            theme: ThemeMode::Dark,
            api_url: Some("http://localhost:9000/api/regions".to_string()),
            timeline_min_year: Some(1990),
            timeline_max_year: Some(2030),
            timeline_default_year: Some(2000),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme, config.theme);
        assert_eq!(loaded.api_url, config.api_url);
        assert_eq!(loaded.timeline_min_year, Some(1990));
        assert_eq!(loaded.timeline_max_year, Some(2030));
        assert_eq!(loaded.timeline_default_year, Some(2000));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.api_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_timeline_bounds() {
        let config = Config::default();
        assert_eq!(config.timeline_min_year, Some(DEFAULT_TIMELINE_MIN_YEAR));
        assert_eq!(config.timeline_max_year, Some(DEFAULT_TIMELINE_MAX_YEAR));
        assert_eq!(config.timeline_default_year, Some(DEFAULT_TIMELINE_YEAR));
    }

    #[test]
    fn endpoint_falls_back_to_default_url() {
        let config = Config::default();
        assert_eq!(config.endpoint(), DEFAULT_API_URL);

        let config = Config {
            api_url: Some("http://example.org/regions".to_string()),
            ..Config::default()
        };
        assert_eq!(config.endpoint(), "http://example.org/regions");
    }
}

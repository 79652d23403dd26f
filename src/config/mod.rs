// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use svj_notify::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notifications.max_visible = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.notifications.max_visible, Some(5));
//! std::fs::remove_dir_all("./temp_config_dir").unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::Kind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SvjSprava";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub language: Option<String>,
}

/// Toast behavior as persisted. Absent fields fall back to the `DEFAULT_*` constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub success_timeout_ms: Option<u64>,
    #[serde(default)]
    pub info_timeout_ms: Option<u64>,
    #[serde(default)]
    pub warning_timeout_ms: Option<u64>,
    /// Errors stay until dismissed unless this is set.
    #[serde(default)]
    pub error_timeout_ms: Option<u64>,
    #[serde(default)]
    pub confirm_delay_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            success_timeout_ms: Some(DEFAULT_SUCCESS_TIMEOUT_MS),
            info_timeout_ms: Some(DEFAULT_INFO_TIMEOUT_MS),
            warning_timeout_ms: Some(DEFAULT_WARNING_TIMEOUT_MS),
            error_timeout_ms: None,
            confirm_delay_ms: Some(DEFAULT_CONFIRM_DELAY_MS),
        }
    }
}

impl Config {
    /// Resolves the persisted values into concrete dispatcher settings,
    /// clamping anything outside the supported bounds.
    #[must_use]
    pub fn dispatch_settings(&self) -> DispatchSettings {
        let n = &self.notifications;
        DispatchSettings {
            max_visible: n
                .max_visible
                .unwrap_or(DEFAULT_MAX_VISIBLE)
                .clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE),
            success_timeout: Some(clamp_timeout(
                n.success_timeout_ms.unwrap_or(DEFAULT_SUCCESS_TIMEOUT_MS),
            )),
            info_timeout: Some(clamp_timeout(
                n.info_timeout_ms.unwrap_or(DEFAULT_INFO_TIMEOUT_MS),
            )),
            warning_timeout: Some(clamp_timeout(
                n.warning_timeout_ms.unwrap_or(DEFAULT_WARNING_TIMEOUT_MS),
            )),
            error_timeout: n.error_timeout_ms.map(clamp_timeout),
            confirm_delay: Duration::from_millis(
                n.confirm_delay_ms
                    .unwrap_or(DEFAULT_CONFIRM_DELAY_MS)
                    .clamp(MIN_CONFIRM_DELAY_MS, MAX_CONFIRM_DELAY_MS),
            ),
        }
    }
}

fn clamp_timeout(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS))
}

/// Resolved, in-bounds settings the dispatcher runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSettings {
    pub max_visible: usize,
    pub success_timeout: Option<Duration>,
    pub info_timeout: Option<Duration>,
    pub warning_timeout: Option<Duration>,
    pub error_timeout: Option<Duration>,
    pub confirm_delay: Duration,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Config::default().dispatch_settings()
    }
}

impl DispatchSettings {
    /// Returns the auto-dismiss duration for a kind, `None` for manual dismissal.
    #[must_use]
    pub fn auto_dismiss(&self, kind: Kind) -> Option<Duration> {
        match kind {
            Kind::Success => self.success_timeout,
            Kind::Info => self.info_timeout,
            Kind::Warning => self.warning_timeout,
            Kind::Error => self.error_timeout,
        }
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
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

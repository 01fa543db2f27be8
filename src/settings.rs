//! Application settings loaded from the user's config directory.
//!
//! The on-disk file is a partial overlay (`SettingsContent`, all fields
//! optional) resolved against built-in defaults. A missing or malformed
//! file falls back to defaults with a warning; it never blocks startup.

use crate::constants::DEFAULT_GENERATOR_URL;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Partial settings as stored on disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SettingsContent {
    /// Generation service endpoint
    pub generator_url: Option<String>,
    /// Where generated archives are written; defaults to the system
    /// download directory
    pub download_dir: Option<PathBuf>,
}

/// Resolved application settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub generator_url: String,
    download_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator_url: DEFAULT_GENERATOR_URL.to_string(),
            download_dir: None,
        }
    }
}

/// Path of the settings file, if a config directory exists on this system.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("botboard").join("settings.json"))
}

fn read_content() -> Result<SettingsContent> {
    let path = settings_path().context("no config directory available")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing
    /// or malformed.
    pub fn load() -> Self {
        match read_content() {
            Ok(content) => Self::from_content(content),
            Err(e) => {
                tracing::warn!("using default settings: {e:#}");
                Self::default()
            }
        }
    }

    pub fn from_content(content: SettingsContent) -> Self {
        Self {
            generator_url: content
                .generator_url
                .unwrap_or_else(|| DEFAULT_GENERATOR_URL.to_string()),
            download_dir: content.download_dir,
        }
    }

    /// Directory generated archives are written to. Falls back to the
    /// system download directory, then to the temp directory, so archive
    /// writes always have a destination.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(std::env::temp_dir)
    }
}

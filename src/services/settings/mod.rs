//! Settings persistence.
//! Loads and saves application preferences as a TOML file in the platform
//! config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Create a service backed by the platform config directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "content-calendar")
            .context("Failed to resolve config directory")?;
        Ok(Self {
            path: dirs.config_dir().join("settings.toml"),
        })
    }

    /// Create a service backed by an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, falling back to defaults when no file exists yet
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        Ok(settings)
    }

    /// Save settings, creating the config directory if needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

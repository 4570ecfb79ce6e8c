// Settings persistence
// Loads and saves the app configuration (settings + calendar sources) as a
// TOML document in the platform data directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::calendar_source::CalendarSource;
use crate::models::settings::Settings;

/// Everything the app persists between launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub settings: Settings,
    pub calendars: Vec<CalendarSource>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            // Starter set so the filter affordance has substance on first launch
            calendars: vec![
                CalendarSource::new("Personal", "66,133,244"),
                CalendarSource::new("Work", "219,68,55"),
            ],
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.settings
            .validate()
            .context("Invalid settings")?;
        for calendar in &self.calendars {
            calendar
                .validate()
                .with_context(|| format!("Invalid calendar '{}'", calendar.name))?;
        }
        Ok(())
    }
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Service backed by the default config location in AppData.
    pub fn with_default_path() -> Result<Self> {
        let data_dir = directories::BaseDirs::new()
            .context("Failed to get base directories")?
            .data_dir()
            .to_path_buf();
        Ok(Self::new(
            data_dir.join("planner-calendar").join("config.toml"),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted configuration. A missing file is not an error and
    /// yields the defaults; a malformed or invalid file is.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {:?}", self.path))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate and persist the configuration, creating the directory on
    /// first save.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let raw = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write config file {:?}", self.path))?;
        Ok(())
    }

    /// Reset the persisted configuration to defaults.
    pub fn reset(&self) -> Result<()> {
        self.save(&AppConfig::default())
    }
}

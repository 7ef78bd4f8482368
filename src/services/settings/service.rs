// Settings persistence

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "countdown.toml";

/// Loads and stores the startup settings file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service over the settings file in the platform config directory,
    /// falling back to the working directory when no home is available.
    pub fn from_default_location() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, returning the defaults when the file does not exist
    /// yet. A present but unreadable, unparsable or invalid file is an
    /// error; whether to fall back to defaults is the caller's call.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write settings as pretty TOML, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create settings directory {}", parent.display())
            })?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn resolve_settings_path() -> PathBuf {
    if let Some(project_dirs) = ProjectDirs::from("com", "RustCountdown", "CountdownApp") {
        project_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to determine config directory, using current directory");
        PathBuf::from(SETTINGS_FILE)
    }
}

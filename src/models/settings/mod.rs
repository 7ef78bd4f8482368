// Settings model
// Startup configuration for the countdown application

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format accepted for the countdown target in the settings file.
pub const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default refresh period for the display.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Lower bound on the refresh period; anything faster just burns CPU
/// repainting an unchanged second.
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Validation and parsing failures for [`Settings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid target '{value}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidTarget { value: String },

    #[error("target '{value}' does not exist in the local timezone")]
    NonexistentTarget { value: String },

    #[error("tick interval must be at least {min} ms, got {got}")]
    TickIntervalTooSmall { min: u64, got: u64 },

    #[error("unknown renderer '{0}', expected one of: board, inline, json")]
    UnknownRenderer(String),

    #[error("unknown label preset '{0}', expected one of: english, czech")]
    UnknownLabels(String),
}

/// Application settings, read once at startup from the TOML settings file.
/// The defaults reproduce the built-in countdown: 3 October 2029, midnight
/// local time, redrawn every second on the board renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target instant as local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub target: String,
    /// Refresh period for the countdown display, in milliseconds.
    pub tick_interval_ms: u64,
    /// Renderer variant: "board", "inline" or "json".
    pub renderer: String,
    /// Unit label preset: "english" or "czech".
    pub labels: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: default_target(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            renderer: default_renderer(),
            labels: default_labels(),
        }
    }
}

pub(crate) fn default_target() -> String {
    "2029-10-03 00:00:00".to_string()
}

pub(crate) fn default_renderer() -> String {
    "board".to_string()
}

pub(crate) fn default_labels() -> String {
    "english".to_string()
}

impl Settings {
    /// Check every field without touching the clock or the filesystem.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.parse_target()?;

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(SettingsError::TickIntervalTooSmall {
                min: MIN_TICK_INTERVAL_MS,
                got: self.tick_interval_ms,
            });
        }

        let renderer = self.renderer.trim().to_ascii_lowercase();
        if !["board", "inline", "json"].contains(&renderer.as_str()) {
            return Err(SettingsError::UnknownRenderer(self.renderer.clone()));
        }

        let labels = self.labels.trim().to_ascii_lowercase();
        if !["english", "czech"].contains(&labels.as_str()) {
            return Err(SettingsError::UnknownLabels(self.labels.clone()));
        }

        Ok(())
    }

    /// Resolve the configured target in the local timezone. An ambiguous
    /// wall-clock time (DST fall-back) resolves to the earlier instant; a
    /// nonexistent one (spring-forward gap) is rejected so the user can fix
    /// the settings file instead of silently counting to a shifted moment.
    pub fn target_instant(&self) -> Result<DateTime<Local>, SettingsError> {
        let naive = self.parse_target()?;
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(instant) => Ok(instant),
            LocalResult::Ambiguous(earlier, _) => Ok(earlier),
            LocalResult::None => Err(SettingsError::NonexistentTarget {
                value: self.target.clone(),
            }),
        }
    }

    /// Refresh period as a std duration, ready for the tick loop.
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    fn parse_target(&self) -> Result<NaiveDateTime, SettingsError> {
        NaiveDateTime::parse_from_str(self.target.trim(), TARGET_FORMAT).map_err(|_| {
            SettingsError::InvalidTarget {
                value: self.target.clone(),
            }
        })
    }
}

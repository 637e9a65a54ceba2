//! Settings persistence: save and load app settings to/from a JSON file.
//!
//! This module provides a serializable mirror type for settings whose live
//! representation cannot directly derive serde traits (the color scheme
//! holds egui types). Only app settings are persisted; point sets are
//! deliberately not saved.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color_scheme::ColorScheme;
use crate::config::ParagramConfig;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable version of [`ColorScheme`].
///
/// Custom schemes carry egui visuals and are not persisted; they fall back
/// to the dark scheme on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerColorScheme {
    Dark,
    Light,
}

impl From<&ColorScheme> for SerColorScheme {
    fn from(scheme: &ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => SerColorScheme::Light,
            ColorScheme::Dark | ColorScheme::Custom(_) => SerColorScheme::Dark,
        }
    }
}

impl SerColorScheme {
    pub fn to_scheme(self) -> ColorScheme {
        match self {
            SerColorScheme::Dark => ColorScheme::Dark,
            SerColorScheme::Light => ColorScheme::Light,
        }
    }
}

/// Serializable mirror of the persisted slice of [`ParagramConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSerde {
    pub color_scheme: SerColorScheme,
    pub marker_radius: f32,
    pub hit_radius: f64,
    pub label_font_size: f32,
}

impl From<&ParagramConfig> for SettingsSerde {
    fn from(cfg: &ParagramConfig) -> Self {
        Self {
            color_scheme: (&cfg.color_scheme).into(),
            marker_radius: cfg.marker_radius,
            hit_radius: cfg.hit_radius,
            label_font_size: cfg.label_font_size,
        }
    }
}

impl SettingsSerde {
    /// Apply stored settings to a config instance.
    pub fn apply_to(self, cfg: &mut ParagramConfig) {
        cfg.color_scheme = self.color_scheme.to_scheme();
        cfg.marker_radius = self.marker_radius;
        cfg.hit_radius = self.hit_radius;
        cfg.label_font_size = self.label_font_size;
    }
}

/// Default location of the settings file, under the platform config dir.
/// `None` when the platform exposes no config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paragram").join("settings.json"))
}

/// Save settings as pretty-printed JSON, creating parent directories as
/// needed.
pub fn save_settings(path: &Path, settings: &SettingsSerde) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<SettingsSerde, SettingsError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

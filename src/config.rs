//! Configuration for the parallelogram canvas app.

use std::path::PathBuf;

use crate::color_scheme::ColorScheme;
use crate::persistence::default_settings_path;

/// Top-level configuration for the app.
///
/// All fields have sensible defaults; embedders typically start from
/// [`ParagramConfig::default`] and override what they need.
#[derive(Clone)]
pub struct ParagramConfig {
    // ── Window / chrome ──────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered in the top bar.
    pub heading: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Canvas interaction ───────────────────────────────────────────────
    /// Radius of the filled point markers, in pixels.
    pub marker_radius: f32,
    /// Pixel distance within which a press grabs an existing point for
    /// dragging instead of being ignored.
    pub hit_radius: f64,
    /// Font size of the coordinate labels next to point markers.
    pub label_font_size: f32,

    // ── Appearance ───────────────────────────────────────────────────────
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,

    // ── Persistence ──────────────────────────────────────────────────────
    /// Where app settings (theme, radii) are stored as JSON. `None`
    /// disables settings persistence entirely.
    pub settings_path: Option<PathBuf>,
}

impl Default for ParagramConfig {
    fn default() -> Self {
        Self {
            title: "Paragram".to_string(),
            heading: Some("Paragram".to_string()),
            native_options: None,

            marker_radius: 5.5,
            hit_radius: 10.0,
            label_font_size: 12.0,

            color_scheme: ColorScheme::default(),

            settings_path: default_settings_path(),
        }
    }
}

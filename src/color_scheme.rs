//! Color scheme definitions for the parallelogram canvas.
//!
//! A scheme bundles the egui visuals with the four canvas paint roles:
//! background, point markers, quadrilateral outline and equal-area circle.

use eframe::egui::{Color32, Context, Visuals};

/// The concrete colors used when painting the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasColors {
    /// Canvas background fill (used by clear).
    pub background: Color32,
    /// Point markers.
    pub point: Color32,
    /// Quadrilateral outline.
    pub shape: Color32,
    /// Equal-area circle outline.
    pub circle: Color32,
    /// Coordinate labels next to point markers.
    pub label: Color32,
}

/// Visual theme for the app, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ColorScheme {
    /// Dark background with the classic red/blue/yellow roles.
    #[default]
    Dark,
    /// Light theme with darkened accents for contrast.
    Light,
    /// User-defined custom scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for the egui context (falls back to dark when `None`).
    pub visuals: Option<Visuals>,
    /// Canvas paint roles.
    pub colors: CanvasColors,
    /// Optional label for UI display.
    pub label: Option<String>,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Custom(custom) => {
                ctx.set_visuals(custom.visuals.clone().unwrap_or_else(Visuals::dark));
            }
        }
    }

    /// The canvas paint roles for this scheme.
    pub fn canvas_colors(&self) -> CanvasColors {
        match self {
            ColorScheme::Dark => CanvasColors {
                background: Color32::from_rgb(24, 26, 32),
                point: Color32::from_rgb(231, 76, 60),
                shape: Color32::from_rgb(52, 152, 219),
                circle: Color32::from_rgb(241, 196, 15),
                label: Color32::WHITE,
            },
            ColorScheme::Light => CanvasColors {
                background: Color32::from_rgb(250, 250, 250),
                point: Color32::from_rgb(192, 57, 43),
                shape: Color32::from_rgb(41, 128, 185),
                circle: Color32::from_rgb(183, 149, 11),
                label: Color32::from_rgb(40, 40, 40),
            },
            ColorScheme::Custom(custom) => custom.colors,
        }
    }
}

//! Paragram crate root: re-exports and module wiring.
//!
//! Paragram is an interactive canvas built on egui/eframe: the user places
//! three points, the app draws the parallelogram they span (the fourth
//! corner is derived) plus a circle of equal area centered at the
//! quadrilateral's centroid, and the points can be dragged with everything
//! recomputing live.
//!
//! The implementation is split into cohesive modules:
//! - `geometry`: pure point math (parallelogram completion, area, centroid,
//!   equal-area radius)
//! - `selection`: the Empty/Partial/Full/Dragging state machine
//! - `draw`: stateless painting primitives
//! - `canvas`: the interaction controller / canvas widget
//! - `color_scheme`: visual themes
//! - `config`: top-level configuration
//! - `persistence`: JSON save/load of app settings
//! - `app`: the eframe shell and run helper

pub mod canvas;
pub mod color_scheme;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod persistence;
pub mod selection;

mod app;

// Public re-exports for a compact external API
pub use app::{run_paragram, ParagramApp};
pub use canvas::ParagramCanvas;
pub use color_scheme::{CanvasColors, ColorScheme, CustomColorScheme};
pub use config::ParagramConfig;
pub use geometry::Point;
pub use selection::Selection;

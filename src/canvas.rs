//! Canvas widget: the interaction controller.
//!
//! Owns the [`Selection`], maps pointer events (press, move, release) onto
//! its transitions in canvas-local coordinates, and repaints the full
//! scene every frame: clear, then the placed points, then (once three
//! points exist) the quadrilateral and its equal-area circle.
//!
//! Pointer handling is driven by the widget [`egui::Response`] so that
//! layer ownership is respected: presses that belong to a floating window
//! or an open popup over the canvas never reach the selection.
//!
//! The canvas rect is allocated from the container's layout box each frame,
//! so a container resize automatically reissues the clear and full redraw
//! with the current state. Redraws are synchronous and idempotent.

use egui::{Pos2, Rect, Response, Sense, Ui};
use tracing::debug;

use crate::color_scheme::CanvasColors;
use crate::config::ParagramConfig;
use crate::draw;
use crate::geometry::Point;
use crate::selection::Selection;

/// Pointer activity on the canvas for a single frame, in canvas-local
/// coordinates. A default (all-`None`) frame means the canvas owned no
/// pointer interaction this frame and the selection must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointerFrame {
    /// Primary button went down on the canvas at this position.
    pressed_at: Option<Point>,
    /// Primary button is held and the pointer is at this position.
    dragged_to: Option<Point>,
    /// Primary button was released this frame.
    released: bool,
}

impl PointerFrame {
    /// Extract this frame's pointer activity from the widget response.
    /// Only interactions the canvas actually owns are reported.
    fn from_response(response: &Response, rect: Rect) -> Self {
        let to_local =
            |pos: Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
        let pos = response.interact_pointer_pos().map(to_local);
        Self {
            pressed_at: if response.drag_started() { pos } else { None },
            dragged_to: if response.dragged() { pos } else { None },
            released: response.drag_stopped(),
        }
    }
}

/// The interactive three-point canvas.
pub struct ParagramCanvas {
    selection: Selection,
    marker_radius: f32,
    hit_radius: f64,
    label_font_size: f32,
}

impl ParagramCanvas {
    pub fn new(marker_radius: f32, hit_radius: f64, label_font_size: f32) -> Self {
        Self {
            selection: Selection::Empty,
            marker_radius,
            hit_radius,
            label_font_size,
        }
    }

    pub fn from_config(cfg: &ParagramConfig) -> Self {
        Self::new(cfg.marker_radius, cfg.hit_radius, cfg.label_font_size)
    }

    /// Clear all points and start over (the host shell's reset affordance).
    pub fn reset(&mut self) {
        debug!("canvas reset, selection cleared");
        self.selection.clear();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }

    /// Feed one frame of pointer activity into the selection.
    fn apply_pointer(&mut self, frame: PointerFrame) {
        if let Some(pos) = frame.pressed_at {
            let placed_before = self.selection.len();
            self.selection.pointer_down(pos, self.hit_radius);
            if self.selection.len() > placed_before {
                debug!(index = placed_before, x = pos.x, y = pos.y, "point placed");
            } else if let Some(index) = self.selection.dragging_index() {
                debug!(index, "drag started");
            }
        } else if let Some(pos) = frame.dragged_to {
            self.selection.pointer_moved(pos);
        }
        if frame.released {
            if let Some(index) = self.selection.dragging_index() {
                debug!(index, "drag ended");
            }
            self.selection.pointer_up();
        }
    }

    /// Lay out the canvas over the available space, process pointer input
    /// and repaint the scene.
    pub fn show(&mut self, ui: &mut Ui, colors: &CanvasColors) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.apply_pointer(PointerFrame::from_response(&response, rect));

        let painter = ui.painter_at(rect);
        draw::clear(&painter, rect, colors);
        for p in self.selection.points() {
            draw::draw_point(
                &painter,
                rect,
                p,
                colors,
                self.marker_radius,
                self.label_font_size,
            );
        }
        if let Some(points) = self.selection.full_points() {
            draw::draw_quadrilateral(&painter, rect, &points, colors);
            draw::draw_equal_area_circle(&painter, rect, &points, colors);
        }
    }
}

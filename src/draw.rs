//! Stateless painting primitives for the parallelogram canvas.
//!
//! Each function paints onto an [`egui::Painter`] clipped to the canvas
//! rect; nothing here holds state or touches the selection. Geometry for the
//! derived shapes comes from [`crate::geometry`].

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::color_scheme::CanvasColors;
use crate::geometry::{self, Point};

/// Stroke width for the quadrilateral and circle outlines.
const SHAPE_STROKE_WIDTH: f32 = 1.5;

/// Horizontal gap between a point marker and its coordinate label.
const LABEL_OFFSET_X: f32 = 6.0;
/// Vertical gap between a point marker and its coordinate label.
const LABEL_OFFSET_Y: f32 = 10.0;

/// Map a canvas-local point to screen coordinates.
fn to_screen(canvas: Rect, p: Point) -> Pos2 {
    Pos2::new(canvas.min.x + p.x as f32, canvas.min.y + p.y as f32)
}

/// Wipe the whole canvas with the background color.
pub fn clear(painter: &Painter, canvas: Rect, colors: &CanvasColors) {
    painter.rect_filled(canvas, CornerRadius::ZERO, colors.background);
}

/// Paint a filled point marker plus its integer-rounded coordinate label.
pub fn draw_point(
    painter: &Painter,
    canvas: Rect,
    p: Point,
    colors: &CanvasColors,
    marker_radius: f32,
    label_font_size: f32,
) {
    painter.circle_filled(to_screen(canvas, p), marker_radius, colors.point);
    draw_point_label(painter, canvas, p, colors, label_font_size);
}

/// Paint the coordinate label next to a point.
///
/// The anchor flips to the left of the point on the right half of the canvas
/// and below the point in the top quarter, so labels stay inside the surface.
fn draw_point_label(
    painter: &Painter,
    canvas: Rect,
    p: Point,
    colors: &CanvasColors,
    label_font_size: f32,
) {
    let text = format!("({}, {})", p.x.round() as i64, p.y.round() as i64);
    let flip_left = p.x as f32 > canvas.width() * 0.5;
    let flip_below = (p.y as f32) < canvas.height() * 0.25;
    let anchor = match (flip_left, flip_below) {
        (false, false) => Align2::LEFT_BOTTOM,
        (true, false) => Align2::RIGHT_BOTTOM,
        (false, true) => Align2::LEFT_TOP,
        (true, true) => Align2::RIGHT_TOP,
    };
    let marker = to_screen(canvas, p);
    let pos = Pos2::new(
        marker.x + if flip_left { -LABEL_OFFSET_X } else { LABEL_OFFSET_X },
        marker.y + if flip_below { LABEL_OFFSET_Y } else { -LABEL_OFFSET_Y },
    );
    painter.text(
        pos,
        anchor,
        text,
        FontId::proportional(label_font_size),
        colors.label,
    );
}

/// Stroke the closed quadrilateral p1→p2→p3→p4→p1, where p4 is the derived
/// fourth corner. Always four segments, even though only three points are
/// user-controlled.
pub fn draw_quadrilateral(painter: &Painter, canvas: Rect, points: &[Point; 3], colors: &CanvasColors) {
    let [p1, p2, p3] = *points;
    let p4 = geometry::complete_parallelogram(p1, p2, p3);
    let vertices: Vec<Pos2> = [p1, p2, p3, p4]
        .into_iter()
        .map(|p| to_screen(canvas, p))
        .collect();
    painter.add(Shape::closed_line(
        vertices,
        Stroke::new(SHAPE_STROKE_WIDTH, colors.shape),
    ));
}

/// Stroke the circle whose area equals the quadrilateral's, centered at the
/// centroid of all four vertices. Collinear points produce a zero-radius
/// circle, which paints as nothing.
pub fn draw_equal_area_circle(
    painter: &Painter,
    canvas: Rect,
    points: &[Point; 3],
    colors: &CanvasColors,
) {
    let [p1, p2, p3] = *points;
    let p4 = geometry::complete_parallelogram(p1, p2, p3);
    let area = geometry::parallelogram_area(p1, p2, p3);
    let center = geometry::centroid(&[p1, p2, p3, p4]);
    let radius = geometry::equal_area_radius(area);
    painter.circle_stroke(
        to_screen(canvas, center),
        radius as f32,
        Stroke::new(SHAPE_STROKE_WIDTH, colors.circle),
    );
}

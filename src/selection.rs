//! Point selection state machine.
//!
//! The selection walks through Empty → Partial → Full as the user places
//! points; once three points exist no further point can be added: the type
//! carries `[Point; 3]` in the Full and Dragging states so a fourth vertex is
//! unrepresentable. Dragging is a sub-state of Full that remembers which
//! point is held and the grab offset keeping it stable under the cursor.
//!
//! All transitions are synchronous and pure; the canvas widget feeds raw
//! pointer events in and reads the current points back out each frame.

use crate::geometry::Point;

/// One or two placed points, in placement order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Partial {
    One(Point),
    Two(Point, Point),
}

/// An in-progress drag: which point is held and where it sits relative to
/// the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub points: [Point; 3],
    pub index: usize,
    pub grab_offset: Point,
}

/// The ordered set of user-placed points (at most three) plus drag state.
///
/// Placement order is significant: the first three points become vertices
/// 1, 2, 3 of the quadrilateral, fixing which vertex is opposite the derived
/// fourth corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Partial(Partial),
    Full([Point; 3]),
    Dragging(Drag),
}

impl Selection {
    /// Handle a primary-button press at `pos` (canvas-local coordinates).
    ///
    /// While fewer than three points exist the press places a new point.
    /// With three points placed, a press within `hit_radius` of a point
    /// starts dragging it; a press anywhere else is a no-op.
    pub fn pointer_down(&mut self, pos: Point, hit_radius: f64) {
        *self = match std::mem::take(self) {
            Selection::Empty => Selection::Partial(Partial::One(pos)),
            Selection::Partial(Partial::One(p1)) => Selection::Partial(Partial::Two(p1, pos)),
            Selection::Partial(Partial::Two(p1, p2)) => Selection::Full([p1, p2, pos]),
            Selection::Full(points) => match hit_test(&points, pos, hit_radius) {
                Some(index) => Selection::Dragging(Drag {
                    grab_offset: points[index] - pos,
                    points,
                    index,
                }),
                None => Selection::Full(points),
            },
            // Single-pointer interaction model: a second press mid-drag
            // cannot occur through normal input delivery; keep the drag.
            dragging @ Selection::Dragging(_) => dragging,
        };
    }

    /// Handle pointer movement. Only meaningful while dragging: the held
    /// point follows the pointer, offset by the grab offset. Positions
    /// outside the canvas bounds are accepted unclamped.
    pub fn pointer_moved(&mut self, pos: Point) {
        if let Selection::Dragging(drag) = self {
            drag.points[drag.index] = pos + drag.grab_offset;
        }
    }

    /// Handle release of the primary button, ending any drag in progress.
    pub fn pointer_up(&mut self) {
        *self = match std::mem::take(self) {
            Selection::Dragging(drag) => Selection::Full(drag.points),
            other => other,
        };
    }

    /// Clear the selection back to empty (the external reset affordance).
    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    /// Currently placed points, in placement order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Selection::Empty => Vec::new(),
            Selection::Partial(Partial::One(p1)) => vec![*p1],
            Selection::Partial(Partial::Two(p1, p2)) => vec![*p1, *p2],
            Selection::Full(points) => points.to_vec(),
            Selection::Dragging(drag) => drag.points.to_vec(),
        }
    }

    /// All three vertices, if the selection is complete (including while a
    /// point is being dragged).
    pub fn full_points(&self) -> Option<[Point; 3]> {
        match self {
            Selection::Full(points) => Some(*points),
            Selection::Dragging(drag) => Some(drag.points),
            _ => None,
        }
    }

    /// Index of the point currently being dragged, if any.
    pub fn dragging_index(&self) -> Option<usize> {
        match self {
            Selection::Dragging(drag) => Some(drag.index),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::Partial(Partial::One(_)) => 1,
            Selection::Partial(Partial::Two(_, _)) => 2,
            Selection::Full(_) | Selection::Dragging(_) => 3,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Selection::Full(_) | Selection::Dragging(_))
    }
}

/// First point (in placement order) within `radius` of `pos`, if any.
pub fn hit_test(points: &[Point], pos: Point, radius: f64) -> Option<usize> {
    points.iter().position(|p| p.distance(pos) <= radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_is_inclusive_at_the_radius_boundary() {
        let points = [Point::new(0.0, 0.0)];
        assert_eq!(hit_test(&points, Point::new(10.0, 0.0), 10.0), Some(0));
        assert_eq!(hit_test(&points, Point::new(10.1, 0.0), 10.0), None);
    }

    #[test]
    fn presses_while_partial_always_place_a_new_point() {
        // Dragging only exists once three points are placed; a press on top
        // of an existing point before that places the next vertex.
        let mut selection = Selection::default();
        selection.pointer_down(Point::new(50.0, 50.0), 10.0);
        selection.pointer_down(Point::new(52.0, 50.0), 10.0);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.dragging_index(), None);
    }

    #[test]
    fn release_from_dragging_returns_to_full() {
        let mut selection = Selection::Full([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        selection.pointer_down(Point::new(0.0, 0.0), 10.0);
        assert!(matches!(selection, Selection::Dragging(_)));
        selection.pointer_up();
        assert!(matches!(selection, Selection::Full(_)));
    }
}

//! Pure geometry for the parallelogram canvas.
//!
//! Everything in this module is deterministic and side-effect free so the
//! derivation pipeline can be unit-tested without a rendering backend.
//! Coordinates live in canvas pixel space; all functions are total over
//! finite inputs. Degenerate (collinear) input yields zero-sized results
//! rather than errors.

use std::ops::{Add, Sub};

/// A point in 2D canvas pixel space.
///
/// Also used as a displacement vector (e.g. the grab offset while dragging),
/// which is why `Add`/`Sub` have plain component-wise semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fourth vertex completing the parallelogram spanned by three points.
///
/// `p4 = p1 + p3 - p2`, which makes the segment p1–p2 parallel and equal in
/// length to p4–p3. The result depends on vertex order: the middle point is
/// the one "opposite" the derived corner.
pub fn complete_parallelogram(p1: Point, p2: Point, p3: Point) -> Point {
    Point::new(p1.x + p3.x - p2.x, p1.y + p3.y - p2.y)
}

/// Area of the parallelogram spanned by three points (base times height).
///
/// Base is the segment p1–p2; height is the perpendicular distance of the
/// opposite side, obtained from the cross-product magnitude. Collinear input
/// (including a zero-length base) gives 0.0.
pub fn parallelogram_area(p1: Point, p2: Point, p3: Point) -> f64 {
    let base = p1.distance(p2);
    if base == 0.0 {
        return 0.0;
    }
    let cross = ((p2.x - p1.x) * (p3.y - p2.y) - (p2.y - p1.y) * (p3.x - p2.x)).abs();
    let height = cross / base;
    base * height
}

/// Arithmetic mean of a set of points. Returns [`Point::ZERO`] for an empty
/// slice so the function stays total; callers pass the 3 selected vertices
/// or all 4 quadrilateral corners.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(Point::ZERO, |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
    Point::new(sum.x / n, sum.y / n)
}

/// Radius of the circle whose area equals `area`. Zero area gives radius 0.
pub fn equal_area_radius(area: f64) -> f64 {
    (area / std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_base_short_circuits_before_the_division() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(parallelogram_area(p, p, Point::new(10.0, 10.0)), 0.0);
    }

    #[test]
    fn completion_places_the_fourth_corner_opposite_the_middle_point() {
        let p4 = complete_parallelogram(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        );
        assert_eq!(p4, Point::new(0.0, 3.0));
    }

    #[test]
    fn zero_area_gives_zero_radius() {
        assert_eq!(equal_area_radius(0.0), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }
}

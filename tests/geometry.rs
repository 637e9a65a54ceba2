use paragram::geometry::{
    centroid, complete_parallelogram, equal_area_radius, parallelogram_area, Point,
};

#[test]
fn area_is_positive_for_non_collinear_points() {
    let area = parallelogram_area(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(3.0, 7.0),
    );
    assert!(area > 0.0, "non-collinear points must span a positive area");
}

#[test]
fn equal_area_radius_matches_sqrt_area_over_pi_exactly() {
    for area in [1.0, 10.0, 123.456, 10_000.0] {
        assert_eq!(equal_area_radius(area), (area / std::f64::consts::PI).sqrt());
    }
}

#[test]
fn collinear_points_give_zero_area_and_radius() {
    let area = parallelogram_area(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
    );
    assert_eq!(area, 0.0);
    assert_eq!(equal_area_radius(area), 0.0);
}

#[test]
fn coincident_base_points_give_zero_area_without_dividing_by_zero() {
    let p = Point::new(5.0, 5.0);
    let area = parallelogram_area(p, p, Point::new(20.0, 30.0));
    assert_eq!(area, 0.0);
}

#[test]
fn complete_parallelogram_is_componentwise_vector_sum() {
    let p1 = Point::new(1.0, 2.0);
    let p2 = Point::new(4.0, -3.0);
    let p3 = Point::new(-2.0, 7.0);
    let p4 = complete_parallelogram(p1, p2, p3);
    assert_eq!(p4.x, p1.x + p3.x - p2.x);
    assert_eq!(p4.y, p1.y + p3.y - p2.y);
}

#[test]
fn complete_parallelogram_is_order_sensitive() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(10.0, 0.0);
    let p3 = Point::new(10.0, 10.0);
    assert_ne!(
        complete_parallelogram(p1, p2, p3),
        complete_parallelogram(p3, p2, p1)
    );
}

#[test]
fn centroid_is_arithmetic_mean() {
    let points = [
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(200.0, 200.0),
        Point::new(100.0, 200.0),
    ];
    assert_eq!(centroid(&points), Point::new(150.0, 150.0));
}

#[test]
fn centroid_of_empty_slice_is_zero() {
    assert_eq!(centroid(&[]), Point::ZERO);
}

#[test]
fn square_scenario_derives_expected_values() {
    // The three corners of a 100x100 square; the fourth is derived.
    let p1 = Point::new(100.0, 100.0);
    let p2 = Point::new(200.0, 100.0);
    let p3 = Point::new(200.0, 200.0);

    let p4 = complete_parallelogram(p1, p2, p3);
    assert_eq!(p4, Point::new(100.0, 200.0));

    let area = parallelogram_area(p1, p2, p3);
    assert_eq!(area, 10_000.0);

    assert_eq!(centroid(&[p1, p2, p3, p4]), Point::new(150.0, 150.0));

    let radius = equal_area_radius(area);
    assert!((radius - 56.418_958_354_775_63).abs() < 1e-9);
}

#[test]
fn derivation_is_idempotent_for_unchanged_points() {
    let p1 = Point::new(12.5, -3.25);
    let p2 = Point::new(87.0, 41.0);
    let p3 = Point::new(-20.0, 66.5);

    let first = (
        complete_parallelogram(p1, p2, p3),
        parallelogram_area(p1, p2, p3),
        equal_area_radius(parallelogram_area(p1, p2, p3)),
    );
    let second = (
        complete_parallelogram(p1, p2, p3),
        parallelogram_area(p1, p2, p3),
        equal_area_radius(parallelogram_area(p1, p2, p3)),
    );
    assert_eq!(first, second);
}

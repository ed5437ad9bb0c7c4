use approx::assert_relative_eq;
use hullcast2d::math::{Isometry, Point, Real, Vector};
use hullcast2d::query::{time_of_impact, ConvergenceStatus, TOIOptions};
use hullcast2d::shape::{ConvexPolygon, ConvexShape};

fn square(center: Vector<Real>) -> ConvexPolygon {
    ConvexPolygon::from_local_points(
        vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ],
        Isometry::new(center, 0.0),
    )
}

fn options() -> TOIOptions {
    TOIOptions {
        eps: 1.0e-4,
        ..TOIOptions::default()
    }
}

#[test]
fn toi_grows_with_the_obstacle_distance() {
    let g1 = square(Vector::zeros());
    let sv = Vector::new(12.0, 0.0);
    let mut last = 0.0;

    for i in 4..=13 {
        let g2 = square(Vector::new(i as Real, 0.0));
        let hit = time_of_impact(&g1, &sv, &g2, &options());

        assert!(hit.impact);
        assert!(hit.toi >= last);
        assert_relative_eq!(hit.toi, (i as Real - 2.0) / 12.0, epsilon = 1.0e-3);
        last = hit.toi;
    }

    // Out of reach.
    for i in 15..=20 {
        let g2 = square(Vector::new(i as Real, 0.0));
        let miss = time_of_impact(&g1, &sv, &g2, &options());
        assert!(!miss.impact);
        assert_eq!(miss.toi, 0.0);
    }
}

#[test]
fn toi_grows_with_a_rotated_obstacle_distance() {
    let g1 = ConvexPolygon::from_convex_hull(&[
        Point::new(-1.0, 0.0),
        Point::new(1.0, -0.5),
        Point::new(0.5, 1.0),
    ])
    .unwrap();
    let sv = Vector::new(10.0, 5.0);
    let mut last = 0.0;

    for i in 0..10 {
        let mut g2 = square(Vector::new(4.0, 3.0) + sv.normalize() * (i as Real * 0.5));
        g2.rotate(0.6);

        let hit = time_of_impact(&g1, &sv, &g2, &options());
        assert!(hit.impact);
        assert_eq!(hit.status, ConvergenceStatus::Converged);
        assert!(hit.toi >= last);
        last = hit.toi;
    }
}

#[test]
fn glancing_miss() {
    let g1 = square(Vector::zeros());
    let g2 = square(Vector::new(10.0, 2.5));

    let miss = time_of_impact(&g1, &Vector::new(20.0, 0.0), &g2, &options());
    assert!(!miss.impact);
    assert_eq!(miss.toi, 0.0);
}

#[test]
fn transforms_are_left_untouched() {
    let mut g1 = square(Vector::new(-3.0, 1.0));
    g1.rotate(0.3);
    let g2 = square(Vector::new(5.0, 1.5));
    let before = *g1.position();
    let inv_before = g1.to_local();

    let hit = time_of_impact(&g1, &Vector::new(10.0, 0.0), &g2, &options());
    assert!(hit.impact);
    assert_eq!(*g1.position(), before);
    assert_eq!(g1.to_local(), inv_before);

    // The default tolerance stops much earlier.
    let coarse = time_of_impact(&g1, &Vector::new(10.0, 0.0), &g2, &TOIOptions::default());
    assert!(coarse.toi <= hit.toi);
    assert_eq!(*g1.position(), before);
}

use crate::random_cloud;
use hullcast2d::math::{Point, Real};
use hullcast2d::shape::{ConvexPolygon, ConvexShape};
use hullcast2d::transformation::{self, ConvexHullError};
use hullcast2d::utils;

#[test]
fn random_hulls_are_convex_and_minimal() {
    let mut rng = oorandom::Rand32::new(0x5eed);

    for npts in [3, 4, 10, 50, 200, 1000] {
        for _ in 0..20 {
            let points = random_cloud(&mut rng, npts, 10.0);
            let hull = match transformation::convex_hull(&points) {
                Ok(hull) => hull,
                Err(err) => {
                    assert!(err.is_degenerate_input());
                    continue;
                }
            };
            let n = hull.points.len();
            assert!(n >= 3);
            assert_eq!(n, hull.boundary.len());

            for i in 0..n {
                let a = &hull.points[i];
                let b = &hull.points[(i + 1) % n];
                let c = &hull.points[(i + 2) % n];

                // No redundant vertex.
                assert!(utils::orient2d(a, b, c) > 0.0);

                // No input point outside of the edge `a -> b`.
                for pt in &points {
                    assert!(utils::orient2d(a, b, pt) >= -1.0e-3);
                }
            }

            // Every hull vertex is an input point.
            for pt in &hull.points {
                assert!(points.contains(pt));
            }
        }
    }
}

#[test]
fn boundary_walk_matches_points() {
    let mut rng = oorandom::Rand32::new(7);
    let points = random_cloud(&mut rng, 100, 5.0);
    let hull = transformation::convex_hull(&points).unwrap();

    let walked: Vec<_> = hull.boundary.iter().map(|(_, v)| *v.point()).collect();
    assert_eq!(walked, hull.points);
    assert_eq!(hull.boundary.edges().count(), hull.points.len());

    for pt in &points {
        // Tolerate points lying on an edge up to rounding.
        let inside = hull.boundary.edges().all(|(a, b)| utils::orient2d(&a, &b, pt) >= -1.0e-3);
        assert!(inside);
    }
}

#[test]
fn degenerate_clouds_are_reported() {
    let same: Vec<Point<Real>> = vec![Point::new(1.0, 2.0); 5];
    assert_eq!(
        transformation::convex_hull(&same).unwrap_err(),
        ConvexHullError::IllConditionedFit
    );

    let line: Vec<_> = (0..10)
        .map(|i| Point::new(i as Real, 2.0 * i as Real + 1.0))
        .collect();
    let err = transformation::convex_hull(&line).unwrap_err();
    assert!(matches!(err, ConvexHullError::CollinearInput { .. }));
    assert!(err.degenerate_hull().is_some());

    assert!(ConvexPolygon::from_convex_hull(&line).is_err());
}

#[test]
fn polygon_from_random_cloud() {
    let mut rng = oorandom::Rand32::new(99);
    let points = random_cloud(&mut rng, 64, 3.0);
    let polygon = ConvexPolygon::from_convex_hull(&points).unwrap();

    // The local origin is the centroid of the hull vertices.
    assert!(utils::center(polygon.points()).coords.norm() < 1.0e-4);

    for world in polygon.world_points() {
        assert!(points.iter().any(|pt| (pt - world).norm() < 1.0e-4));
    }

    assert_eq!(polygon.points(), ConvexShape::points(&polygon));
}

#[test]
fn near_vertical_quad_is_kept() {
    let points = [
        Point::new(1.0, 0.0),
        Point::new(1.0, 5.0),
        Point::new(1.0001, 2.0),
        Point::new(0.9999, 3.0),
    ];

    let hull = transformation::convex_hull(&points).unwrap();
    assert_eq!(hull.points.len(), 4);

    for pt in &points {
        assert!(hull.points.contains(pt));
    }
}

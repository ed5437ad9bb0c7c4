use crate::random_cloud;
use approx::assert_relative_eq;
use hullcast2d::math::{Isometry, Point, Real, Vector};
use hullcast2d::query::gjk::{self, GjkOptions};
use hullcast2d::shape::{ConvexPolygon, ConvexShape};
use hullcast2d::transformation;
use hullcast2d::utils;

fn square(half: Real, center: Vector<Real>) -> ConvexPolygon {
    ConvexPolygon::from_local_points(
        vec![
            Point::new(-half, -half),
            Point::new(half, -half),
            Point::new(half, half),
            Point::new(-half, half),
        ],
        Isometry::new(center, 0.0),
    )
}

fn point_segment_distance(p: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Real {
    let ab = b - a;
    let t = if ab.norm_squared() > 0.0 {
        ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0)
    } else {
        0.0
    };

    (p - utils::lerp(a, b, t)).norm()
}

fn contains(polygon: &[Point<Real>], pt: &Point<Real>) -> bool {
    let n = polygon.len();
    (0..n).all(|i| utils::orient2d(&polygon[i], &polygon[(i + 1) % n], pt) >= 0.0)
}

/// Distance between two counter-clockwise convex polygons given by their world-space vertices.
fn brute_force_distance(poly1: &[Point<Real>], poly2: &[Point<Real>]) -> Real {
    if poly1.iter().any(|pt| contains(poly2, pt)) || poly2.iter().any(|pt| contains(poly1, pt)) {
        return 0.0;
    }

    let mut best = Real::MAX;

    for (pts, other) in [(poly1, poly2), (poly2, poly1)] {
        let n = other.len();

        for pt in pts {
            for i in 0..n {
                best = best.min(point_segment_distance(pt, &other[i], &other[(i + 1) % n]));
            }
        }
    }

    best
}

fn edges_cross(poly1: &[Point<Real>], poly2: &[Point<Real>]) -> bool {
    let (n1, n2) = (poly1.len(), poly2.len());

    (0..n1).any(|i| {
        let (a, b) = (&poly1[i], &poly1[(i + 1) % n1]);
        (0..n2).any(|j| {
            let (c, d) = (&poly2[j], &poly2[(j + 1) % n2]);
            utils::orient2d(a, b, c) * utils::orient2d(a, b, d) < 0.0
                && utils::orient2d(c, d, a) * utils::orient2d(c, d, b) < 0.0
        })
    })
}

#[test]
fn disjoint_axis_aligned_squares() {
    let g1 = square(1.0, Vector::zeros());
    let g2 = square(1.0, Vector::new(10.0, 0.0));

    let result = gjk::distance(&g1, &g2, None, &GjkOptions::default());
    assert_relative_eq!(result.distance(), 8.0, epsilon = 1.0e-5);

    let (p1, p2) = result.closest_points(&g1, &g2);
    assert_relative_eq!(p1.x, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(p2.x, 9.0, epsilon = 1.0e-5);
}

#[test]
fn identical_unit_squares_overlap() {
    let g1 = square(0.5, Vector::new(-4.0, 7.0));
    let g2 = square(0.5, Vector::new(-4.0, 7.0));

    let result = gjk::distance(&g1, &g2, None, &GjkOptions::default());
    assert_eq!(result.simplex.dim(), 3);
    assert_eq!(result.nv, Vector::zeros());
}

#[test]
fn random_polygons_match_brute_force() {
    let mut rng = oorandom::Rand32::new(1234);
    let options = GjkOptions::default();
    let mut nseparated = 0;

    for _ in 0..500 {
        let cloud1 = random_cloud(&mut rng, 12, 2.0);
        let cloud2 = random_cloud(&mut rng, 12, 2.0);
        let (Ok(mut g1), Ok(mut g2)) = (
            ConvexPolygon::from_convex_hull(&cloud1),
            ConvexPolygon::from_convex_hull(&cloud2),
        ) else {
            continue;
        };

        let offset = random_cloud(&mut rng, 1, 6.0)[0];
        g1.rotate(rng.rand_float() as Real * 6.0);
        g2.translate(&offset.coords);
        g2.rotate(rng.rand_float() as Real * 6.0);

        let poly1: Vec<_> = g1.world_points().collect();
        let poly2: Vec<_> = g2.world_points().collect();
        let result = gjk::distance(&g1, &g2, None, &options);

        if edges_cross(&poly1, &poly2) {
            assert!(result.distance() < 1.0e-3);
            continue;
        }

        let expected = brute_force_distance(&poly1, &poly2);

        if expected == 0.0 {
            assert!(result.distance() < 1.0e-3);
        } else {
            nseparated += 1;
            assert_relative_eq!(result.distance(), expected, epsilon = 1.0e-3 * (1.0 + expected));

            // Round trip.
            let (p1, p2) = result.closest_points(&g1, &g2);
            assert_relative_eq!((p2 - p1).norm(), result.distance(), epsilon = 1.0e-3);
        }
    }

    assert!(nseparated > 0);
}

#[test]
fn reduction_is_idempotent_on_query_results() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..100 {
        let g1 = ConvexPolygon::from_convex_hull(&random_cloud(&mut rng, 8, 1.0)).unwrap();
        let mut g2 = ConvexPolygon::from_convex_hull(&random_cloud(&mut rng, 8, 1.0)).unwrap();
        g2.translate(&random_cloud(&mut rng, 1, 4.0)[0].coords);

        let result = gjk::distance(&g1, &g2, None, &GjkOptions::default());
        let mut simplex = result.simplex.clone();
        let nv = simplex.project_origin_and_reduce();

        assert_eq!(simplex.dim(), result.simplex.dim());
        assert_relative_eq!(nv, result.nv, epsilon = 1.0e-4);
    }
}

#[test]
fn warm_started_queries_follow_motion() {
    let g1 = ConvexPolygon::from_convex_hull(&[
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 2.0),
    ])
    .unwrap();
    let mut g2 = square(1.0, Vector::new(8.0, 0.0));
    let options = GjkOptions::default();

    let mut prev = gjk::distance(&g1, &g2, None, &options);

    for _ in 0..20 {
        g2.translate(&Vector::new(-0.25, 0.05));
        g2.rotate(0.1);

        let warm = gjk::distance(&g1, &g2, Some(&prev.simplex), &options);
        let cold = gjk::distance(&g1, &g2, None, &options);
        assert_relative_eq!(warm.distance(), cold.distance(), epsilon = 1.0e-3);
        prev = warm;
    }
}

#[test]
fn minkowski_difference_contains_the_query_point() {
    let g1 = square(1.0, Vector::new(0.0, 0.5));
    let mut g2 = ConvexPolygon::from_convex_hull(&[
        Point::new(0.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(1.0, 3.0),
    ])
    .unwrap();
    g2.translate(&Vector::new(4.0, -3.0));

    let result = gjk::distance(&g1, &g2, None, &GjkOptions::default());
    let cso = transformation::minkowski_difference(&g1, &g2).unwrap();

    // The closest point of the Minkowski difference lies on its boundary.
    let nv = Point::from(result.nv);
    let on_boundary = cso.boundary.edges().any(|(a, b)| {
        utils::orient2d(&a, &b, &nv).abs() < 1.0e-3 * (b - a).norm()
            && (nv - a).dot(&(b - a)) >= -1.0e-3
            && (nv - b).dot(&(a - b)) >= -1.0e-3
    });
    assert!(on_boundary);
    assert!(!cso.boundary.contains_point(&Point::origin()));
    assert_eq!(g1.to_world(), *g1.position());
}

#[test]
fn overlaps_always_end_with_an_enclosing_triangle() {
    let mut rng = oorandom::Rand32::new(77);
    let options = GjkOptions::default();
    let mut noverlapping = 0;

    for _ in 0..1000 {
        let (Ok(g1), Ok(mut g2)) = (
            ConvexPolygon::from_convex_hull(&random_cloud(&mut rng, 6, 2.0)),
            ConvexPolygon::from_convex_hull(&random_cloud(&mut rng, 6, 2.0)),
        ) else {
            continue;
        };
        g2.translate(&random_cloud(&mut rng, 1, 3.0)[0].coords);
        g2.rotate(rng.rand_float() as Real * 6.0);

        let Ok(cso) = transformation::minkowski_difference(&g1, &g2) else {
            continue;
        };
        let origin = Point::origin();
        let deep = cso
            .boundary
            .edges()
            .all(|(a, b)| utils::orient2d(&a, &b, &origin) > 1.0e-2 * (b - a).norm());

        if !deep {
            continue;
        }

        noverlapping += 1;
        let result = gjk::distance(&g1, &g2, None, &options);
        assert_eq!(result.status, gjk::ConvergenceStatus::Converged);
        assert_eq!(result.simplex.dim(), 3);
        assert_eq!(result.nv, Vector::zeros());
    }

    assert!(noverlapping > 0);
}

use hullcast2d::math::{Point, Real, Vector};
use hullcast2d::query::gjk::{self, GjkOptions};
use hullcast2d::shape::ConvexPolygon;
use hullcast2d::transformation;

fn main() {
    let mut g1 = ConvexPolygon::from_convex_hull(&[
        Point::new(-2.0, -1.0),
        Point::new(2.0, -1.0),
        Point::new(2.5, 1.0),
        Point::new(0.0, 2.0),
        Point::new(-2.5, 1.0),
        Point::new(0.0, 0.0),
    ])
    .expect("Invalid hull");
    let g2 = ConvexPolygon::from_convex_hull(&[
        Point::new(6.0, -1.0),
        Point::new(9.0, -1.0),
        Point::new(9.0, 2.0),
        Point::new(6.0, 2.0),
    ])
    .expect("Invalid hull");

    let options = GjkOptions::default();
    let mut prev = None;

    // Move the first shape toward the second one, reusing the previous simplex at each frame.
    for frame in 0..12 {
        let result = gjk::distance(&g1, &g2, prev.as_ref(), &options);
        let (p1, p2) = result.closest_points(&g1, &g2);

        if result.is_overlapping() {
            println!("frame {:2}: overlapping ({} vertices)", frame, result.simplex.dim());
        } else {
            println!(
                "frame {:2}: distance {:.3} between {} and {} after {} iterations",
                frame,
                result.distance(),
                p1,
                p2,
                result.iterations
            );
        }

        prev = Some(result.simplex);
        g1.translate(&Vector::new(0.5, 0.0));
        g1.rotate(0.1 as Real);
    }

    let cso = transformation::minkowski_difference(&g1, &g2).expect("Invalid hull");
    println!("Minkowski difference: {:?}", cso.points);
}

use hullcast2d::math::{Point, Real};
use hullcast2d::shape::ConvexPolygon;
use hullcast2d::transformation;

fn main() {
    let count = 24;
    let pts: Vec<_> = (0..count)
        .map(|i| {
            let t = i as Real * 0.7;
            let r = 3.0 + (i % 5) as Real;
            Point::new(r * t.cos(), r * (1.3 * t).sin())
        })
        .collect();

    /*
     *
     * Compute the convex hull.
     *
     */
    match transformation::convex_hull(&pts) {
        Ok(hull) => {
            println!(
                "Convex hull of {} points: {} vertices.",
                pts.len(),
                hull.points.len()
            );

            for (a, b) in hull.boundary.edges() {
                println!("  edge {} -> {}", a, b);
            }
        }
        Err(err) => println!("Convex hull failed: {}", err),
    }

    /*
     *
     * Degenerate inputs are reported as errors.
     *
     */
    let collinear = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    if let Err(err) = ConvexPolygon::from_convex_hull(&collinear) {
        println!("{} (degenerate input: {})", err, err.is_degenerate_input());
    }
}

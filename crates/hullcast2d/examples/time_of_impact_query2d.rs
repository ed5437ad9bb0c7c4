use hullcast2d::math::{Isometry, Point, Vector};
use hullcast2d::query::{time_of_impact, TOIOptions};
use hullcast2d::shape::ConvexPolygon;

fn main() {
    let square = vec![
        Point::new(-10.0, -10.0),
        Point::new(10.0, -10.0),
        Point::new(10.0, 10.0),
        Point::new(-10.0, 10.0),
    ];
    let g1 = ConvexPolygon::from_local_points(square.clone(), Isometry::translation(100.0, 100.0));
    let mut g2 = ConvexPolygon::from_local_points(square, Isometry::translation(300.0, 140.0));
    g2.rotate(0.4);

    let options = TOIOptions::default();

    for sv in [
        Vector::new(250.0, 0.0),
        Vector::new(250.0, 50.0),
        Vector::new(100.0, 0.0),
        Vector::new(-250.0, 0.0),
    ] {
        let toi = time_of_impact(&g1, &sv, &g2, &options);

        if toi.impact {
            println!(
                "sweep {}: impact at {:.3} (contact {} / {}, normal {:?})",
                sv,
                toi.toi,
                toi.witness1,
                toi.witness2,
                toi.normal.map(|n| n.into_inner())
            );
        } else {
            println!("sweep {}: no impact", sv);
        }
    }
}

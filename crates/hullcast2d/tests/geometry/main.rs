mod convex_hull2;
mod gjk_distance2;
mod time_of_impact2;

use hullcast2d::math::{Point, Real};

/// A seeded cloud of `n` points in `[-extent, extent]²`.
pub fn random_cloud(rng: &mut oorandom::Rand32, n: usize, extent: Real) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            let x = rng.rand_float() as Real * 2.0 - 1.0;
            let y = rng.rand_float() as Real * 2.0 - 1.0;
            Point::new(x * extent, y * extent)
        })
        .collect()
}

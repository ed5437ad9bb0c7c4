use crate::math::{Point, Real, Vector};

/// Index of the point of `points` with the largest dot product with `dir`.
///
/// Ties are resolved in favor of the first point reaching the maximal dot product.
///
/// # Panics
///
/// Panics if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    assert!(
        !points.is_empty(),
        "Cannot compute the support point of an empty point cloud."
    );

    let first = (0, points[0].coords.dot(dir));
    let (best, _) = points
        .iter()
        .enumerate()
        .skip(1)
        .fold(first, |best, (i, pt)| {
            let dot = pt.coords.dot(dir);
            if dot > best.1 {
                (i, dot)
            } else {
                best
            }
        });

    best
}

/// The point of `points` with the largest dot product with `dir`.
///
/// See [`point_cloud_support_point_id`].
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}

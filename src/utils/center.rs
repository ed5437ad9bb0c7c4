use crate::math::{Point, Real, Vector};

/// The centroid of a set of points, all weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use hullcast2d::utils::center;
/// use hullcast2d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// # }
/// ```
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the centroid of an empty point set."
    );

    let sum: Vector<Real> = pts.iter().map(|pt| pt.coords).sum();
    Point::from(sum / pts.len() as Real)
}

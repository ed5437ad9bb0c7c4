use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use num::Bounded;

/// Index of the point of `points` maximizing `dot(pt - origin, dir)`, with that dot product.
///
/// Returns `None` if `points` is empty or only contains NaN coordinates.
pub fn support_point_id(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    points: &[Point<Real>],
) -> Option<(usize, Real)> {
    let mut argmax = None;
    let mut max = -Real::max_value();

    for (id, pt) in points.iter().enumerate() {
        let dot = dir.dot(&(pt - origin));

        if dot > max {
            argmax = Some((id, dot));
            max = dot;
        }
    }

    argmax
}

/// Index of the point of `points` maximizing `|dot(pt - origin, dir)|`, with that distance.
///
/// Only points at a strictly positive unsigned distance are considered, so `None` is returned
/// if every point lies on the line through `origin` orthogonal to `dir`.
pub fn unsigned_support_point_id(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    points: &[Point<Real>],
) -> Option<(usize, Real)> {
    let mut argmax = None;
    let mut max = 0.0;

    for (id, pt) in points.iter().enumerate() {
        let dot = dir.dot(&(pt - origin)).abs();

        if dot > max {
            argmax = Some((id, dot));
            max = dot;
        }
    }

    argmax
}

/// Unweighted linear least-squares fit `y = a * x + b` of a point cloud.
///
/// Returns `(a, b)`, or `None` if the normal equations are singular (all the points share the
/// same abscissa) or the input is empty.
pub fn least_squares_line(points: &[Point<Real>]) -> Option<(Real, Real)> {
    if points.is_empty() {
        return None;
    }

    // Sums are taken relative to the centroid to avoid cancellations.
    let mean = utils::center(points);
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut scale = 0.0;

    for pt in points {
        let dx = pt.x - mean.x;
        let dy = pt.y - mean.y;
        sxx += dx * dx;
        sxy += dx * dy;
        scale += pt.x * pt.x;
    }

    // Spreads within the rounding error of the abscissas are not a spread.
    if sxx <= DEFAULT_EPSILON * DEFAULT_EPSILON * scale || !sxx.is_finite() {
        return None;
    }

    let a = sxy / sxx;
    let b = mean.y - a * mean.x;

    if a.is_finite() && b.is_finite() {
        Some((a, b))
    } else {
        None
    }
}

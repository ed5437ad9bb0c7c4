use crate::math::{Point, Real, Vector};

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive if the triangle is counter-clockwise, negative if it is clockwise, and zero if the
/// three points are collinear.
#[inline]
pub fn orient2d(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    (b - a).perp(&(c - a))
}

/// Is `c` strictly on the right-hand side of the oriented line `a -> b`?
///
/// For a counter-clockwise boundary this is the "outside of the edge `(a, b)`" test.
#[inline]
pub fn is_clockwise(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    orient2d(a, b, c) < 0.0
}

/// Rotates `v` by 90 degrees counter-clockwise.
#[inline]
pub fn perp(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-v.y, v.x)
}

/// The outward normal (not normalized) of the edge `a -> b` of a counter-clockwise boundary.
#[inline]
pub fn ccw_edge_normal(a: &Point<Real>, b: &Point<Real>) -> Vector<Real> {
    let ab = b - a;
    Vector::new(ab.y, -ab.x)
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: &Point<Real>, b: &Point<Real>, t: Real) -> Point<Real> {
    a + (b - a) * t
}

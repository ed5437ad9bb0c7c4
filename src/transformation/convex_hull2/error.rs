use crate::math::{Point, Real};

/// Errors that can occur during convex hull computation.
///
/// The first three variants describe input that cannot span an initial triangle, and each one
/// identifies which support query failed. See [`ConvexHullError::is_degenerate_input`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConvexHullError {
    /// The input was empty, or no point maximized the least-squares direction.
    ///
    /// This also happens if the input contains NaN coordinates.
    #[error("The input point set is empty or invalid (NaN).")]
    EmptyInput,

    /// The least-squares line fit is ill-conditioned.
    ///
    /// All points share the same abscissa (or there is only one distinct abscissa), so the
    /// denominator of the normal equations vanishes.
    #[error("The least-squares fit of the input points is ill-conditioned (vertical point set).")]
    IllConditionedFit,

    /// No point lies off the line through the two extreme points: the input is collinear.
    ///
    /// The two extreme points are still returned as a degenerate, two-point, hull.
    #[error("The input points are collinear; degenerate hull: [{p1}, {p2}].")]
    CollinearInput {
        /// The point maximizing the fitted direction.
        p1: Point<Real>,
        /// The point maximizing the opposite of the fitted direction.
        p2: Point<Real>,
    },

    /// A boundary vertex has no live successor.
    ///
    /// This is an internal invariant violation and should never happen.
    #[error("Internal error: the hull boundary is broken at vertex {vertex}.")]
    BrokenBoundary {
        /// The key of the vertex with a dangling successor link.
        vertex: usize,
    },
}

impl ConvexHullError {
    /// Is this error caused by input that cannot form an initial triangle?
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            ConvexHullError::EmptyInput
                | ConvexHullError::IllConditionedFit
                | ConvexHullError::CollinearInput { .. }
        )
    }

    /// The degenerate two-point hull reported for collinear input.
    pub fn degenerate_hull(&self) -> Option<[Point<Real>; 2]> {
        match self {
            ConvexHullError::CollinearInput { p1, p2 } => Some([*p1, *p2]),
            _ => None,
        }
    }
}

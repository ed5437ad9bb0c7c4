//! Convex hull construction and Minkowski differences.

pub use self::convex_hull2::{
    convex_hull, BoundaryIter, ConvexHull, ConvexHullError, HullBoundary, HullVertex,
};
pub use self::minkowski_difference::minkowski_difference;

mod convex_hull2;
pub(crate) mod convex_hull_utils;
mod minkowski_difference;

//! Convex hull of 2D point clouds.

pub use self::convex_hull::{convex_hull, ConvexHull};
pub use self::error::ConvexHullError;
pub use self::hull_boundary::{BoundaryIter, HullBoundary, HullVertex};

mod convex_hull;
mod error;
mod hull_boundary;

//! Shapes supported by hullcast.

pub use self::convex_polygon::ConvexPolygon;
pub use self::convex_shape::{ConvexShape, Translated};

mod convex_polygon;
mod convex_shape;

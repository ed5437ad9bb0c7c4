//! Non-persistent geometric queries.
//!
//! * [`gjk::distance()`] computes the distance between two convex shapes, and the simplex
//!   supporting it. [`gjk::closest_points()`] and [`gjk::separating_normal()`] recover the
//!   closest points and the separating normal from that simplex.
//! * [`time_of_impact()`] determines when a shape swept linearly hits a static one for the
//!   first time.

pub use self::gjk::{ConvergenceStatus, DistanceResult, GjkOptions};
pub use self::time_of_impact::{time_of_impact, TOIOptions, TOI};

pub mod gjk;
mod time_of_impact;

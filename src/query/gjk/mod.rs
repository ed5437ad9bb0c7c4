//! The GJK algorithm for distance computation.

pub use self::gjk::*;
pub use self::minkowski_vertex::MinkowskiVertex;
pub use self::simplex::{Simplex, SIMPLEX_CAPACITY};
pub use self::voronoi::{project_origin_on_segment, project_origin_on_triangle, Projection, Region};

mod gjk;
mod minkowski_vertex;
mod simplex;
mod voronoi;

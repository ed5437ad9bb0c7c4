//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::orientation::{ccw_edge_normal, is_clockwise, lerp, orient2d, perp};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod center;
mod orientation;
mod point_cloud_support_point;

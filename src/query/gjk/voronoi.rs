//! Projection of the origin on point, segment and triangle simplices.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use na::Unit;

bitflags::bitflags! {
    /// The vertices of a simplex supporting the feature closest to the origin.
    ///
    /// `A`, `B` and `C` identify the first, second and third vertex of the simplex.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Region: u8 {
        /// The first vertex.
        const A = 0b001;
        /// The second vertex.
        const B = 0b010;
        /// The third vertex.
        const C = 0b100;
    }
}

/// The projection of the origin on a simplex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The vertices supporting the closest feature.
    ///
    /// All three vertices are set if the origin lies inside of a triangle.
    pub region: Region,
    /// The point of the simplex closest to the origin, as a vector from the origin.
    pub nv: Vector<Real>,
}

impl Projection {
    fn vertex(region: Region, pt: &Point<Real>) -> Self {
        Projection {
            region,
            nv: pt.coords,
        }
    }
}

/// Projects the origin on the segment `a -> b`.
///
/// `ra` and `rb` are the regions reported if the projection lies on `a` or on `b`. A
/// zero-length segment is treated as the single point `a`.
pub fn project_origin_on_segment(
    a: &Point<Real>,
    ra: Region,
    b: &Point<Real>,
    rb: Region,
) -> Projection {
    let Some((dir, len)) = Unit::try_new_and_get(b - a, 0.0) else {
        return Projection::vertex(ra, a);
    };

    let t = -a.coords.dot(&dir);

    if t > len {
        Projection::vertex(rb, b)
    } else if t < 0.0 {
        Projection::vertex(ra, a)
    } else {
        Projection {
            region: ra | rb,
            nv: a.coords + *dir * t,
        }
    }
}

/// Projects the origin on the triangle `a, b, c`.
///
/// If the origin lies inside of the triangle (or on its boundary), the three vertices are kept
/// and the projection is the zero vector.
pub fn project_origin_on_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Projection {
    let scale = (b - a)
        .norm_squared()
        .max((c - b).norm_squared())
        .max((a - c).norm_squared());
    let det = utils::orient2d(a, b, c);

    if det.abs() <= DEFAULT_EPSILON * scale {
        return project_origin_on_edges(a, b, c);
    }

    // The same determinant sign is used for every edge test so they agree on the winding.
    let origin = Point::origin();
    let mut outside = 0;

    if utils::orient2d(a, b, &origin) * det < 0.0 {
        outside |= 0b001;
    }
    if utils::orient2d(b, c, &origin) * det < 0.0 {
        outside |= 0b010;
    }
    if utils::orient2d(c, a, &origin) * det < 0.0 {
        outside |= 0b100;
    }

    match outside {
        0b000 => Projection {
            region: Region::all(),
            nv: Vector::zeros(),
        },
        0b001 => project_origin_on_segment(a, Region::A, b, Region::B),
        0b010 => project_origin_on_segment(c, Region::C, b, Region::B),
        0b100 => project_origin_on_segment(c, Region::C, a, Region::A),
        0b011 => project_origin_on_dual_edges((a, Region::A), (b, Region::B), (c, Region::C)),
        0b101 => project_origin_on_dual_edges((c, Region::C), (a, Region::A), (b, Region::B)),
        0b110 => project_origin_on_dual_edges((b, Region::B), (c, Region::C), (a, Region::A)),
        _ => project_origin_on_edges(a, b, c),
    }
}

/// Projects the origin lying outside of both edges `x -> y` and `y -> z`.
fn project_origin_on_dual_edges(
    (x, rx): (&Point<Real>, Region),
    (y, ry): (&Point<Real>, Region),
    (z, rz): (&Point<Real>, Region),
) -> Projection {
    let same = |u: &Vector<Real>, v: &Vector<Real>| u.dot(v) > 0.0;
    let yx = y - x;
    let yz = y - z;

    if same(&-y.coords, &yz) && same(&-y.coords, &yx) {
        Projection::vertex(ry, y)
    } else if !same(&-y.coords, &yx) {
        if !same(&-x.coords, &yx) {
            Projection::vertex(rx, x)
        } else {
            Projection {
                region: rx | ry,
                nv: x.coords + yx * (-x.coords.dot(&yx) / yx.norm_squared()),
            }
        }
    } else if !same(&-z.coords, &yz) {
        Projection::vertex(rz, z)
    } else {
        Projection {
            region: rz | ry,
            nv: z.coords + yz * (-z.coords.dot(&yz) / yz.norm_squared()),
        }
    }
}

/// Picks the closest of the three edge projections of a (possibly degenerate) triangle.
fn project_origin_on_edges(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Projection {
    [
        project_origin_on_segment(a, Region::A, b, Region::B),
        project_origin_on_segment(b, Region::B, c, Region::C),
        project_origin_on_segment(c, Region::C, a, Region::A),
    ]
    .into_iter()
    .min_by(|p1, p2| p1.nv.norm_squared().total_cmp(&p2.nv.norm_squared()))
    .unwrap_or(Projection::vertex(Region::A, a))
}

//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates on the Minkowski difference `A - B` of two convex shapes: the distance
//! between the shapes is the distance from the origin to this difference, and the shapes
//! overlap iff the difference contains the origin. Instead of building the difference
//! explicitly, a [`Simplex`] of at most three of its support points is grown toward the
//! origin and reduced to the feature closest to it until no progress can be made.

use na::Unit;

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{MinkowskiVertex, Simplex};
use crate::shape::ConvexShape;
use crate::utils;
use arrayvec::ArrayVec;

/// The absolute tolerance used by the GJK algorithm.
///
/// Two Minkowski vertices closer than the square root of this tolerance are considered
/// duplicates, and the origin is considered on the simplex if its squared distance to it is
/// smaller than this tolerance.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Parameters of the GJK distance algorithm.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// Relative tolerance of the termination test: the loop stops once a new support point
    /// improves the squared distance by less than `eps` times this squared distance.
    pub eps: Real,
    /// Multiplier of the iteration cap. The cap is `bias` times the total number of points of
    /// both shapes, so a zero `bias` returns the initial estimate as is.
    pub bias: usize,
    /// Squared distance below which a new support point is considered a duplicate of a
    /// vertex of the simplex.
    pub dupe_tol: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            eps: 1.0e-4,
            bias: 1,
            dupe_tol: eps_tol(),
        }
    }
}

/// The way an iterative query terminated.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// The termination criterion was satisfied.
    Converged,
    /// The iteration cap was hit before the termination criterion was satisfied.
    ///
    /// The result is still a best-effort approximation and is often fine to use.
    Exhausted,
}

/// The result of a GJK distance query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceResult {
    /// The terminal simplex, supporting the feature of the Minkowski difference closest to the
    /// origin. It can be passed to the next query on the same pair of shapes.
    pub simplex: Simplex,
    /// The point of the Minkowski difference `A - B` closest to the origin, in world-space.
    ///
    /// Its norm is the distance between the shapes. It is zero if they overlap.
    pub nv: Vector<Real>,
    /// The way the query terminated.
    pub status: ConvergenceStatus,
    /// The number of support points computed.
    pub iterations: usize,
}

impl DistanceResult {
    /// The distance between the two shapes.
    pub fn distance(&self) -> Real {
        self.nv.norm()
    }

    /// Do the two shapes overlap, or touch?
    pub fn is_overlapping(&self) -> bool {
        self.simplex.is_full() || self.nv.norm_squared() <= eps_tol()
    }

    /// The world-space closest points of the two shapes this query was run on.
    ///
    /// See [`closest_points`].
    pub fn closest_points<G1, G2>(&self, g1: &G1, g2: &G2) -> (Point<Real>, Point<Real>)
    where
        G1: ?Sized + ConvexShape,
        G2: ?Sized + ConvexShape,
    {
        closest_points(&self.simplex, &self.nv, g1, g2)
    }

    /// The world-space unit normal separating the two shapes.
    ///
    /// See [`separating_normal`].
    pub fn separating_normal(&self, reference: &Vector<Real>) -> Option<UnitVector<Real>> {
        separating_normal(&self.simplex, reference)
    }
}

/// Computes the distance between two convex shapes.
///
/// If `prior` is set, the query starts from this simplex, typically the result of the previous
/// query on the same pair of shapes: its vertices are rebound to the current placement of the
/// shapes without recomputing any support point.
///
/// # Panics
///
/// Panics if either shape has no points.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use hullcast2d::math::{Isometry, Point};
/// use hullcast2d::query::gjk::{self, GjkOptions};
/// use hullcast2d::shape::ConvexPolygon;
///
/// let square = vec![
///     Point::new(-1.0, -1.0),
///     Point::new(1.0, -1.0),
///     Point::new(1.0, 1.0),
///     Point::new(-1.0, 1.0),
/// ];
/// let g1 = ConvexPolygon::from_local_points(square.clone(), Isometry::identity());
/// let g2 = ConvexPolygon::from_local_points(square, Isometry::translation(10.0, 0.0));
///
/// let result = gjk::distance(&g1, &g2, None, &GjkOptions::default());
/// assert!((result.distance() - 8.0).abs() < 1.0e-5);
///
/// let (p1, p2) = result.closest_points(&g1, &g2);
/// assert!((p1.x - 1.0).abs() < 1.0e-5);
/// assert!((p2.x - 9.0).abs() < 1.0e-5);
/// # }
/// ```
pub fn distance<G1, G2>(
    g1: &G1,
    g2: &G2,
    prior: Option<&Simplex>,
    options: &GjkOptions,
) -> DistanceResult
where
    G1: ?Sized + ConvexShape,
    G2: ?Sized + ConvexShape,
{
    assert!(
        !g1.points().is_empty() && !g2.points().is_empty(),
        "GJK: cannot compute the distance between shapes with no points."
    );

    let (mut simplex, mut nv) = match prior {
        Some(prior) if !prior.is_empty() => {
            let mut simplex = prior.clone();
            simplex.rebind(&g1.to_world(), &g2.to_world());
            let nv = simplex.project_origin_and_reduce();
            (simplex, nv)
        }
        _ => (Simplex::new(), g1.origin() - g2.origin()),
    };

    let max_iter = options.bias * (g1.points().len() + g2.points().len());
    let mut status = ConvergenceStatus::Exhausted;
    let mut niter = 0;

    loop {
        if simplex.is_full() {
            // The origin is inside of the Minkowski difference.
            status = ConvergenceStatus::Converged;
            break;
        }

        if niter == max_iter {
            break;
        }

        niter += 1;
        let v1 = nv.norm_squared();

        let w = if v1 <= eps_tol() {
            // The origin is on the simplex: any direction is as good as -nv.
            match fallback_support(g1, g2, &simplex, options.dupe_tol) {
                Some(w) => w,
                None => {
                    status = ConvergenceStatus::Converged;
                    break;
                }
            }
        } else {
            let w = MinkowskiVertex::from_shapes(g1, g2, &-nv);

            if simplex.contains_near(&w.point, options.dupe_tol)
                || (!simplex.is_empty() && v1 - w.point.coords.dot(&nv) < options.eps * v1)
            {
                status = ConvergenceStatus::Converged;
                break;
            }

            w
        };

        let _ = simplex.push(w);
        nv = simplex.project_origin_and_reduce();

        log::trace!(
            "GJK iteration {}: simplex dimension {}, squared distance {}.",
            niter,
            simplex.dim(),
            nv.norm_squared()
        );
    }

    if status == ConvergenceStatus::Exhausted {
        log::debug!(
            "GJK did not converge after {} iterations (distance: {}).",
            niter,
            nv.norm()
        );
    }

    DistanceResult {
        simplex,
        nv,
        status,
        iterations: niter,
    }
}

/// Finds a support point that is not already part of `simplex`, along the coordinate axes if
/// the simplex is a point, or along the normals of the simplex if it is a segment.
///
/// The segment normal facing the origin is tried first: the triangle it spans is the one that
/// can enclose the origin.
fn fallback_support<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &Simplex,
    tol: Real,
) -> Option<MinkowskiVertex>
where
    G1: ?Sized + ConvexShape,
    G2: ?Sized + ConvexShape,
{
    let dirs: ArrayVec<Vector<Real>, 4> = match (simplex.peek(0), simplex.peek(1)) {
        (Some(a), Some(b)) => {
            let n = utils::perp(&(a.point - b.point));
            let n = if n.dot(&a.point.coords) > 0.0 { -n } else { n };
            [n, -n].into_iter().collect()
        }
        _ => [Vector::x(), -Vector::x(), Vector::y(), -Vector::y()]
            .into_iter()
            .collect(),
    };

    dirs.iter()
        .map(|dir| MinkowskiVertex::from_shapes(g1, g2, dir))
        .find(|w| !simplex.contains_near(&w.point, tol))
}

/// Computes the world-space closest points of two shapes from the result of a distance query.
///
/// - With an empty simplex, the world-space origins of both shapes are returned.
/// - With a single vertex, its contributing points are returned.
/// - Otherwise, the contributing points of the two most recent vertices are interpolated at
///   the parameter of `nv` along their edge, clamped to `[0, 1]`.
///
/// The distance between the returned points is the norm of `nv`.
pub fn closest_points<G1, G2>(
    simplex: &Simplex,
    nv: &Vector<Real>,
    g1: &G1,
    g2: &G2,
) -> (Point<Real>, Point<Real>)
where
    G1: ?Sized + ConvexShape,
    G2: ?Sized + ConvexShape,
{
    let pos1 = g1.to_world();
    let pos2 = g2.to_world();

    match simplex.vertices() {
        [] => (g1.origin(), g2.origin()),
        [v] => (v.world1(&pos1), v.world2(&pos2)),
        [v0, v1, ..] => {
            let ab = v1.point - v0.point;
            let ab_len2 = ab.norm_squared();
            let t = if ab_len2 > 0.0 {
                (ab.dot(&(nv - v0.point.coords)) / ab_len2).clamp(0.0, 1.0)
            } else {
                0.0
            };

            (
                pos1 * utils::lerp(&v0.orig1, &v1.orig1, t),
                pos2 * utils::lerp(&v0.orig2, &v1.orig2, t),
            )
        }
    }
}

/// Computes the world-space unit normal separating the two shapes of a distance query.
///
/// With a single vertex this is the direction of its difference vector, pointing from the
/// second shape toward the first one. With an edge (or a triangle, in which case its two most
/// recent vertices are used) this is the normal of the edge, oriented against `reference`
/// (e.g. the direction of motion of the first shape).
///
/// Returns `None` if the simplex is empty or the normal cannot be normalized.
pub fn separating_normal(simplex: &Simplex, reference: &Vector<Real>) -> Option<UnitVector<Real>> {
    match simplex.vertices() {
        [] => None,
        [v] => Unit::try_new(v.diff(), DEFAULT_EPSILON),
        [v0, v1, ..] => {
            let n = utils::perp(&(v0.point - v1.point));
            let n = if n.dot(reference) > 0.0 { -n } else { n };
            Unit::try_new(n, DEFAULT_EPSILON)
        }
    }
}

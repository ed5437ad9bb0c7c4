use super::{ConvexHullError, HullBoundary};
use crate::math::{Point, Real, Vector};
use crate::transformation::convex_hull_utils::{
    least_squares_line, support_point_id, unsigned_support_point_id,
};
use crate::utils;
use alloc::collections::VecDeque;

/// The convex hull of a point cloud.
#[derive(Clone, Debug)]
pub struct ConvexHull {
    /// The boundary of the hull, winding counter-clockwise.
    pub boundary: HullBoundary,
    /// The vertices of the hull, read off the boundary once, starting at its entry vertex.
    pub points: Vec<Point<Real>>,
}

impl ConvexHull {
    fn from_boundary(boundary: HullBoundary) -> Self {
        let points = boundary.points();
        ConvexHull { boundary, points }
    }
}

/// Computes the convex hull of a set of 2D points.
///
/// The input order is irrelevant and duplicates are tolerated. Interior points, and points
/// lying on the interior of a hull edge, are discarded. The resulting boundary winds
/// counter-clockwise.
///
/// The hull is built by divide-and-prune: an initial triangle is spanned along the
/// least-squares direction of the cloud, every point enclosed by it is pruned, and each
/// boundary edge is then refined by its farthest outer point until no point is left outside.
///
/// # Errors
///
/// - [`ConvexHullError::EmptyInput`] if `points` is empty or invalid.
/// - [`ConvexHullError::IllConditionedFit`] if all the points share the same abscissa.
/// - [`ConvexHullError::CollinearInput`] if the points are collinear. The error carries the
///   two-point degenerate hull.
/// - [`ConvexHullError::BrokenBoundary`] if the boundary links get corrupted. This is a bug.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use hullcast2d::math::Point;
/// use hullcast2d::transformation::convex_hull;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 0.5), // Interior point.
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.points.len(), 4);
/// assert!(!hull.points.contains(&Point::new(1.0, 0.5)));
/// # }
/// ```
pub fn convex_hull(points: &[Point<Real>]) -> Result<ConvexHull, ConvexHullError> {
    if points.is_empty() {
        return Err(ConvexHullError::EmptyInput);
    }

    let (slope, intercept) = least_squares_line(points).ok_or_else(|| {
        log::debug!("Ill-conditioned least-squares fit of {} points.", points.len());
        ConvexHullError::IllConditionedFit
    })?;

    // Maximize along the fitted line, in both directions.
    let line_origin = Point::new(0.0, intercept);
    let line_dir = Vector::new(1.0, slope);
    let (i1, _) =
        support_point_id(&line_origin, &line_dir, points).ok_or(ConvexHullError::EmptyInput)?;
    let (i2, _) =
        support_point_id(&line_origin, &-line_dir, points).ok_or(ConvexHullError::EmptyInput)?;
    let p1 = points[i1];
    let p2 = points[i2];

    // Maximize on either side of the line through p1 and p2.
    let mid = utils::lerp(&p1, &p2, 0.5);
    let (i3, _) = unsigned_support_point_id(&mid, &utils::perp(&(p2 - p1)), points)
        .ok_or_else(|| {
            log::debug!("Collinear input set of {} points.", points.len());
            ConvexHullError::CollinearInput { p1, p2 }
        })?;
    let p3 = points[i3];

    let (mut boundary, initial) = if utils::orient2d(&p1, &p2, &p3) > 0.0 {
        HullBoundary::triangle(p1, p2, p3)
    } else {
        HullBoundary::triangle(p1, p3, p2)
    };

    // Prune every point enclosed by the initial triangle.
    let mut candidates: Vec<_> = points
        .iter()
        .copied()
        .filter(|pt| !boundary.contains_point(pt))
        .collect();

    let mut queue: VecDeque<usize> = initial.into_iter().collect();

    while !candidates.is_empty() {
        let Some(vertex) = queue.pop_front() else {
            break;
        };

        // Stale entry: this vertex got bypassed by a previous splice.
        let Some(curr_pt) = boundary.point(vertex).copied() else {
            continue;
        };
        let next = boundary
            .next(vertex)
            .ok_or(ConvexHullError::BrokenBoundary { vertex })?;
        let next_pt = boundary.point(next).copied().ok_or(ConvexHullError::BrokenBoundary {
            vertex: next,
        })?;

        let normal = utils::ccw_edge_normal(&curr_pt, &next_pt);

        match support_point_id(&curr_pt, &normal, &candidates) {
            Some((id, dist)) if dist > 0.0 => {
                let support = candidates.swap_remove(id);
                let (cw, ccw) = horizon(&boundary, vertex, next, &support)?;
                let cw_pt = boundary.point(cw).copied().ok_or(ConvexHullError::BrokenBoundary {
                    vertex: cw,
                })?;
                let ccw_pt = boundary
                    .point(ccw)
                    .copied()
                    .ok_or(ConvexHullError::BrokenBoundary { vertex: ccw })?;

                // Discard the candidates enclosed by the new triangle (cw, support, ccw).
                candidates.retain(|pt| {
                    utils::is_clockwise(&cw_pt, &support, pt)
                        || utils::is_clockwise(&support, &ccw_pt, pt)
                        || utils::is_clockwise(&ccw_pt, &cw_pt, pt)
                });

                let (new, nremoved) = boundary.splice(cw, support, ccw);

                if nremoved > 0 {
                    log::trace!("Hull expansion bypassed {} boundary vertices.", nremoved);
                }

                // The two new edges: cw -> new and new -> ccw.
                queue.push_back(cw);
                queue.push_back(new);
            }
            _ => {
                // No point outside of this edge: it is final.
            }
        }
    }

    remove_collinear_vertices(&mut boundary);

    Ok(ConvexHull::from_boundary(boundary))
}

/// Finds the two boundary vertices `(cw, ccw)` bounding the chain of edges visible from
/// `support`, starting from the visible edge `(vertex, next)`.
fn horizon(
    boundary: &HullBoundary,
    vertex: usize,
    next: usize,
    support: &Point<Real>,
) -> Result<(usize, usize), ConvexHullError> {
    let max_steps = boundary.len();
    let point = |key: usize| {
        boundary
            .point(key)
            .copied()
            .ok_or(ConvexHullError::BrokenBoundary { vertex: key })
    };

    let mut cw = vertex;
    for _ in 0..max_steps {
        let prev = boundary
            .prev(cw)
            .ok_or(ConvexHullError::BrokenBoundary { vertex: cw })?;

        if prev == next || !utils::is_clockwise(&point(prev)?, &point(cw)?, support) {
            break;
        }

        cw = prev;
    }

    let mut ccw = next;
    for _ in 0..max_steps {
        let after = boundary
            .next(ccw)
            .ok_or(ConvexHullError::BrokenBoundary { vertex: ccw })?;

        if after == cw || !utils::is_clockwise(&point(ccw)?, &point(after)?, support) {
            break;
        }

        ccw = after;
    }

    Ok((cw, ccw))
}

/// Dissolves the vertices where the boundary does not turn strictly counter-clockwise.
fn remove_collinear_vertices(boundary: &mut HullBoundary) {
    let mut key = boundary.entry();
    let mut nsteps_without_removal = 0;

    while boundary.len() > 3 && nsteps_without_removal < boundary.len() {
        let (Some(prev), Some(next)) = (boundary.prev(key), boundary.next(key)) else {
            return;
        };
        let (Some(a), Some(b), Some(c)) = (
            boundary.point(prev),
            boundary.point(key),
            boundary.point(next),
        ) else {
            return;
        };

        if utils::orient2d(a, b, c) <= 0.0 {
            let _ = boundary.dissolve(key);
            nsteps_without_removal = 0;
        } else {
            nsteps_without_removal += 1;
        }

        key = next;
    }
}

use crate::shape::ConvexShape;
use crate::transformation::{convex_hull, ConvexHull, ConvexHullError};

/// Computes the Minkowski difference `g1 - g2` of two convex shapes, in world-space.
///
/// This is the convex hull of every pairwise difference between the world-space points of
/// `g1` and `g2`. Its closest point to the origin is the separation between both shapes,
/// which makes it a handy debugging and visualization companion for the GJK queries.
pub fn minkowski_difference<G1, G2>(g1: &G1, g2: &G2) -> Result<ConvexHull, ConvexHullError>
where
    G1: ?Sized + ConvexShape,
    G2: ?Sized + ConvexShape,
{
    let pos1 = g1.to_world();
    let pos2 = g2.to_world();
    let pts2: Vec<_> = g2.points().iter().map(|pt| pos2 * pt).collect();
    let mut cso = Vec::with_capacity(g1.points().len() * pts2.len());

    for pt1 in g1.points() {
        let pt1 = pos1 * pt1;

        for pt2 in &pts2 {
            cso.push(pt1 - pt2.coords);
        }
    }

    convex_hull(&cso)
}

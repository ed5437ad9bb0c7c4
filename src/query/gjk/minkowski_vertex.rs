use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::ConvexShape;

/// A point of the Minkowski difference of two shapes.
///
/// Each vertex corresponds to the difference of two points, each belonging to a different
/// shape. The contributing points are kept in the local-space of their shape so the world-space
/// difference can be recomputed after the shapes moved (see [`Self::rebind`]).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinkowskiVertex {
    /// The world-space point of the Minkowski difference: the world-space image of `orig1`
    /// minus the world-space image of `orig2`.
    pub point: Point<Real>,
    /// The local-space point of the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The local-space point of the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
}

impl MinkowskiVertex {
    /// Initializes a vertex from two local-space points and the placements of their shapes.
    pub fn new(
        orig1: Point<Real>,
        orig2: Point<Real>,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
    ) -> Self {
        let point = Point::from(pos1 * orig1 - pos2 * orig2);
        MinkowskiVertex {
            point,
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the Minkowski difference of `g1` and `g2` toward the
    /// world-space direction `dir`.
    ///
    /// This pairs the support point of `g1` toward `dir` with the support point of `g2` toward
    /// `-dir`.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + ConvexShape,
        G2: ?Sized + ConvexShape,
    {
        let sp1 = g1.local_support_point(dir);
        let sp2 = g2.local_support_point(&-dir);
        Self::new(sp1, sp2, &g1.to_world(), &g2.to_world())
    }

    /// The world-space difference vector of this vertex.
    #[inline]
    pub fn diff(&self) -> Vector<Real> {
        self.point.coords
    }

    /// The world-space position of the contributing point of the first shape.
    #[inline]
    pub fn world1(&self, pos1: &Isometry<Real>) -> Point<Real> {
        pos1 * self.orig1
    }

    /// The world-space position of the contributing point of the second shape.
    #[inline]
    pub fn world2(&self, pos2: &Isometry<Real>) -> Point<Real> {
        pos2 * self.orig2
    }

    /// Recomputes the world-space difference under new placements of both shapes.
    pub fn rebind(&mut self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) {
        self.point = Point::from(self.world1(pos1) - self.world2(pos2));
    }
}

//! The contract between the geometric queries and the shapes they operate on.

use crate::math::{Isometry, Point, Real, Translation, Vector};
use crate::utils;

/// A convex shape described by a cloud of local-space points and a placement in the world.
///
/// This is the only thing the distance and time-of-impact queries know about a shape: they
/// never construct, destroy, or move the shapes they are given.
///
/// The points are not required to be in boundary order for the queries, but they must be for
/// any boundary walk (e.g. for drawing). [`Self::to_local`] must be the exact inverse of
/// [`Self::to_world`] whenever the shape is queried.
pub trait ConvexShape {
    /// The local-space points of this shape.
    fn points(&self) -> &[Point<Real>];

    /// The local-to-world transform of this shape.
    fn to_world(&self) -> Isometry<Real>;

    /// The world-to-local transform of this shape, i.e., the inverse of [`Self::to_world`].
    fn to_local(&self) -> Isometry<Real>;

    /// The world-space position of the local origin of this shape.
    fn origin(&self) -> Point<Real> {
        self.to_world() * Point::origin()
    }

    /// The local-space point of this shape maximizing its dot product with the world-space
    /// direction `dir`.
    ///
    /// # Panics
    ///
    /// Panics if this shape has no points.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.to_local() * dir;
        utils::point_cloud_support_point(&local_dir, self.points())
    }

    /// The world-space point of this shape maximizing its dot product with `dir`.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.to_world() * self.local_support_point(dir)
    }
}

impl<S: ?Sized + ConvexShape> ConvexShape for &S {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        (**self).points()
    }

    #[inline]
    fn to_world(&self) -> Isometry<Real> {
        (**self).to_world()
    }

    #[inline]
    fn to_local(&self) -> Isometry<Real> {
        (**self).to_local()
    }
}

/// A view of a shape translated by a world-space offset.
///
/// This is how a candidate pose is presented to the queries without touching the placement
/// of the underlying shape.
#[derive(Copy, Clone, Debug)]
pub struct Translated<'a, S: ?Sized> {
    shape: &'a S,
    shift: Vector<Real>,
}

impl<'a, S: ?Sized + ConvexShape> Translated<'a, S> {
    /// Views `shape` translated by `shift` in world-space.
    pub fn new(shape: &'a S, shift: Vector<Real>) -> Self {
        Translated { shape, shift }
    }
}

impl<S: ?Sized + ConvexShape> ConvexShape for Translated<'_, S> {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        self.shape.points()
    }

    #[inline]
    fn to_world(&self) -> Isometry<Real> {
        Translation::from(self.shift) * self.shape.to_world()
    }

    #[inline]
    fn to_local(&self) -> Isometry<Real> {
        self.shape.to_local() * Translation::from(-self.shift)
    }
}

use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::shape::ConvexShape;
use crate::transformation::{self, ConvexHullError};
use crate::utils;

/// A convex polygon placed in the world, backed by the convex hull of a point cloud.
///
/// The vertices are stored in local-space, in counter-clockwise order. The world-to-local
/// transform is kept up to date with every change of placement so that it is always the exact
/// inverse of the local-to-world one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    position: Isometry<Real>,
    inv_position: Isometry<Real>,
}

impl ConvexPolygon {
    /// Creates a new convex polygon from the convex hull of an arbitrary set of points.
    ///
    /// The hull vertices are re-expressed relative to their centroid, which becomes the local
    /// origin of the polygon. The polygon is placed in the world by a translation to that
    /// centroid so its world-space vertices match the input points.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim2", feature = "f32"))] {
    /// use hullcast2d::math::Point;
    /// use hullcast2d::shape::{ConvexPolygon, ConvexShape};
    ///
    /// let points = [
    ///     Point::new(2.0, 2.0),
    ///     Point::new(4.0, 2.0),
    ///     Point::new(3.0, 3.0), // Interior point.
    ///     Point::new(4.0, 4.0),
    ///     Point::new(2.0, 4.0),
    /// ];
    ///
    /// let polygon = ConvexPolygon::from_convex_hull(&points).unwrap();
    /// assert_eq!(polygon.points().len(), 4);
    /// assert_eq!(polygon.origin(), Point::new(3.0, 3.0));
    /// # }
    /// ```
    pub fn from_convex_hull(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        let hull = transformation::convex_hull(points)?;
        let centroid = utils::center(&hull.points);
        let local_points = hull
            .points
            .iter()
            .map(|pt| pt - centroid.coords)
            .collect();

        Ok(Self::from_local_points(
            local_points,
            Isometry::from(Translation::from(centroid.coords)),
        ))
    }

    /// Creates a new convex polygon from local-space vertices and a placement.
    ///
    /// The points are assumed, but not checked, to be the counter-clockwise vertices of a
    /// convex polygon.
    pub fn from_local_points(points: Vec<Point<Real>>, position: Isometry<Real>) -> Self {
        ConvexPolygon {
            points,
            inv_position: position.inverse(),
            position,
        }
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The placement of this polygon.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the placement of this polygon.
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
        self.inv_position = position.inverse();
    }

    /// Moves this polygon by the world-space displacement `shift`.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.position.append_translation_mut(&Translation::from(*shift));
        self.inv_position = self.position.inverse();
    }

    /// Rotates this polygon by `angle` radians around its local origin.
    pub fn rotate(&mut self, angle: Real) {
        self.position
            .append_rotation_wrt_center_mut(&Rotation::new(angle));
        self.inv_position = self.position.inverse();
    }

    /// The world-space vertices of this polygon.
    pub fn world_points(&self) -> impl Iterator<Item = Point<Real>> + '_ {
        self.points.iter().map(move |pt| self.position * pt)
    }

    /// The world-space edges of this polygon, as pairs of consecutive vertices.
    pub fn world_edges(&self) -> impl Iterator<Item = (Point<Real>, Point<Real>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            (
                self.position * self.points[i],
                self.position * self.points[(i + 1) % n],
            )
        })
    }
}

impl ConvexShape for ConvexPolygon {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    #[inline]
    fn to_world(&self) -> Isometry<Real> {
        self.position
    }

    #[inline]
    fn to_local(&self) -> Isometry<Real> {
        self.inv_position
    }
}

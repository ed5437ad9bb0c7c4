use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::voronoi::{self, Region};
use crate::query::gjk::MinkowskiVertex;
use arrayvec::ArrayVec;

/// The maximum number of vertices of a simplex.
pub const SIMPLEX_CAPACITY: usize = 3;

/// A simplex of up to three [`MinkowskiVertex`], approximating the feature of a Minkowski
/// difference closest to the origin.
///
/// Vertices are stacked most-recent-first: a new vertex is inserted at index 0 and shifts the
/// others. No vertex is ever added to a full simplex.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    vertices: ArrayVec<MinkowskiVertex, SIMPLEX_CAPACITY>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Self {
        Simplex {
            vertices: ArrayVec::new(),
        }
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn dim(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Is this simplex a triangle?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.is_full()
    }

    /// The vertices of this simplex, most recent first.
    #[inline]
    pub fn vertices(&self) -> &[MinkowskiVertex] {
        &self.vertices
    }

    /// The `i`-th most recent vertex of this simplex.
    #[inline]
    pub fn peek(&self, i: usize) -> Option<&MinkowskiVertex> {
        self.vertices.get(i)
    }

    /// Removes all the vertices of this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear()
    }

    /// Adds a vertex on top of this simplex.
    ///
    /// Returns `false`, leaving the simplex unchanged, if it is already full.
    pub fn push(&mut self, vertex: MinkowskiVertex) -> bool {
        if self.vertices.is_full() {
            return false;
        }

        self.vertices.insert(0, vertex);
        true
    }

    /// Does this simplex have a vertex whose point is closer than `sqrt(tol)` to `point`?
    pub fn contains_near(&self, point: &Point<Real>, tol: Real) -> bool {
        self.vertices
            .iter()
            .any(|v| (v.point - point).norm_squared() <= tol)
    }

    /// Recomputes the world-space difference of every vertex under new placements of the two
    /// shapes.
    pub fn rebind(&mut self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) {
        for vertex in &mut self.vertices {
            vertex.rebind(pos1, pos2);
        }
    }

    /// Projects the origin on this simplex and reduces it to the smallest sub-simplex
    /// supporting the projection.
    ///
    /// Returns the projection as a vector from the origin. If the origin lies inside of a
    /// triangle simplex, the three vertices are kept and the zero vector is returned. An empty
    /// simplex projects to the zero vector.
    pub fn project_origin_and_reduce(&mut self) -> Vector<Real> {
        let projection = match self.vertices.as_slice() {
            [] => return Vector::zeros(),
            [a] => return a.diff(),
            [a, b] => voronoi::project_origin_on_segment(&a.point, Region::A, &b.point, Region::B),
            [a, b, c] => voronoi::project_origin_on_triangle(&a.point, &b.point, &c.point),
            _ => unreachable!(),
        };

        self.retain(projection.region);
        projection.nv
    }

    /// Keeps only the vertices identified by `region`, in their current order.
    fn retain(&mut self, region: Region) {
        let flags = [Region::A, Region::B, Region::C];
        let mut i = 0;
        self.vertices.retain(|_| {
            let keep = region.contains(flags[i]);
            i += 1;
            keep
        });
    }
}

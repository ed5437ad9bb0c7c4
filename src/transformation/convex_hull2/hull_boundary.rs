use crate::math::{Point, Real};
use crate::utils;
use slab::Slab;

/// A vertex of a [`HullBoundary`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HullVertex {
    point: Point<Real>,
    next: usize,
    prev: usize,
}

impl HullVertex {
    /// The position of this vertex.
    #[inline]
    pub fn point(&self) -> &Point<Real> {
        &self.point
    }

    /// The key of the next vertex on the boundary.
    #[inline]
    pub fn next(&self) -> usize {
        self.next
    }

    /// The key of the previous vertex on the boundary.
    #[inline]
    pub fn prev(&self) -> usize {
        self.prev
    }
}

/// A circular, doubly-linked, chain of vertices describing the boundary of a convex polygon.
///
/// Vertices live in an arena and are addressed by their key, so linking and splicing are
/// constant-time and no ownership cycle exists. The chain is only reachable through its entry
/// vertex. Once built by the hull computation the boundary winds counter-clockwise.
#[derive(Clone, Debug)]
pub struct HullBoundary {
    vertices: Slab<HullVertex>,
    entry: usize,
}

impl HullBoundary {
    /// Creates the boundary `a -> b -> c -> a`.
    ///
    /// Returns the boundary and the keys of `a`, `b` and `c`.
    pub fn triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> (Self, [usize; 3]) {
        let mut vertices = Slab::with_capacity(3);
        let ka = vertices.vacant_key();
        let kb = ka + 1;
        let kc = ka + 2;
        let ka = vertices.insert(HullVertex {
            point: a,
            next: kb,
            prev: kc,
        });
        let kb = vertices.insert(HullVertex {
            point: b,
            next: kc,
            prev: ka,
        });
        let kc = vertices.insert(HullVertex {
            point: c,
            next: ka,
            prev: kb,
        });

        (
            HullBoundary {
                vertices,
                entry: ka,
            },
            [ka, kb, kc],
        )
    }

    /// The number of vertices on this boundary.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this boundary empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The key of the vertex the boundary is walked from.
    #[inline]
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Is `key` a live vertex of this boundary?
    #[inline]
    pub fn contains(&self, key: usize) -> bool {
        self.vertices.contains(key)
    }

    /// The vertex with the given key, if it is still part of the boundary.
    #[inline]
    pub fn vertex(&self, key: usize) -> Option<&HullVertex> {
        self.vertices.get(key)
    }

    /// The position of the vertex with the given key.
    #[inline]
    pub fn point(&self, key: usize) -> Option<&Point<Real>> {
        self.vertices.get(key).map(|v| &v.point)
    }

    /// The key of the successor of `key`, if both are live vertices.
    #[inline]
    pub fn next(&self, key: usize) -> Option<usize> {
        let next = self.vertices.get(key)?.next;
        self.vertices.contains(next).then_some(next)
    }

    /// The key of the predecessor of `key`, if both are live vertices.
    #[inline]
    pub fn prev(&self, key: usize) -> Option<usize> {
        let prev = self.vertices.get(key)?.prev;
        self.vertices.contains(prev).then_some(prev)
    }

    /// Links `from -> point -> to`, discarding every vertex strictly between `from` and `to`.
    ///
    /// Returns the key of the new vertex and the number of discarded vertices.
    pub fn splice(&mut self, from: usize, point: Point<Real>, to: usize) -> (usize, usize) {
        // Collect the bypassed chain before relinking.
        let mut orphans = Vec::new();
        let mut curr = self.vertices[from].next;

        while curr != to && orphans.len() < self.vertices.len() {
            orphans.push(curr);
            curr = self.vertices[curr].next;
        }

        let new = self.vertices.insert(HullVertex {
            point,
            next: to,
            prev: from,
        });
        self.vertices[from].next = new;
        self.vertices[to].prev = new;

        for orphan in &orphans {
            let _ = self.vertices.remove(*orphan);

            if *orphan == self.entry {
                self.entry = new;
            }
        }

        (new, orphans.len())
    }

    /// Removes the vertex `key` and stitches its neighbors together.
    ///
    /// Returns the removed point.
    pub fn dissolve(&mut self, key: usize) -> Point<Real> {
        let vertex = self.vertices.remove(key);
        self.vertices[vertex.prev].next = vertex.next;
        self.vertices[vertex.next].prev = vertex.prev;

        if key == self.entry {
            self.entry = vertex.next;
        }

        vertex.point
    }

    /// Iterates through the vertices, starting at the entry vertex, walking the chain once.
    pub fn iter(&self) -> BoundaryIter<'_> {
        BoundaryIter {
            boundary: self,
            curr: Some(self.entry),
            remaining: self.vertices.len(),
        }
    }

    /// Iterates through the edges `(point, next point)` of this boundary.
    pub fn edges(&self) -> impl Iterator<Item = (Point<Real>, Point<Real>)> + '_ {
        self.iter().filter_map(move |(_, v)| {
            let next = self.vertices.get(v.next)?;
            Some((v.point, next.point))
        })
    }

    /// The positions of the vertices, in boundary order, starting at the entry vertex.
    pub fn points(&self) -> Vec<Point<Real>> {
        self.iter().map(|(_, v)| v.point).collect()
    }

    /// Tests if `pt` lies inside of, or on, this boundary.
    ///
    /// The point is contained iff no edge reports it on its outer side.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.edges()
            .all(|(a, b)| !utils::is_clockwise(&a, &b, pt))
    }
}

/// An iterator through the vertices of a [`HullBoundary`].
///
/// The walk stops after one full turn, or after as many steps as there are vertices so that a
/// corrupted chain is never walked forever.
pub struct BoundaryIter<'a> {
    boundary: &'a HullBoundary,
    curr: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for BoundaryIter<'a> {
    type Item = (usize, &'a HullVertex);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.curr?;
        let vertex = self.boundary.vertices.get(key)?;
        self.remaining -= 1;

        if vertex.next == self.boundary.entry {
            self.remaining = 0;
        }

        self.curr = Some(vertex.next);
        Some((key, vertex))
    }
}

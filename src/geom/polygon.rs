//! Simple polygon with per-edge rigidity
//!
//! Edge `i` runs from vertex `i` to vertex `(i + 1) % n`. Rigid edges are the
//! protected playfield border: a chord may never enter or leave through them.
//!
//! Polygons are always stored counter-clockwise (positive signed area in y-up
//! terms), so wall segments derived from consecutive vertices come out in a
//! stable order no matter how the level file was authored.

use glam::DVec2;
use serde::Serialize;

use super::segment::{Segment, SegmentHit};
use crate::error::GeometryError;

/// A point on the polygon boundary, tagged with the edge it lies on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePoint {
    pub edge: usize,
    pub point: DVec2,
}

/// One boundary segment handed to the wall collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub a: DVec2,
    pub b: DVec2,
    pub rigid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<DVec2>,
    rigid: Vec<bool>,
}

impl Polygon {
    /// Build and validate a polygon.
    ///
    /// Consecutive duplicate vertices are merged (the flag of the surviving
    /// edge wins), winding is normalized, and self-intersecting or zero-area
    /// outlines are rejected.
    pub fn new(vertices: Vec<DVec2>, rigid: Vec<bool>, eps: f64) -> Result<Self, GeometryError> {
        if vertices.len() != rigid.len() {
            return Err(GeometryError::RigidityMismatch {
                vertices: vertices.len(),
                flags: rigid.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite { index });
        }

        let (vertices, rigid) = dedup_ring(vertices, rigid);
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }

        let mut poly = Self { vertices, rigid };
        let area = poly.signed_area();
        if area.abs() <= eps * poly.extent().powi(2) {
            return Err(GeometryError::ZeroArea);
        }
        if area < 0.0 {
            poly.reverse();
        }
        if let Some((a, b)) = poly.find_self_intersection(eps) {
            return Err(GeometryError::SelfIntersecting { a, b });
        }
        Ok(poly)
    }

    /// Polygon with no rigid edges
    pub fn from_points(vertices: Vec<DVec2>, eps: f64) -> Result<Self, GeometryError> {
        let rigid = vec![false; vertices.len()];
        Self::new(vertices, rigid, eps)
    }

    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    pub fn rigid(&self) -> &[bool] {
        &self.rigid
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_rigid(&self, edge: usize) -> bool {
        self.rigid[edge]
    }

    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, Segment)> + '_ {
        (0..self.vertices.len()).map(|i| (i, self.edge(i)))
    }

    /// Shoelace area (positive for counter-clockwise)
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Bounding box diagonal, at least 1.0 (used to scale tolerances)
    pub fn extent(&self) -> f64 {
        let (min, max) = self.vertices.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        );
        (max - min).length().max(1.0)
    }

    /// Even-odd point containment. Points exactly on the boundary may go
    /// either way.
    pub fn contains(&self, p: DVec2) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                let x = vj.x + (p.y - vj.y) / (vi.y - vj.y) * (vi.x - vj.x);
                if p.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Boundary segments for wall generation
    pub fn walls(&self) -> Vec<Wall> {
        self.edges()
            .map(|(i, seg)| Wall {
                a: seg.a,
                b: seg.b,
                rigid: self.rigid[i],
            })
            .collect()
    }

    pub fn is_simple(&self, eps: f64) -> bool {
        self.find_self_intersection(eps).is_none()
    }

    /// First pair of edges that touch where they shouldn't.
    ///
    /// Adjacent edges may share their common vertex, and may run on in a
    /// straight line, but must not fold back onto each other; every other
    /// pair must be disjoint.
    fn find_self_intersection(&self, eps: f64) -> Option<(usize, usize)> {
        let n = self.vertices.len();
        for i in 0..n {
            let ei = self.edge(i);
            for j in (i + 1)..n {
                let ej = self.edge(j);
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                match ei.intersect(&ej, eps) {
                    SegmentHit::Miss => {}
                    SegmentHit::Overlap if adjacent && ei.direction().dot(ej.direction()) > 0.0 => {}
                    SegmentHit::Overlap => return Some((i, j)),
                    SegmentHit::Point { .. } if !adjacent => return Some((i, j)),
                    SegmentHit::Point { .. } => {}
                }
            }
        }
        None
    }

    /// Split along a chord from `entry` to `exit`, both strictly inside their
    /// edges. The chord must run through the interior.
    ///
    /// Returns `(left, right)`: `left` walks forward from the entry edge to
    /// the exit edge, `right` walks from the exit edge back around to the
    /// entry edge. Both keep this polygon's winding; inherited edges keep
    /// their rigidity and the new cut edge is non-rigid.
    pub(crate) fn split(&self, entry: EdgePoint, exit: EdgePoint) -> Option<(Polygon, Polygon)> {
        if entry.edge == exit.edge {
            return None;
        }
        let left = self.walk(entry, exit);
        let right = self.walk(exit, entry);
        if left.len() < 3 || right.len() < 3 {
            return None;
        }
        Some((left, right))
    }

    /// Ring `from.point, v[from.edge + 1], .., v[to.edge], to.point`
    fn walk(&self, from: EdgePoint, to: EdgePoint) -> Polygon {
        let n = self.vertices.len();
        let mut vertices = vec![from.point];
        let mut rigid = vec![self.rigid[from.edge]];
        let mut k = (from.edge + 1) % n;
        loop {
            vertices.push(self.vertices[k]);
            if k == to.edge {
                break;
            }
            rigid.push(self.rigid[k]);
            k = (k + 1) % n;
        }
        rigid.push(self.rigid[to.edge]);
        vertices.push(to.point);
        // Closing edge is the cut itself
        rigid.push(false);
        Polygon { vertices, rigid }
    }

    /// Reverse winding, remapping edge flags so each edge keeps its flag
    fn reverse(&mut self) {
        let n = self.vertices.len();
        self.vertices.reverse();
        let old = std::mem::take(&mut self.rigid);
        self.rigid = (0..n).map(|k| old[(2 * n - 2 - k) % n]).collect();
    }
}

/// Merge consecutive (and wrap-around) duplicate vertices
fn dedup_ring(vertices: Vec<DVec2>, rigid: Vec<bool>) -> (Vec<DVec2>, Vec<bool>) {
    let mut out_v: Vec<DVec2> = Vec::with_capacity(vertices.len());
    let mut out_r: Vec<bool> = Vec::with_capacity(rigid.len());
    for (v, r) in vertices.into_iter().zip(rigid) {
        if out_v.last() == Some(&v) {
            // Zero-length edge: the next edge's flag replaces it
            if let Some(last) = out_r.last_mut() {
                *last = r;
            }
            continue;
        }
        out_v.push(v);
        out_r.push(r);
    }
    while out_v.len() > 1 && out_v.first() == out_v.last() {
        out_v.pop();
        out_r.pop();
    }
    (out_v, out_r)
}

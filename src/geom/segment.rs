//! Line segment primitives
//!
//! Intersection and point-distance queries used by the crossing tests and the
//! ball obstruction check.

use glam::DVec2;
use serde::Serialize;

use crate::cross;

/// A closed line segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
}

/// Result of intersecting two segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentHit {
    /// No common point
    Miss,
    /// Single crossing point.
    /// `t` is the parameter along the first segment, `u` along the second.
    Point { t: f64, u: f64, point: DVec2 },
    /// Collinear with a shared stretch (ambiguous for cutting)
    Overlap,
}

impl Segment {
    #[inline]
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Point at parameter `t` (0 = `a`, 1 = `b`)
    #[inline]
    pub fn at(&self, t: f64) -> DVec2 {
        self.a + self.direction() * t
    }

    pub fn midpoint(&self) -> DVec2 {
        (self.a + self.b) * 0.5
    }

    /// Intersect with another segment.
    ///
    /// `eps` is a relative tolerance: parameters within `eps` outside [0, 1]
    /// still count as touching, and direction pairs whose cross product is
    /// within `eps` of zero (relative to their lengths) are treated as parallel.
    pub fn intersect(&self, other: &Segment, eps: f64) -> SegmentHit {
        let r = self.direction();
        let s = other.direction();
        let qp = other.a - self.a;
        let r_len = r.length();
        let s_len = s.length();
        if r_len == 0.0 || s_len == 0.0 {
            return SegmentHit::Miss;
        }

        let denom = cross(r, s);
        if denom.abs() <= eps * r_len * s_len {
            // Parallel: only interesting when collinear
            if cross(qp, r).abs() > eps * r_len * qp.length().max(r_len) {
                return SegmentHit::Miss;
            }
            let rr = r.length_squared();
            let t0 = qp.dot(r) / rr;
            let t1 = t0 + s.dot(r) / rr;
            let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            if hi < -eps || lo > 1.0 + eps {
                return SegmentHit::Miss;
            }
            return SegmentHit::Overlap;
        }

        let t = cross(qp, s) / denom;
        let u = cross(qp, r) / denom;
        let range = -eps..=1.0 + eps;
        if !range.contains(&t) || !range.contains(&u) {
            return SegmentHit::Miss;
        }
        let t = t.clamp(0.0, 1.0);
        let u = u.clamp(0.0, 1.0);
        SegmentHit::Point {
            t,
            u,
            point: self.at(t),
        }
    }

    /// Shortest distance from `p` to this segment.
    ///
    /// Endpoints are put in a canonical order first so the result is
    /// bit-identical for `a→b` and `b→a`.
    pub fn distance_to_point(&self, p: DVec2) -> f64 {
        let (a, b) = if (self.a.x, self.a.y) <= (self.b.x, self.b.y) {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let d = b - a;
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return (p - a).length();
        }
        let t = ((p - a).dot(d) / len_sq).clamp(0.0, 1.0);
        let closest = a + d * t;
        (p - closest).length()
    }
}

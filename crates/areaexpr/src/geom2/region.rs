//! Planar regions and their boolean algebra.
//!
//! Purpose
//! - Give the evaluator one immutable value type for "an area in the plane":
//!   full shapes, cut pieces, half-planes, and the results of combining them.
//! - The set algebra itself (`intersection`, `union`, `difference`, `xor`) is
//!   delegated to `geo::BooleanOps`; this module only builds polygonal
//!   boundaries and reads areas back.
//!
//! Conventions
//! - Curved boundaries are sampled; the caller picks the resolution.
//! - Rings are stored counter-clockwise.
//! - A half-plane is a large box (`extent` past the segment and `extent` deep)
//!   lying left of the directed line, so it composes with bounded shapes
//!   through the same polygon algebra.

use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use super::types::Vec2;
use super::util::{convex_hull, signed_ring_area};

/// Immutable planar region (possibly empty, possibly several components).
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    shape: MultiPolygon<f64>,
}

impl Region {
    /// The empty region.
    pub fn empty() -> Self {
        Self {
            shape: MultiPolygon::new(Vec::new()),
        }
    }

    /// Closed polygon through `points` (closing edge implied). `None` when fewer
    /// than three distinct points are given.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let mut ring: Vec<Vec2> = Vec::with_capacity(points.len());
        for &p in points {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return None;
            }
            if ring.last().is_some_and(|q| (*q - p).norm() < 1e-12) {
                continue;
            }
            ring.push(p);
        }
        while ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() < 1e-12 {
            ring.pop();
        }
        if ring.len() < 3 {
            return None;
        }
        if signed_ring_area(&ring) < 0.0 {
            ring.reverse();
        }
        let exterior: LineString<f64> = ring
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        Some(Self {
            shape: MultiPolygon::new(vec![Polygon::new(exterior, Vec::new())]),
        })
    }

    /// Polygon from an ordered boundary (alias of `from_points`, kept for callers
    /// that think in vertices rather than samples).
    #[inline]
    pub fn from_polygon(vertices: &[Vec2]) -> Option<Self> {
        Self::from_points(vertices)
    }

    /// Circle sampled with `samples` boundary points.
    pub fn from_circle(center: Vec2, radius: f64, samples: usize) -> Option<Self> {
        Self::from_ellipse(center, radius, radius, 0.0, samples)
    }

    /// Ellipse with semi-axes `rx`, `ry`, rotated by `rotation` radians.
    pub fn from_ellipse(
        center: Vec2,
        rx: f64,
        ry: f64,
        rotation: f64,
        samples: usize,
    ) -> Option<Self> {
        if !(rx > 0.0 && ry > 0.0) {
            return None;
        }
        let n = samples.max(3);
        let (s, c) = rotation.sin_cos();
        let pts: Vec<Vec2> = (0..n)
            .map(|k| {
                let t = std::f64::consts::TAU * (k as f64) / (n as f64);
                let (x, y) = (rx * t.cos(), ry * t.sin());
                Vec2::new(center.x + x * c - y * s, center.y + x * s + y * c)
            })
            .collect();
        Self::from_points(&pts)
    }

    /// Area left of the directed line `p1 → p2`: a box reaching `extent` past
    /// both endpoints and `extent` away from the line. `None` when the points
    /// coincide.
    pub fn from_half_plane(p1: Vec2, p2: Vec2, extent: f64) -> Option<Self> {
        let d = p2 - p1;
        let len = d.norm();
        if !(len >= 1e-10) {
            return None;
        }
        let d = d / len;
        let n = Vec2::new(-d.y, d.x);
        let ext1 = p1 - d * extent;
        let ext2 = p2 + d * extent;
        let far2 = ext2 + n * extent;
        let far1 = ext1 + n * extent;
        Self::from_points(&[ext1, ext2, far2, far1])
    }

    /// Convex hull of `points` as a region; `None` for degenerate input.
    pub fn convex_hull(points: &[Vec2]) -> Option<Self> {
        let hull = convex_hull(points)?;
        Self::from_points(&hull)
    }

    pub fn area(&self) -> f64 {
        self.shape.unsigned_area()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0.is_empty() || self.area() <= 0.0
    }

    /// Number of disjoint components.
    pub fn components(&self) -> usize {
        self.shape.0.len()
    }

    pub fn intersection(&self, other: &Region) -> Region {
        Region {
            shape: self.shape.intersection(&other.shape),
        }
    }

    pub fn union(&self, other: &Region) -> Region {
        Region {
            shape: self.shape.union(&other.shape),
        }
    }

    pub fn difference(&self, other: &Region) -> Region {
        Region {
            shape: self.shape.difference(&other.shape),
        }
    }

    pub fn symmetric_difference(&self, other: &Region) -> Region {
        Region {
            shape: self.shape.xor(&other.shape),
        }
    }

    /// `n` points spaced uniformly by arc length along the exterior rings, in
    /// ring order. Empty for an empty region or `n == 0`.
    pub fn sample_boundary(&self, n: usize) -> Vec<Vec2> {
        let mut edges: Vec<(Vec2, Vec2, f64)> = Vec::new();
        for poly in &self.shape.0 {
            for line in poly.exterior().lines() {
                let a = Vec2::new(line.start.x, line.start.y);
                let b = Vec2::new(line.end.x, line.end.y);
                let len = (b - a).norm();
                if len > 0.0 {
                    edges.push((a, b, len));
                }
            }
        }
        let total: f64 = edges.iter().map(|e| e.2).sum();
        if n == 0 || edges.is_empty() || total <= 0.0 {
            return Vec::new();
        }
        let step = total / n as f64;
        let mut out = Vec::with_capacity(n);
        let mut k = 0usize;
        let mut walked = 0.0;
        for k_target in 0..n {
            let target = step * k_target as f64;
            while k + 1 < edges.len() && walked + edges[k].2 < target {
                walked += edges[k].2;
                k += 1;
            }
            let (a, b, len) = edges[k];
            let t = ((target - walked) / len).clamp(0.0, 1.0);
            out.push(a + (b - a) * t);
        }
        out
    }
}

use std::cmp::Ordering;
use std::f64::consts::TAU;

use super::types::Vec2;

/// Polar angle of `p - center` in (-π, π].
#[inline]
pub fn angle_about(center: Vec2, p: Vec2) -> f64 {
    let d = p - center;
    d.y.atan2(d.x)
}

/// Wrap an angle difference into [0, 2π).
#[inline]
pub fn ccw_sweep(from: f64, to: f64) -> f64 {
    let mut s = to - from;
    while s < 0.0 {
        s += TAU;
    }
    while s >= TAU {
        s -= TAU;
    }
    s
}

/// Point on the circle `(center, radius)` at angle `theta`.
#[inline]
pub fn on_circle(center: Vec2, radius: f64, theta: f64) -> Vec2 {
    Vec2::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

/// Signed area of the parallelogram spanned by `ab` and `ac`.
/// Positive when `c` lies left of the directed line `a→b`.
#[inline]
pub fn cross(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Shoelace signed area of a closed ring (last→first edge implied).
pub fn signed_ring_area(points: &[Vec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..points.len() {
        let p = points[k];
        let q = points[(k + 1) % points.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, deduped).
///
/// Complexity: O(N log N) for sort + linear passes.
pub fn convex_hull(points: &[Vec2]) -> Option<Vec<Vec2>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    // Collinear input collapses to a two-point "hull".
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}

//! Exact circle/line geometry used when a segment cuts a circle or an arc.
//!
//! - `line_circle_intersections`: roots of the line–circle quadratic with a
//!   tangency clamp; 0, 1 or 2 hits ordered along the line direction.
//! - `ArcSpan`: start angle plus signed sweep of a drawn arc (major/minor).
//! - `arc_region`, `circle_cut`, `arc_cut`: sample circular segments (chord
//!   closes the ring, no center vertex).
//!
//! Cut functions return `None` when the line does not cut properly; the
//! combiner owns the fallback.

use std::f64::consts::{PI, TAU};

use super::region::Region;
use super::types::{EvalCfg, Vec2};
use super::util::{angle_about, ccw_sweep, cross, on_circle};

/// One line–circle intersection and its polar angle about the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit {
    pub point: Vec2,
    pub angle: f64,
}

/// Intersections of the infinite line through `p1`, `p2` with the circle.
///
/// Parametrize `x = p1 + t (p2 - p1)` and solve `|x - c|² = r²`. A
/// discriminant below `-eps_disc` misses; a slightly negative one is clamped
/// to zero and reported as a single tangent hit.
pub fn line_circle_intersections(
    p1: Vec2,
    p2: Vec2,
    center: Vec2,
    radius: f64,
    cfg: &EvalCfg,
) -> Vec<LineHit> {
    let d = p2 - p1;
    let f = p1 - center;
    let a = d.dot(&d);
    if a.abs() < cfg.eps_dir {
        return Vec::new();
    }
    let b = 2.0 * f.dot(&d);
    let c = f.dot(&f) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < -cfg.eps_disc {
        return Vec::new();
    }
    let sqrt_disc = disc.max(0.0).sqrt();
    let signs: &[f64] = if sqrt_disc > cfg.eps_disc {
        &[-1.0, 1.0]
    } else {
        &[0.0]
    };
    signs
        .iter()
        .map(|&sign| {
            let t = (-b + sign * sqrt_disc) / (2.0 * a);
            let point = p1 + d * t;
            LineHit {
                point,
                angle: angle_about(center, point),
            }
        })
        .collect()
}

/// Angular extent of a drawn arc: from `start`, sweeping `sweep` radians
/// (positive = counter-clockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub center: Vec2,
    pub radius: f64,
    pub start: f64,
    pub sweep: f64,
}

impl ArcSpan {
    /// Arc from `p1` to `p2`. A major arc takes the branch longer than π, a
    /// minor arc the branch of at most π; the other branch is reached by going
    /// clockwise through the complement.
    pub fn from_endpoints(center: Vec2, radius: f64, p1: Vec2, p2: Vec2, major: bool) -> Self {
        let start = angle_about(center, p1);
        let end = angle_about(center, p2);
        let ccw = ccw_sweep(start, end);
        let sweep = if major {
            if ccw < PI {
                -(TAU - ccw)
            } else {
                ccw
            }
        } else if ccw > PI {
            -(TAU - ccw)
        } else {
            ccw
        };
        Self {
            center,
            radius,
            start,
            sweep,
        }
    }

    /// Whether `angle` lies on the arc, within `eps` radians.
    pub fn contains_angle(&self, angle: f64, eps: f64) -> bool {
        let mut rel = angle - self.start;
        if self.sweep >= 0.0 {
            while rel < 0.0 {
                rel += TAU;
            }
            while rel > TAU {
                rel -= TAU;
            }
            rel <= self.sweep + eps
        } else {
            while rel > 0.0 {
                rel -= TAU;
            }
            while rel < -TAU {
                rel += TAU;
            }
            rel >= self.sweep - eps
        }
    }
}

/// `intervals + 1` points on the circle from `start` across `sweep`.
pub fn sample_sweep(
    center: Vec2,
    radius: f64,
    start: f64,
    sweep: f64,
    intervals: usize,
) -> Vec<Vec2> {
    let n = intervals.max(1);
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            on_circle(center, radius, start + t * sweep)
        })
        .collect()
}

/// Circular segment bounded by the arc and its chord. Empty when the sweep is
/// too small to enclose anything.
pub fn arc_region(arc: &ArcSpan, cfg: &EvalCfg) -> Region {
    let n = cfg.sweep_resolution(arc.sweep, cfg.arc_min_points);
    let pts = sample_sweep(arc.center, arc.radius, arc.start, arc.sweep, n);
    Region::from_points(&pts).unwrap_or_else(Region::empty)
}

/// Piece of the circle cut off by the line `p1 → p2` on the side away from the
/// center. When the line passes through the center, the half left of the
/// direction is taken. `None` when the line meets the circle fewer than twice.
pub fn circle_cut(
    center: Vec2,
    radius: f64,
    p1: Vec2,
    p2: Vec2,
    cfg: &EvalCfg,
) -> Option<Region> {
    let hits = line_circle_intersections(p1, p2, center, radius, cfg);
    if hits.len() < 2 {
        return None;
    }
    let (a1, a2) = (hits[0].angle, hits[1].angle);
    let ccw = ccw_sweep(a1, a2);

    // Signed distance of the center from the line; `wanted` is the side the
    // cut piece must lie on.
    let dist = cross(p1, p2, center) / (p2 - p1).norm();
    let wanted = if dist > 1e-9 * radius.max(1.0) {
        -1.0
    } else {
        1.0
    };
    let mid = on_circle(center, radius, a1 + 0.5 * ccw);
    let mid_side = cross(p1, p2, mid).signum();
    let sweep = if mid_side == wanted { ccw } else { -(TAU - ccw) };
    tracing::trace!(ccw, sweep, dist, "circle cut");

    let n = cfg.sweep_resolution(sweep, cfg.cut_min_points);
    Region::from_points(&sample_sweep(center, radius, a1, sweep, n))
}

/// Region enclosed by the arc and the line `p1 → p2`: the stretch of arc
/// between the two crossings that does not reach back to the arc's first
/// endpoint, closed by the chord. `None` when fewer than two crossings lie on
/// the arc.
pub fn arc_cut(arc: &ArcSpan, p1: Vec2, p2: Vec2, cfg: &EvalCfg) -> Option<Region> {
    let hits = line_circle_intersections(p1, p2, arc.center, arc.radius, cfg);
    if hits.len() < 2 {
        return None;
    }
    // A line meets a circle at most twice, so at most two hits qualify.
    let on_arc: Vec<LineHit> = hits
        .into_iter()
        .filter(|h| arc.contains_angle(h.angle, cfg.eps_angle))
        .collect();
    if on_arc.len() < 2 {
        return None;
    }
    let (a1, a2) = (on_arc[0].angle, on_arc[1].angle);
    let ccw = ccw_sweep(a1, a2);
    let start_rel = ccw_sweep(a1, arc.start);
    let sweep = if start_rel < ccw { -(TAU - ccw) } else { ccw };
    tracing::trace!(ccw, sweep, "arc cut");

    let n = cfg.sweep_resolution(sweep, cfg.cut_min_points);
    Region::from_points(&sample_sweep(arc.center, arc.radius, a1, sweep, n))
}

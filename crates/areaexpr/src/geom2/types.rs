//! Tolerances and sampling resolutions shared by the region binding, the
//! special-case geometry, and the evaluator.
//!
//! - `EvalCfg`: centralizes epsilons and point counts so every call site reads
//!   the same numbers (determinism: same cfg + same input → same output).
//! - `Vec2`: the point type used throughout (`nalgebra::Vector2<f64>`).

use crate::expr::MAX_DEPTH;
use nalgebra::Vector2;

/// Plane point / vector.
pub type Vec2 = Vector2<f64>;

/// Evaluation configuration (tolerances and sampling).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalCfg {
    /// Discriminant below `-eps_disc` means the line misses the circle; values in
    /// `[-eps_disc, 0)` are clamped to tangency. Also the root-split threshold.
    pub eps_disc: f64,
    /// Minimum squared length of a line direction.
    pub eps_dir: f64,
    /// Tolerance (radians) for an intersection angle to count as on an arc.
    pub eps_angle: f64,
    /// Lower bound on samples when an arc drawable becomes a region.
    pub arc_min_points: usize,
    /// Lower bound on samples for the circular segment cut by a line.
    pub cut_min_points: usize,
    /// Sample density along curved pieces, per radian of sweep.
    pub points_per_radian: f64,
    /// Boundary resolution of full circles and ellipses.
    pub curve_points: usize,
    /// Half side of the box standing in for a half-plane.
    pub half_plane_extent: f64,
    /// Boundary samples per region when disjoint results are merged by hull.
    pub hull_samples: usize,
    /// Cap on paren nesting and operator tree height.
    pub max_depth: usize,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self {
            eps_disc: 1e-9,
            eps_dir: 1e-12,
            eps_angle: 1e-6,
            arc_min_points: 32,
            cut_min_points: 16,
            points_per_radian: 16.0,
            curve_points: 256,
            half_plane_extent: 1e4,
            hull_samples: 50,
            max_depth: MAX_DEPTH,
        }
    }
}

impl EvalCfg {
    /// Number of sample intervals for a sweep, never below `min_points`.
    #[inline]
    pub fn sweep_resolution(&self, sweep: f64, min_points: usize) -> usize {
        // Truncation matches `int(|sweep| * density)`.
        let scaled = (sweep.abs() * self.points_per_radian) as usize;
        scaled.max(min_points).max(1)
    }
}

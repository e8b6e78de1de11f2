//! 2D geometry for area expressions.
//!
//! Purpose
//! - `Region`: immutable planar area with boolean set algebra (via `geo`).
//! - Exact line–circle intersection and circular-segment construction for the
//!   cases where a segment cuts a circle or an arc.
//! - `EvalCfg`: the tolerances and sampling resolutions every routine reads.
//!
//! Numerics are eps-aware and deterministic: no randomness, fixed operation
//! order, sample counts derived only from the config and the sweep.

pub mod circle;
pub mod region;
mod types;
mod util;

pub use circle::{
    arc_cut, arc_region, circle_cut, line_circle_intersections, sample_sweep, ArcSpan, LineHit,
};
pub use region::Region;
pub use types::{EvalCfg, Vec2};
pub use util::{angle_about, ccw_sweep, convex_hull, cross};

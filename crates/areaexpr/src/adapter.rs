//! Drawable → region conversion, one arm per shape kind.
//!
//! Segments are not converted here: their meaning depends on the operator
//! they meet, so they stay `Pending` until the evaluator decides between an
//! exact cut and a half-plane.

use crate::drawable::{Drawable, ShapeKind};
use crate::error::{AreaError, Result};
use crate::geom2::{arc_region, ArcSpan, EvalCfg, Region, Vec2};

/// A region, or a segment whose region is not decided yet.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionSlot {
    Pending { point1: Vec2, point2: Vec2 },
    Resolved(Region),
}

/// Region tagged with the drawable that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedRegion<'d> {
    pub name: String,
    pub kind: ShapeKind,
    pub slot: RegionSlot,
    pub source: &'d Drawable,
}

impl TaggedRegion<'_> {
    pub fn is_pending(&self) -> bool {
        matches!(self.slot, RegionSlot::Pending { .. })
    }

    /// Concrete region; a pending segment becomes the half-plane left of
    /// `point1 → point2`.
    pub fn to_region(&self, cfg: &EvalCfg) -> Result<Region> {
        match &self.slot {
            RegionSlot::Resolved(r) => Ok(r.clone()),
            RegionSlot::Pending { point1, point2 } => {
                Region::from_half_plane(*point1, *point2, cfg.half_plane_extent)
                    .ok_or_else(|| AreaError::degenerate(&self.name, "segment endpoints coincide"))
            }
        }
    }
}

fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Arc span of a `CircleArc` drawable.
pub fn arc_span(drawable: &Drawable) -> Option<ArcSpan> {
    match *drawable {
        Drawable::CircleArc {
            center,
            radius,
            point1,
            point2,
            major,
        } => Some(ArcSpan::from_endpoints(center, radius, point1, point2, major)),
        _ => None,
    }
}

/// Convert the drawable called `name` into a tagged region.
pub fn adapt<'d>(name: &str, drawable: &'d Drawable, cfg: &EvalCfg) -> Result<TaggedRegion<'d>> {
    let (kind, slot) = match *drawable {
        Drawable::Circle { center, radius } => {
            if !positive(radius) {
                return Err(AreaError::degenerate(name, "radius must be positive"));
            }
            let r = Region::from_circle(center, radius, cfg.curve_points)
                .ok_or_else(|| AreaError::degenerate(name, "circle has no area"))?;
            (ShapeKind::Circle, RegionSlot::Resolved(r))
        }
        Drawable::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation_deg,
        } => {
            if !positive(radius_x) || !positive(radius_y) {
                return Err(AreaError::degenerate(name, "radii must be positive"));
            }
            let r = Region::from_ellipse(
                center,
                radius_x,
                radius_y,
                rotation_deg.to_radians(),
                cfg.curve_points,
            )
            .ok_or_else(|| AreaError::degenerate(name, "ellipse has no area"))?;
            (ShapeKind::Ellipse, RegionSlot::Resolved(r))
        }
        Drawable::CircleArc {
            center,
            radius,
            point1,
            point2,
            major,
        } => {
            if !positive(radius) {
                return Err(AreaError::degenerate(name, "radius must be positive"));
            }
            let span = ArcSpan::from_endpoints(center, radius, point1, point2, major);
            (ShapeKind::CircleArc, RegionSlot::Resolved(arc_region(&span, cfg)))
        }
        Drawable::Segment { point1, point2 } => {
            (ShapeKind::Segment, RegionSlot::Pending { point1, point2 })
        }
        Drawable::Polygon { ref vertices } => {
            let r = Region::from_polygon(vertices)
                .ok_or_else(|| AreaError::degenerate(name, "fewer than three distinct vertices"))?;
            (ShapeKind::Polygon, RegionSlot::Resolved(r))
        }
        Drawable::Unsupported { ref class_name } => {
            return Err(AreaError::Unconvertible {
                name: name.to_string(),
                class_name: class_name.clone(),
            })
        }
    };
    Ok(TaggedRegion {
        name: name.to_string(),
        kind,
        slot,
        source: drawable,
    })
}

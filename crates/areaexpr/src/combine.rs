//! `segment & shape` with exact cut geometry.
//!
//! Fires only for `&` between exactly one pending segment and a circle, arc,
//! polygon or ellipse. Circles and arcs are cut along the segment's line with
//! sampled circular segments; polygons and ellipses are clipped by the
//! segment's half-plane. A line that does not cut a circle or arc properly
//! leaves that shape whole.

use crate::adapter::{arc_span, RegionSlot, TaggedRegion};
use crate::drawable::{Drawable, ShapeKind};
use crate::error::Result;
use crate::geom2::{arc_cut, circle_cut, EvalCfg, Region};

/// Result of `left & right` when a special case applies, `None` otherwise.
pub fn segment_intersection(
    left: &TaggedRegion<'_>,
    right: &TaggedRegion<'_>,
    cfg: &EvalCfg,
) -> Result<Option<Region>> {
    let (segment, shape) = match (left.kind, right.kind) {
        (ShapeKind::Segment, k) if k != ShapeKind::Segment => (left, right),
        (k, ShapeKind::Segment) if k != ShapeKind::Segment => (right, left),
        _ => return Ok(None),
    };
    let RegionSlot::Pending { point1, point2 } = segment.slot else {
        return Ok(None);
    };
    let RegionSlot::Resolved(ref whole) = shape.slot else {
        return Ok(None);
    };

    let region = match (shape.kind, shape.source) {
        (ShapeKind::Circle, &Drawable::Circle { center, radius }) => {
            let cut = circle_cut(center, radius, point1, point2, cfg);
            tracing::trace!(
                segment = %segment.name,
                circle = %shape.name,
                cut = cut.is_some(),
                "segment & circle"
            );
            cut.unwrap_or_else(|| whole.clone())
        }
        (ShapeKind::CircleArc, source) => {
            let cut = arc_span(source).and_then(|span| arc_cut(&span, point1, point2, cfg));
            tracing::trace!(
                segment = %segment.name,
                arc = %shape.name,
                cut = cut.is_some(),
                "segment & arc"
            );
            cut.unwrap_or_else(|| whole.clone())
        }
        (ShapeKind::Polygon | ShapeKind::Ellipse, _) => {
            tracing::trace!(segment = %segment.name, shape = %shape.name, "half-plane clip");
            whole.intersection(&segment.to_region(cfg)?)
        }
        _ => return Ok(None),
    };
    Ok(Some(region))
}

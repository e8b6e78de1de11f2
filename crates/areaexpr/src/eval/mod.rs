//! Expression evaluation: tree walk from drawable names to one area.
//!
//! Purpose
//! - Resolve every leaf through the caller's `DrawableResolver`, adapt it to a
//!   tagged region, and fold the tree bottom-up with the region algebra.
//! - `&` first tries the exact segment cut; `|` and `^` treat a pending or
//!   empty side as identity; `-` keeps its left side when the right is empty.
//! - Fold every failure into `EvaluationResult::error`; nothing panics or
//!   escapes `evaluate`.
//!
//! Each call is independent: no caches, no state between calls, and the same
//! input with the same `EvalCfg` gives bit-identical output.

use serde::{Deserialize, Serialize};

use crate::adapter::{adapt, RegionSlot, TaggedRegion};
use crate::combine::segment_intersection;
use crate::drawable::DrawableResolver;
use crate::error::{AreaError, Result};
use crate::expr::{parse_with_depth, Ast, BinOp};
use crate::geom2::{EvalCfg, Region, Vec2};

/// Intermediate value of a subtree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'d> {
    /// A leaf, still carrying its shape kind.
    Shape(TaggedRegion<'d>),
    /// Output of an operator; the shape kind no longer applies.
    Derived(Region),
}

impl Value<'_> {
    fn is_pending(&self) -> bool {
        matches!(self, Value::Shape(t) if t.is_pending())
    }

    fn is_empty(&self) -> bool {
        match self {
            Value::Shape(t) => matches!(&t.slot, RegionSlot::Resolved(r) if r.is_empty()),
            Value::Derived(r) => r.is_empty(),
        }
    }

    /// Concrete region; pending segments become half-planes.
    pub fn into_region(self, cfg: &EvalCfg) -> Result<Region> {
        match self {
            Value::Shape(t) => t.to_region(cfg),
            Value::Derived(r) => Ok(r),
        }
    }
}

/// Outcome of one evaluation. On failure `area` is 0, both region fields are
/// empty and `error` holds the message.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    pub area: f64,
    pub regions: Vec<Region>,
    pub combined_region: Option<Region>,
    pub error: Option<String>,
}

impl EvaluationResult {
    fn failure(err: &AreaError) -> Self {
        Self {
            area: 0.0,
            regions: Vec::new(),
            combined_region: None,
            error: Some(err.to_string()),
        }
    }

    fn from_regions(regions: Vec<Region>, cfg: &EvalCfg) -> Self {
        let regions: Vec<Region> = regions.into_iter().filter(|r| !r.is_empty()).collect();
        let combined_region = match regions.len() {
            0 => None,
            1 => regions.first().cloned(),
            _ => merge_regions(&regions, cfg),
        };
        let area = combined_region.as_ref().map_or(0.0, |r| r.area().max(0.0));
        Self {
            area,
            regions,
            combined_region,
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Wire form for the tool layer.
    pub fn to_report(&self) -> AreaReport {
        match &self.error {
            Some(msg) => AreaReport::Error(msg.clone()),
            None => AreaReport::Area(self.area),
        }
    }
}

/// `{"type":"area","value":<f64>}` or `{"type":"error","value":"<message>"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AreaReport {
    Area(f64),
    Error(String),
}

/// Evaluate `expr` against `resolver` with default tolerances and resolution.
pub fn evaluate<R: DrawableResolver + ?Sized>(expr: &str, resolver: &R) -> EvaluationResult {
    evaluate_with(expr, resolver, &EvalCfg::default())
}

/// Evaluate `expr` with an explicit config.
pub fn evaluate_with<R: DrawableResolver + ?Sized>(
    expr: &str,
    resolver: &R,
    cfg: &EvalCfg,
) -> EvaluationResult {
    tracing::debug!(expr, "evaluating area expression");
    let outcome = parse_with_depth(expr, cfg.max_depth)
        .and_then(|ast| evaluate_ast(&ast, resolver, cfg))
        .and_then(|value| value.into_region(cfg));
    let result = match outcome {
        Ok(region) => EvaluationResult::from_regions(vec![region], cfg),
        Err(err) => EvaluationResult::failure(&err),
    };
    match &result.error {
        None => tracing::debug!(expr, area = result.area, "evaluated"),
        Some(error) => tracing::debug!(expr, %error, "evaluation failed"),
    }
    result
}

/// Fold a parsed tree into a value. Leaves are looked up and adapted on the
/// way down; operators combine on the way back up.
pub fn evaluate_ast<'d, R: DrawableResolver + ?Sized>(
    ast: &Ast,
    resolver: &'d R,
    cfg: &EvalCfg,
) -> Result<Value<'d>> {
    match ast {
        Ast::Name(name) => {
            let drawable = resolver.resolve(name)?;
            Ok(Value::Shape(adapt(name, drawable, cfg)?))
        }
        Ast::Binary { left, op, right } => {
            let l = evaluate_ast(left, resolver, cfg)?;
            let r = evaluate_ast(right, resolver, cfg)?;
            apply(l, *op, r, cfg)
        }
    }
}

fn apply<'d>(left: Value<'d>, op: BinOp, right: Value<'d>, cfg: &EvalCfg) -> Result<Value<'d>> {
    match op {
        BinOp::And => {
            if let (Value::Shape(l), Value::Shape(r)) = (&left, &right) {
                if let Some(cut) = segment_intersection(l, r, cfg)? {
                    return Ok(Value::Derived(cut));
                }
            }
            let l = left.into_region(cfg)?;
            let r = right.into_region(cfg)?;
            Ok(Value::Derived(l.intersection(&r)))
        }
        BinOp::Or | BinOp::Xor => {
            if left.is_pending() || left.is_empty() {
                return Ok(right);
            }
            if right.is_pending() || right.is_empty() {
                return Ok(left);
            }
            let l = left.into_region(cfg)?;
            let r = right.into_region(cfg)?;
            let out = if op == BinOp::Or {
                l.union(&r)
            } else {
                l.symmetric_difference(&r)
            };
            Ok(Value::Derived(out))
        }
        BinOp::Minus => {
            if left.is_empty() {
                return Ok(Value::Derived(Region::empty()));
            }
            if right.is_empty() {
                return Ok(left);
            }
            let l = left.into_region(cfg)?;
            let r = right.into_region(cfg)?;
            Ok(Value::Derived(l.difference(&r)))
        }
    }
}

/// Single region covering several: the convex hull of `hull_samples` boundary
/// points from each. `None` when the samples do not span an area.
pub fn merge_regions(regions: &[Region], cfg: &EvalCfg) -> Option<Region> {
    match regions {
        [] => None,
        [only] => Some(only.clone()),
        _ => {
            let points: Vec<Vec2> = regions
                .iter()
                .flat_map(|r| r.sample_boundary(cfg.hull_samples))
                .collect();
            tracing::trace!(regions = regions.len(), points = points.len(), "hull merge");
            Region::convex_hull(&points)
        }
    }
}

#[cfg(test)]
mod tests;

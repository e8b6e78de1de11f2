//! Area of boolean combinations of named planar shapes.
//!
//! `evaluate("(C(5) & AB) - D", &scene)` parses the expression, resolves each
//! name to a drawable, turns drawables into regions and folds them with
//! intersection (`&`), union (`|`), difference (`-`) and symmetric
//! difference (`^`). A segment combined with a circle or arc by `&` is cut
//! exactly along its line instead of being treated as a half-plane.
//!
//! Layout
//! - `expr`: tokenizer, parser, tree.
//! - `drawable`: shape model and name lookup.
//! - `geom2`: region algebra binding and circle/line geometry.
//! - `adapter`, `combine`, `eval`: drawable → region, segment cuts, tree walk.

pub mod adapter;
pub mod combine;
pub mod drawable;
pub mod error;
pub mod eval;
pub mod expr;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use drawable::{Drawable, DrawableResolver, Scene, ShapeKind};
pub use error::{AreaError, ErrorCategory, Result};
pub use eval::{evaluate, evaluate_with, AreaReport, EvaluationResult};
pub use geom2::{EvalCfg, Region, Vec2};

/// Common exports for callers.
pub mod prelude {
    pub use crate::drawable::{Drawable, DrawableResolver, Scene, ShapeKind};
    pub use crate::error::{AreaError, ErrorCategory};
    pub use crate::eval::{evaluate, evaluate_with, AreaReport, EvaluationResult};
    pub use crate::expr::{parse, tokenize, Ast, BinOp};
    pub use crate::geom2::{EvalCfg, Region, Vec2};
}

//! Drawables: the named shapes an expression refers to, and name lookup.
//!
//! `Drawable` is a closed set; anything the host canvas knows but this crate
//! cannot turn into an area is carried as `Unsupported` so it still resolves
//! by name and fails later with a precise message.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AreaError, Result};
use crate::geom2::Vec2;

/// Kinds of drawable that have a region meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    CircleArc,
    Segment,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::CircleArc => "CircleArc",
            ShapeKind::Segment => "Segment",
            ShapeKind::Polygon => "Polygon",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Drawable {
    Circle {
        center: Vec2,
        radius: f64,
    },
    Ellipse {
        center: Vec2,
        radius_x: f64,
        radius_y: f64,
        /// Degrees, counter-clockwise.
        #[serde(default)]
        rotation_deg: f64,
    },
    CircleArc {
        center: Vec2,
        radius: f64,
        point1: Vec2,
        point2: Vec2,
        #[serde(default)]
        major: bool,
    },
    Segment {
        point1: Vec2,
        point2: Vec2,
    },
    Polygon {
        vertices: Vec<Vec2>,
    },
    Unsupported {
        class_name: String,
    },
}

impl Drawable {
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Drawable::Circle { .. } => Some(ShapeKind::Circle),
            Drawable::Ellipse { .. } => Some(ShapeKind::Ellipse),
            Drawable::CircleArc { .. } => Some(ShapeKind::CircleArc),
            Drawable::Segment { .. } => Some(ShapeKind::Segment),
            Drawable::Polygon { .. } => Some(ShapeKind::Polygon),
            Drawable::Unsupported { .. } => None,
        }
    }

    /// Type name as the host reports it.
    pub fn class_name(&self) -> String {
        match self {
            Drawable::Unsupported { class_name } => class_name.clone(),
            other => other
                .shape_kind()
                .map(|k| k.to_string())
                .unwrap_or_default(),
        }
    }

    /// Polygon traced by a chain of edges `(p, q)`, each starting where the
    /// previous one ended. Consecutive duplicate points are dropped.
    pub fn polygon_from_segments(edges: &[(Vec2, Vec2)]) -> Self {
        let mut vertices: Vec<Vec2> = Vec::with_capacity(edges.len() + 1);
        let mut push = |p: Vec2| {
            if vertices.last().map_or(true, |q| (*q - p).norm() > 1e-12) {
                vertices.push(p);
            }
        };
        for &(p, q) in edges {
            push(p);
            push(q);
        }
        if vertices.len() > 1 && (vertices[0] - vertices[vertices.len() - 1]).norm() <= 1e-12 {
            vertices.pop();
        }
        Drawable::Polygon { vertices }
    }
}

/// Name → drawable lookup supplied by the host.
pub trait DrawableResolver {
    fn lookup(&self, name: &str) -> Option<&Drawable>;

    fn resolve(&self, name: &str) -> Result<&Drawable> {
        self.lookup(name).ok_or_else(|| AreaError::unknown(name))
    }
}

impl DrawableResolver for HashMap<String, Drawable> {
    fn lookup(&self, name: &str) -> Option<&Drawable> {
        self.get(name)
    }
}

impl DrawableResolver for BTreeMap<String, Drawable> {
    fn lookup(&self, name: &str) -> Option<&Drawable> {
        self.get(name)
    }
}

/// Named drawables, loadable from a JSON object `{ "name": { "type": … }, … }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    drawables: BTreeMap<String, Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, drawable: Drawable) -> Option<Drawable> {
        self.drawables.insert(name.into(), drawable)
    }

    pub fn get(&self, name: &str) -> Option<&Drawable> {
        self.drawables.get(name)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

impl DrawableResolver for Scene {
    fn lookup(&self, name: &str) -> Option<&Drawable> {
        self.get(name)
    }
}

impl<S: Into<String>> FromIterator<(S, Drawable)> for Scene {
    fn from_iter<I: IntoIterator<Item = (S, Drawable)>>(iter: I) -> Self {
        Self {
            drawables: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

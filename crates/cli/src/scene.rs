use anyhow::{Context, Result};
use areaexpr::Scene;
use std::fs;
use std::path::Path;

/// Read a scene file: a JSON object mapping drawable names to drawables.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading scene {}", path.display()))?;
    let scene = parse_scene(&text).with_context(|| format!("decoding scene {}", path.display()))?;
    tracing::info!(path = %path.display(), drawables = scene.len(), "scene loaded");
    Ok(scene)
}

pub fn parse_scene(text: &str) -> Result<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    Ok(scene)
}

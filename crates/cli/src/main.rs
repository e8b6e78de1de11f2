use anyhow::Result;
use areaexpr::expr::{parse, tokenize};
use areaexpr::{evaluate_with, EvalCfg};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

#[derive(Parser)]
#[command(name = "areaexpr-cli")]
#[command(about = "Evaluate area expressions over a scene of named shapes")]
struct Cmd {
    /// Log verbosity (stderr)
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate an expression and print the JSON area report
    Eval {
        /// JSON object mapping names to drawables
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        expr: String,
        /// Boundary samples for full circles and ellipses
        #[arg(long)]
        curve_points: Option<usize>,
        /// Half side of the box that stands in for a half-plane
        #[arg(long)]
        half_plane_extent: Option<f64>,
    },
    /// Print the token stream, one token per line
    Tokens {
        #[arg(long)]
        expr: String,
        /// Emit a JSON array instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Print the fully parenthesized expression tree
    Parse {
        #[arg(long)]
        expr: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    let out = match cmd.action {
        Action::Eval {
            scene,
            expr,
            curve_points,
            half_plane_extent,
        } => {
            let mut cfg = EvalCfg::default();
            if let Some(n) = curve_points {
                cfg.curve_points = n;
            }
            if let Some(e) = half_plane_extent {
                cfg.half_plane_extent = e;
            }
            eval(&scene, &expr, &cfg)?
        }
        Action::Tokens { expr, json } => tokens(&expr, json)?,
        Action::Parse { expr } => parse_tree(&expr)?,
    };
    println!("{out}");
    Ok(())
}

/// Evaluation errors are part of the report; only I/O and decoding fail here.
fn eval(scene_path: &Path, expr: &str, cfg: &EvalCfg) -> Result<String> {
    let scene = scene::load_scene(scene_path)?;
    let result = evaluate_with(expr, &scene, cfg);
    tracing::info!(expr, area = result.area, ok = result.is_ok(), "eval");
    Ok(serde_json::to_string(&result.to_report())?)
}

#[derive(Serialize)]
struct TokenRow {
    kind: String,
    text: String,
    pos: usize,
}

fn tokens(expr: &str, json: bool) -> Result<String> {
    let toks = tokenize(expr)?;
    if json {
        let rows: Vec<TokenRow> = toks
            .into_iter()
            .map(|t| TokenRow {
                kind: t.kind.to_string(),
                text: t.text,
                pos: t.pos,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    let lines: Vec<String> = toks
        .iter()
        .map(|t| format!("{}@{} {}", t.kind, t.pos, t.text))
        .collect();
    Ok(lines.join("\n"))
}

fn parse_tree(expr: &str) -> Result<String> {
    Ok(parse(expr)?.to_string())
}

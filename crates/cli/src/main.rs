use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use isect2::{Shape, Vec2};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "isect")]
#[command(about = "Boundary intersections between 2D shapes")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect the two shapes `a` and `b` of a JSON file
    Query {
        #[arg(long)]
        input: PathBuf,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Boundary-exclusive containment of a point in a shape
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Print a small version/provenance JSON block
    Report,
}

/// Query file layout: `{"a": <shape>, "b": <shape>}`.
#[derive(Debug, Deserialize)]
struct QueryInput {
    a: Shape,
    b: Shape,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Query { input, out } => {
            let result = query(&input, out.as_deref())?;
            if out.is_none() {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Ok(())
        }
        Action::Contains { input, x, y } => {
            let result = contains(&input, Vec2::new(x, y))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&report())?);
            Ok(())
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn intersect_value(input: &QueryInput) -> Value {
    let points = input.a.intersections(&input.b);
    tracing::debug!(count = points.len(), "intersections");
    json!({
        "a": input.a.kind(),
        "b": input.b.kind(),
        "count": points.len(),
        "points": points,
    })
}

fn query(input: &Path, out: Option<&Path>) -> Result<Value> {
    tracing::info!(input = %input.display(), out = ?out, "query");
    let shapes: QueryInput = read_json(input)?;
    let result = intersect_value(&shapes);
    if let Some(out) = out {
        provenance::ensure_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&result)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "input": input.to_string_lossy(),
            "a": shapes.a.kind(),
            "b": shapes.b.kind(),
        });
        let sidecar = provenance::write_sidecar(out, params)?;
        tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    }
    Ok(result)
}

fn contains(input: &Path, p: Vec2) -> Result<Value> {
    tracing::info!(input = %input.display(), x = p.x, y = p.y, "contains");
    let shape: Shape = read_json(input)?;
    Ok(json!({
        "kind": shape.kind(),
        "inside": shape.contains(p),
    }))
}

fn report() -> Value {
    json!({
        "name": "isect2",
        "version": isect2::VERSION,
        "code_rev": provenance::current_git_rev(),
    })
}

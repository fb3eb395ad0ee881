use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use hullkit::api::{
    boundary, close_ring, convex_hull, draw_blob, draw_scatter, simplify_with, subdivide_clamped,
    subdivide_closed, BlobCfg, BoundaryCfg, ReplayToken, ScatterCfg, SimplifyCfg,
};
use hullkit::Point;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hulls, smoothing and simplification for point files")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Files {
    /// Input points (.json or .csv with x,y columns)
    #[arg(long)]
    input: PathBuf,
    /// Output JSON; a provenance sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull, optionally reduced and smoothed into a closed ring
    Hull {
        #[command(flatten)]
        files: Files,
        #[arg(long)]
        reduce: bool,
        #[arg(long, default_value_t = 1)]
        subdivisions: usize,
    },
    /// Bearing-based polyline simplification
    Simplify {
        #[command(flatten)]
        files: Files,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        angle_tolerance: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        min_distance: f64,
    },
    /// Catmull-Rom subdivision of a polyline or ring
    Smooth {
        #[command(flatten)]
        files: Files,
        #[arg(long)]
        subdivisions: usize,
        /// Treat the input as a closed ring
        #[arg(long)]
        closed: bool,
    },
    /// Draw a reproducible random point set
    Sample {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        /// Jittered radial blob instead of a uniform scatter
        #[arg(long)]
        blob: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull {
            files,
            reduce,
            subdivisions,
        } => hull(&files, reduce, subdivisions),
        Action::Simplify {
            files,
            angle_tolerance,
            min_distance,
        } => simplify(
            &files,
            SimplifyCfg {
                angle_tolerance,
                min_distance,
            },
        ),
        Action::Smooth {
            files,
            subdivisions,
            closed,
        } => smooth(&files, subdivisions, closed),
        Action::Sample {
            count,
            seed,
            out,
            blob,
        } => sample(count, seed, blob, &out),
        Action::Report => report(),
    }
}

/// Write `points` plus their provenance sidecar.
fn emit(out: &Path, points: &[Point], payload: Payload) -> Result<()> {
    io::write_points(out, points)?;
    let prov = write_sidecar(out, &payload)?;
    tracing::info!(
        command = payload.command,
        out = %out.display(),
        provenance = %prov.display(),
        points = points.len(),
        "done"
    );
    Ok(())
}

fn hull(files: &Files, reduce: bool, subdivisions: usize) -> Result<()> {
    let points = io::read_points(&files.input)?;
    tracing::info!(
        input = %files.input.display(),
        points = points.len(),
        reduce,
        subdivisions,
        "hull"
    );
    let ring = if reduce || subdivisions > 1 {
        let cfg = BoundaryCfg {
            simplify: None,
            reduce,
            subdivisions,
        };
        boundary(&points, &cfg)?
    } else {
        convex_hull(&points)
    };
    let params = json!({
        "input": files.input.to_string_lossy(),
        "reduce": reduce,
        "subdivisions": subdivisions,
    });
    emit(&files.out, &ring, Payload::new("hull", params))
}

fn simplify(files: &Files, cfg: SimplifyCfg) -> Result<()> {
    let points = io::read_points(&files.input)?;
    tracing::info!(input = %files.input.display(), points = points.len(), ?cfg, "simplify");
    let reduced = simplify_with(&points, &cfg);
    let params = json!({
        "input": files.input.to_string_lossy(),
        "angle_tolerance": cfg.angle_tolerance,
        "min_distance": cfg.min_distance,
    });
    emit(&files.out, &reduced, Payload::new("simplify", params))
}

fn smooth(files: &Files, subdivisions: usize, closed: bool) -> Result<()> {
    let points = io::read_points(&files.input)?;
    tracing::info!(
        input = %files.input.display(),
        points = points.len(),
        subdivisions,
        closed,
        "smooth"
    );
    let curve = if closed {
        subdivide_closed(&close_ring(&points), subdivisions)?
    } else {
        subdivide_clamped(&points, subdivisions)?
    };
    let params = json!({
        "input": files.input.to_string_lossy(),
        "subdivisions": subdivisions,
        "closed": closed,
    });
    emit(&files.out, &curve, Payload::new("smooth", params))
}

fn sample(count: usize, seed: u64, blob: bool, out: &Path) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let tok = ReplayToken::new(seed, 0);
    let points = if blob {
        draw_blob(
            BlobCfg {
                count,
                ..BlobCfg::default()
            },
            tok,
        )
    } else {
        draw_scatter(
            ScatterCfg {
                count,
                ..ScatterCfg::default()
            },
            tok,
        )
    };
    let params = json!({ "count": count, "seed": seed, "blob": blob });
    emit(out, &points, Payload::new("sample", params))
}

fn report() -> Result<()> {
    let obj = json!({
        "version": hullkit::VERSION,
        "code_rev": provenance::current_git_rev(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

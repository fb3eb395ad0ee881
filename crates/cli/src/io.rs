//! Point-file input and output.
//!
//! Inputs
//! - `.json`: array of `{"x": .., "y": ..}` objects or `[x, y]` pairs (mixing
//!   both is fine).
//! - `.csv`: header with `x` and `y` columns; other columns are ignored.
//!
//! Output is always a pretty JSON array of `{"x", "y"}` objects.

use anyhow::{anyhow, bail, Context, Result};
use hullkit::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRecord {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<PointRecord> for Point {
    fn from(r: PointRecord) -> Self {
        match r {
            PointRecord::Object { x, y } => Point::new(x, y),
            PointRecord::Pair([x, y]) => Point::new(x, y),
        }
    }
}

#[derive(Serialize)]
struct XY {
    x: f64,
    y: f64,
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let points = match ext.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => read_csv(path)?,
        _ => bail!(
            "unsupported input {}: expected a .json or .csv file",
            path.display()
        ),
    };
    tracing::debug!(path = %path.display(), points = points.len(), "read input");
    Ok(points)
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    Ok(records.into_iter().map(Point::from).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    use polars::prelude::{col, DataType, LazyCsvReader, LazyFileListReader};

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input csv shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("{}: row {row} has an empty coordinate", path.display())),
        })
        .collect()
}

/// Write `points` as JSON, creating parent directories as needed.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let rows: Vec<XY> = points.iter().map(|p| XY { x: p.x, y: p.y }).collect();
    fs::write(path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), points = points.len(), "wrote output");
    Ok(())
}

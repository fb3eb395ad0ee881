//! Print the boundary of a random blob at each pipeline stage.
//!
//! Usage:
//!   cargo run -p hullkit --example smoothed_blob -- [seed]
//!
//! Prints vertex counts for hull, reduced hull and smoothed ring, then the
//! smoothed ring as JSON-like points.

use hullkit::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let pts = draw_blob(BlobCfg::default(), ReplayToken::new(seed, 0));
    let hull = convex_hull(&pts);
    let reduced = reduce_hull(&pts, &hull);
    println!(
        "seed {seed}: points={}, hull={}, reduced={}",
        pts.len(),
        hull.len(),
        reduced.len()
    );
    let cfg = BoundaryCfg {
        reduce: true,
        subdivisions: 6,
        ..BoundaryCfg::default()
    };
    match boundary(&pts, &cfg) {
        Ok(ring) => {
            println!("smoothed ring: {} points", ring.len());
            for p in ring.iter().step_by(6) {
                println!("  {p}");
            }
        }
        Err(e) => eprintln!("no boundary: {e}"),
    }
}

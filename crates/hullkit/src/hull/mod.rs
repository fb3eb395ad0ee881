//! Convex hulls and hull post-processing.
//!
//! Purpose
//! - `convex_hull`: QuickHull over an unordered point set, driven by an
//!   explicit worklist so adversarial inputs cannot exhaust the call stack.
//! - `reduce_hull`: replace diagonal hull edges with nearby data points.
//! - `smoothed_convex_hull`: hull + closed Catmull-Rom subdivision.
//!
//! Orientation
//! - Hulls come out clockwise in y-up coordinates (counterclockwise on a
//!   y-down screen), starting at the lexicographically smallest point.

mod quickhull;
mod reduce;

pub use quickhull::{convex_hull, smoothed_convex_hull};
pub use reduce::{
    add_points_on_curve, diagonal_areas, diagonal_edge_count, points_to_check, reduce_hull,
    reduce_hull_with, remove_points_on_hull, HullReduction, ReduceCfg,
};

//! Curated flat API over the crate's modules.
//!
//! Important
//! - Convenience surface for callers that prefer one import path (the CLI
//!   uses it). The module paths remain the primary API.

// Primitives
pub use crate::geom2::cfg::EPSILON;
pub use crate::geom2::{
    bearing, is_diagonal, is_horizontal, is_vertical, orient, Bounds, CardinalDirection, Point,
};
// Random point sets
pub use crate::geom2::rand::{draw_blob, draw_scatter, BlobCfg, ReplayToken, ScatterCfg};
// Hulls
pub use crate::hull::{
    convex_hull, reduce_hull, reduce_hull_with, smoothed_convex_hull, HullReduction, ReduceCfg,
};
// Curves
pub use crate::spline::{
    bezier_control_points, catmull_rom, cubic_bezier_at, subdivide_clamped, subdivide_closed,
    subdivide_linear, BezierSegment, CatmullRom,
};
// Polylines
pub use crate::pipeline::{boundary, BoundaryCfg};
pub use crate::polyline::{close_ring, remove_duplicate_points, sort_by_distance, spark_line};
pub use crate::simplify::{simplify, simplify_with, SimplifyCfg};
// Regions
pub use crate::region::{
    distance_from_point_to_line, in_circle, in_ellipse, in_polygon, in_rectangle,
    in_ring_segment, in_sector, is_point_on_line, line_line_intersection, CircleContact,
};

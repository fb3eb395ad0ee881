//! Tolerance defaults for 2D point geometry.
//!
//! Policy
//! - Fixed constants; algorithms that expose knobs carry them in their own
//!   `*Cfg` struct and default to the values here.

/// Coordinate tolerance for `Point` equality, horizontal/vertical edge tests
/// and "point on segment" checks.
pub const EPSILON: f64 = 1e-6;

/// Bearing delta (degrees) below which three points count as collinear.
pub const COLLINEAR_BEARING_DEG: f64 = 0.5;

/// Open band of bearing deltas (degrees) treated as a probable corner.
pub const PROBABLE_CORNER_DEG: (f64, f64) = (80.0, 90.0);

/// Tolerance used when testing a bearing delta for a multiple of 90°.
pub(crate) const RIGHT_ANGLE_EPS: f64 = 1e-9;

/// Distance at or below which consecutive points are duplicates in the
/// simplifier pre-pass.
pub const DEDUP_DISTANCE: f64 = 1.0;

/// Safety cap on hull-reduction passes.
pub const MAX_REDUCE_PASSES: usize = 1_000_000;

/// Sub-steps per segment used by `polyline::spark_line`.
pub const SPARK_LINE_SUBDIVISIONS: usize = 16;

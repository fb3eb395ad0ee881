//! Curve interpolation through point sequences.
//!
//! - `CatmullRom`: one uniform Catmull-Rom segment, evaluated at any `t`.
//! - `subdivide_*`: densify open polylines, closed rings or straight segments.
//! - Bezier: cubic evaluation and C² control-point fitting.

mod bezier;
mod catmull_rom;
mod subdivide;

pub use bezier::{bezier_control_points, cubic_bezier_at, BezierSegment};
pub use catmull_rom::{catmull_rom, CatmullRom};
pub use subdivide::{subdivide_clamped, subdivide_closed, subdivide_linear};

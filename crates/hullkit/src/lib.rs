//! Point-set geometry for renderable boundaries.
//!
//! Turns irregular point sets into well-formed curves and polygons:
//! convex hulls (QuickHull), hull de-diagonalization, Catmull-Rom subdivision,
//! bearing-based simplification and point-in-region predicates.
//!
//! Conventions
//! - Every function is pure: inputs are borrowed, outputs freshly allocated.
//! - Closed rings repeat the first point as the last point where a function
//!   says so (`hull::reduce_hull`, `spline::subdivide_closed`).
//! - Tolerances live in `geom2::cfg`; per-algorithm knobs live in small
//!   `*Cfg` structs with `Default`.

pub mod api;
pub mod error;
pub mod geom2;
pub mod hull;
pub mod pipeline;
pub mod polyline;
pub mod region;
pub mod simplify;
pub mod spline;

pub use error::{GeomError, Result};
pub use geom2::{Bounds, Point};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_blob, draw_scatter, BlobCfg, ReplayToken, ScatterCfg};
    pub use crate::geom2::{bearing, Bounds, CardinalDirection, Point};
    pub use crate::hull::{convex_hull, reduce_hull, smoothed_convex_hull, ReduceCfg};
    pub use crate::pipeline::{boundary, BoundaryCfg};
    pub use crate::simplify::{simplify, SimplifyCfg};
    pub use crate::spline::{subdivide_clamped, subdivide_closed, subdivide_linear, CatmullRom};
    pub use crate::{GeomError, Result};
}

//! Compass bearings between points and the 16-wind rose.
//!
//! Bearing convention: `atan2(dy, dx)` in degrees plus 90°, normalized to
//! [0, 360). In screen coordinates (y down) this puts 0° at 12 o'clock and
//! increases clockwise.

use super::Point;

/// Bearing in degrees from `p1` towards `p2`, in [0, 360).
pub fn bearing(p1: Point, p2: Point) -> f64 {
    let mut b = (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees() + 90.0;
    if b < 0.0 {
        b += 360.0;
    }
    if b >= 360.0 {
        b -= 360.0;
    }
    b
}

/// 16-point compass rose; each wind spans 22.5° centred on its heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    const SPAN: f64 = 22.5;

    /// Wind containing `bearing_deg` (any real, wrapped into [0, 360)).
    ///
    /// Ranges are `[from, to)`; N covers [348.75, 360) and [0, 11.25).
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let b = bearing_deg.rem_euclid(360.0);
        let idx = ((b + Self::SPAN * 0.5) / Self::SPAN).floor() as usize % 16;
        Self::ALL[idx]
    }

    /// Heading in degrees at the centre of the wind.
    pub fn heading(self) -> f64 {
        self as usize as f64 * Self::SPAN
    }

    /// `(from, to)` bearing range; for N, `from > to` because it wraps.
    pub fn range(self) -> (f64, f64) {
        let h = self.heading();
        (
            (h - Self::SPAN * 0.5).rem_euclid(360.0),
            h + Self::SPAN * 0.5,
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::N => "North",
            Self::NNE => "North North-East",
            Self::NE => "North-East",
            Self::ENE => "East North-East",
            Self::E => "East",
            Self::ESE => "East South-East",
            Self::SE => "South-East",
            Self::SSE => "South South-East",
            Self::S => "South",
            Self::SSW => "South South-West",
            Self::SW => "South-West",
            Self::WSW => "West South-West",
            Self::W => "West",
            Self::WNW => "West North-West",
            Self::NW => "North-West",
            Self::NNW => "North North-West",
        }
    }
}

//! Planar geometry: agent positions and the arena they wander in.
//!
//! Positions use `f64` arena units.  The arena is a plain axis-aligned
//! rectangle with its origin at `(0, 0)`; agents are circles whose centers
//! are meant to stay inside the band `[radius, width − radius]` on x and
//! `[radius, height − radius]` on y (the kinematics reflect headings at that
//! band).

/// A position in arena units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Rectangular arena bounds, shared and read-only during a run.
///
/// `Arena` is cheap to copy and carries no validation of its own; dimension
/// checks happen when the disease model is built, alongside the rest of the
/// scenario configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! Normalized 2-D coordinates.
//!
//! Waypoints and agents live in a unit square: `(0, 0)` is the top-left
//! corner of the map, `(1, 1)` the bottom-right.  Keeping positions
//! percentage-based means the scene stays aligned no matter how large the
//! host viewport is; only the render projection knows about pixels.

/// A point in normalized map space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise linear interpolation from `self` to `other`.
    ///
    /// Exact at both endpoints.  `t` is not clamped; callers keep it in
    /// `[0, 1]` so the result stays on the segment.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        let s = 1.0 - t;
        Point {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
        }
    }

    /// `true` if both components are finite and inside `[0, 1]`.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Squared Euclidean distance.  Good enough for nearest-node queries.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

//! Normalized-to-pixel mapping and the walking-gait bounce.

use std::f64::consts::PI;

use wp_core::Point;

/// Pixel size of the area the map is stretched over.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a normalized point to pixel coordinates.  The map is stretched to
    /// fill the viewport, so the axes scale independently.
    #[inline]
    pub fn to_screen(&self, p: Point) -> (f64, f64) {
        (p.x * self.width, p.y * self.height)
    }

    /// Inverse of [`to_screen`](Self::to_screen).  A zero-sized axis maps
    /// to 0.
    pub fn to_normalized(&self, screen_x: f64, screen_y: f64) -> Point {
        let nx = if self.width  > 0.0 { screen_x / self.width }  else { 0.0 };
        let ny = if self.height > 0.0 { screen_y / self.height } else { 0.0 };
        Point::new(nx, ny)
    }
}

/// Bounce animation parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectionConfig {
    /// Footsteps (bounce peaks) per edge.
    pub bounce_steps: u32,
    /// Peak lift in pixels.
    pub bounce_amplitude_px: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            bounce_steps:        8,
            bounce_amplitude_px: 4.0,
        }
    }
}

/// Vertical lift for an agent `progress` of the way along its edge:
/// `|sin(progress · π · steps)| · amplitude`.
///
/// Zero at both ends of every edge, so arrivals never pop.
#[inline]
pub fn bounce_offset(progress: f64, cfg: &ProjectionConfig) -> f64 {
    (progress * PI * cfg.bounce_steps as f64).sin().abs() * cfg.bounce_amplitude_px
}

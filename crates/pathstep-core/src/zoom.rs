//! Zoom: mapping a continuous zoom factor onto a clamped grid size.

use crate::geom::{Point, Vec2};

/// Limits for zooming a grid in and out.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Grid size at factor 1.0.
    pub base: Point,
    pub min: Point,
    pub max: Point,
    /// Factor change per unit of wheel delta.
    pub speed: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            base: Point::new(25, 25),
            min: Point::new(3, 3),
            max: Point::new(50, 50),
            speed: 0.001,
        }
    }
}

impl ZoomConfig {
    /// Grid size for `factor`: `floor(base * factor)` clamped to `[min, max]`.
    pub fn zoomed(&self, factor: f64) -> Point {
        (Vec2::from(self.base) * factor)
            .floor()
            .max(Vec2::from(self.min))
            .min(Vec2::from(self.max))
            .to_point()
    }

    /// Factor after a wheel movement of `delta` (positive delta zooms out).
    pub fn apply_wheel(&self, factor: f64, delta: f64) -> f64 {
        factor + self.speed * -delta
    }
}

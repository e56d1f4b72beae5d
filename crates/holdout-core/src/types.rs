//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in world units. Screen-style axes: x grows right, y grows down.
/// Angles are radians from `atan2(y, x)`.
pub use glam::DVec2 as Vec2;

/// Shorthand constructor for [`Vec2`].
pub use glam::dvec2 as vec2;

/// Simulation time tracking. Advanced only by the host-driven step;
/// the engine keeps no clock of its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed simulation steps.
    pub frame: u64,
    /// Total simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one step of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += dt_ms;
    }
}

/// Axis-aligned rectangle used for barriers and placement checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a circle of `radius` around `center` overlaps this rectangle.
    /// Conservative box test: the rectangle is inflated by the radius.
    pub fn overlaps_circle(&self, center: Vec2, radius: f64) -> bool {
        center.x + radius > self.x
            && center.x - radius < self.x + self.width
            && center.y + radius > self.y
            && center.y - radius < self.y + self.height
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

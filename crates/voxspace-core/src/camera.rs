use crate::constants::{DEFAULT_ELEVATION, DEFAULT_HEADING_DEG, DEFAULT_HORIZON};
use glam::DVec2;

/// First-person camera pose over the height map.
///
/// Owned and mutated by the frame loop; the renderer only reads it.
/// `position` is in map cells and may lie outside the grid (lookups wrap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: DVec2,
    /// Heading in radians.
    pub angle: f64,
    /// Vertical screen offset in reference-height pixels (pitch).
    pub horizon: f64,
    /// Height above the map origin, in terrain height units.
    pub elevation: f64,
}

impl Camera {
    /// Camera at `(x, y)` with the default heading, horizon and elevation.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            angle: DEFAULT_HEADING_DEG.to_radians(),
            horizon: DEFAULT_HORIZON,
            elevation: DEFAULT_ELEVATION,
        }
    }

    /// Unit vector the view looks along: `-(sin, cos)` of the heading.
    pub fn forward(&self) -> DVec2 {
        let (sin, cos) = self.angle.sin_cos();
        DVec2::new(-sin, -cos)
    }

    pub fn turn(&mut self, delta: f64) {
        self.angle += delta;
    }

    /// Move along the view direction. Negative distances move backward.
    pub fn advance(&mut self, distance: f64) {
        self.position += self.forward() * distance;
    }

    pub fn pitch(&mut self, delta: f64) {
        self.horizon += delta;
    }

    pub fn climb(&mut self, delta: f64) {
        self.elevation += delta;
    }

    /// Lift the camera so it stays at least `clearance` above `ground`.
    /// Returns true if the elevation changed.
    pub fn clamp_above_ground(&mut self, ground: f64, clearance: f64) -> bool {
        if ground > self.elevation - clearance {
            self.elevation = ground + clearance;
            true
        } else {
            false
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.angle.is_finite()
            && self.horizon.is_finite()
            && self.elevation.is_finite()
    }
}

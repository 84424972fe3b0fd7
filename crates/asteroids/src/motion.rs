//! Position and velocity with screen wrap-around

use arcade_engine::foundation::math::{utils, Point2, Vec2};

use crate::config::ScreenBounds;

/// Position plus per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Current position
    pub position: Point2,

    /// Displacement applied every frame
    pub velocity: Vec2,
}

impl Motion {
    /// Create a motion from position and velocity
    pub fn new(position: Point2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Stationary motion at `position`
    pub fn at_rest(position: Point2) -> Self {
        Self::new(position, Vec2::zeros())
    }

    /// Move one frame along the velocity, re-entering from the opposite
    /// edge when leaving the screen
    pub fn advance(&mut self, bounds: &ScreenBounds) {
        self.position = bounds.wrap(self.position + self.velocity);
    }
}

/// Velocity of magnitude `speed` along a heading in degrees
pub fn velocity_along(angle_degrees: f32, speed: f32) -> Vec2 {
    utils::heading(angle_degrees) * speed
}

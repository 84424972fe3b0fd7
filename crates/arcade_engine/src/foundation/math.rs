//! Math utilities and types
//!
//! Provides the 2D math types used by screen-space simulations.
//! Screen space has x to the right and y pointing down, so an angle of
//! zero degrees faces the top of the screen and positive angles turn
//! clockwise.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Unit vector pointing along a screen-space heading given in degrees.
    ///
    /// `heading(0.0)` is `(0, -1)` (up), `heading(90.0)` is `(1, 0)` (right).
    pub fn heading(angle_degrees: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(angle_degrees).sin_cos();
        Vec2::new(sin, -cos)
    }

    /// Normalize an angle in degrees into `[0, 360)`
    pub fn normalize_degrees(angle_degrees: f32) -> f32 {
        wrap(angle_degrees, 360.0)
    }

    /// Wrap a coordinate into `[0, extent)`.
    ///
    /// `rem_euclid` can round up to exactly `extent` for tiny negative
    /// inputs, which is folded back to zero.
    pub fn wrap(value: f32, extent: f32) -> f32 {
        let wrapped = value.rem_euclid(extent);
        if wrapped >= extent {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use super::Vec2;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_heading_cardinal_directions() {
        assert_relative_eq!(heading(0.0), Vec2::new(0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(heading(90.0), Vec2::new(1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(heading(180.0), Vec2::new(0.0, 1.0), epsilon = EPSILON);
        assert_relative_eq!(heading(-90.0), Vec2::new(-1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_heading_is_unit_length() {
        for angle in [0.0, 17.0, 30.0, 123.4, -271.0] {
            assert_relative_eq!(heading(angle).norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_wrap_into_range() {
        assert_relative_eq!(wrap(-1.0, 800.0), 799.0);
        assert_relative_eq!(wrap(801.0, 800.0), 1.0);
        assert_relative_eq!(wrap(400.0, 800.0), 400.0);
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert!(wrap(-1e-9, 800.0) < 800.0);
    }

    #[test]
    fn test_degree_conversions() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI);
        assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0);
        assert_relative_eq!(normalize_degrees(-30.0), 330.0);
    }
}

//! Asteroid splitting rule
//!
//! A struck asteroid breaks into fragments of the next smaller size. Two
//! fragments fly off perpendicular to the projectile's heading; a medium
//! asteroid sheds a third fragment flying back the way the projectile came.

use crate::components::{Asteroid, SizeClass};
use crate::config::AsteroidConfig;
use crate::motion::velocity_along;

/// Heading offsets, in degrees from the impact direction, of the fragments
/// produced when an asteroid of `size` is split
pub fn fragment_offsets(size: SizeClass) -> &'static [f32] {
    match size {
        SizeClass::Large => &[90.0, -90.0],
        SizeClass::Medium => &[90.0, -90.0, -180.0],
        SizeClass::Small => &[],
    }
}

/// Split `asteroid` after a hit travelling along `impact_direction` degrees.
///
/// Fragments start at the parent's position with the radius configured for
/// their size. Small asteroids produce nothing.
pub fn split(asteroid: &Asteroid, impact_direction: f32, config: &AsteroidConfig) -> Vec<Asteroid> {
    let Some(fragment_size) = asteroid.size.split_into() else {
        return Vec::new();
    };

    fragment_offsets(asteroid.size)
        .iter()
        .map(|offset| {
            Asteroid::sized(
                fragment_size,
                asteroid.position(),
                velocity_along(impact_direction + offset, config.split_speed),
                config,
            )
        })
        .collect()
}

//! Bounding-box collision detection
//!
//! Two entities collide when both axis distances between their centres are
//! strictly below the larger of their two radii. This is a square box test
//! around the bigger entity, not a circle test: a projectile near the
//! corner of an asteroid's box counts as a hit even though it is outside
//! the asteroid's circle.

use std::collections::HashSet;

use arcade_engine::foundation::math::Point2;
use slotmap::SlotMap;

use crate::components::{Asteroid, AsteroidId, Projectile, ProjectileId, Ship};

/// Anything with a centre and a collision radius
pub trait Bounded {
    /// Centre of the entity
    fn center(&self) -> Point2;

    /// Collision radius
    fn radius(&self) -> f32;
}

impl Bounded for Ship {
    fn center(&self) -> Point2 {
        self.motion.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Bounded for Projectile {
    fn center(&self) -> Point2 {
        self.motion.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Bounded for Asteroid {
    fn center(&self) -> Point2 {
        self.motion.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Bounding-box overlap test. Symmetric in its arguments.
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    let reach = a.radius().max(b.radius());
    let delta = a.center() - b.center();
    delta.x.abs() < reach && delta.y.abs() < reach
}

/// A projectile striking an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Asteroid that was struck
    pub asteroid: AsteroidId,

    /// Projectile that struck it
    pub projectile: ProjectileId,
}

/// Find projectile/asteroid hits for this frame.
///
/// Asteroids are scanned in arena order and each takes the first projectile
/// overlapping it that no earlier asteroid has claimed. Every asteroid and
/// every projectile appears in at most one hit; further overlaps are
/// picked up on later frames if they persist.
pub fn projectile_hits(
    asteroids: &SlotMap<AsteroidId, Asteroid>,
    projectiles: &SlotMap<ProjectileId, Projectile>,
) -> Vec<Hit> {
    let mut claimed = HashSet::new();
    let mut hits = Vec::new();

    for (asteroid_id, asteroid) in asteroids {
        let struck_by = projectiles
            .iter()
            .find(|(projectile_id, projectile)| !claimed.contains(projectile_id) && collides(asteroid, *projectile));

        if let Some((projectile_id, _)) = struck_by {
            claimed.insert(projectile_id);
            hits.push(Hit { asteroid: asteroid_id, projectile: projectile_id });
        }
    }

    hits
}

/// First asteroid overlapping the ship, or `None` once the ship is destroyed
pub fn ship_hit(ship: &Ship, asteroids: &SlotMap<AsteroidId, Asteroid>) -> Option<AsteroidId> {
    if !ship.intact {
        return None;
    }

    asteroids
        .iter()
        .find(|(_, asteroid)| collides(ship, *asteroid))
        .map(|(asteroid_id, _)| asteroid_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SizeClass;
    use crate::config::ProjectileConfig;
    use arcade_engine::foundation::math::Vec2;

    fn asteroid_at(x: f32, y: f32, radius: f32) -> Asteroid {
        Asteroid::new(SizeClass::Large, Point2::new(x, y), Vec2::zeros(), radius)
    }

    fn projectile_at(x: f32, y: f32) -> Projectile {
        Projectile::fire(Point2::new(x, y), 0.0, &ProjectileConfig::default())
    }

    #[test]
    fn test_box_not_circle() {
        let asteroid = asteroid_at(100.0, 100.0, 20.0);
        // Inside the box corner, outside the circle
        let corner = projectile_at(118.0, 118.0);
        assert!(collides(&asteroid, &corner));

        let edge = projectile_at(120.0, 100.0);
        assert!(!collides(&asteroid, &edge));
    }

    #[test]
    fn test_uses_larger_radius() {
        let small = asteroid_at(0.0, 0.0, 1.0);
        let big = asteroid_at(9.0, 0.0, 10.0);
        assert!(collides(&small, &big));
        assert!(!collides(&small, &asteroid_at(11.0, 0.0, 10.0)));
    }

    #[test]
    fn test_collides_is_symmetric() {
        let samples = [
            asteroid_at(0.0, 0.0, 5.0),
            asteroid_at(4.0, -4.0, 1.0),
            asteroid_at(10.0, 3.0, 8.0),
            asteroid_at(-30.0, 2.0, 40.0),
            asteroid_at(5.0, 0.0, 5.0),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(collides(a, b), collides(b, a));
            }
        }
    }

    #[test]
    fn test_each_projectile_claimed_once() {
        let mut asteroids = SlotMap::with_key();
        let first = asteroids.insert(asteroid_at(100.0, 100.0, 20.0));
        let second = asteroids.insert(asteroid_at(110.0, 100.0, 20.0));

        let mut projectiles = SlotMap::with_key();
        let shot = projectiles.insert(projectile_at(105.0, 100.0));

        let hits = projectile_hits(&asteroids, &projectiles);
        assert_eq!(hits, vec![Hit { asteroid: first, projectile: shot }]);
        assert!(hits.iter().all(|hit| hit.asteroid != second));
    }

    #[test]
    fn test_each_asteroid_struck_once() {
        let mut asteroids = SlotMap::with_key();
        let rock = asteroids.insert(asteroid_at(100.0, 100.0, 20.0));

        let mut projectiles = SlotMap::with_key();
        let a = projectiles.insert(projectile_at(95.0, 100.0));
        projectiles.insert(projectile_at(105.0, 100.0));

        let hits = projectile_hits(&asteroids, &projectiles);
        assert_eq!(hits, vec![Hit { asteroid: rock, projectile: a }]);
    }

    #[test]
    fn test_ship_hit_requires_intact_ship() {
        let mut asteroids = SlotMap::with_key();
        asteroids.insert(asteroid_at(300.0, 300.0, 20.0));
        let rock = asteroids.insert(asteroid_at(100.0, 100.0, 20.0));

        let mut ship = Ship::new(Point2::new(100.0, 100.0), 15.0);
        assert_eq!(ship_hit(&ship, &asteroids), Some(rock));

        ship.destroy();
        assert_eq!(ship_hit(&ship, &asteroids), None);
    }
}

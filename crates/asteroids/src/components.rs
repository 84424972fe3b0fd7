//! Game entities

use arcade_engine::foundation::math::{utils, Point2, Vec2};
use arcade_engine::input::KeyCode;
use bitflags::bitflags;
use slotmap::new_key_type;

use crate::config::{AsteroidConfig, ProjectileConfig, ScreenBounds, ShipConfig};
use crate::motion::{velocity_along, Motion};

new_key_type! {
    /// Stable handle to an asteroid owned by the controller
    pub struct AsteroidId;

    /// Stable handle to a projectile owned by the controller
    pub struct ProjectileId;
}

bitflags! {
    /// Movement keys currently held down
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShipControls: u8 {
        /// Accelerate along the heading
        const THRUST = 1 << 0;
        /// Rotate counter-clockwise
        const TURN_LEFT = 1 << 1;
        /// Rotate clockwise
        const TURN_RIGHT = 1 << 2;
    }
}

/// Player ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Position and drift
    pub motion: Motion,

    /// Heading in degrees, 0 facing up, clockwise positive
    pub rotation: f32,

    /// Collision radius
    pub radius: f32,

    /// False once the ship has been destroyed
    pub intact: bool,

    controls: ShipControls,
}

impl Ship {
    /// Create an intact, stationary ship facing up
    pub fn new(position: Point2, radius: f32) -> Self {
        Self {
            motion: Motion::at_rest(position),
            rotation: 0.0,
            radius,
            intact: true,
            controls: ShipControls::empty(),
        }
    }

    /// Current position
    pub fn position(&self) -> Point2 {
        self.motion.position
    }

    /// Movement keys held
    pub fn controls(&self) -> ShipControls {
        self.controls
    }

    /// Apply a movement key. Returns false for keys that do not steer.
    pub fn control(&mut self, keycode: KeyCode) -> bool {
        let flag = match keycode {
            KeyCode::Up => ShipControls::THRUST,
            KeyCode::Left => ShipControls::TURN_LEFT,
            KeyCode::Right => ShipControls::TURN_RIGHT,
            _ => return false,
        };
        self.controls.insert(flag);
        true
    }

    /// Stop thrusting and turning
    pub fn release_controls(&mut self) {
        self.controls = ShipControls::empty();
    }

    /// Destroy the ship. A wreck stops where it is and accepts no controls.
    pub fn destroy(&mut self) {
        self.intact = false;
        self.controls = ShipControls::empty();
        self.motion.velocity = Vec2::zeros();
    }

    /// Steer, thrust, apply friction and move one frame
    pub fn advance(&mut self, config: &ShipConfig, bounds: &ScreenBounds) {
        if !self.intact {
            return;
        }

        if self.controls.contains(ShipControls::TURN_LEFT) {
            self.rotation -= config.rotation_speed;
        }
        if self.controls.contains(ShipControls::TURN_RIGHT) {
            self.rotation += config.rotation_speed;
        }
        self.rotation = utils::normalize_degrees(self.rotation);

        if self.controls.contains(ShipControls::THRUST) {
            self.motion.velocity += velocity_along(self.rotation, config.thrust);
        }

        self.motion.velocity *= config.friction;
        let speed = self.motion.velocity.norm();
        if speed > config.max_speed {
            self.motion.velocity *= config.max_speed / speed;
        }

        self.motion.advance(bounds);
    }
}

/// Projectile fired by the ship
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Position and velocity
    pub motion: Motion,

    /// Heading it was fired along, in degrees
    pub rotation: f32,

    /// Collision radius
    pub radius: f32,

    /// Frames left before it expires
    pub lifespan: u32,
}

impl Projectile {
    /// Fire a projectile from `position` along `rotation`
    pub fn fire(position: Point2, rotation: f32, config: &ProjectileConfig) -> Self {
        Self {
            motion: Motion::new(position, velocity_along(rotation, config.speed)),
            rotation,
            radius: config.radius,
            lifespan: config.lifespan_frames,
        }
    }

    /// Count down one frame of life. Returns true while still alive.
    pub fn age(&mut self) -> bool {
        self.lifespan = self.lifespan.saturating_sub(1);
        self.lifespan > 0
    }
}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Large asteroid (splits into two medium)
    Large,

    /// Medium asteroid (splits into three small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

impl SizeClass {
    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

/// Asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    /// Position and velocity
    pub motion: Motion,

    /// Collision radius
    pub radius: f32,

    /// Size category
    pub size: SizeClass,
}

impl Asteroid {
    /// Create an asteroid with an explicit radius
    pub fn new(size: SizeClass, position: Point2, velocity: Vec2, radius: f32) -> Self {
        Self {
            motion: Motion::new(position, velocity),
            radius,
            size,
        }
    }

    /// Create an asteroid with the radius configured for its size
    pub fn sized(size: SizeClass, position: Point2, velocity: Vec2, config: &AsteroidConfig) -> Self {
        Self::new(size, position, velocity, config.radius(size))
    }

    /// Current position
    pub fn position(&self) -> Point2 {
        self.motion.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_class_strictly_decreases() {
        assert_eq!(SizeClass::Large.split_into(), Some(SizeClass::Medium));
        assert_eq!(SizeClass::Medium.split_into(), Some(SizeClass::Small));
        assert_eq!(SizeClass::Small.split_into(), None);
    }

    #[test]
    fn test_projectile_lifespan_counts_down() {
        let config = ProjectileConfig { lifespan_frames: 2, ..ProjectileConfig::default() };
        let mut projectile = Projectile::fire(Point2::new(0.0, 0.0), 0.0, &config);
        assert!(projectile.age());
        assert_eq!(projectile.lifespan, 1);
        assert!(!projectile.age());
        assert!(!projectile.age());
        assert_eq!(projectile.lifespan, 0);
    }

    #[test]
    fn test_ship_turns_and_thrusts() {
        let config = ShipConfig { friction: 1.0, ..ShipConfig::default() };
        let bounds = ScreenBounds::default();
        let mut ship = Ship::new(Point2::new(100.0, 100.0), 15.0);

        assert!(ship.control(KeyCode::Right));
        ship.advance(&config, &bounds);
        assert_relative_eq!(ship.rotation, config.rotation_speed);
        assert_eq!(ship.position(), Point2::new(100.0, 100.0));

        ship.release_controls();
        ship.rotation = 0.0;
        assert!(ship.control(KeyCode::Up));
        ship.advance(&config, &bounds);
        assert_relative_eq!(ship.motion.velocity, Vec2::new(0.0, -config.thrust), epsilon = 1e-6);
        assert!(ship.position().y < 100.0);
    }

    #[test]
    fn test_turn_left_wraps_rotation() {
        let mut ship = Ship::new(Point2::new(0.0, 0.0), 15.0);
        ship.control(KeyCode::Left);
        ship.advance(&ShipConfig::default(), &ScreenBounds::default());
        assert_relative_eq!(ship.rotation, 360.0 - ShipConfig::default().rotation_speed);
    }

    #[test]
    fn test_speed_is_capped() {
        let config = ShipConfig { max_speed: 2.0, friction: 1.0, ..ShipConfig::default() };
        let mut ship = Ship::new(Point2::new(300.0, 300.0), 15.0);
        ship.motion.velocity = Vec2::new(10.0, 0.0);
        ship.advance(&config, &ScreenBounds::default());
        assert_relative_eq!(ship.motion.velocity.norm(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_non_steering_keys_ignored() {
        let mut ship = Ship::new(Point2::new(0.0, 0.0), 15.0);
        assert!(!ship.control(KeyCode::Down));
        assert!(!ship.control(KeyCode::Space));
        assert!(ship.controls().is_empty());
    }

    #[test]
    fn test_destroyed_ship_stops() {
        let mut ship = Ship::new(Point2::new(50.0, 50.0), 15.0);
        ship.motion.velocity = Vec2::new(1.0, 1.0);
        ship.control(KeyCode::Up);
        ship.destroy();
        ship.advance(&ShipConfig::default(), &ScreenBounds::default());
        assert!(!ship.intact);
        assert!(ship.controls().is_empty());
        assert_eq!(ship.position(), Point2::new(50.0, 50.0));
    }
}

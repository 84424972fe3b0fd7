//! Game configuration

use arcade_engine::config::Config;
use arcade_engine::foundation::math::{utils, Point2};
use arcade_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::components::SizeClass;
use crate::error::GameError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frames between the ship being destroyed and the game-over message
    pub fadeout_frames: u32,

    /// Seed for the initial asteroid; entropy when unset
    pub seed: Option<u64>,

    /// Playfield size
    pub screen: ScreenBounds,

    /// Ship settings
    pub ship: ShipConfig,

    /// Projectile settings
    pub projectile: ProjectileConfig,

    /// Asteroid settings
    pub asteroids: AsteroidConfig,
}

/// Screen bounds. Entities wrap around at these edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenBounds {
    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,
}

/// Ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Collision radius
    pub radius: f32,

    /// Velocity gained per frame while thrusting
    pub thrust: f32,

    /// Degrees turned per frame while a turn key is held
    pub rotation_speed: f32,

    /// Speed cap in pixels per frame
    pub max_speed: f32,

    /// Velocity multiplier applied every frame (1.0 keeps momentum forever)
    pub friction: f32,
}

/// Projectile configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Collision radius
    pub radius: f32,

    /// Speed in pixels per frame
    pub speed: f32,

    /// Frames a projectile lives before expiring
    pub lifespan_frames: u32,
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Radius of large asteroids
    pub large_radius: f32,

    /// Radius of medium asteroids
    pub medium_radius: f32,

    /// Radius of small asteroids
    pub small_radius: f32,

    /// Speed of the asteroid placed at game start
    pub initial_speed: f32,

    /// Speed of fragments produced by a split
    pub split_speed: f32,
}

/// Everything the headless driver reads from one file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame driver settings
    pub engine: EngineConfig,

    /// Simulation settings
    pub game: GameConfig,
}

impl Config for GameConfig {}
impl Config for AppConfig {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fadeout_frames: 60,
            seed: None,
            screen: ScreenBounds::default(),
            ship: ShipConfig::default(),
            projectile: ProjectileConfig::default(),
            asteroids: AsteroidConfig::default(),
        }
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            thrust: 0.15,
            rotation_speed: 4.0,
            max_speed: 6.0,
            friction: 0.99,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            speed: 1.0,
            lifespan_frames: 100,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            large_radius: 40.0,
            medium_radius: 20.0,
            small_radius: 10.0,
            initial_speed: 1.0,
            split_speed: 1.0,
        }
    }
}

impl ScreenBounds {
    /// Create bounds of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre of the screen
    pub fn center(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a point back onto the screen
    pub fn wrap(&self, point: Point2) -> Point2 {
        Point2::new(utils::wrap(point.x, self.width), utils::wrap(point.y, self.height))
    }
}

impl AsteroidConfig {
    /// Radius for a size class
    pub fn radius(&self, size: SizeClass) -> f32 {
        match size {
            SizeClass::Large => self.large_radius,
            SizeClass::Medium => self.medium_radius,
            SizeClass::Small => self.small_radius,
        }
    }
}

impl GameConfig {
    /// Set the screen size
    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen = ScreenBounds::new(width, height);
        self
    }

    /// Set the fade-out length
    pub fn with_fadeout(mut self, frames: u32) -> Self {
        self.fadeout_frames = frames;
        self
    }

    /// Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |message: String| Err(GameError::InvalidConfig(message));

        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !(positive(self.screen.width) && positive(self.screen.height)) {
            return invalid(format!(
                "screen must have a finite positive size, got {}x{}",
                self.screen.width, self.screen.height
            ));
        }

        if !(positive(self.ship.radius) && positive(self.projectile.radius)) {
            return invalid("ship and projectile radii must be positive".to_string());
        }

        if !(0.0..=1.0).contains(&self.ship.friction) {
            return invalid(format!("ship friction must be within [0, 1], got {}", self.ship.friction));
        }

        let speeds = [
            ("ship.thrust", self.ship.thrust),
            ("ship.rotation_speed", self.ship.rotation_speed),
            ("ship.max_speed", self.ship.max_speed),
            ("projectile.speed", self.projectile.speed),
            ("asteroids.initial_speed", self.asteroids.initial_speed),
            ("asteroids.split_speed", self.asteroids.split_speed),
        ];
        if let Some((name, value)) = speeds.iter().find(|(_, value)| !(value.is_finite() && *value >= 0.0)) {
            return invalid(format!("{name} must be finite and not negative, got {value}"));
        }

        if self.projectile.lifespan_frames == 0 {
            return invalid("projectile lifespan must be at least one frame".to_string());
        }

        let radii = &self.asteroids;
        if !(positive(radii.large_radius)
            && radii.large_radius > radii.medium_radius
            && radii.medium_radius > radii.small_radius
            && radii.small_radius > 0.0)
        {
            return invalid(format!(
                "asteroid radii must shrink with size, got {}/{}/{}",
                radii.large_radius, radii.medium_radius, radii.small_radius
            ));
        }

        Ok(())
    }
}

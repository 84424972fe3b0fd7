//! Read-only views handed to renderers

use arcade_engine::render::{RenderError, Renderer};
use log::{debug, info};

use crate::components::{Asteroid, AsteroidId, Projectile, ProjectileId, Ship, SizeClass};
use crate::controller::GameState;

/// What a renderer needs to draw the ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// Heading in degrees
    pub rotation: f32,
    /// Collision radius
    pub radius: f32,
    /// False once destroyed
    pub intact: bool,
}

/// What a renderer needs to draw one asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidView {
    /// Handle of the asteroid
    pub id: AsteroidId,
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// Collision radius
    pub radius: f32,
    /// Size category
    pub size: SizeClass,
}

/// What a renderer needs to draw one projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileView {
    /// Handle of the projectile
    pub id: ProjectileId,
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// Heading in degrees
    pub rotation: f32,
    /// Frames left
    pub lifespan: u32,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Frames simulated so far
    pub frame: u64,
    /// Game state after the frame
    pub state: GameState,
    /// The ship
    pub ship: ShipView,
    /// Live asteroids
    pub asteroids: Vec<AsteroidView>,
    /// Live projectiles
    pub projectiles: Vec<ProjectileView>,
    /// Game-over message, once one should be shown
    pub message: Option<&'static str>,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            x: ship.motion.position.x,
            y: ship.motion.position.y,
            rotation: ship.rotation,
            radius: ship.radius,
            intact: ship.intact,
        }
    }
}

impl AsteroidView {
    /// View of `asteroid` stored under `id`
    pub fn new(id: AsteroidId, asteroid: &Asteroid) -> Self {
        Self {
            id,
            x: asteroid.motion.position.x,
            y: asteroid.motion.position.y,
            radius: asteroid.radius,
            size: asteroid.size,
        }
    }
}

impl ProjectileView {
    /// View of `projectile` stored under `id`
    pub fn new(id: ProjectileId, projectile: &Projectile) -> Self {
        Self {
            id,
            x: projectile.motion.position.x,
            y: projectile.motion.position.y,
            rotation: projectile.rotation,
            lifespan: projectile.lifespan,
        }
    }
}

/// Headless renderer that writes frames to the log.
///
/// Every `interval` frames a summary goes out at `debug`; the game-over
/// message is logged once at `info` when it first appears.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    interval: u64,
    announced: bool,
}

impl LogRenderer {
    /// Log a summary every `interval` frames (at least every frame)
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            announced: false,
        }
    }

    /// Whether the game-over message has been logged
    pub fn announced(&self) -> bool {
        self.announced
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Renderer<FrameSnapshot> for LogRenderer {
    fn render(&mut self, snapshot: &FrameSnapshot) -> Result<(), RenderError> {
        if snapshot.frame % self.interval == 0 {
            debug!(
                "frame {}: ship ({:.1}, {:.1}) {:.0}deg {}, {} asteroids, {} projectiles",
                snapshot.frame,
                snapshot.ship.x,
                snapshot.ship.y,
                snapshot.ship.rotation,
                if snapshot.ship.intact { "intact" } else { "wrecked" },
                snapshot.asteroids.len(),
                snapshot.projectiles.len(),
            );
        }

        if let Some(message) = snapshot.message {
            if !self.announced {
                info!("{}", message);
                self.announced = true;
            }
        }

        Ok(())
    }
}

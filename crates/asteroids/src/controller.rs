//! Game loop controller
//!
//! Owns every entity and runs one frame at a time:
//!
//! 1. resolve projectile/asteroid hits, splitting struck asteroids
//! 2. move asteroids and projectiles
//! 3. expire projectiles that ran out of life
//! 4. move the ship and check it against the asteroids
//! 5. update the game state
//!
//! Removal always happens in a batch after the scan that found the dead
//! entities, so handles stay valid for the whole scan.

use arcade_engine::foundation::collections::RemovalQueue;
use arcade_engine::foundation::math::{Point2, Vec2};
use arcade_engine::foundation::time::FrameClock;
use arcade_engine::input::{InputEvent, KeyCode};
use arcade_engine::Application;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::SlotMap;

use crate::collision::{self, collides};
use crate::components::{Asteroid, AsteroidId, Projectile, ProjectileId, Ship, SizeClass};
use crate::config::{GameConfig, ScreenBounds};
use crate::error::GameError;
use crate::motion::velocity_along;
use crate::splitting;
use crate::view::{AsteroidView, FrameSnapshot, ProjectileView, ShipView};

const SPAWN_ATTEMPTS: usize = 32;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The ship ran into an asteroid
    SpaceshipHit,

    /// Every asteroid was destroyed
    AsteroidsCleared,
}

impl Outcome {
    /// Message shown once the game is over
    pub fn message(self) -> &'static str {
        match self {
            Self::SpaceshipHit => "YOU HIT AN ASTEROID",
            Self::AsteroidsCleared => "YOU DESTROYED THE ASTEROIDS!!!",
        }
    }
}

/// Whole-game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Ship intact, asteroids left
    Playing,

    /// Ship destroyed; the message appears when the countdown reaches zero
    SpaceshipHit {
        /// Frames left before game over
        frames_remaining: u32,
    },

    /// Terminal state
    GameOver(Outcome),
}

impl GameState {
    /// Whether the game has ended
    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver(_))
    }

    /// Message to display, if any
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::GameOver(outcome) => Some(outcome.message()),
            _ => None,
        }
    }
}

/// Owns the ship, asteroids and projectiles and advances them frame by frame
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    bounds: ScreenBounds,
    ship: Ship,
    asteroids: SlotMap<AsteroidId, Asteroid>,
    projectiles: SlotMap<ProjectileId, Projectile>,
    state: GameState,
    clock: FrameClock,
}

impl GameController {
    /// Start a game: ship at the centre, one large asteroid somewhere else
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = Self::empty(config)?;
        let asteroid = game.random_large_asteroid(&mut rng);
        game.spawn_asteroid(asteroid);
        Ok(game)
    }

    /// Ship at the centre and no asteroids. Scenarios are set up from here.
    pub fn empty(config: GameConfig) -> Result<Self, GameError> {
        let ship = Ship::new(config.screen.center(), config.ship.radius);
        Self::with_ship(config, ship)
    }

    /// Given ship and no asteroids
    pub fn with_ship(config: GameConfig, ship: Ship) -> Result<Self, GameError> {
        config.validate()?;
        info!(
            "New game on a {}x{} field, fade-out {} frames",
            config.screen.width, config.screen.height, config.fadeout_frames
        );
        Ok(Self {
            bounds: config.screen,
            config,
            ship,
            asteroids: SlotMap::with_key(),
            projectiles: SlotMap::with_key(),
            state: GameState::Playing,
            clock: FrameClock::new(),
        })
    }

    fn random_large_asteroid(&self, rng: &mut StdRng) -> Asteroid {
        let radius = self.config.asteroids.large_radius;
        let mut position = Point2::origin();

        for attempt in 0..SPAWN_ATTEMPTS {
            position = Point2::new(
                rng.gen_range(0.0..self.bounds.width),
                rng.gen_range(0.0..self.bounds.height),
            );
            let candidate = Asteroid::new(SizeClass::Large, position, Vec2::zeros(), radius);
            if !collides(&self.ship, &candidate) {
                break;
            }
            if attempt + 1 == SPAWN_ATTEMPTS {
                warn!("No free spot for the first asteroid; placing it over the ship");
            }
        }

        let heading = rng.gen_range(0.0..360.0);
        let velocity = velocity_along(heading, self.config.asteroids.initial_speed);
        debug!("First asteroid at ({:.1}, {:.1}) heading {:.0}deg", position.x, position.y, heading);
        Asteroid::new(SizeClass::Large, position, velocity, radius)
    }

    /// Add an asteroid to the field
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> AsteroidId {
        self.asteroids.insert(asteroid)
    }

    /// Add a projectile at `(x, y)` heading along `rotation` degrees
    pub fn fire_projectile(&mut self, x: f32, y: f32, rotation: f32) -> ProjectileId {
        let projectile = Projectile::fire(Point2::new(x, y), rotation, &self.config.projectile);
        trace!("Projectile fired from ({:.1}, {:.1}) at {:.0}deg", x, y, rotation);
        self.projectiles.insert(projectile)
    }

    /// Key pressed. A space fires; arrow keycodes steer. Ignored once the
    /// ship is destroyed.
    pub fn on_key_down(&mut self, key: Option<char>, keycode: Option<KeyCode>) {
        if !self.ship.intact {
            return;
        }

        if key == Some(' ') {
            let position = self.ship.position();
            self.fire_projectile(position.x, position.y, self.ship.rotation);
        }

        if let Some(keycode) = keycode {
            if !self.ship.control(keycode) {
                trace!("Ignoring key {:?}", keycode);
            }
        }
    }

    /// Key pressed, with the host's raw keycode. Unknown codes are ignored.
    pub fn on_raw_key_down(&mut self, key: Option<char>, raw_keycode: Option<u32>) {
        let keycode = raw_keycode.and_then(|raw| {
            let mapped = KeyCode::from_raw(raw);
            if mapped.is_none() {
                trace!("Ignoring unknown keycode {}", raw);
            }
            mapped
        });
        self.on_key_down(key, keycode);
    }

    /// Key released: stop thrusting and turning
    pub fn on_key_up(&mut self) {
        if self.ship.intact {
            self.ship.release_controls();
        }
    }

    /// Advance the game by one frame
    pub fn advance(&mut self) {
        self.resolve_projectile_hits();

        for asteroid in self.asteroids.values_mut() {
            asteroid.motion.advance(&self.bounds);
        }
        for projectile in self.projectiles.values_mut() {
            projectile.motion.advance(&self.bounds);
        }

        self.expire_projectiles();

        self.ship.advance(&self.config.ship, &self.bounds);
        self.resolve_ship_hit();

        self.update_state();
        let frame = self.clock.tick();
        trace!(
            "Frame {} done: {} asteroids, {} projectiles",
            frame,
            self.asteroids.len(),
            self.projectiles.len()
        );
    }

    fn resolve_projectile_hits(&mut self) {
        let hits = collision::projectile_hits(&self.asteroids, &self.projectiles);
        if hits.is_empty() {
            return;
        }

        let mut struck = RemovalQueue::new();
        let mut spent = RemovalQueue::new();
        let mut fragments = Vec::new();

        for hit in hits {
            let (Some(asteroid), Some(projectile)) =
                (self.asteroids.get(hit.asteroid), self.projectiles.get(hit.projectile))
            else {
                continue;
            };

            let children = splitting::split(asteroid, projectile.rotation, &self.config.asteroids);
            debug!(
                "{:?} asteroid at ({:.1}, {:.1}) hit at {:.0}deg, {} fragments",
                asteroid.size,
                asteroid.motion.position.x,
                asteroid.motion.position.y,
                projectile.rotation,
                children.len()
            );

            fragments.extend(children);
            struck.push(hit.asteroid);
            spent.push(hit.projectile);
        }

        struck.apply(&mut self.asteroids);
        spent.apply(&mut self.projectiles);
        for fragment in fragments {
            self.asteroids.insert(fragment);
        }
    }

    fn expire_projectiles(&mut self) {
        let mut expired = RemovalQueue::new();
        for (id, projectile) in &mut self.projectiles {
            if !projectile.age() {
                expired.push(id);
            }
        }

        if !expired.is_empty() {
            trace!("{} projectiles expired", expired.len());
            expired.apply(&mut self.projectiles);
        }
    }

    fn resolve_ship_hit(&mut self) {
        let Some(asteroid_id) = collision::ship_hit(&self.ship, &self.asteroids) else {
            return;
        };

        self.ship.destroy();
        self.asteroids.remove(asteroid_id);
        info!(
            "Ship destroyed at ({:.1}, {:.1})",
            self.ship.position().x,
            self.ship.position().y
        );

        if self.state == GameState::Playing {
            self.state = GameState::SpaceshipHit {
                frames_remaining: self.config.fadeout_frames,
            };
        }
    }

    fn update_state(&mut self) {
        self.state = match self.state {
            GameState::Playing if self.asteroids.is_empty() => {
                info!("All asteroids destroyed");
                GameState::GameOver(Outcome::AsteroidsCleared)
            }
            GameState::SpaceshipHit { frames_remaining: 0 } => {
                info!("Game over");
                GameState::GameOver(Outcome::SpaceshipHit)
            }
            GameState::SpaceshipHit { frames_remaining } => GameState::SpaceshipHit {
                frames_remaining: frames_remaining - 1,
            },
            state => state,
        };
    }

    /// The ship
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Live asteroids keyed by handle
    pub fn asteroids(&self) -> &SlotMap<AsteroidId, Asteroid> {
        &self.asteroids
    }

    /// Live projectiles keyed by handle
    pub fn projectiles(&self) -> &SlotMap<ProjectileId, Projectile> {
        &self.projectiles
    }

    /// Current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Game-over message, once it should be displayed
    pub fn game_over_message(&self) -> Option<&'static str> {
        self.state.message()
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Configuration the game was started with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Copy of everything a renderer needs for the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.clock.frame(),
            state: self.state,
            ship: ShipView::from(&self.ship),
            asteroids: self
                .asteroids
                .iter()
                .map(|(id, asteroid)| AsteroidView::new(id, asteroid))
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|(id, projectile)| ProjectileView::new(id, projectile))
                .collect(),
            message: self.game_over_message(),
        }
    }
}

impl Application for GameController {
    type Snapshot = FrameSnapshot;

    fn advance(&mut self) {
        Self::advance(self);
    }

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key, keycode } => self.on_key_down(key, keycode),
            InputEvent::KeyUp => self.on_key_up(),
        }
    }

    fn snapshot(&self) -> FrameSnapshot {
        Self::snapshot(self)
    }

    fn is_finished(&self) -> bool {
        self.state.is_over()
    }
}

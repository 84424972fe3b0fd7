//! # Asteroids
//!
//! Simulation core of a small arcade game: a ship fires projectiles at
//! asteroids that split into smaller asteroids when hit.
//!
//! The crate owns the per-frame rules only. Drawing and keyboard capture
//! belong to the host, which calls [`GameController::advance`] once per
//! frame, forwards key events, and draws [`FrameSnapshot`]s.
//!
//! ```rust
//! use asteroids::{GameConfig, GameController};
//!
//! let mut game = GameController::new(GameConfig::default().with_seed(7)).unwrap();
//! game.on_key_down(Some(' '), None);
//! game.advance();
//! assert_eq!(game.snapshot().projectiles.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod components;
pub mod config;
pub mod controller;
pub mod motion;
pub mod splitting;
pub mod view;

mod error;

pub use components::{Asteroid, AsteroidId, Projectile, ProjectileId, Ship, ShipControls, SizeClass};
pub use config::{AppConfig, AsteroidConfig, GameConfig, ProjectileConfig, ScreenBounds, ShipConfig};
pub use controller::{GameController, GameState, Outcome};
pub use error::GameError;
pub use view::{AsteroidView, FrameSnapshot, LogRenderer, ProjectileView, ShipView};

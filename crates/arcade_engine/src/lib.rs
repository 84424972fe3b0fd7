//! # Arcade Engine
//!
//! A small frame-driven foundation for 2D arcade simulations.
//!
//! ## Features
//!
//! - **Frame Driver**: a fixed-step loop that feeds input, advances and renders
//! - **Stable Handles**: slot map arenas with batched removal
//! - **Configuration**: TOML and RON config files through one trait
//! - **Headless Rendering**: renderers only ever see an immutable snapshot
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct Counter(u64);
//!
//! impl Application for Counter {
//!     type Snapshot = u64;
//!
//!     fn advance(&mut self) {
//!         self.0 += 1;
//!     }
//!
//!     fn handle_input(&mut self, _event: InputEvent) {}
//!
//!     fn snapshot(&self) -> u64 {
//!         self.0
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default())?;
//!     let mut renderer = RecordingRenderer::new();
//!     engine.run(&mut Counter(0), &mut renderer, &mut ScriptedInput::new())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod render;

mod application;
mod engine;

pub use application::Application;
pub use engine::{Engine, EngineConfig, EngineError, ScriptedInput};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application,
        Engine, EngineConfig, EngineError, ScriptedInput,
        config::{Config, ConfigError},
        foundation::{
            collections::RemovalQueue,
            math::{Point2, Vec2},
            time::FrameClock,
        },
        input::{InputEvent, KeyCode},
        render::{RecordingRenderer, RenderError, Renderer},
    };
}

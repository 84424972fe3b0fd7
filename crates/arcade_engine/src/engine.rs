//! Core engine implementation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    application::Application,
    config::{Config, ConfigError},
    foundation::time::FrameClock,
    input::InputEvent,
    render::{RenderError, Renderer},
};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Number of frames to drive before stopping
    pub max_frames: u64,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            max_frames: 600,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set how many frames to run
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = frames;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(EngineError::InvalidConfig(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

/// Input events scheduled by frame number.
///
/// Events for frame `n` are applied right before the engine advances
/// frame `n`, in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: BTreeMap<u64, Vec<InputEvent>>,
}

impl ScriptedInput {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event before frame `frame` (builder pattern)
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.schedule(frame, event);
        self
    }

    /// Schedule an event before frame `frame`
    pub fn schedule(&mut self, frame: u64, event: InputEvent) {
        self.events.entry(frame).or_default().push(event);
    }

    /// Remove and return the events scheduled for `frame`
    pub fn take(&mut self, frame: u64) -> Vec<InputEvent> {
        self.events.remove(&frame).unwrap_or_default()
    }

    /// Number of events still pending
    pub fn pending(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

/// Main engine struct
///
/// The engine owns the frame clock and runs the input → advance → render
/// cycle for an [`Application`].
pub struct Engine {
    config: EngineConfig,
    clock: FrameClock,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("Initializing engine (max {} frames)", config.max_frames);
        Ok(Self {
            config,
            clock: FrameClock::new(),
            running: true,
        })
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames driven so far
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Request the main loop to stop after the current frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Drive a single frame: apply scheduled input, advance, render
    pub fn step<A, R>(
        &mut self,
        app: &mut A,
        renderer: &mut R,
        script: &mut ScriptedInput,
    ) -> Result<(), EngineError>
    where
        A: Application,
        R: Renderer<A::Snapshot>,
    {
        let frame = self.clock.frame();
        for event in script.take(frame) {
            log::trace!("Frame {}: input {:?}", frame, event);
            app.handle_input(event);
        }

        app.advance();
        renderer.render(&app.snapshot())?;
        self.clock.tick();
        Ok(())
    }

    /// Run the main loop until `max_frames` is reached, the application
    /// reports it is finished, or [`Engine::stop`] is called.
    ///
    /// Returns the number of frames driven by this call.
    pub fn run<A, R>(
        &mut self,
        app: &mut A,
        renderer: &mut R,
        script: &mut ScriptedInput,
    ) -> Result<u64, EngineError>
    where
        A: Application,
        R: Renderer<A::Snapshot>,
    {
        log::info!("Starting main loop...");
        let start = self.clock.frame();
        self.running = true;

        while self.running && self.clock.frame() < self.config.max_frames {
            self.step(app, renderer, script)?;
            if app.is_finished() {
                log::info!("Application finished at frame {}", self.clock.frame());
                self.running = false;
            }
        }

        log::info!("Main loop stopped after {} frames", self.clock.frame() - start);
        Ok(self.clock.frame() - start)
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration was rejected
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Renderer failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

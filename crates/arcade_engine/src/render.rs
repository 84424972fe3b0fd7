//! Renderer seam
//!
//! Rendering lives outside the simulation. A renderer receives a snapshot
//! by shared reference after each frame and can never reach back into the
//! state that produced it.

use thiserror::Error;

/// Draws snapshots of type `S`
pub trait Renderer<S> {
    /// Draw one frame
    fn render(&mut self, snapshot: &S) -> Result<(), RenderError>;
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rendering backend failed
    #[error("Render backend error: {0}")]
    Backend(String),
}

/// Renderer that keeps every snapshot it is given. Used for headless runs
/// and tests.
#[derive(Debug, Clone)]
pub struct RecordingRenderer<S> {
    frames: Vec<S>,
}

impl<S> RecordingRenderer<S> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// All recorded snapshots, oldest first
    pub fn frames(&self) -> &[S] {
        &self.frames
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&S> {
        self.frames.last()
    }
}

impl<S> Default for RecordingRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Renderer<S> for RecordingRenderer<S> {
    fn render(&mut self, snapshot: &S) -> Result<(), RenderError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

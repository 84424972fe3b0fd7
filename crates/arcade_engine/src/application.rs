//! Application trait and lifecycle management

use crate::input::InputEvent;

/// Application lifecycle trait
///
/// Implement this trait to let the [`Engine`](crate::Engine) drive a
/// simulation one frame at a time.
pub trait Application {
    /// Immutable view of the application state handed to renderers
    type Snapshot;

    /// Advance the simulation by exactly one frame.
    ///
    /// Runs to completion; nothing inside a frame blocks or yields.
    fn advance(&mut self);

    /// Apply an input event. Called between frames, never during one.
    fn handle_input(&mut self, event: InputEvent);

    /// Capture the state a renderer needs to draw the current frame
    fn snapshot(&self) -> Self::Snapshot;

    /// Whether the driver may stop early
    fn is_finished(&self) -> bool {
        false
    }
}

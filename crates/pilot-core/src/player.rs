//! Player trait implemented by consumers

use crate::frame::Frame;
use crate::key::KeyCode;

/// A consumer that watches frames and decides which keys to hold
///
/// Implement this to drive a game from outside its own input loop, for
/// example with a reinforcement learning agent. Once per captured frame
/// the session calls [`feedback`](Self::feedback) and then
/// [`keys_pressed`](Self::keys_pressed); the returned keys appear held
/// down until the next frame.
pub trait Player {
    /// Feedback payload for this player
    ///
    /// Computed before each frame decision and passed through to
    /// [`keys_pressed`](Self::keys_pressed) unchanged. A learning agent
    /// would use a reward/punishment signal here.
    type Feedback;

    /// Extract the feedback value for the frame about to be decided
    fn feedback(&mut self) -> Self::Feedback;

    /// Choose the keys to hold until the next frame
    ///
    /// `frame` is the captured framebuffer (width x height x RGB).
    fn keys_pressed(&mut self, frame: &Frame, feedback: Self::Feedback) -> Vec<KeyCode>;
}

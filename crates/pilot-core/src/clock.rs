//! Clock capability

/// Timer capability handed to the host game
///
/// Implemented both by real wall-time clocks and by the session's
/// fixed-step clock, which reports virtual time so frame pacing is
/// decoupled from wall-clock time.
pub trait GameClock {
    /// Advance to the next frame and return the elapsed interval in ms
    ///
    /// `framerate` caps the frame rate when positive; `0.0` means
    /// uncapped. Virtual clocks ignore the cap entirely.
    fn tick(&mut self, framerate: f64) -> f64;

    /// Like [`tick`](Self::tick) but an implementation may spin instead
    /// of sleeping for a more accurate cap
    fn tick_busy_loop(&mut self, framerate: f64) -> f64;

    /// Millisecond reading of this clock, including any frame-cap delay
    ///
    /// Real clocks report the duration of the previous tick; virtual
    /// clocks report accumulated game time.
    fn time(&self) -> f64;

    /// Millisecond reading of this clock, excluding any frame-cap delay
    fn raw_time(&self) -> f64;

    /// Integer frames per second this clock is running at
    fn fps(&self) -> u32;
}

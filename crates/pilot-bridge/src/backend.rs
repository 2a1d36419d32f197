//! Game backend capability

use std::cell::RefCell;
use std::rc::Rc;

use pilot_core::{Event, EventKind, Frame, GameClock, Result};

/// Shared handle to a backend
///
/// Everything runs single-threaded on the host's call stack, so the
/// handle is `Rc<RefCell<_>>` rather than anything lockable.
pub type BackendHandle = Rc<RefCell<dyn GameBackend>>;

/// The entry points a host game calls on its graphics/input library
///
/// Implement this to adapt a concrete windowing/input stack. The host is
/// handed a [`Dispatch`](crate::Dispatch) built over the backend and
/// calls through it; a session intercepts at the dispatch layer, so
/// implementations here stay oblivious to interception.
///
/// All methods are fallible; errors propagate to the host unmodified.
pub trait GameBackend {
    /// Present the rendered frame (full flip)
    fn present(&mut self) -> Result<()>;

    /// Present a partial update of the rendered frame
    fn update(&mut self) -> Result<()>;

    /// Drain pending input events
    ///
    /// `filters` is an ordered sequence of event kinds to include; empty
    /// means no filtering.
    fn poll_events(&mut self, filters: &[EventKind]) -> Result<Vec<Event>>;

    /// Construct a frame-pacing clock
    fn create_clock(&mut self) -> Result<Box<dyn GameClock>>;

    /// Milliseconds elapsed since the backend was initialized
    fn ticks(&mut self) -> Result<f64>;

    /// Snapshot the active display surface as an RGB pixel array
    fn capture_frame(&mut self) -> Result<Frame>;
}

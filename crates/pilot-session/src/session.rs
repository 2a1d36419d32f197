//! Session controller

use std::cell::RefCell;
use std::rc::Rc;

use pilot_bridge::{BackendHandle, Dispatch, PollRequest, SlotSet, intercept};
use pilot_core::{Event, GameClock, PilotError, Player, Result};
use tracing::{info, trace};

use crate::clock::FixedStepClock;
use crate::state::PaceState;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Frame rate the game is driven at, in frames per second
    ///
    /// Must be strictly positive. Virtual time advances by
    /// `1000 / desired_fps` ms per presented frame regardless of wall
    /// time, so a slow player slows the game down instead of dropping
    /// frames, and a fast one runs it faster than real time.
    pub desired_fps: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { desired_fps: 10.0 }
    }
}

impl SessionConfig {
    /// Virtual milliseconds granted per frame
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.desired_fps
    }
}

/// Drives a [`Player`] against a game through its dispatch table
///
/// On [`start`](Self::start) the session saves the five entry-point
/// slots currently installed in the dispatch table and replaces each
/// with an intercepted version: the original still runs, then the
/// session's handler observes the call. [`stop`](Self::stop) installs
/// the saved slots back verbatim. Starting while active or stopping
/// while inactive is an error; [`set_playing`](Self::set_playing) is the
/// idempotent form.
pub struct Session<P: Player + 'static> {
    dispatch: Rc<Dispatch>,
    player: Rc<RefCell<P>>,
    state: Rc<RefCell<PaceState>>,
    config: SessionConfig,
    saved: Option<SlotSet>,
}

impl<P: Player + 'static> Session<P> {
    /// Create an inactive session with the default configuration
    pub fn new(dispatch: Rc<Dispatch>, player: P) -> Self {
        Self {
            dispatch,
            player: Rc::new(RefCell::new(player)),
            state: Rc::new(RefCell::new(PaceState::default())),
            config: SessionConfig::default(),
            saved: None,
        }
    }

    /// Create an inactive session with a custom configuration
    pub fn with_config(dispatch: Rc<Dispatch>, player: P, config: SessionConfig) -> Result<Self> {
        if !config.desired_fps.is_finite() || config.desired_fps <= 0.0 {
            return Err(PilotError::InvalidFrameRate(config.desired_fps));
        }
        let mut session = Self::new(dispatch, player);
        session.config = config;
        Ok(session)
    }

    /// Begin intercepting the dispatch table
    pub fn start(&mut self) -> Result<()> {
        if self.playing() {
            return Err(PilotError::AlreadyActive);
        }
        self.install_hooks();
        Ok(())
    }

    /// Stop intercepting and restore the saved entry points verbatim
    pub fn stop(&mut self) -> Result<()> {
        if !self.playing() {
            return Err(PilotError::AlreadyInactive);
        }
        self.restore_hooks();
        Ok(())
    }

    /// Whether the session is currently intercepting
    pub fn playing(&self) -> bool {
        self.saved.is_some()
    }

    /// Idempotent start/stop: writing the current value is a no-op
    pub fn set_playing(&mut self, value: bool) {
        if value == self.playing() {
            return;
        }
        if value {
            self.install_hooks();
        } else {
            self.restore_hooks();
        }
    }

    /// Start and return a guard that stops on drop
    ///
    /// The guard restores the saved entry points exactly once however the
    /// scope is left, including by panic unwinding.
    pub fn activate(&mut self) -> Result<ActiveSession<'_, P>> {
        self.start()?;
        Ok(ActiveSession { session: self })
    }

    /// The dispatch table this session intercepts
    pub fn dispatch(&self) -> Rc<Dispatch> {
        self.dispatch.clone()
    }

    /// Shared handle to the player
    pub fn player(&self) -> Rc<RefCell<P>> {
        self.player.clone()
    }

    /// This session's configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Virtual time accumulated so far, in ms
    pub fn game_time_ms(&self) -> f64 {
        self.state.borrow().game_time
    }

    /// Save the current slots and install intercepted versions of all five
    fn install_hooks(&mut self) {
        let saved = self.dispatch.snapshot();
        let interval_ms = self.config.frame_interval_ms();

        // TODO: recurring timer events bypass the table entirely;
        // intercept them once GameBackend grows a set_timer entry point.
        let slots = SlotSet {
            present: intercept(
                saved.present.clone(),
                frame_observer(self.player.clone(), self.state.clone(), interval_ms),
            ),
            update: intercept(
                saved.update.clone(),
                frame_observer(self.player.clone(), self.state.clone(), interval_ms),
            ),
            poll_events: intercept(
                saved.poll_events.clone(),
                poll_observer(self.state.clone()),
            ),
            create_clock: intercept(
                saved.create_clock.clone(),
                clock_observer(self.state.clone(), interval_ms),
            ),
            ticks: intercept(saved.ticks.clone(), ticks_observer(self.state.clone())),
        };

        self.dispatch.install(slots);
        self.saved = Some(saved);
        info!(fps = self.config.desired_fps, "session started");
    }

    /// Install the saved slots back, if any
    fn restore_hooks(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.dispatch.install(saved);
            info!("session stopped");
        }
    }
}

impl<P: Player + 'static> Drop for Session<P> {
    fn drop(&mut self) {
        self.restore_hooks();
    }
}

/// Guard for a running session, returned by [`Session::activate`]
///
/// Restores the intercepted entry points when dropped.
pub struct ActiveSession<'a, P: Player + 'static> {
    session: &'a mut Session<P>,
}

impl<P: Player + 'static> ActiveSession<'_, P> {
    /// The dispatch table the host should keep calling
    pub fn dispatch(&self) -> Rc<Dispatch> {
        self.session.dispatch()
    }

    /// Virtual time accumulated so far, in ms
    pub fn game_time_ms(&self) -> f64 {
        self.session.game_time_ms()
    }
}

impl<P: Player + 'static> Drop for ActiveSession<'_, P> {
    fn drop(&mut self) {
        self.session.restore_hooks();
    }
}

/// Observer for the present/update slots: capture, decide, advance time
///
/// Runs after the real present on the host's stack. Must not call back
/// into present/update or it would recurse through the interception
/// layer.
fn frame_observer<P: Player + 'static>(
    player: Rc<RefCell<P>>,
    state: Rc<RefCell<PaceState>>,
    interval_ms: f64,
) -> impl Fn(Result<()>, &BackendHandle) -> Result<()> + 'static {
    move |presented, backend| {
        presented?;
        let frame = backend.borrow_mut().capture_frame()?;
        let keys = {
            let mut player = player.borrow_mut();
            let feedback = player.feedback();
            player.keys_pressed(&frame, feedback)
        };
        let mut state = state.borrow_mut();
        state.record_keys(keys);
        state.game_time += interval_ms;
        trace!(game_time_ms = state.game_time, "frame observed");
        Ok(())
    }
}

/// Observer for the poll slot: the real queue is drained and discarded,
/// and only events synthesized from the key-set diff reach the host
fn poll_observer(
    state: Rc<RefCell<PaceState>>,
) -> impl Fn(Result<Vec<Event>>, &PollRequest) -> Result<Vec<Event>> + 'static {
    move |drained, request| {
        drained?;
        Ok(state.borrow().synthesize_events(&request.filters))
    }
}

/// Observer for the clock slot: the real clock is discarded in favor of
/// a fixed-step one bound to the session
fn clock_observer(
    state: Rc<RefCell<PaceState>>,
    interval_ms: f64,
) -> impl Fn(Result<Box<dyn GameClock>>, &BackendHandle) -> Result<Box<dyn GameClock>> + 'static {
    move |constructed, _backend| {
        constructed?;
        Ok(Box::new(FixedStepClock::new(interval_ms, state.clone())) as Box<dyn GameClock>)
    }
}

/// Observer for the tick-counter slot: reports virtual time
fn ticks_observer(
    state: Rc<RefCell<PaceState>>,
) -> impl Fn(Result<f64>, &BackendHandle) -> Result<f64> + 'static {
    move |elapsed, _backend| {
        elapsed?;
        Ok(state.borrow().game_time)
    }
}

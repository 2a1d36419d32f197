//! Indirection table for the interceptable entry points

use std::cell::RefCell;
use std::rc::Rc;

use pilot_core::{Event, EventKind, Frame, GameClock, Result};
use tracing::debug;

use crate::backend::{BackendHandle, GameBackend};

/// Slot for the present and update entry points
pub type PresentSlot = Rc<dyn Fn(BackendHandle) -> Result<()>>;

/// Slot for the event-poll entry point
pub type PollSlot = Rc<dyn Fn(PollRequest) -> Result<Vec<Event>>>;

/// Slot for the clock-constructor entry point
pub type ClockSlot = Rc<dyn Fn(BackendHandle) -> Result<Box<dyn GameClock>>>;

/// Slot for the tick-counter entry point
pub type TicksSlot = Rc<dyn Fn(BackendHandle) -> Result<f64>>;

/// One event-poll call, normalized to a single clonable value
#[derive(Clone)]
pub struct PollRequest {
    /// Backend the poll runs against
    pub backend: BackendHandle,
    /// Ordered filter sequence; empty means no filtering
    pub filters: Vec<EventKind>,
}

/// The five interceptable entry points as one unit
///
/// Saving and installing a whole set keeps the swap a single logical
/// transition. Slots are reference counted, so whether two sets hold the
/// same functions is observable with [`Rc::ptr_eq`].
#[derive(Clone)]
pub struct SlotSet {
    pub present: PresentSlot,
    pub update: PresentSlot,
    pub poll_events: PollSlot,
    pub create_clock: ClockSlot,
    pub ticks: TicksSlot,
}

impl SlotSet {
    /// Slots that route every call straight to the backend
    fn direct() -> Self {
        Self {
            present: Rc::new(|backend: BackendHandle| backend.borrow_mut().present()),
            update: Rc::new(|backend: BackendHandle| backend.borrow_mut().update()),
            poll_events: Rc::new(|request: PollRequest| {
                request.backend.borrow_mut().poll_events(&request.filters)
            }),
            create_clock: Rc::new(|backend: BackendHandle| backend.borrow_mut().create_clock()),
            ticks: Rc::new(|backend: BackendHandle| backend.borrow_mut().ticks()),
        }
    }
}

/// The capability table a host game runs against
///
/// The host calls `present`/`update`/`poll_events`/`create_clock`/`ticks`
/// here instead of on library globals. Each call goes through a
/// replaceable slot, so a session can observe and reroute them without
/// the host noticing; `snapshot` and `install` are the save-and-replace /
/// restore transitions.
pub struct Dispatch {
    backend: BackendHandle,
    present: RefCell<PresentSlot>,
    update: RefCell<PresentSlot>,
    poll_events: RefCell<PollSlot>,
    create_clock: RefCell<ClockSlot>,
    ticks: RefCell<TicksSlot>,
}

impl Dispatch {
    /// Build a table over a shared backend handle, with direct slots
    pub fn new(backend: BackendHandle) -> Self {
        let slots = SlotSet::direct();
        Self {
            backend,
            present: RefCell::new(slots.present),
            update: RefCell::new(slots.update),
            poll_events: RefCell::new(slots.poll_events),
            create_clock: RefCell::new(slots.create_clock),
            ticks: RefCell::new(slots.ticks),
        }
    }

    /// Build a table owning the given backend
    pub fn with_backend(backend: impl GameBackend + 'static) -> Self {
        Self::new(Rc::new(RefCell::new(backend)))
    }

    /// Handle to the underlying backend
    pub fn backend(&self) -> BackendHandle {
        self.backend.clone()
    }

    /// Present the rendered frame
    pub fn present(&self) -> Result<()> {
        let slot = self.present.borrow().clone();
        slot(self.backend.clone())
    }

    /// Present a partial update of the rendered frame
    pub fn update(&self) -> Result<()> {
        let slot = self.update.borrow().clone();
        slot(self.backend.clone())
    }

    /// Drain pending input events, optionally filtered
    pub fn poll_events(&self, filters: &[EventKind]) -> Result<Vec<Event>> {
        let slot = self.poll_events.borrow().clone();
        slot(PollRequest {
            backend: self.backend.clone(),
            filters: filters.to_vec(),
        })
    }

    /// Construct a frame-pacing clock
    pub fn create_clock(&self) -> Result<Box<dyn GameClock>> {
        let slot = self.create_clock.borrow().clone();
        slot(self.backend.clone())
    }

    /// Milliseconds elapsed since the backend was initialized
    pub fn ticks(&self) -> Result<f64> {
        let slot = self.ticks.borrow().clone();
        slot(self.backend.clone())
    }

    /// Snapshot the active display surface
    ///
    /// Frame capture is not an interceptable entry point; it goes to the
    /// backend directly.
    pub fn capture_frame(&self) -> Result<Frame> {
        self.backend.borrow_mut().capture_frame()
    }

    /// Clones of the currently installed slots
    pub fn snapshot(&self) -> SlotSet {
        SlotSet {
            present: self.present.borrow().clone(),
            update: self.update.borrow().clone(),
            poll_events: self.poll_events.borrow().clone(),
            create_clock: self.create_clock.borrow().clone(),
            ticks: self.ticks.borrow().clone(),
        }
    }

    /// Replace all five slots
    pub fn install(&self, slots: SlotSet) {
        *self.present.borrow_mut() = slots.present;
        *self.update.borrow_mut() = slots.update;
        *self.poll_events.borrow_mut() = slots.poll_events;
        *self.create_clock.borrow_mut() = slots.create_clock;
        *self.ticks.borrow_mut() = slots.ticks;
        debug!("dispatch slots installed");
    }
}

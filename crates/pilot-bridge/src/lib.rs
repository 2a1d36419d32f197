//! Backend capability table and interception combinator for game-pilot
//!
//! This crate provides:
//! - The `GameBackend` trait: the entry points a host game calls on its
//!   graphics/input library, expressed as an explicit capability instead
//!   of global symbols
//! - The `Dispatch` indirection table the host is handed, whose function
//!   slots a session can save, replace, and restore as one unit
//! - The `intercept` combinator that wraps a slot so an observer runs
//!   after the original call

pub mod backend;
pub mod dispatch;
pub mod intercept;

pub use backend::{BackendHandle, GameBackend};
pub use dispatch::{
    ClockSlot, Dispatch, PollRequest, PollSlot, PresentSlot, SlotSet, TicksSlot,
};
pub use intercept::intercept;

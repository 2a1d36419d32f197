//! # pilot-session
//!
//! Session controller for game-pilot.
//!
//! A [`Session`] wraps a game's [`Dispatch`](pilot_bridge::Dispatch)
//! table so that, while active:
//! - every present/update captures the frame and asks the
//!   [`Player`](pilot_core::Player) for feedback and desired keys,
//! - every input poll returns key events synthesized from the diff
//!   between the current and previous desired-key sets (the real queue
//!   is drained and discarded),
//! - every clock the host constructs is a fixed-step virtual clock, so
//!   the game runs at the configured frame rate instead of real time.
//!
//! Stopping the session restores the original entry points exactly.

pub mod clock;
pub mod session;
mod state;

pub use clock::FixedStepClock;
pub use session::{ActiveSession, Session, SessionConfig};

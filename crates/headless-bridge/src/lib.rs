//! In-process synthetic game backend
//!
//! This crate provides a [`GameBackend`](pilot_bridge::GameBackend)
//! implementation with no real window, input device, or timer behind it:
//! - a framebuffer that redraws a deterministic pattern on every
//!   present/update, so successive captured frames differ,
//! - a FIFO input queue seeded through [`HeadlessBackend::push_event`],
//! - a wall-time [`WallClock`] of the kind a session's fixed-step clock
//!   stands in for.
//!
//! It exists so session behavior can be exercised end to end without a
//! real game attached.

pub mod backend;
pub mod clock;

pub use backend::{HeadlessBackend, HeadlessConfig};
pub use clock::WallClock;

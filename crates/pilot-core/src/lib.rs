//! # pilot-core
//!
//! Core types and traits for game-pilot sessions.
//!
//! This crate provides the foundational types used across the game-pilot
//! workspace:
//! - Key codes and synthetic input events
//! - Captured framebuffer snapshots
//! - The clock capability implemented by real and virtual timers
//! - The `Player` trait implemented by consumers (e.g. learning agents)
//! - Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod frame;
pub mod key;
pub mod player;

pub use clock::GameClock;
pub use error::{PilotError, Result};
pub use event::{Event, EventKind};
pub use frame::{FRAME_CHANNELS, Frame};
pub use key::{KeyCode, key_codes};
pub use player::Player;

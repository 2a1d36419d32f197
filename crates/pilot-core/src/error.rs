//! Error types for game-pilot

use thiserror::Error;

/// Result type for game-pilot operations
pub type Result<T> = std::result::Result<T, PilotError>;

/// game-pilot error types
#[derive(Debug, Error)]
pub enum PilotError {
    /// Session started while already intercepting
    #[error("session already active")]
    AlreadyActive,

    /// Session stopped while not intercepting
    #[error("session already inactive")]
    AlreadyInactive,

    /// Target frame rate must be strictly positive
    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f64),

    /// Pixel buffer does not match the declared dimensions
    #[error("frame geometry mismatch: {width}x{height} needs {expected} bytes, got {actual}")]
    FrameGeometry {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Failure surfaced by the game backend
    #[error("backend error: {0}")]
    Backend(String),
}

//! Captured framebuffer snapshots

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PilotError, Result};

/// Color channels per pixel (tightly packed RGB)
pub const FRAME_CHANNELS: usize = 3;

/// A single captured frame: width x height x RGB
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major pixel bytes, `width * height * FRAME_CHANNELS` long
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame, validating the pixel buffer against the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * FRAME_CHANNELS;
        if pixels.len() != expected {
            return Err(PilotError::FrameGeometry {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an all-black frame of the given dimensions
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * FRAME_CHANNELS],
        }
    }

    /// RGB value of the pixel at (x, y)
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; FRAME_CHANNELS] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * FRAME_CHANNELS;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    /// Hex-encoded SHA-256 digest of the pixel contents
    ///
    /// Frames with identical dimensions and pixels hash identically, so
    /// digests can stand in for full buffers when verifying determinism.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.pixels);
        hex::encode(hasher.finalize())
    }
}

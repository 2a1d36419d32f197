//! Synthetic game backend

use std::collections::VecDeque;
use std::time::Instant;

use pilot_bridge::GameBackend;
use pilot_core::{Event, EventKind, Frame, GameClock, Result};
use tracing::debug;

use crate::clock::WallClock;

/// Configuration for the headless backend
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
        }
    }
}

/// Game backend with a synthetic framebuffer and a real input queue
///
/// Every present/update redraws the framebuffer with a pattern derived
/// from the frame counter, `poll_events` drains the queue, and `ticks`
/// reports wall time since construction.
pub struct HeadlessBackend {
    framebuffer: Frame,
    queue: VecDeque<Event>,
    presents: u64,
    updates: u64,
    started: Instant,
}

impl HeadlessBackend {
    pub fn new(config: HeadlessConfig) -> Self {
        Self {
            framebuffer: Frame::blank(config.width, config.height),
            queue: VecDeque::new(),
            presents: 0,
            updates: 0,
            started: Instant::now(),
        }
    }

    /// Queue an event as if the user had produced it
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Number of full presents so far
    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Number of partial updates so far
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Events still waiting in the input queue
    pub fn queued_events(&self) -> usize {
        self.queue.len()
    }

    /// Redraw with a pattern derived from the frame counter
    fn redraw(&mut self) {
        let frame_no = self.presents + self.updates;
        for (i, byte) in self.framebuffer.pixels.iter_mut().enumerate() {
            *byte = (i as u64).wrapping_add(frame_no.wrapping_mul(31)) as u8;
        }
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(HeadlessConfig::default())
    }
}

impl GameBackend for HeadlessBackend {
    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        self.redraw();
        debug!(presents = self.presents, "headless present");
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.updates += 1;
        self.redraw();
        debug!(updates = self.updates, "headless update");
        Ok(())
    }

    fn poll_events(&mut self, filters: &[EventKind]) -> Result<Vec<Event>> {
        if filters.is_empty() {
            return Ok(self.queue.drain(..).collect());
        }
        // Matching events leave the queue; the rest stay pending
        let mut taken = Vec::new();
        let mut kept = VecDeque::new();
        for event in self.queue.drain(..) {
            if filters.contains(&event.kind()) {
                taken.push(event);
            } else {
                kept.push_back(event);
            }
        }
        self.queue = kept;
        Ok(taken)
    }

    fn create_clock(&mut self) -> Result<Box<dyn GameClock>> {
        Ok(Box::new(WallClock::new()))
    }

    fn ticks(&mut self) -> Result<f64> {
        Ok(self.started.elapsed().as_secs_f64() * 1000.0)
    }

    fn capture_frame(&mut self) -> Result<Frame> {
        Ok(self.framebuffer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presents_redraw_the_framebuffer() -> anyhow::Result<()> {
        let mut backend = HeadlessBackend::new(HeadlessConfig {
            width: 8,
            height: 8,
        });

        let before = backend.capture_frame()?;
        backend.present()?;
        let first = backend.capture_frame()?;
        backend.present()?;
        let second = backend.capture_frame()?;

        assert_eq!(backend.presents(), 2);
        assert_ne!(before.content_hash(), first.content_hash());
        assert_ne!(first.content_hash(), second.content_hash());
        assert_eq!(first.width, 8);
        assert_eq!(first.pixels.len(), 8 * 8 * 3);
        Ok(())
    }

    #[test]
    fn test_redraw_is_deterministic_per_frame_number() -> anyhow::Result<()> {
        let mut a = HeadlessBackend::default();
        let mut b = HeadlessBackend::default();

        a.present()?;
        b.present()?;
        assert_eq!(
            a.capture_frame()?.content_hash(),
            b.capture_frame()?.content_hash()
        );
        Ok(())
    }

    #[test]
    fn test_unfiltered_poll_drains_in_order() -> anyhow::Result<()> {
        let mut backend = HeadlessBackend::default();
        backend.push_event(Event::KeyDown { key: 1 });
        backend.push_event(Event::KeyUp { key: 1 });

        let events = backend.poll_events(&[])?;
        assert_eq!(
            events,
            vec![Event::KeyDown { key: 1 }, Event::KeyUp { key: 1 }]
        );
        assert_eq!(backend.queued_events(), 0);
        Ok(())
    }

    #[test]
    fn test_filtered_poll_leaves_other_events_queued() -> anyhow::Result<()> {
        let mut backend = HeadlessBackend::default();
        backend.push_event(Event::KeyDown { key: 1 });
        backend.push_event(Event::Quit);
        backend.push_event(Event::KeyDown { key: 2 });

        let downs = backend.poll_events(&[EventKind::KeyDown])?;
        assert_eq!(
            downs,
            vec![Event::KeyDown { key: 1 }, Event::KeyDown { key: 2 }]
        );
        assert_eq!(backend.queued_events(), 1);

        let rest = backend.poll_events(&[])?;
        assert_eq!(rest, vec![Event::Quit]);
        Ok(())
    }

    #[test]
    fn test_ticks_move_forward() -> anyhow::Result<()> {
        let mut backend = HeadlessBackend::default();
        let first = backend.ticks()?;
        let second = backend.ticks()?;
        assert!(first >= 0.0);
        assert!(second >= first);
        Ok(())
    }
}

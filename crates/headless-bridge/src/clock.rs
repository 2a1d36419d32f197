//! Wall-time frame-pacing clock

use std::thread;
use std::time::{Duration, Instant};

use pilot_core::GameClock;

/// Real-time clock with optional frame capping
///
/// `tick` measures the time since the previous tick and, when a cap is
/// given, waits out the remainder of the frame; `tick_busy_loop` spins
/// instead of sleeping for a tighter cap. This is the timer a session's
/// fixed-step clock stands in for.
pub struct WallClock {
    last_tick: Instant,
    last_ms: f64,
    last_raw_ms: f64,
    ticks: u64,
    created: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            last_ms: 0.0,
            last_raw_ms: 0.0,
            ticks: 0,
            created: now,
        }
    }

    fn pace(&mut self, framerate: f64, busy: bool) -> f64 {
        let raw_ms = self.last_tick.elapsed().as_secs_f64() * 1000.0;

        if framerate > 0.0 {
            let target_ms = 1000.0 / framerate;
            if raw_ms < target_ms {
                let deadline = self.last_tick + Duration::from_secs_f64(target_ms / 1000.0);
                if busy {
                    while Instant::now() < deadline {
                        std::hint::spin_loop();
                    }
                } else {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
            }
        }

        let total_ms = self.last_tick.elapsed().as_secs_f64() * 1000.0;
        self.last_tick = Instant::now();
        self.last_raw_ms = raw_ms;
        self.last_ms = total_ms;
        self.ticks += 1;
        total_ms
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock for WallClock {
    fn tick(&mut self, framerate: f64) -> f64 {
        self.pace(framerate, false)
    }

    fn tick_busy_loop(&mut self, framerate: f64) -> f64 {
        self.pace(framerate, true)
    }

    fn time(&self) -> f64 {
        self.last_ms
    }

    fn raw_time(&self) -> f64 {
        self.last_raw_ms
    }

    fn fps(&self) -> u32 {
        let elapsed = self.created.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            (self.ticks as f64 / elapsed) as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_tick_does_not_wait() {
        let mut clock = WallClock::new();

        let elapsed = clock.tick(0.0);
        assert!(elapsed >= 0.0);
        assert_eq!(clock.time(), elapsed);
        assert!(clock.raw_time() <= clock.time());
    }

    #[test]
    fn test_capped_tick_waits_out_the_frame() {
        let mut clock = WallClock::new();

        // 200 fps cap: the frame must take at least ~5ms of wall time
        let elapsed = clock.tick(200.0);
        assert!(elapsed >= 4.0, "tick returned after {elapsed}ms");
        assert!(clock.raw_time() <= clock.time());
    }
}

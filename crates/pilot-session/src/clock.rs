//! Fixed-step virtual clock

use std::cell::RefCell;
use std::rc::Rc;

use pilot_core::GameClock;

use crate::state::PaceState;

/// Virtual timer reporting a fixed per-frame interval
///
/// Handed to the host in place of the backend's real clock while a
/// session is active. `tick` never sleeps and always grants exactly one
/// frame interval, which decouples simulated time from wall-clock time:
/// the host runs frames as fast as the player can compute them, and the
/// game believes it is pacing normally.
pub struct FixedStepClock {
    interval_ms: f64,
    state: Rc<RefCell<PaceState>>,
}

impl FixedStepClock {
    pub(crate) fn new(interval_ms: f64, state: Rc<RefCell<PaceState>>) -> Self {
        Self { interval_ms, state }
    }
}

impl GameClock for FixedStepClock {
    fn tick(&mut self, _framerate: f64) -> f64 {
        self.interval_ms
    }

    fn tick_busy_loop(&mut self, _framerate: f64) -> f64 {
        self.interval_ms
    }

    fn time(&self) -> f64 {
        self.state.borrow().game_time
    }

    fn raw_time(&self) -> f64 {
        self.state.borrow().game_time
    }

    fn fps(&self) -> u32 {
        (1000.0 / self.interval_ms).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(interval_ms: f64) -> FixedStepClock {
        FixedStepClock::new(interval_ms, Rc::new(RefCell::new(PaceState::default())))
    }

    #[test]
    fn test_tick_ignores_framerate_cap() {
        let mut clock = clock(100.0);

        assert_eq!(clock.tick(0.0), 100.0);
        assert_eq!(clock.tick(60.0), 100.0);
        assert_eq!(clock.tick_busy_loop(144.0), 100.0);
    }

    #[test]
    fn test_time_reads_shared_game_time() {
        let state = Rc::new(RefCell::new(PaceState::default()));
        let clock = FixedStepClock::new(50.0, state.clone());

        state.borrow_mut().game_time = 350.0;
        assert_eq!(clock.time(), 350.0);
        assert_eq!(clock.raw_time(), 350.0);
    }

    #[test]
    fn test_fps_floors_the_interval() {
        assert_eq!(clock(100.0).fps(), 10);
        assert_eq!(clock(20.0).fps(), 50);
        // 1000/3 ms per frame floors back to 3 fps
        assert_eq!(clock(1000.0 / 3.0).fps(), 3);
    }
}

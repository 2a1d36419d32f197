//! Pacing state shared with the installed hooks

use pilot_core::{Event, EventKind, KeyCode};

/// Key-press snapshot and virtual-time accumulator
///
/// Mutated only by the frame handler; read by the poll, clock, and tick
/// hooks. Everything runs on the host's call stack, one frame at a time.
#[derive(Debug, Default)]
pub(crate) struct PaceState {
    /// Keys the player wants held for the current frame
    pub current_keys: Vec<KeyCode>,
    /// Keys held for the previous frame
    pub previous_keys: Vec<KeyCode>,
    /// Virtual time in ms; advances one frame interval per present/update
    pub game_time: f64,
}

impl PaceState {
    /// Record a new frame decision, shifting current into previous
    pub fn record_keys(&mut self, keys: Vec<KeyCode>) {
        self.previous_keys = std::mem::replace(&mut self.current_keys, keys);
    }

    /// Synthesize input events from the key-set diff
    ///
    /// Key-down events are keys newly held this frame, key-up events keys
    /// released since the last frame; relative order follows the player's
    /// key lists. With no filters, key-down events precede key-up events.
    /// Filters are processed left to right and their results concatenated,
    /// so duplicate filters duplicate their events. A quit filter yields
    /// nothing: the host is never asked to exit.
    pub fn synthesize_events(&self, filters: &[EventKind]) -> Vec<Event> {
        let key_down: Vec<Event> = self
            .current_keys
            .iter()
            .filter(|key| !self.previous_keys.contains(key))
            .map(|&key| Event::KeyDown { key })
            .collect();
        let key_up: Vec<Event> = self
            .previous_keys
            .iter()
            .filter(|key| !self.current_keys.contains(key))
            .map(|&key| Event::KeyUp { key })
            .collect();

        if filters.is_empty() {
            let mut events = key_down;
            events.extend(key_up);
            return events;
        }

        let mut events = Vec::new();
        for filter in filters {
            match filter {
                EventKind::Quit => {}
                EventKind::KeyUp => events.extend(key_up.iter().cloned()),
                EventKind::KeyDown => events.extend(key_down.iter().cloned()),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current: &[KeyCode], previous: &[KeyCode]) -> PaceState {
        PaceState {
            current_keys: current.to_vec(),
            previous_keys: previous.to_vec(),
            game_time: 0.0,
        }
    }

    #[test]
    fn test_record_keys_shifts_current_into_previous() {
        let mut state = state(&[1, 2], &[]);
        state.record_keys(vec![2, 3]);

        assert_eq!(state.previous_keys, vec![1, 2]);
        assert_eq!(state.current_keys, vec![2, 3]);
    }

    #[test]
    fn test_newly_held_key_produces_one_key_down() {
        let events = state(&[10, 20], &[10]).synthesize_events(&[]);
        assert_eq!(events, vec![Event::KeyDown { key: 20 }]);
    }

    #[test]
    fn test_released_key_produces_one_key_up() {
        let state = state(&[10], &[10, 20]);

        let ups = state.synthesize_events(&[EventKind::KeyUp]);
        assert_eq!(ups, vec![Event::KeyUp { key: 20 }]);

        let downs = state.synthesize_events(&[EventKind::KeyDown]);
        assert!(downs.is_empty());
    }

    #[test]
    fn test_unfiltered_poll_orders_downs_before_ups() {
        let events = state(&[1, 2], &[2, 3]).synthesize_events(&[]);
        assert_eq!(
            events,
            vec![Event::KeyDown { key: 1 }, Event::KeyUp { key: 3 }]
        );
    }

    #[test]
    fn test_relative_order_preserved() {
        let events = state(&[5, 3, 1], &[]).synthesize_events(&[]);
        assert_eq!(
            events,
            vec![
                Event::KeyDown { key: 5 },
                Event::KeyDown { key: 3 },
                Event::KeyDown { key: 1 },
            ]
        );
    }

    #[test]
    fn test_quit_filter_yields_nothing() {
        let state = state(&[1], &[2]);
        assert!(state.synthesize_events(&[EventKind::Quit]).is_empty());

        let events = state.synthesize_events(&[EventKind::Quit, EventKind::KeyDown]);
        assert_eq!(events, vec![Event::KeyDown { key: 1 }]);
    }

    #[test]
    fn test_filters_concatenate_left_to_right() {
        let state = state(&[1], &[2]);

        let events =
            state.synthesize_events(&[EventKind::KeyUp, EventKind::KeyDown, EventKind::KeyUp]);
        assert_eq!(
            events,
            vec![
                Event::KeyUp { key: 2 },
                Event::KeyDown { key: 1 },
                Event::KeyUp { key: 2 },
            ]
        );
    }
}

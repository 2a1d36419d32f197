//! Synthetic input events

use serde::{Deserialize, Serialize};

use crate::key::KeyCode;

/// An input event as seen by the host game's poll loop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A key transitioned to held
    KeyDown { key: KeyCode },
    /// A key transitioned to released
    KeyUp { key: KeyCode },
    /// The host was asked to exit
    Quit,
}

impl Event {
    /// Discriminant of this event, usable as a poll filter
    pub fn kind(&self) -> EventKind {
        match self {
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::KeyUp { .. } => EventKind::KeyUp,
            Event::Quit => EventKind::Quit,
        }
    }
}

/// Event discriminants, used to filter poll results
///
/// A poll call takes an ordered sequence of these; an empty sequence
/// means no filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    KeyDown,
    KeyUp,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind() {
        assert_eq!(Event::KeyDown { key: 32 }.kind(), EventKind::KeyDown);
        assert_eq!(Event::KeyUp { key: 32 }.kind(), EventKind::KeyUp);
        assert_eq!(Event::Quit.kind(), EventKind::Quit);
    }

    #[test]
    fn test_event_wire_shape() {
        let json = serde_json::to_string(&Event::KeyDown { key: 32 }).unwrap();
        assert_eq!(json, r#"{"type":"key_down","key":32}"#);

        let event: Event = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert_eq!(event, Event::Quit);
    }
}

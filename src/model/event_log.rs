//! Bounded log of recent user-visible events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::constants::DEFAULT_EVENT_LOG_CAPACITY;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Seconds since start-up.
    pub time: f32,
    /// Human-readable description.
    pub description: String,
    /// Category, used for colouring.
    pub kind: EventKind,
}

/// Event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Verdict changed to causal (green).
    Causal,
    /// Verdict changed to non-causal (red).
    NonCausal,
    /// Speed-of-light preset or other configuration changed (blue).
    Config,
    /// Animation started, paused or scrubbed (gray).
    Animation,
    /// Input rejected by validation (yellow).
    Rejected,
}

/// Event log keeping the most recent entries, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<LoggedEvent>,
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_LOG_CAPACITY)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `max_events` entries.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds an event and mirrors it to the `log` facade.
    pub fn log(&mut self, time: f32, description: String, kind: EventKind) {
        match kind {
            EventKind::Rejected => log::warn!("{}", description),
            _ => log::info!("{}", description),
        }

        self.events.push_front(LoggedEvent {
            time,
            description,
            kind,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

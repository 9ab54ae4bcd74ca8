//! Bounded telemetry log.
//!
//! The log keeps the most recent entries only. Recording never fails: an
//! empty or odd event name is stored as given, and the oldest entry is
//! dropped once the capacity is reached.

use std::collections::VecDeque;
use std::collections::vec_deque;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Default number of entries retained.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Opaque event payload. The session never inspects it.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A single telemetry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl EventLogEntry {
    /// Timestamp in ISO-8601 form with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Append-only ring of the most recent telemetry entries, newest first.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Create a log retaining at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event stamped with the current time.
    pub fn record(&mut self, event_name: impl Into<String>, payload: Option<Payload>) {
        let entry = EventLogEntry {
            timestamp: Utc::now(),
            event_name: event_name.into(),
            payload,
        };
        tracing::trace!(event = %entry.event_name, "telemetry event recorded");
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, EventLogEntry> {
        self.entries.iter()
    }

    /// Entries, oldest first (inspector order).
    pub fn chronological(&self) -> std::iter::Rev<vec_deque::Iter<'_, EventLogEntry>> {
        self.entries.iter().rev()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&EventLogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Session configuration.

use crate::event_log::DEFAULT_LOG_CAPACITY;
use crate::unlock::LAB_UNLOCK_THRESHOLD;

/// Tunables for a [`crate::SessionController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of telemetry entries retained by the event log.
    pub log_capacity: usize,

    /// Completed modules required before the evidence lab opens.
    pub lab_unlock_threshold: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
            lab_unlock_threshold: LAB_UNLOCK_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Set the event log capacity (clamped to at least 1 by the log).
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Set the evidence lab unlock threshold.
    #[must_use]
    pub fn with_lab_unlock_threshold(mut self, threshold: usize) -> Self {
        self.lab_unlock_threshold = threshold;
        self
    }
}

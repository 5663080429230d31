//! Debounce stage ahead of lookup dispatch
//!
//! Each keystroke would otherwise fire its own HTTP request. The debouncer
//! holds only the latest query and releases it once the typing pauses for
//! the configured quiet period.

use std::time::{Duration, Instant};

/// Debouncer for lookup dispatch
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period in milliseconds
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedule a query, replacing any previously scheduled one
    pub fn schedule(&mut self, query: String) {
        self.pending = Some((query, Instant::now() + self.delay));
    }

    /// Drop the scheduled query without dispatching it
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Whether a query is waiting for its quiet period to elapse
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the scheduled query once its quiet period has elapsed
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(query, _)| query),
            _ => None,
        }
    }

    /// Time until the scheduled query becomes ready, for event-loop poll
    /// timeouts. None when nothing is scheduled.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;

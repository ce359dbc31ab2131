//! Pausable millisecond stopwatch.
//!
//! Every method takes the current `Instant` instead of reading the clock
//! itself, so tests can drive time explicitly.

use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct Timer {
    started_at: Option<Instant>,
    /// Ticks frozen at the moment of pausing.
    paused_ticks: Option<u64>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start from zero.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.paused_ticks = None;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.paused_ticks = None;
    }

    pub fn pause(&mut self, now: Instant) {
        if self.is_started() && !self.is_paused() {
            self.paused_ticks = Some(self.ticks(now));
        }
    }

    pub fn unpause(&mut self, now: Instant) {
        if let Some(frozen) = self.paused_ticks.take() {
            // Shift the start so that `ticks` resumes from the frozen value.
            self.started_at = now.checked_sub(std::time::Duration::from_millis(frozen));
            if self.started_at.is_none() {
                log::warn!("Cannot rewind clock by {} ms, restarting timer", frozen);
                self.started_at = Some(now);
            }
        }
    }

    /// Milliseconds since start, excluding paused time. Zero when stopped.
    pub fn ticks(&self, now: Instant) -> u64 {
        match (self.started_at, self.paused_ticks) {
            (None, _) => 0,
            (Some(_), Some(frozen)) => frozen,
            (Some(start), None) => now.saturating_duration_since(start).as_millis() as u64,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.is_started() && self.paused_ticks.is_some()
    }
}

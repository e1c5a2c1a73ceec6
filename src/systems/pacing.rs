//! Fixed-rate tick pacing
//!
//! Best effort only: the next tick is due one interval after the previous
//! tick started. A tick that runs long is followed immediately by the next
//! one, without extra catch-up ticks and without skipping any.

use std::time::{Duration, Instant};

/// Caps the tick rate of the simulation loop
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FramePacer {
    /// Create a pacer for `tick_rate` ticks per second
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / tick_rate.max(1),
            last_tick: None,
        }
    }

    /// When the next tick should start
    ///
    /// Before the first tick this is `now`.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        self.last_tick.map_or(now, |last| last + self.interval)
    }

    /// Whether a tick may start at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline(now)
    }

    /// Record that a tick started at `now`
    pub fn begin_tick(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    /// Start a tick at `now` if one is due
    ///
    /// Returns `false`, leaving the pacer untouched, when the previous tick
    /// started less than one interval ago.
    pub fn try_begin_tick(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.begin_tick(now);
        true
    }
}

//! Periodic ticker
//!
//! A deadline-based trigger with a fixed period. The event loop asks it how
//! long to wait, then lets it fire for every period that has elapsed. Time is
//! always passed in, so the ticker never reads the clock itself.

use std::time::{Duration, Instant};

/// Fixed-period ticker that only fires while armed
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_fire: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker; a zero period is raised to one millisecond
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_fire: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Schedule the first fire one period after `now`, resetting any phase
    pub fn arm(&mut self, now: Instant) {
        self.next_fire = Some(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.next_fire = None;
    }

    /// Arm or disarm to match `enabled`; an already armed ticker keeps its phase
    pub fn sync(&mut self, enabled: bool, now: Instant) {
        match (enabled, self.is_armed()) {
            (true, false) => self.arm(now),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Time left before the next fire, or `None` while disarmed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_fire
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Invoke `callback` once for every period elapsed up to `now`
    ///
    /// Returns the number of fires. The callback may disarm the ticker through
    /// its return value: returning `false` stops further fires in this call
    /// and leaves the ticker disarmed.
    pub fn fire_due<F>(&mut self, now: Instant, mut callback: F) -> u32
    where
        F: FnMut() -> bool,
    {
        let mut fired = 0;
        while let Some(deadline) = self.next_fire {
            if deadline > now {
                break;
            }
            fired += 1;
            if callback() {
                self.next_fire = Some(deadline + self.period);
            } else {
                self.next_fire = None;
            }
        }
        fired
    }
}

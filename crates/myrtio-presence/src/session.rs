use embassy_time::{Duration, Instant};

/// Motion timeout bookkeeping for one wake session
///
/// The session expires once strictly more than `timeout` has passed since
/// the last motion. A new motion reading always restarts the full window.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    last_motion: Instant,
    timeout: Duration,
}

impl SessionClock {
    /// Start a session as if motion was seen at `now`
    pub const fn start(now: Instant, timeout: Duration) -> Self {
        Self {
            last_motion: now,
            timeout,
        }
    }

    /// Restart the window at `now`
    pub fn record_motion(&mut self, now: Instant) {
        self.last_motion = now;
    }

    pub const fn last_motion(&self) -> Instant {
        self.last_motion
    }

    /// Instant after which the session is over
    pub fn deadline(&self) -> Instant {
        self.last_motion + self.timeout
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_motion) > self.timeout
    }
}

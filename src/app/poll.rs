use std::time::{Duration, Instant};

/// Fixed-period schedule for the file list refresh. The first check is
/// always due so the list loads as soon as the window opens.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due and schedules the following one.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(next) if now < next => false,
            _ => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map(|next| next.saturating_duration_since(now))
            .unwrap_or_default()
    }
}

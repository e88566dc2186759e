use std::time::{Duration, Instant};

/// Handle for a single repeating tick.
///
/// The handle is owned by whoever scheduled it. Dropping it cancels the
/// schedule: no further fires are reported because nobody is left to ask.
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle {
    id: u64,
    period: Duration,
    next_due: Instant,
}

impl TickHandle {
    /// Schedule a repeating tick whose first fire is one period after `now`
    pub fn start(id: u64, period: Duration, now: Instant) -> Self {
        Self {
            id,
            period,
            next_due: now + period,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Instant of the next fire
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Count the fires that became due at `now` and move the schedule past them.
    ///
    /// Fires are anchored to the start instant, so a late poll does not
    /// drift the cadence.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        let mut fires = 0;
        while self.next_due <= now {
            fires += 1;
            self.next_due += self.period;
        }
        fires
    }
}

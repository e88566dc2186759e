use std::time::Duration;

/// Event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown decrement period in milliseconds
pub const COUNTDOWN_PERIOD_MS: u64 = 1000;

/// Get the event-loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the countdown period (one decrement per fire)
pub fn countdown_period() -> Duration {
    Duration::from_millis(COUNTDOWN_PERIOD_MS)
}

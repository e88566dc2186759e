use super::enums::Preset;
use super::schedule::TickHandle;
use crate::notifications::Notifier;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Seconds per preset, overridable from config.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetDurations {
    pub pomodoro: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for PresetDurations {
    fn default() -> Self {
        Self {
            pomodoro: Preset::Pomodoro.default_seconds(),
            short_break: Preset::ShortBreak.default_seconds(),
            long_break: Preset::LongBreak.default_seconds(),
        }
    }
}

impl PresetDurations {
    pub fn seconds(&self, preset: Preset) -> u32 {
        match preset {
            Preset::Pomodoro => self.pomodoro,
            Preset::ShortBreak => self.short_break,
            Preset::LongBreak => self.long_break,
        }
    }
}

/// Countdown state machine. `Running` owns the only live tick handle.
#[derive(Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running(TickHandle),
}

/// Focus-session countdown
#[derive(Debug)]
pub struct Timer {
    remaining_secs: u32,
    preset: Preset,
    state: TimerState,
    durations: PresetDurations,
    period: Duration,
    next_handle_id: u64,
}

impl Timer {
    pub fn new(durations: PresetDurations, period: Duration) -> Self {
        Self {
            remaining_secs: durations.seconds(Preset::Pomodoro),
            preset: Preset::Pomodoro,
            state: TimerState::Idle,
            durations,
            period,
            next_handle_id: 0,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Id of the live tick handle, if running
    pub fn tick_id(&self) -> Option<u64> {
        match &self.state {
            TimerState::Running(handle) => Some(handle.id()),
            TimerState::Idle => None,
        }
    }

    /// When the next countdown fire is due, if running
    pub fn next_due(&self) -> Option<Instant> {
        match &self.state {
            TimerState::Running(handle) => Some(handle.next_due()),
            TimerState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TimerState::Running(_))
    }

    /// Switch to a preset: stops the countdown and loads the preset's duration
    pub fn select_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.reset(self.durations.seconds(preset));
    }

    /// Cancel any pending tick and load `seconds` as the remaining time
    pub fn reset(&mut self, seconds: u32) {
        self.cancel();
        self.remaining_secs = seconds;
    }

    /// Start or pause. Returns whether the countdown is now running.
    pub fn toggle_run(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Running(_) => {
                self.cancel();
                false
            }
            TimerState::Idle => {
                self.next_handle_id += 1;
                self.state =
                    TimerState::Running(TickHandle::start(self.next_handle_id, self.period, now));
                true
            }
        }
    }

    /// Drop the tick handle, if any
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Apply a single tick. Does nothing while idle.
    ///
    /// Returns true if this fire expired the countdown.
    pub fn fire(&mut self, notifier: &mut dyn Notifier) -> bool {
        if !self.is_active() {
            return false;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.cancel();
            notifier.time_up(self.preset);
            return true;
        }
        false
    }

    /// Apply every tick that became due at `now`. Returns the number applied.
    pub fn advance(&mut self, now: Instant, notifier: &mut dyn Notifier) -> u32 {
        let due = match &mut self.state {
            TimerState::Running(handle) => handle.take_due(now),
            TimerState::Idle => return 0,
        };

        let mut applied = 0;
        for _ in 0..due {
            applied += 1;
            if self.fire(notifier) {
                break;
            }
        }
        applied
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

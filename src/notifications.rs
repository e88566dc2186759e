//! Notification support for countdown expiry.
//! Desktop notifications are only implemented on macOS.

#[cfg(target_os = "macos")]
use std::process::Command;

use crate::domain::Preset;

/// Text shown when the countdown reaches zero
pub const TIME_UP_MESSAGE: &str = "Tempo esgotado!";

/// Receives the "time's up" signal from the timer
pub trait Notifier {
    fn time_up(&mut self, preset: Preset);
}

/// Send a desktop notification when a countdown finishes
pub fn notify_time_up(preset: Preset) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Tempo - {}""#,
            TIME_UP_MESSAGE,
            preset.label().replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = preset;
    }
}

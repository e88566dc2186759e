use crate::config::Config;
use crate::domain::{Preset, Route, TaskId, TaskList, Timer, UiMode};
use crate::notifications::{self, Notifier, TIME_UP_MESSAGE};
use crate::persistence::{AppSettings, LocalStore};
use crate::ticker;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Blocking "time's up" box
#[derive(Debug, Clone)]
pub struct AlertState {
    pub message: String,
    pub preset: Preset,
    pub raised_at: DateTime<Local>,
}

/// Receives expiry signals from the timer during a tick
#[derive(Debug, Default)]
pub struct Alerts {
    pub current: Option<AlertState>,
    pub desktop: bool,
}

impl Notifier for Alerts {
    fn time_up(&mut self, preset: Preset) {
        info!(preset = preset.label(), "countdown finished");
        if self.desktop {
            notifications::notify_time_up(preset);
        }
        self.current = Some(AlertState {
            message: TIME_UP_MESSAGE.to_string(),
            preset,
            raised_at: Local::now(),
        });
    }
}

/// Why the screen is closing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppExit {
    Quit,
    Navigate(Route),
}

/// Main application state
pub struct AppState {
    pub timer: Timer,
    pub tasks: TaskList,
    pub task_input: String,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub alerts: Alerts,
    pub settings: AppSettings,
    pub storage_path: PathBuf, // Local key/value storage holding the session token
    pub exit: Option<AppExit>,
}

impl AppState {
    pub fn new(config: &Config, storage_path: PathBuf) -> Self {
        let mut timer = Timer::new(config.settings.presets, ticker::countdown_period());
        timer.select_preset(config.start_preset);

        Self {
            timer,
            tasks: TaskList::new(),
            task_input: String::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            alerts: Alerts {
                current: None,
                desktop: config.settings.desktop_notifications,
            },
            settings: config.settings.clone(),
            storage_path,
            exit: None,
        }
    }

    /// Switch preset (stops the countdown)
    pub fn select_preset(&mut self, preset: Preset) {
        self.timer.select_preset(preset);
        info!(
            preset = preset.label(),
            seconds = self.timer.remaining_secs(),
            "preset selected"
        );
    }

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self) {
        self.toggle_timer_at(Instant::now());
    }

    pub fn toggle_timer_at(&mut self, now: Instant) {
        let running = self.timer.toggle_run(now);
        info!(
            running,
            tick = ?self.timer.tick_id(),
            remaining = self.timer.remaining_secs(),
            "timer toggled"
        );
    }

    /// Apply due countdown fires
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let fired = self.timer.advance(now, &mut self.alerts);
        if fired > 1 {
            debug!(fired, "timer caught up after a late poll");
        }

        if self.alerts.current.is_some() && self.ui_mode != UiMode::Alert {
            self.ui_mode = UiMode::Alert;
        }
    }

    /// Close the "time's up" box
    pub fn dismiss_alert(&mut self) {
        self.alerts.current = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Focus the "add task" line
    pub fn start_editing_input(&mut self) {
        self.ui_mode = UiMode::EditingInput;
    }

    /// Leave the "add task" line, keeping what was typed
    pub fn stop_editing_input(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.task_input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.task_input.pop();
    }

    /// Add the typed text as a task
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let text = self.task_input.clone();
        self.add_task(&text)
    }

    /// Prepend a task and clear the input. Blank text is ignored.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = self.tasks.add(text)?;
        self.task_input.clear();
        self.selected_index = 0;
        info!(task = %id, "task added");
        Some(id)
    }

    /// Toggle completion of the task at a render position
    pub fn toggle_task(&mut self, index: usize) {
        let Some(id) = self.tasks.get(index).map(|t| t.id) else {
            warn!(index, len = self.tasks.len(), "toggle ignored: no task at position");
            return;
        };

        match self.tasks.toggle(id) {
            Ok(completed) => {
                // Follow the task to its new position
                if let Some(pos) = self.tasks.position(id) {
                    self.selected_index = pos;
                }
                debug!(task = %id, completed, "task toggled");
            }
            Err(e) => warn!("toggle ignored: {}", e),
        }
    }

    /// Remove the task at a render position
    pub fn remove_task(&mut self, index: usize) {
        match self.tasks.remove_at(index) {
            Ok(task) => {
                self.clamp_selection();
                info!(task = %task.id, "task removed");
            }
            Err(e) => warn!("remove ignored: {}", e),
        }
    }

    pub fn toggle_selected(&mut self) {
        if !self.tasks.is_empty() {
            self.toggle_task(self.selected_index);
        }
    }

    pub fn remove_selected(&mut self) {
        if !self.tasks.is_empty() {
            self.remove_task(self.selected_index);
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    /// Clear the session token and leave for the login page.
    ///
    /// A storage failure is logged; the redirect happens regardless.
    pub fn logout(&mut self) {
        self.exit = Some(AppExit::Navigate(Route::Login));

        let cleared = LocalStore::open(&self.storage_path)
            .and_then(|mut store| store.remove(&self.settings.token_key));
        match cleared {
            Ok(had_token) => info!(had_token, "logged out"),
            Err(e) => warn!("logged out without clearing the token: {:#}", e),
        }
    }

    /// Leave for the user-management page
    pub fn open_user_management(&mut self) {
        info!("navigating to user management");
        self.exit = Some(AppExit::Navigate(Route::UserManagement));
    }

    pub fn quit(&mut self) {
        self.exit = Some(AppExit::Quit);
    }

    pub fn should_exit(&self) -> bool {
        self.exit.is_some()
    }

    /// Cancel any pending tick before the screen goes away
    pub fn teardown(&mut self) {
        if self.timer.is_active() {
            debug!(remaining = self.timer.remaining_secs(), "canceling pending tick");
        }
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn test_config() -> Config {
        let mut settings = AppSettings::default();
        settings.desktop_notifications = false;
        Config {
            settings,
            start_preset: Preset::Pomodoro,
            verbose: false,
        }
    }

    fn create_test_app() -> AppState {
        AppState::new(&test_config(), PathBuf::from("/nonexistent/storage.json"))
    }

    fn texts(app: &AppState) -> Vec<(String, bool)> {
        app.tasks
            .tasks()
            .iter()
            .map(|t| (t.text.clone(), t.completed))
            .collect()
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.timer.remaining_secs(), 1500);
        assert!(!app.timer.is_active());
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.exit.is_none());
    }

    #[test]
    fn test_start_preset_from_config() {
        let mut config = test_config();
        config.start_preset = Preset::LongBreak;
        let app = AppState::new(&config, PathBuf::from("storage.json"));
        assert_eq!(app.timer.preset(), Preset::LongBreak);
        assert_eq!(app.timer.remaining_secs(), 900);
    }

    #[test]
    fn test_expiry_opens_alert_once() {
        let mut app = create_test_app();
        let now = Instant::now();

        app.timer.reset(2);
        app.toggle_timer_at(now);
        app.tick_at(now + Duration::from_secs(1));
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.tick_at(now + Duration::from_secs(5));
        assert_eq!(app.ui_mode, UiMode::Alert);
        let alert = app.alerts.current.as_ref().unwrap();
        assert_eq!(alert.message, "Tempo esgotado!");
        assert_eq!(alert.preset, Preset::Pomodoro);
        assert!(!app.timer.is_active());
        assert_eq!(app.timer.next_due(), None);

        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.alerts.current.is_none());

        app.tick_at(now + Duration::from_secs(10));
        assert!(app.alerts.current.is_none());
    }

    #[test]
    fn test_select_preset_while_running() {
        let mut app = create_test_app();
        let now = Instant::now();

        app.toggle_timer_at(now);
        app.tick_at(now + Duration::from_secs(3));
        app.select_preset(Preset::ShortBreak);

        assert_eq!(app.timer.remaining_secs(), 300);
        assert!(!app.timer.is_active());
    }

    #[test]
    fn test_submit_input_clears_buffer() {
        let mut app = create_test_app();
        for c in "buy milk".chars() {
            app.input_add_char(c);
        }
        assert!(app.submit_input().is_some());
        assert_eq!(app.task_input, "");
        assert_eq!(texts(&app), vec![("buy milk".to_string(), false)]);
    }

    #[test]
    fn test_blank_input_is_kept_and_ignored() {
        let mut app = create_test_app();
        app.input_add_char(' ');
        app.input_add_char(' ');
        assert!(app.submit_input().is_none());
        assert_eq!(app.task_input, "  ");
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_input_backspace() {
        let mut app = create_test_app();
        app.input_add_char('a');
        app.input_add_char('b');
        app.input_backspace();
        assert_eq!(app.task_input, "a");
    }

    #[test]
    fn test_add_toggle_remove_scenario() {
        let mut app = create_test_app();
        app.add_task("A");
        app.add_task("B");

        app.toggle_task(1);
        assert_eq!(
            texts(&app),
            vec![("B".to_string(), false), ("A".to_string(), true)]
        );

        app.remove_task(0);
        assert_eq!(texts(&app), vec![("A".to_string(), true)]);
    }

    #[test]
    fn test_selection_follows_toggled_task() {
        let mut app = create_test_app();
        app.add_task("C");
        app.add_task("B");
        app.add_task("A");

        // Completing A sinks it to the bottom; the cursor goes with it
        app.toggle_selected();
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.tasks.get(2).unwrap().text, "A");
    }

    #[test]
    fn test_remove_last_clamps_selection() {
        let mut app = create_test_app();
        app.add_task("B");
        app.add_task("A");
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.remove_selected();
        assert_eq!(app.selected_index, 0);
        app.remove_selected();
        assert_eq!(app.selected_index, 0);
        assert!(app.tasks.is_empty());

        // Nothing to remove or toggle on an empty list
        app.remove_selected();
        app.toggle_selected();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_move_selection_bounds() {
        let mut app = create_test_app();
        app.add_task("B");
        app.add_task("A");

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_logout_clears_token() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        let mut store = LocalStore::open(&path).unwrap();
        store.set("token", "secret").unwrap();
        store.set("other", "kept").unwrap();

        let mut app = AppState::new(&test_config(), path.clone());
        app.logout();

        assert_eq!(app.exit, Some(AppExit::Navigate(Route::Login)));
        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.get("token"), None);
        assert_eq!(store.get("other"), Some("kept"));
    }

    #[test]
    fn test_logout_without_token() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = AppState::new(&test_config(), temp_dir.path().join("storage.json"));
        app.logout();
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::Login)));
    }

    #[test]
    fn test_logout_with_malformed_storage_still_navigates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, r#"{"token": "secret","#).unwrap();

        let mut app = AppState::new(&test_config(), path.clone());
        app.logout();

        assert!(app.should_exit());
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::Login)));
        // The unreadable file is left as it was
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"token": "secret","#);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut app = create_test_app();
        app.add_task("A");
        app.toggle_task(5);
        assert_eq!(texts(&app), vec![("A".to_string(), false)]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_open_user_management() {
        let mut app = create_test_app();
        app.open_user_management();
        assert!(app.should_exit());
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::UserManagement)));
    }

    #[test]
    fn test_teardown_cancels_tick() {
        let mut app = create_test_app();
        app.toggle_timer_at(Instant::now());
        assert!(app.timer.is_active());

        app.teardown();
        assert!(!app.timer.is_active());
        assert_eq!(app.timer.tick_id(), None);
        assert_eq!(app.timer.next_due(), None);
    }
}

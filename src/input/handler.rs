use crate::app::AppState;
use crate::domain::{Preset, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the screen should close.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits, even with the alert open
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingInput => handle_input_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Presets
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(preset) = Preset::from_key(c) {
                app.select_preset(preset);
            }
            Ok(false)
        }

        // Start / pause
        KeyCode::Char(' ') => {
            app.toggle_timer();
            Ok(false)
        }

        // Task navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected();
            Ok(false)
        }

        // Remove task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.remove_selected();
            Ok(false)
        }

        // Focus the input line
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.start_editing_input();
            Ok(false)
        }

        // Gerenciar usuários
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.open_user_management();
            Ok(true)
        }

        // Sair
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.logout();
            Ok(true)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            Ok(true)
        }

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Add task, stay in the input for the next one
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }

        KeyCode::Esc => {
            app.stop_editing_input();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the "time's up" box is open; everything else is blocked
fn handle_alert_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_alert();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppExit;
    use crate::config::Config;
    use crate::domain::Route;
    use crate::persistence::AppSettings;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn create_test_app() -> AppState {
        let mut settings = AppSettings::default();
        settings.desktop_notifications = false;
        let config = Config {
            settings,
            start_preset: Preset::Pomodoro,
            verbose: false,
        };
        AppState::new(&config, PathBuf::from("storage.json"))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
        assert_eq!(app.exit, Some(AppExit::Quit));
    }

    #[test]
    fn test_handle_ctrl_c_in_input() {
        let mut app = create_test_app();
        app.start_editing_input();
        let should_quit = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(should_quit);
        assert_eq!(app.task_input, "");
    }

    #[test]
    fn test_handle_presets() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.timer.remaining_secs(), 300);
        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.timer.remaining_secs(), 900);
        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.timer.remaining_secs(), 1500);
    }

    #[test]
    fn test_handle_start_pause() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.timer.is_active());
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.timer.is_active());
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingInput);

        // Keys that are commands in normal mode are plain text here
        type_text(&mut app, "sq 1");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().text, "sq 1");
        assert_eq!(app.task_input, "");
        assert_eq!(app.ui_mode, UiMode::EditingInput);
        assert!(app.exit.is_none());

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_toggle_and_delete() {
        let mut app = create_test_app();
        app.add_task("B");
        app.add_task("A");

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.tasks.get(1).unwrap().completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().text, "B");
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.add_task("B");
        app.add_task("A");

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.timer.reset(1);
        app.toggle_timer_at(now);
        app.tick_at(now + Duration::from_secs(1));
        assert_eq!(app.ui_mode, UiMode::Alert);

        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.timer.remaining_secs(), 0);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_user_management() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('g'))).unwrap());
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::UserManagement)));
    }

    #[test]
    fn test_handle_logout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = create_test_app();
        app.storage_path = temp_dir.path().join("storage.json");

        assert!(handle_key(&mut app, key(KeyCode::Char('s'))).unwrap());
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::Login)));
    }

    #[test]
    fn test_handle_logout_with_unreadable_storage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = create_test_app();
        app.storage_path = temp_dir.path().join("storage.json");
        std::fs::write(&app.storage_path, r#"{"token": "secret","#).unwrap();

        let result = handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(matches!(result, Ok(true)));
        assert_eq!(app.exit, Some(AppExit::Navigate(Route::Login)));
    }
}

pub mod header_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use header_pane::render_header;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_alert_modal;
use ratatui::Frame;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, layout.header_area);
    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.tasks_area);
    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    // Alert goes on top of everything
    if app.ui_mode == UiMode::Alert {
        render_alert_modal(f, app, size);
    }
}

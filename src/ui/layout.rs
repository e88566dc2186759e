use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: header (3 rows)
/// - Middle: Timer (60%) | To-Do list (40%)
/// - Bottom: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Timer pane
            Constraint::Percentage(40), // Task pane
        ])
        .split(main_chunks[1]);

    MainLayout {
        header_area: main_chunks[0],
        timer_area: content[0],
        tasks_area: content[1],
        keybindings_area: main_chunks[2],
    }
}

/// Split the task pane into the input line and the list
pub fn split_task_pane(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.timer_area.height, 36);
        assert_eq!(layout.timer_area.width, 60);
        assert_eq!(layout.tasks_area.width, 40);
        assert_eq!(layout.tasks_area.x, 60);
    }

    #[test]
    fn test_split_task_pane() {
        let (input, list) = split_task_pane(Rect::new(60, 3, 40, 36));
        assert_eq!(input.height, 3);
        assert_eq!(list.height, 33);
        assert_eq!(list.y, 6);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 9);
    }
}

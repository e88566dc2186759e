use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::layout::split_task_pane;
use crate::ui::styles::{
    border_style, completed_style, default_style, focused_border_style, hint_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const INPUT_PLACEHOLDER: &str = "Adicionar tarefa...";

/// Create the line for one task: checkbox then text
fn create_task_line(task: &Task) -> Line<'static> {
    let (checkbox, style) = if task.completed {
        ("[x] ", completed_style())
    } else {
        ("[ ] ", default_style())
    };

    Line::from(vec![
        Span::styled(checkbox.to_string(), style),
        Span::styled(task.text.clone(), style),
    ])
}

fn render_input(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::EditingInput;

    let line = if app.task_input.is_empty() && !editing {
        Line::from(Span::styled(INPUT_PLACEHOLDER, hint_style()))
    } else {
        Line::from(vec![
            Span::raw(app.task_input.as_str()),
            if editing {
                Span::styled("█", focused_border_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let (border, title) = if editing {
        (focused_border_style(), " Nova tarefa · Enter adiciona · Esc sai ")
    } else {
        (border_style(), " Nova tarefa [a] ")
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );
    f.render_widget(input, area);
}

/// Render the to-do list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let (input_area, list_area) = split_task_pane(area);
    render_input(f, app, input_area);

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|task| ListItem::new(create_task_line(task)))
        .collect();

    let title = format!(
        " To-Do List ({} pendentes · {} concluídas) ",
        app.tasks.pending_count(),
        app.tasks.completed_count()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    // ListState keeps the selected row scrolled into view
    let selected = if app.tasks.is_empty() || app.ui_mode == UiMode::EditingInput {
        None
    } else {
        Some(app.selected_index)
    };
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, list_area, &mut state);
}

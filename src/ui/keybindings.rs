use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" 1/2/3 preset   "),
            Span::raw("Space start/pause   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter/x done   "),
            Span::raw("d delete   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingInput => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Backspace erase   "),
            Span::raw("Esc back"),
        ]),
        UiMode::Alert => Line::from(vec![Span::raw(" Enter dismiss")]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

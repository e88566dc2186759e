use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking "time's up" box
pub fn render_alert_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(alert) = &app.alerts.current {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(alert.message.as_str(), modal_title_style())),
            Line::raw(""),
            Line::raw(format!(
                "{} terminou às {}",
                alert.preset.label(),
                alert.raised_at.format("%H:%M")
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⏰ Tempo ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

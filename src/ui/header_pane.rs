use crate::ui::styles::{header_style, header_title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

pub const PAGE_TITLE: &str = "Controle seu Tempo";

/// Render the header bar: page title on the left, navigation on the right
pub fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .style(header_style())
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(Span::styled(PAGE_TITLE, header_title_style()));
    f.render_widget(title, halves[0]);

    let nav = Paragraph::new(Line::from(vec![
        Span::styled("[g] ", header_title_style()),
        Span::raw("Gerenciar usuários   "),
        Span::styled("[s] ", header_title_style()),
        Span::raw("Sair"),
    ]))
    .style(header_style())
    .alignment(Alignment::Right);
    f.render_widget(nav, halves[1]);
}

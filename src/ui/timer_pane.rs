use crate::app::AppState;
use crate::domain::{format_time, Preset};
use crate::ui::styles::{
    border_style, button_style, clock_running_style, clock_style, hint_style, preset_selected_style,
    preset_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLYPH_HEIGHT: usize = 5;

/// Block glyph for one character of the clock
fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

/// Render text as five rows of block glyphs
pub fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for (i, c) in text.chars().enumerate() {
        for (row, part) in rows.iter_mut().zip(glyph(c)) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

/// Label of the start/pause button
pub fn toggle_label(running: bool) -> &'static str {
    if running { "PAUSAR" } else { "INICIAR" }
}

fn preset_tabs(selected: Preset) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, preset) in Preset::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *preset == selected {
            preset_selected_style()
        } else {
            preset_style()
        };
        spans.push(Span::styled(
            format!(" {} {} ", preset.key(), preset.label()),
            style,
        ));
    }
    Line::from(spans)
}

/// Render the countdown pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;
    let running = timer.is_active();
    let time = format_time(timer.remaining_secs());
    let clock = if running { clock_running_style() } else { clock_style() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::raw(""), preset_tabs(timer.preset()), Line::raw("")];

    // Block digits need room for glyphs plus tabs and button
    let big = big_text(&time);
    let fits = inner.height as usize >= GLYPH_HEIGHT + 7
        && big.first().map_or(0, |r| r.chars().count()) <= inner.width as usize;
    if fits {
        lines.extend(big.into_iter().map(|row| Line::styled(row, clock)));
    } else {
        lines.push(Line::styled(time, clock));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("  {}  ", toggle_label(running)),
        button_style(),
    )));
    lines.push(Line::styled("Space", hint_style()));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

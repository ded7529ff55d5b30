//! Help overlay
//!
//! Key binding reference drawn in a centered popup over the timer screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Space / Enter / P", "Start, pause or resume"),
    ("S", "Stop the session"),
    ("← / H", "Decrease focus duration"),
    ("→ / L", "Increase focus duration"),
    ("↓ / J", "Decrease break duration"),
    ("↑ / K", "Increase break duration"),
    ("?", "Toggle this help"),
    ("Esc", "Close help / quit"),
    ("Q / Ctrl+C", "Quit"),
];

/// Help overlay component
#[derive(Debug, Default)]
pub struct HelpScreen;

impl HelpScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the overlay on top of whatever is already in the frame
    pub fn render(&self, frame: &mut Frame) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:<18}", keys), key),
                    Span::raw(*action),
                ])
            })
            .collect();

        let height = (BINDINGS.len() + 2) as u16;
        let area = centered_rect(60, height, frame.size());
        let help = Paragraph::new(lines).block(
            Block::default()
                .title("Keys")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(help, area);
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

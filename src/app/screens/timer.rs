//! Timer screen implementation
//!
//! Displays the focus/break duration settings, the play/pause and stop
//! controls, and, while a session exists, its title, remaining time and a
//! progress gauge.

use crate::app::view::{DurationControl, SessionView, TimerView};
use crate::session::SessionLabel;
use crate::timer::TransitionCue;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// How long the "session finished" banner stays up
const BANNER_DURATION: Duration = Duration::from_secs(5);

/// Timer screen component
#[derive(Debug, Default)]
pub struct TimerScreen {
    /// Most recent transition cue and when it fired
    banner: Option<(TransitionCue, Instant)>,
}

impl TimerScreen {
    /// Create a new timer screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the transition banner starting at `now`
    pub fn show_cue(&mut self, cue: TransitionCue, now: Instant) {
        self.banner = Some((cue, now));
    }

    /// Banner text if the last cue is still fresh at `now`
    pub fn banner_text(&self, now: Instant) -> Option<String> {
        self.banner
            .filter(|(_, shown_at)| now.saturating_duration_since(*shown_at) < BANNER_DURATION)
            .map(|(cue, _)| format!("{} complete! Now {}.", cue.finished, cue.next))
    }

    /// Render the timer screen
    pub fn render(&mut self, f: &mut Frame, view: &TimerView, now: Instant) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Duration settings
                Constraint::Length(3), // Controls
                Constraint::Length(6), // Session information
                Constraint::Length(3), // Progress
                Constraint::Min(0),    // Banner
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_durations(f, chunks[1], view);
        self.render_controls(f, chunks[2], view);
        if let Some(session) = &view.session {
            self.render_session(f, chunks[3], session);
            self.render_progress(f, chunks[4], session);
        }
        self.render_banner(f, chunks[5], now);
        self.render_help(f, chunks[6]);
    }

    /// Render the title section
    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Pomodoro Timer")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    /// Render the focus and break duration settings side by side
    fn render_durations(&self, f: &mut Frame, area: Rect, view: &TimerView) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        f.render_widget(duration_setting(&view.focus, "←", "→"), columns[0]);
        f.render_widget(duration_setting(&view.rest, "↓", "↑"), columns[1]);
    }

    /// Render the play/pause and stop controls
    fn render_controls(&self, f: &mut Frame, area: Rect, view: &TimerView) {
        let stop_style = if view.stop_enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        let controls = Line::from(vec![
            Span::styled(
                format!("[ {} ]", view.play_pause.as_str()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[ ■ Stop ]", stop_style),
        ]);

        let widget = Paragraph::new(controls)
            .alignment(Alignment::Center)
            .block(Block::default().title("Timer controls").borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    /// Render the session title, remaining time and paused marker
    fn render_session(&self, f: &mut Frame, area: Rect, session: &SessionView) {
        let color = label_color(session.label);
        let mut lines = vec![
            Line::from(Span::styled(
                session.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(session.subtitle.clone()),
        ];
        if session.paused {
            lines.push(Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title("Session")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(widget, area);
    }

    /// Render the progress bar
    fn render_progress(&self, f: &mut Frame, area: Rect, session: &SessionView) {
        let percent = session.gauge_percent();
        let gauge = Gauge::default()
            .block(Block::default().title("Progress").borders(Borders::ALL))
            .gauge_style(Style::default().fg(label_color(session.label)))
            .percent(percent)
            .label(format!("{}%", percent));
        f.render_widget(gauge, area);
    }

    /// Render the transition banner while it is fresh
    fn render_banner(&self, f: &mut Frame, area: Rect, now: Instant) {
        if let Some(text) = self.banner_text(now) {
            let banner = Paragraph::new(text)
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            f.render_widget(banner, area);
        }
    }

    /// Render help text
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("Space", key),
            Span::raw(" Play/Pause  "),
            Span::styled("S", key),
            Span::raw(" Stop  "),
            Span::styled("←→", key),
            Span::raw(" Focus  "),
            Span::styled("↑↓", key),
            Span::raw(" Break  "),
            Span::styled("?", key),
            Span::raw(" Help  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

fn duration_setting(control: &DurationControl, decrease: &str, increase: &str) -> Paragraph<'static> {
    let enabled = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(
            format!("{} - ", decrease),
            if control.can_decrease { enabled } else { disabled },
        ),
        Span::raw(control.label.clone()),
        Span::styled(
            format!(" + {}", increase),
            if control.can_increase { enabled } else { disabled },
        ),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn label_color(label: SessionLabel) -> Color {
    match label {
        SessionLabel::Focusing => Color::Red,
        SessionLabel::OnBreak => Color::Green,
    }
}

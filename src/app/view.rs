//! Timer view-model
//!
//! Everything the screens draw is derived here from `TimerState`, so the
//! display rules can be checked without a terminal.

use crate::session::SessionLabel;
use crate::timer::TimerState;
use crate::util::format::{minutes_to_duration, seconds_to_duration};

/// Icon shown on the play/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

impl PlayPauseIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayPauseIcon::Play => "▶ Play",
            PlayPauseIcon::Pause => "⏸ Pause",
        }
    }
}

/// One duration setting with its +/- controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationControl {
    pub label: String,
    pub can_decrease: bool,
    pub can_increase: bool,
}

/// Read-only information about the active session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub label: SessionLabel,
    /// e.g. "Focusing for 25:00 minutes"
    pub title: String,
    /// e.g. "24:59 remaining"
    pub subtitle: String,
    pub paused: bool,
    pub percent_complete: f64,
}

impl SessionView {
    /// Progress as a whole percentage clamped to 0..=100
    pub fn gauge_percent(&self) -> u16 {
        self.percent_complete.clamp(0.0, 100.0).round() as u16
    }
}

/// Snapshot of everything the timer screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    pub focus: DurationControl,
    pub rest: DurationControl,
    pub play_pause: PlayPauseIcon,
    pub stop_enabled: bool,
    pub session: Option<SessionView>,
}

impl TimerView {
    pub fn from_state(state: &TimerState) -> Self {
        let durations = state.durations();
        let adjustable = state.durations_adjustable();

        let focus = DurationControl {
            label: format!(
                "Focus Duration: {}",
                minutes_to_duration(durations.focus_minutes())
            ),
            can_decrease: adjustable && durations.can_decrease_focus(),
            can_increase: adjustable && durations.can_increase_focus(),
        };
        let rest = DurationControl {
            label: format!(
                "Break Duration: {}",
                minutes_to_duration(durations.break_minutes())
            ),
            can_decrease: adjustable && durations.can_decrease_break(),
            can_increase: adjustable && durations.can_increase_break(),
        };

        let session = state.session().map(|session| SessionView {
            label: session.label(),
            title: format!(
                "{} for {} minutes",
                session.label(),
                seconds_to_duration(session.total_seconds())
            ),
            subtitle: format!(
                "{} remaining",
                seconds_to_duration(session.remaining_seconds())
            ),
            paused: !state.is_running(),
            percent_complete: session.percent_complete(),
        });

        Self {
            focus,
            rest,
            play_pause: if state.is_running() {
                PlayPauseIcon::Pause
            } else {
                PlayPauseIcon::Play
            },
            stop_enabled: state.session().is_some(),
            session,
        }
    }
}

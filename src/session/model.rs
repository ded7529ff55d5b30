//! Focus/break session model
//!
//! Sessions are values: every tick produces a new `Session` instead of
//! mutating the previous one.

use crate::config::DurationSettings;
use std::fmt;

/// Which kind of interval a session represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionLabel {
    /// Working interval
    Focusing,
    /// Rest interval
    OnBreak,
}

impl SessionLabel {
    /// The label that follows this one when a session completes
    pub fn opposite(self) -> Self {
        match self {
            SessionLabel::Focusing => SessionLabel::OnBreak,
            SessionLabel::OnBreak => SessionLabel::Focusing,
        }
    }

    /// Configured length, in minutes, of a session with this label
    pub fn minutes(self, durations: &DurationSettings) -> u32 {
        match self {
            SessionLabel::Focusing => durations.focus_minutes(),
            SessionLabel::OnBreak => durations.break_minutes(),
        }
    }

    /// Human-readable name
    pub fn as_str(self) -> &'static str {
        match self {
            SessionLabel::Focusing => "Focusing",
            SessionLabel::OnBreak => "On Break",
        }
    }
}

impl fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active focus or break interval
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    label: SessionLabel,
    total_seconds: u32,
    remaining_seconds: u32,
    percent_complete: f64,
}

impl Session {
    /// Start a fresh session of `label` sized from `durations`
    pub fn start(label: SessionLabel, durations: &DurationSettings) -> Self {
        let total_seconds = label.minutes(durations) * 60;
        Self {
            label,
            total_seconds,
            remaining_seconds: total_seconds,
            percent_complete: 0.0,
        }
    }

    pub fn label(&self) -> SessionLabel {
        self.label
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Share of the session already elapsed, from 0.0 to 100.0
    pub fn percent_complete(&self) -> f64 {
        self.percent_complete
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds - self.remaining_seconds
    }

    /// Whether the countdown has reached zero
    pub fn is_complete(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// The session one second later; stays at zero once complete
    #[must_use]
    pub fn next_tick(&self) -> Self {
        let remaining_seconds = self.remaining_seconds.saturating_sub(1);
        let elapsed = self.total_seconds - remaining_seconds;
        Self {
            remaining_seconds,
            percent_complete: percent(elapsed, self.total_seconds),
            ..self.clone()
        }
    }

    /// A freshly sized session of the opposite label, using `durations` as
    /// they are right now
    #[must_use]
    pub fn next_session(&self, durations: &DurationSettings) -> Self {
        Self::start(self.label.opposite(), durations)
    }
}

fn percent(elapsed: u32, total: u32) -> f64 {
    if total == 0 {
        return 100.0;
    }
    f64::from(elapsed) / f64::from(total) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_sizes_from_durations() {
        let durations = DurationSettings::default();
        let focus = Session::start(SessionLabel::Focusing, &durations);
        assert_eq!(focus.total_seconds(), 1500);
        assert_eq!(focus.remaining_seconds(), 1500);
        assert_eq!(focus.percent_complete(), 0.0);

        let rest = Session::start(SessionLabel::OnBreak, &durations);
        assert_eq!(rest.total_seconds(), 300);
    }

    #[test]
    fn test_next_tick_decrements_and_recomputes_percent() {
        let durations = DurationSettings::clamped(5, 1);
        let session = Session::start(SessionLabel::OnBreak, &durations);
        let next = session.next_tick();
        assert_eq!(next.remaining_seconds(), 59);
        assert_eq!(next.elapsed_seconds(), 1);
        assert!((next.percent_complete() - 100.0 / 60.0).abs() < 1e-9);
        // the previous value is untouched
        assert_eq!(session.remaining_seconds(), 60);
    }

    #[test]
    fn test_next_tick_saturates_at_zero() {
        let durations = DurationSettings::clamped(5, 1);
        let mut session = Session::start(SessionLabel::OnBreak, &durations);
        for _ in 0..60 {
            session = session.next_tick();
        }
        assert!(session.is_complete());
        assert_eq!(session.percent_complete(), 100.0);

        let again = session.next_tick();
        assert_eq!(again.remaining_seconds(), 0);
        assert_eq!(again.percent_complete(), 100.0);
    }

    #[test]
    fn test_next_session_flips_label() {
        let durations = DurationSettings::default();
        let focus = Session::start(SessionLabel::Focusing, &durations);
        let rest = focus.next_session(&durations);
        assert_eq!(rest.label(), SessionLabel::OnBreak);
        assert_eq!(rest.remaining_seconds(), 300);
        assert_eq!(rest.next_session(&durations).label(), SessionLabel::Focusing);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SessionLabel::Focusing.to_string(), "Focusing");
        assert_eq!(SessionLabel::OnBreak.to_string(), "On Break");
    }
}

//! Session state machine
//!
//! `TimerState::apply` is a pure `(state, event) -> state` function. Callers
//! own the current state and replace it with the one returned in each
//! `Transition`.

use crate::config::DurationSettings;
use crate::session::{Session, SessionLabel};

/// Derived timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No session, not running
    Idle,
    /// Session present and counting down
    Running,
    /// Session present but frozen
    Paused,
}

/// Inputs to the state machine: user intents and ticker fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Start from idle, pause while running, resume while paused
    PlayPause,
    /// Discard the session and go idle
    Stop,
    /// One elapsed second
    Tick,
    IncreaseFocus,
    DecreaseFocus,
    IncreaseBreak,
    DecreaseBreak,
}

/// Signal that a session ran out and the next one began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCue {
    pub finished: SessionLabel,
    pub next: SessionLabel,
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: TimerState,
    pub cue: Option<TransitionCue>,
}

impl Transition {
    fn quiet(state: TimerState) -> Self {
        Self { state, cue: None }
    }
}

/// Complete timer state: running flag, current session and duration settings
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    running: bool,
    session: Option<Session>,
    durations: DurationSettings,
    lock_durations_while_active: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DurationSettings::default())
    }
}

impl TimerState {
    /// Idle timer with the given durations
    pub fn new(durations: DurationSettings) -> Self {
        Self {
            running: false,
            session: None,
            durations,
            lock_durations_while_active: true,
        }
    }

    /// Choose whether duration adjustments are ignored while a session exists
    pub fn with_duration_lock(mut self, locked: bool) -> Self {
        self.lock_durations_while_active = locked;
        self
    }

    pub fn phase(&self) -> TimerPhase {
        match (self.running, &self.session) {
            (true, Some(_)) => TimerPhase::Running,
            (false, Some(_)) => TimerPhase::Paused,
            _ => TimerPhase::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn durations(&self) -> &DurationSettings {
        &self.durations
    }

    /// Whether the duration controls currently accept input
    pub fn durations_adjustable(&self) -> bool {
        !(self.lock_durations_while_active && self.session.is_some())
    }

    /// Apply `event` and return the next state
    pub fn apply(&self, event: TimerEvent) -> Transition {
        match event {
            TimerEvent::PlayPause => Transition::quiet(self.toggled()),
            TimerEvent::Stop => Transition::quiet(Self {
                running: false,
                session: None,
                ..self.clone()
            }),
            TimerEvent::Tick => self.ticked(),
            TimerEvent::IncreaseFocus => self.adjusted(DurationSettings::increase_focus),
            TimerEvent::DecreaseFocus => self.adjusted(DurationSettings::decrease_focus),
            TimerEvent::IncreaseBreak => self.adjusted(DurationSettings::increase_break),
            TimerEvent::DecreaseBreak => self.adjusted(DurationSettings::decrease_break),
        }
    }

    fn toggled(&self) -> Self {
        let running = !self.running;
        let session = match &self.session {
            None if running => Some(Session::start(SessionLabel::Focusing, &self.durations)),
            other => other.clone(),
        };
        Self {
            running,
            session,
            ..self.clone()
        }
    }

    fn ticked(&self) -> Transition {
        let session = match (&self.session, self.running) {
            (Some(session), true) => session,
            // ticks outside Running carry no meaning
            _ => return Transition::quiet(self.clone()),
        };

        if session.is_complete() {
            let next = session.next_session(&self.durations);
            let cue = TransitionCue {
                finished: session.label(),
                next: next.label(),
            };
            return Transition {
                state: Self {
                    session: Some(next),
                    ..self.clone()
                },
                cue: Some(cue),
            };
        }

        Transition::quiet(Self {
            session: Some(session.next_tick()),
            ..self.clone()
        })
    }

    fn adjusted(&self, adjust: fn(DurationSettings) -> DurationSettings) -> Transition {
        if !self.durations_adjustable() {
            return Transition::quiet(self.clone());
        }
        Transition::quiet(Self {
            durations: adjust(self.durations),
            ..self.clone()
        })
    }
}

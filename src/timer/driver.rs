//! Timer driver
//!
//! Owns the current `TimerState` together with the `Ticker` and keeps them in
//! step: after every transition the ticker is armed exactly when the timer is
//! running. Both render sinks (TUI and plain mode) drive the timer through it.

use super::machine::{TimerEvent, TimerState, TransitionCue};
use super::ticker::Ticker;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TimerDriver {
    state: TimerState,
    ticker: Ticker,
}

impl TimerDriver {
    pub fn new(state: TimerState, period: Duration) -> Self {
        Self {
            state,
            ticker: Ticker::new(period),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Apply a user intent at `now`
    pub fn dispatch(&mut self, event: TimerEvent, now: Instant) -> Option<TransitionCue> {
        let before = self.state.phase();
        let transition = self.state.apply(event);
        self.state = transition.state;
        self.ticker.sync(self.state.is_running(), now);

        let after = self.state.phase();
        if before != after {
            info!("Timer {:?} -> {:?} on {:?}", before, after, event);
        } else {
            debug!("Applied {:?} in {:?}", event, after);
        }
        transition.cue
    }

    /// Deliver every tick that fell due up to `now`
    pub fn fire_due(&mut self, now: Instant) -> Vec<TransitionCue> {
        let mut cues = Vec::new();
        let state = &mut self.state;
        self.ticker.fire_due(now, || {
            let transition = state.apply(TimerEvent::Tick);
            *state = transition.state;
            if let Some(cue) = transition.cue {
                info!("{} finished, {} started", cue.finished, cue.next);
                cues.push(cue);
            }
            state.is_running()
        });
        cues
    }

    /// Wait before the next tick, or `None` while the ticker is disarmed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DurationSettings;
    use crate::session::SessionLabel;
    use crate::timer::TimerPhase;

    const SECOND: Duration = Duration::from_secs(1);

    fn driver() -> TimerDriver {
        TimerDriver::new(TimerState::new(DurationSettings::clamped(5, 1)), SECOND)
    }

    #[test]
    fn test_ticker_armed_only_while_running() {
        let start = Instant::now();
        let mut driver = driver();
        assert!(!driver.ticker().is_armed());

        driver.dispatch(TimerEvent::PlayPause, start);
        assert!(driver.ticker().is_armed());

        driver.dispatch(TimerEvent::PlayPause, start);
        assert!(!driver.ticker().is_armed());
        assert_eq!(driver.state().phase(), TimerPhase::Paused);

        driver.dispatch(TimerEvent::PlayPause, start);
        driver.dispatch(TimerEvent::Stop, start);
        assert!(!driver.ticker().is_armed());
        assert_eq!(driver.time_until_next(start), None);
    }

    #[test]
    fn test_fire_due_counts_down() {
        let start = Instant::now();
        let mut driver = driver();
        driver.dispatch(TimerEvent::PlayPause, start);

        let cues = driver.fire_due(start + SECOND * 10);
        assert!(cues.is_empty());
        assert_eq!(driver.state().session().unwrap().remaining_seconds(), 290);
    }

    #[test]
    fn test_paused_timer_does_not_advance() {
        let start = Instant::now();
        let mut driver = driver();
        driver.dispatch(TimerEvent::PlayPause, start);
        driver.fire_due(start + SECOND * 3);
        driver.dispatch(TimerEvent::PlayPause, start + SECOND * 3);

        driver.fire_due(start + SECOND * 100);
        assert_eq!(driver.state().session().unwrap().remaining_seconds(), 297);
    }

    #[test]
    fn test_resume_rearms_from_resume_time() {
        let start = Instant::now();
        let mut driver = driver();
        driver.dispatch(TimerEvent::PlayPause, start);
        driver.dispatch(TimerEvent::PlayPause, start + Duration::from_millis(500));
        let resume_at = start + SECOND * 10;
        driver.dispatch(TimerEvent::PlayPause, resume_at);
        assert_eq!(driver.time_until_next(resume_at), Some(SECOND));
    }

    #[test]
    fn test_cues_reported_on_transition() {
        let start = Instant::now();
        let mut driver = driver();
        driver.dispatch(TimerEvent::PlayPause, start);

        // 300 ticks to reach zero, one more to switch to the break
        let cues = driver.fire_due(start + SECOND * 301);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].next, SessionLabel::OnBreak);
        assert_eq!(driver.state().session().unwrap().remaining_seconds(), 60);
        assert!(driver.ticker().is_armed());
    }
}

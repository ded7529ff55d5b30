//! Integration tests for the focus/break cycle

use pomodoro::config::{AppConfig, DurationSettings};
use pomodoro::session::SessionLabel;
use pomodoro::timer::{TimerDriver, TimerEvent, TimerPhase, TimerState};
use std::time::{Duration, Instant};

#[test]
fn test_default_cycle_focus_break_focus() {
    let mut state = TimerState::default().apply(TimerEvent::PlayPause).state;
    let session = state.session().unwrap();
    assert_eq!(session.label(), SessionLabel::Focusing);
    assert_eq!(session.total_seconds(), 1500);
    assert_eq!(session.remaining_seconds(), 1500);
    assert_eq!(session.percent_complete(), 0.0);

    let mut cues = Vec::new();
    for _ in 0..1501 {
        let transition = state.apply(TimerEvent::Tick);
        cues.extend(transition.cue);
        state = transition.state;
    }
    let session = state.session().unwrap();
    assert_eq!(cues.len(), 1);
    assert_eq!(session.label(), SessionLabel::OnBreak);
    assert_eq!(session.total_seconds(), 300);
    assert_eq!(session.remaining_seconds(), 300);

    for _ in 0..301 {
        state = state.apply(TimerEvent::Tick).state;
    }
    let session = state.session().unwrap();
    assert_eq!(session.label(), SessionLabel::Focusing);
    assert_eq!(session.remaining_seconds(), 1500);
    assert_eq!(session.percent_complete(), 0.0);
}

#[test]
fn test_driver_built_from_config() {
    let config = AppConfig::default()
        .with_focus_minutes(5)
        .with_break_minutes(1)
        .with_tick_millis(100);
    let state = TimerState::new(config.durations());
    let mut driver = TimerDriver::new(state, config.tick_period());

    let start = Instant::now();
    driver.dispatch(TimerEvent::PlayPause, start);
    driver.fire_due(start + Duration::from_millis(100) * 301);

    let session = driver.state().session().unwrap();
    assert_eq!(session.label(), SessionLabel::OnBreak);
    assert_eq!(session.total_seconds(), 60);

    driver.dispatch(TimerEvent::Stop, start);
    assert_eq!(driver.state().phase(), TimerPhase::Idle);
    assert!(!driver.ticker().is_armed());
}

#[test]
fn test_adjustments_apply_to_next_start() {
    let state = TimerState::new(DurationSettings::default())
        .apply(TimerEvent::IncreaseFocus)
        .state
        .apply(TimerEvent::DecreaseBreak)
        .state
        .apply(TimerEvent::PlayPause)
        .state;
    assert_eq!(state.session().unwrap().total_seconds(), 30 * 60);
    assert_eq!(state.durations().break_minutes(), 4);
}

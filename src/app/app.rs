//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop.

use crate::{
    app::{
        screens::{HelpScreen, TimerScreen},
        state::{AppState, StateManager},
        tui::Tui,
        view::TimerView,
    },
    config::AppConfig,
    cue::{self, CueSink},
    timer::{TimerDriver, TimerEvent, TimerState, TransitionCue},
    PomodoroError, Result,
};
use std::time::{Duration, Instant};
use tracing::info;

/// Longest wait for input; keeps the banner and resizes responsive while idle
const MAX_POLL: Duration = Duration::from_millis(250);

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Timer state and ticker
    driver: TimerDriver,
    /// Screen components
    timer_screen: TimerScreen,
    help_screen: HelpScreen,
    /// Transition cue output
    cue: Box<dyn CueSink>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig) -> Result<Self> {
        let state = TimerState::new(config.durations())
            .with_duration_lock(config.lock_durations_while_active);
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            driver: TimerDriver::new(state, config.tick_period()),
            timer_screen: TimerScreen::new(),
            help_screen: HelpScreen::new(),
            cue: cue::from_config(config.cue_enabled),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        info!("Terminal initialized");
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            self.handle_events()?;
            self.fire_ticks();
        }
        self.tui.restore()?;
        info!("Terminal restored");
        Ok(())
    }

    /// Restore the terminal after a failed run
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let view = TimerView::from_state(self.driver.state());
        let now = Instant::now();
        let show_help = self.state_manager.current_state() == AppState::Help;
        let timer_screen = &mut self.timer_screen;
        let help_screen = &self.help_screen;

        self.tui
            .draw(|f| {
                timer_screen.render(f, &view, now);
                if show_help {
                    help_screen.render(f);
                }
            })
            .map_err(|e| PomodoroError::TuiError(format!("Failed to draw frame: {}", e)))
    }

    /// Wait for a key until the next tick is due, then route it
    fn handle_events(&mut self) -> Result<()> {
        let timeout = self
            .driver
            .time_until_next(Instant::now())
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL));

        if let Some(key) = self.tui.poll_key(timeout)? {
            if let Some(event) = self.state_manager.handle_key_event(key) {
                self.dispatch(event);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: TimerEvent) {
        let now = Instant::now();
        if let Some(cue) = self.driver.dispatch(event, now) {
            self.announce(cue, now);
        }
    }

    fn fire_ticks(&mut self) {
        let now = Instant::now();
        for cue in self.driver.fire_due(now) {
            self.announce(cue, now);
        }
    }

    fn announce(&mut self, cue: TransitionCue, now: Instant) {
        self.cue.notify(&cue);
        self.timer_screen.show_cue(cue, now);
    }
}

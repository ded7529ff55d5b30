//! Plain terminal mode
//!
//! Runs the timer without the full-screen UI: starts a focus session at once,
//! shows progress with an `indicatif` bar and prints a line at every
//! transition. Ends on Ctrl-C or after the requested number of focus sessions.

use crate::config::AppConfig;
use crate::cue::{self, CueSink};
use crate::session::{Session, SessionLabel};
use crate::timer::{TimerDriver, TimerEvent, TimerState, TransitionCue};
use crate::util::format::seconds_to_duration;
use crate::{PomodoroError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Instant;
use tracing::{info, warn};

/// Counts completed focus sessions against an optional limit
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleLimit {
    limit: Option<u32>,
    completed: u32,
}

impl CycleLimit {
    pub fn new(limit: Option<u32>) -> Self {
        Self {
            limit,
            completed: 0,
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// True once `completed` has met the limit; a zero limit is met at once
    pub fn is_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.completed >= limit)
    }

    /// Record a transition; returns true once the limit is reached
    pub fn record(&mut self, cue: &TransitionCue) -> bool {
        if cue.finished == SessionLabel::Focusing {
            self.completed += 1;
        }
        self.is_reached()
    }
}

/// Bar message for a session, e.g. "24:59 remaining"
pub fn progress_message(session: &Session) -> String {
    format!("{} remaining", seconds_to_duration(session.remaining_seconds()))
}

fn session_bar(session: &Session) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("{prefix:>9} [{bar:30.cyan/blue}] {percent:>3}% {msg}")
        .map_err(|e| PomodoroError::TuiError(format!("Invalid progress template: {}", e)))?
        .progress_chars("█▓░");

    let bar = ProgressBar::new(u64::from(session.total_seconds()));
    bar.set_style(style);
    bar.set_prefix(session.label().to_string());
    update_bar(&bar, session);
    Ok(bar)
}

fn update_bar(bar: &ProgressBar, session: &Session) {
    bar.set_position(u64::from(session.elapsed_seconds()));
    bar.set_message(progress_message(session));
}

/// Run focus/break cycles until Ctrl-C or `cycles` focus sessions complete
pub async fn run(config: &AppConfig, cycles: Option<u32>) -> Result<()> {
    let state = TimerState::new(config.durations())
        .with_duration_lock(config.lock_durations_while_active);
    let driver = TimerDriver::new(state, config.tick_period());
    let mut cue_sink = cue::from_config(config.cue_enabled);
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let completed = run_driver(driver, cue_sink.as_mut(), CycleLimit::new(cycles), ctrl_c).await?;
    info!("Plain mode finished after {} focus sessions", completed);
    Ok(())
}

/// Start a focus session on `driver` and follow it until `shutdown` resolves
/// or `limit` is reached. Returns the number of completed focus sessions.
pub async fn run_driver<F>(
    mut driver: TimerDriver,
    cue_sink: &mut dyn CueSink,
    mut limit: CycleLimit,
    shutdown: F,
) -> Result<u32>
where
    F: Future<Output = ()>,
{
    if limit.is_reached() {
        return Ok(limit.completed());
    }

    driver.dispatch(TimerEvent::PlayPause, Instant::now());
    let mut bar = match driver.state().session() {
        Some(session) => {
            println!("🍅 {} for {}", session.label(), seconds_to_duration(session.total_seconds()));
            session_bar(session)?
        }
        None => return Ok(limit.completed()),
    };
    info!("Plain mode started, cycle limit {:?}", limit.limit);

    tokio::pin!(shutdown);

    loop {
        // the driver stays armed for as long as a session is running
        let Some(wait) = driver.time_until_next(Instant::now()) else {
            bar.finish_and_clear();
            return Ok(limit.completed());
        };

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = &mut shutdown => {
                bar.abandon_with_message("stopped");
                info!("Interrupted after {} focus sessions", limit.completed());
                return Ok(limit.completed());
            }
        }

        for transition in driver.fire_due(Instant::now()) {
            bar.finish_with_message("done");
            cue_sink.notify(&transition);

            if limit.record(&transition) {
                println!("✅ Completed {} focus sessions", limit.completed());
                info!("Cycle limit reached");
                return Ok(limit.completed());
            }

            if let Some(session) = driver.state().session() {
                println!(
                    "{} complete! {} for {}",
                    transition.finished,
                    session.label(),
                    seconds_to_duration(session.total_seconds())
                );
                bar = session_bar(session)?;
            }
        }

        if let Some(session) = driver.state().session() {
            update_bar(&bar, session);
        }
    }
}

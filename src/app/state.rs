//! Application state management
//!
//! Handles screen transitions and maps keyboard input to timer events and
//! navigation actions.

use crate::timer::TimerEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Timer with duration settings, controls and session progress
    #[default]
    Timer,
    /// Key binding reference drawn over the timer
    Help,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Forward an intent to the timer state machine
    Timer(TimerEvent),
    /// Show or hide the help overlay (?)
    ToggleHelp,
    /// Close overlay, or quit from the timer screen (Esc)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the timer screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle navigation and return the timer event to forward, if any
    ///
    /// Timer events are swallowed while the help overlay is open.
    pub fn handle_action(&mut self, action: ControlAction) -> Option<TimerEvent> {
        match (self.current_state, action) {
            (_, ControlAction::Quit) => self.should_quit = true,
            (AppState::Timer, ControlAction::Back) => self.should_quit = true,
            (AppState::Help, ControlAction::Back | ControlAction::ToggleHelp) => {
                self.current_state = AppState::Timer
            }
            (AppState::Timer, ControlAction::ToggleHelp) => self.current_state = AppState::Help,
            (AppState::Timer, ControlAction::Timer(event)) => return Some(event),
            _ => {}
        }
        None
    }

    /// Convert keyboard event to a control action
    pub fn key_to_action(key: KeyEvent) -> ControlAction {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return ControlAction::None;
        }

        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => ControlAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ControlAction::Quit
            }

            // Timer controls
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => {
                ControlAction::Timer(TimerEvent::PlayPause)
            }
            KeyCode::Char('s') => ControlAction::Timer(TimerEvent::Stop),

            // Duration adjustments
            KeyCode::Left | KeyCode::Char('h') => ControlAction::Timer(TimerEvent::DecreaseFocus),
            KeyCode::Right | KeyCode::Char('l') => ControlAction::Timer(TimerEvent::IncreaseFocus),
            KeyCode::Down | KeyCode::Char('j') => ControlAction::Timer(TimerEvent::DecreaseBreak),
            KeyCode::Up | KeyCode::Char('k') => ControlAction::Timer(TimerEvent::IncreaseBreak),

            KeyCode::Char('?') => ControlAction::ToggleHelp,
            KeyCode::Esc => ControlAction::Back,

            _ => ControlAction::None,
        }
    }

    /// Handle a keyboard event and return the timer event to forward, if any
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<TimerEvent> {
        let action = Self::key_to_action(key);
        self.handle_action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Timer);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_key_to_action() {
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('q'))),
            ControlAction::Quit
        );
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ControlAction::Quit
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char(' '))),
            ControlAction::Timer(TimerEvent::PlayPause)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('s'))),
            ControlAction::Timer(TimerEvent::Stop)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Right)),
            ControlAction::Timer(TimerEvent::IncreaseFocus)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('h'))),
            ControlAction::Timer(TimerEvent::DecreaseFocus)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Up)),
            ControlAction::Timer(TimerEvent::IncreaseBreak)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('j'))),
            ControlAction::Timer(TimerEvent::DecreaseBreak)
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('?'))),
            ControlAction::ToggleHelp
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('x'))),
            ControlAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(StateManager::key_to_action(release), ControlAction::None);
    }

    #[test]
    fn test_help_overlay_swallows_timer_events() {
        let mut state_manager = StateManager::new();
        state_manager.handle_action(ControlAction::ToggleHelp);
        assert_eq!(state_manager.current_state(), AppState::Help);
        assert_eq!(
            state_manager.handle_action(ControlAction::Timer(TimerEvent::PlayPause)),
            None
        );

        state_manager.handle_action(ControlAction::Back);
        assert_eq!(state_manager.current_state(), AppState::Timer);
        assert!(!state_manager.should_quit());
        assert_eq!(
            state_manager.handle_action(ControlAction::Timer(TimerEvent::PlayPause)),
            Some(TimerEvent::PlayPause)
        );
    }

    #[test]
    fn test_back_from_timer_quits() {
        let mut state_manager = StateManager::new();
        state_manager.handle_key_event(key(KeyCode::Esc));
        assert!(state_manager.should_quit());
    }
}

//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;
pub mod view;

pub use app::App;
pub use screens::{HelpScreen, TimerScreen};
pub use state::{AppState, ControlAction, StateManager};
pub use tui::Tui;
pub use view::TimerView;

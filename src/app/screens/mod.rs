//! TUI screen components
//!
//! Contains the timer screen and the help overlay.

pub mod help;
pub mod timer;

pub use help::HelpScreen;
pub use timer::TimerScreen;

//! Timer core
//!
//! The session state machine, the periodic ticker that drives it, and the
//! driver that keeps the two in step.

pub mod driver;
pub mod machine;
pub mod ticker;

pub use driver::TimerDriver;
pub use machine::{TimerEvent, TimerPhase, TimerState, Transition, TransitionCue};
pub use ticker::Ticker;

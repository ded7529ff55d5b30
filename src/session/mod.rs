//! Session data model
//!
//! A session is one focus or break interval with its own countdown.

pub mod model;

pub use model::{Session, SessionLabel};

//! Core data models for the timetable engine.
//!
//! This module contains all the domain models used throughout the engine.

mod preference;
mod schedule;
mod session;

pub use preference::Preference;
pub use schedule::{GrantedChoice, Schedule, ScheduledSession};
pub use session::Session;

//! Assignment logic for the timetable engine.
//!
//! This module contains the pure functions that build a timetable: catalog
//! lookup by course and time, slot conflict detection against accepted
//! entries, and the two-tier greedy pass that resolves an ordered list of
//! preferences into a schedule.

mod conflict;
mod engine;
mod lookup;

pub use conflict::has_conflict;
pub use engine::build_schedule;
pub use lookup::find_session;

//! Slot conflict detection.
//!
//! This module provides the predicate deciding whether a weekly slot is
//! already occupied by an accepted timetable entry.

use crate::models::ScheduledSession;

/// Checks whether a (day, time) slot is already occupied.
///
/// A slot is occupied when any accepted entry carries exactly the same day
/// label and exactly the same time label. Course identity is irrelevant:
/// two different courses in the same slot conflict just as hard as the
/// same course twice. Labels are compared byte for byte, so "Monday" and
/// "monday" name different slots, as do "10:00" and "10:00:00".
///
/// # Arguments
///
/// * `scheduled` - The entries accepted so far
/// * `day` - The weekday label of the candidate slot
/// * `time` - The start time label of the candidate slot
///
/// # Returns
///
/// `true` when the slot is occupied, `false` when it is free.
///
/// # Example
///
/// ```
/// use timetable_engine::assignment::has_conflict;
/// use timetable_engine::models::{GrantedChoice, ScheduledSession};
///
/// let scheduled = vec![ScheduledSession {
///     course_name: "Mathematics".to_string(),
///     day: "Monday".to_string(),
///     time: "10:00".to_string(),
///     granted_choice: GrantedChoice::First,
/// }];
///
/// assert!(has_conflict(&scheduled, "Monday", "10:00"));
/// assert!(!has_conflict(&scheduled, "Monday", "11:00"));
/// assert!(!has_conflict(&scheduled, "Tuesday", "10:00"));
/// ```
pub fn has_conflict(scheduled: &[ScheduledSession], day: &str, time: &str) -> bool {
    scheduled
        .iter()
        .any(|entry| entry.day == day && entry.time == time)
}

//! Two-tier preference assignment.
//!
//! This module implements the greedy pass that turns an ordered list of
//! course preferences into a weekly timetable, falling back from each
//! preference's first choice time to its second when the first cannot be
//! granted.

use tracing::warn;

use crate::models::{GrantedChoice, Preference, Schedule, ScheduledSession, Session};

use super::conflict::has_conflict;
use super::lookup::find_session;

/// Builds a timetable from a session catalog and an ordered preference list.
///
/// Preferences are processed strictly in input order and each is resolved
/// against the catalog and the entries accepted so far. Accepted entries
/// permanently occupy their (day, time) slot; a preference that cannot be
/// placed is recorded in the schedule's dropped list and a warning is
/// logged. The pass never fails and never revisits earlier placements, so
/// the outcome is fully determined by the inputs.
///
/// # Arguments
///
/// * `catalog` - The available sessions, in catalog order
/// * `preferences` - The course requests, in priority order
///
/// # Returns
///
/// A [`Schedule`] whose entries and dropped course names together account
/// for every preference exactly once.
///
/// # Behavior
///
/// For each preference:
/// - the first choice time is granted when the catalog lists the course at
///   that time and the session's slot is free
/// - otherwise the second choice time is tried the same way, once
/// - a second choice whose session is missing or whose slot is occupied
///   drops the preference; no other times are considered
///
/// # Example
///
/// ```
/// use timetable_engine::assignment::build_schedule;
/// use timetable_engine::models::{GrantedChoice, Preference, Session};
///
/// let catalog = vec![
///     Session { name: "Mathematics".to_string(), day: "Monday".to_string(), time: "10:00".to_string() },
///     Session { name: "Mathematics".to_string(), day: "Tuesday".to_string(), time: "10:00".to_string() },
///     Session { name: "Biology".to_string(), day: "Monday".to_string(), time: "10:00".to_string() },
/// ];
/// let preferences = vec![
///     Preference {
///         course_name: "Mathematics".to_string(),
///         first_choice_time: "10:00".to_string(),
///         second_choice_time: "09:00".to_string(),
///     },
///     Preference {
///         course_name: "Biology".to_string(),
///         first_choice_time: "10:00".to_string(),
///         second_choice_time: "11:00".to_string(),
///     },
/// ];
///
/// let schedule = build_schedule(&catalog, &preferences);
///
/// // Mathematics takes Monday 10:00; Biology's only listed time is now
/// // occupied and its second choice is not in the catalog.
/// assert_eq!(schedule.entries.len(), 1);
/// assert_eq!(schedule.entries[0].course_name, "Mathematics");
/// assert_eq!(schedule.entries[0].granted_choice, GrantedChoice::First);
/// assert_eq!(schedule.dropped, vec!["Biology".to_string()]);
/// ```
pub fn build_schedule(catalog: &[Session], preferences: &[Preference]) -> Schedule {
    let mut entries: Vec<ScheduledSession> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();

    for preference in preferences {
        match resolve(catalog, &entries, preference) {
            Some((session, granted_choice)) => {
                entries.push(ScheduledSession {
                    course_name: session.name.clone(),
                    day: session.day.clone(),
                    time: session.time.clone(),
                    granted_choice,
                });
            }
            None => {
                warn!(
                    course = %preference.course_name,
                    first_choice = %preference.first_choice_time,
                    second_choice = %preference.second_choice_time,
                    "Could not schedule course"
                );
                dropped.push(preference.course_name.clone());
            }
        }
    }

    Schedule { entries, dropped }
}

/// Resolves a single preference to a session and tier, if any.
///
/// The first choice wins when its session exists and its slot is free.
/// Anything else falls through to one attempt at the second choice; a
/// second choice whose slot is occupied is given up on, not retried.
fn resolve<'a>(
    catalog: &'a [Session],
    entries: &[ScheduledSession],
    preference: &Preference,
) -> Option<(&'a Session, GrantedChoice)> {
    if let Some(session) =
        find_session(catalog, &preference.course_name, &preference.first_choice_time)
    {
        if !has_conflict(entries, &session.day, &session.time) {
            return Some((session, GrantedChoice::First));
        }
    }

    let session = find_session(catalog, &preference.course_name, &preference.second_choice_time)?;
    if has_conflict(entries, &session.day, &session.time) {
        return None;
    }
    Some((session, GrantedChoice::Second))
}

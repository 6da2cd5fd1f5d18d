//! Catalog lookup logic.
//!
//! This module provides the search used to resolve a (course, time) request
//! to a concrete catalog session.

use crate::models::Session;

/// Finds the catalog session for a course at a requested time.
///
/// The catalog is scanned front to back and the first session whose name
/// and time both match exactly is returned, so when a catalog lists the
/// same (name, time) pair more than once the earliest row wins. The day
/// field plays no part in the match; it is discovered by the lookup.
///
/// # Arguments
///
/// * `catalog` - The catalog sessions, in catalog order
/// * `course_name` - The course name to match exactly
/// * `time` - The start time label to match exactly
///
/// # Returns
///
/// A reference to the first matching session, or `None` when the course
/// does not meet at the requested time.
///
/// # Example
///
/// ```
/// use timetable_engine::assignment::find_session;
/// use timetable_engine::models::Session;
///
/// let catalog = vec![
///     Session {
///         name: "Mathematics".to_string(),
///         day: "Monday".to_string(),
///         time: "10:00".to_string(),
///     },
///     Session {
///         name: "Mathematics".to_string(),
///         day: "Tuesday".to_string(),
///         time: "14:00".to_string(),
///     },
/// ];
///
/// let found = find_session(&catalog, "Mathematics", "14:00").unwrap();
/// assert_eq!(found.day, "Tuesday");
///
/// assert!(find_session(&catalog, "Mathematics", "09:00").is_none());
/// assert!(find_session(&catalog, "Biology", "10:00").is_none());
/// ```
pub fn find_session<'a>(
    catalog: &'a [Session],
    course_name: &str,
    time: &str,
) -> Option<&'a Session> {
    catalog
        .iter()
        .find(|session| session.name == course_name && session.time == time)
}

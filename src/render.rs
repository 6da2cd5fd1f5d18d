//! Plain-text rendering and saving of built timetables.
//!
//! The report groups sessions by weekday, Monday through Friday, and only
//! prints the days that actually hold a session. Sessions whose day label
//! is not one of [`WEEKDAYS`] still occupy their slot during assignment
//! but do not appear in the report.

use std::fs;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Schedule, ScheduledSession};

/// The weekday labels the report knows how to display, in display order.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Renders a schedule as a plain-text report.
///
/// The report starts with a banner and ends with a footer of equal width.
/// Between them, each weekday with at least one session gets a block:
/// the day name, one line per session in assignment order, then a blank
/// line. An empty schedule renders a single notice instead.
///
/// # Arguments
///
/// * `schedule` - The schedule to render
///
/// # Returns
///
/// The complete report, terminated by a newline.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{GrantedChoice, Schedule, ScheduledSession};
/// use timetable_engine::render::format_schedule;
///
/// let schedule = Schedule {
///     entries: vec![ScheduledSession {
///         course_name: "Mathematics".to_string(),
///         day: "Monday".to_string(),
///         time: "10:00".to_string(),
///         granted_choice: GrantedChoice::First,
///     }],
///     dropped: vec![],
/// };
///
/// let report = format_schedule(&schedule);
/// assert!(report.contains("Monday:"));
/// assert!(report.contains("[1st choice]"));
/// ```
pub fn format_schedule(schedule: &Schedule) -> String {
    let mut output = String::new();
    output.push_str("========== YOUR GENERATED TIMETABLE ==========\n\n");

    if schedule.is_empty() {
        output.push_str("No sessions scheduled.\n\n");
    } else {
        for day in WEEKDAYS {
            let entries: Vec<&ScheduledSession> = schedule.entries_on(day).collect();
            if entries.is_empty() {
                continue;
            }

            output.push_str(day);
            output.push_str(":\n");
            for entry in entries {
                output.push_str(&format!(
                    "  {:<30} {} [{}]\n",
                    entry.course_name, entry.time, entry.granted_choice
                ));
            }
            output.push('\n');
        }
    }

    output.push_str(&"=".repeat(46));
    output.push('\n');
    output
}

/// Writes the rendered report to a file.
///
/// The file receives exactly the text [`format_schedule`] produces, and
/// an existing file at `path` is overwritten.
///
/// # Arguments
///
/// * `schedule` - The schedule to save
/// * `path` - Destination file path
///
/// # Returns
///
/// `Ok(())` on success, or [`PlannerError::OutputWrite`] if the file
/// cannot be written.
pub fn save_schedule<P: AsRef<Path>>(schedule: &Schedule, path: P) -> PlannerResult<()> {
    let path = path.as_ref();
    fs::write(path, format_schedule(schedule)).map_err(|err| PlannerError::OutputWrite {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

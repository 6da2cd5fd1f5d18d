//! Record loading for session catalogs and preference lists.
//!
//! This module reads the two comma-separated input files the engine
//! consumes and turns their surviving rows into typed records.
//!
//! # Record format
//!
//! Both files share the same line discipline:
//!
//! ```text
//! # Available sessions: name,day,time
//! Mathematics,Monday,10:00
//! Mathematics,Tuesday,10:00
//! ```
//!
//! - lines starting with `#` and empty lines are skipped
//! - a record needs three non-empty comma-separated fields; anything less
//!   is logged and skipped, fields past the third are ignored
//! - field text is taken verbatim, with no whitespace trimming, so the
//!   labels seen here are exactly the labels matched during assignment

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Preference, Session};

/// The maximum number of sessions accepted from a catalog file.
pub const MAX_CATALOG_RECORDS: usize = 1024;

/// The maximum number of preferences accepted from a preference file.
pub const MAX_PREFERENCE_RECORDS: usize = 256;

/// Reads the session catalog from a CSV file.
///
/// Each surviving record is `name,day,time`. Catalog order is preserved;
/// it decides which session wins when a (name, time) pair is listed twice.
///
/// # Arguments
///
/// * `path` - Path to the catalog file
///
/// # Returns
///
/// The sessions in file order, or an error if the file is missing, cannot
/// be read, or holds more than [`MAX_CATALOG_RECORDS`] records.
///
/// # Example
///
/// ```no_run
/// use timetable_engine::records::read_catalog;
///
/// let catalog = read_catalog("data/sessions.csv")?;
/// println!("{} sessions available", catalog.len());
/// # Ok::<(), timetable_engine::error::PlannerError>(())
/// ```
pub fn read_catalog<P: AsRef<Path>>(path: P) -> PlannerResult<Vec<Session>> {
    read_records(path.as_ref(), MAX_CATALOG_RECORDS, "session", |name, day, time| Session {
        name: name.to_string(),
        day: day.to_string(),
        time: time.to_string(),
    })
}

/// Reads the preference list from a CSV file.
///
/// Each surviving record is `course_name,first_choice_time,second_choice_time`.
/// File order is preserved; it is the priority order of the requests.
///
/// # Arguments
///
/// * `path` - Path to the preference file
///
/// # Returns
///
/// The preferences in file order, or an error if the file is missing,
/// cannot be read, or holds more than [`MAX_PREFERENCE_RECORDS`] records.
pub fn read_preferences<P: AsRef<Path>>(path: P) -> PlannerResult<Vec<Preference>> {
    read_records(
        path.as_ref(),
        MAX_PREFERENCE_RECORDS,
        "preference",
        |course_name, first, second| Preference {
            course_name: course_name.to_string(),
            first_choice_time: first.to_string(),
            second_choice_time: second.to_string(),
        },
    )
}

/// Reads and parses one record file.
///
/// Comment and empty lines are passed over silently; malformed lines are
/// logged with their line number and skipped. Only parsed records count
/// toward `limit`, and the first record past it aborts the read.
fn read_records<T>(
    path: &Path,
    limit: usize,
    kind: &str,
    build: impl Fn(&str, &str, &str) -> T,
) -> PlannerResult<Vec<T>> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(PlannerError::SourceNotFound { path: path_str });
    }

    let contents = fs::read_to_string(path).map_err(|err| PlannerError::SourceRead {
        path: path_str.clone(),
        message: err.to_string(),
    })?;

    let mut records = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((first, second, third)) = split_record(line) else {
            warn!(
                path = %path_str,
                line = index + 1,
                kind,
                "Skipping malformed record"
            );
            continue;
        };

        if records.len() == limit {
            return Err(PlannerError::RecordLimitExceeded {
                path: path_str,
                limit,
            });
        }

        records.push(build(first, second, third));
    }

    Ok(records)
}

/// Splits a line into its first three comma-separated fields.
///
/// Returns `None` when fewer than three fields are present or any of the
/// three is empty. A fourth comma and everything after it is ignored.
fn split_record(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.splitn(4, ',');
    let first = fields.next()?;
    let second = fields.next()?;
    let third = fields.next()?;

    if first.is_empty() || second.is_empty() || third.is_empty() {
        return None;
    }

    Some((first, second, third))
}

//! Timetable outcome types.
//!
//! This module defines the types produced by assignment: the individual
//! scheduled entries, the tier tag recording which choice was granted, and
//! the overall Schedule that collects placements and dropped courses.

use serde::{Deserialize, Serialize};

/// Indicates which of a preference's two candidate times was granted.
///
/// # Example
///
/// ```
/// use timetable_engine::models::GrantedChoice;
///
/// let choice = GrantedChoice::Second;
/// assert_eq!(format!("{}", choice), "2nd choice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantedChoice {
    /// The first choice time was free and granted.
    First,
    /// The second choice time was granted after the first was unavailable.
    Second,
}

impl std::fmt::Display for GrantedChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrantedChoice::First => write!(f, "1st choice"),
            GrantedChoice::Second => write!(f, "2nd choice"),
        }
    }
}

/// Represents a confirmed timetable entry.
///
/// The `day` and `time` are copied from the catalog session that was
/// granted; together they identify the slot the entry occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// The course name carried over from the granted session.
    pub course_name: String,
    /// The weekday label of the occupied slot.
    pub day: String,
    /// The start time label of the occupied slot.
    pub time: String,
    /// Which preference tier produced this entry.
    pub granted_choice: GrantedChoice,
}

/// The outcome of building a timetable.
///
/// Assignment never fails as a whole: every preference either contributes
/// an entry or has its course name recorded in `dropped`. Both lists keep
/// the order in which the preferences were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Accepted entries, in the order their preferences were processed.
    pub entries: Vec<ScheduledSession>,
    /// Course names of preferences that could not be placed, in input order.
    #[serde(default)]
    pub dropped: Vec<String>,
}

impl Schedule {
    /// Returns true when no session was placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries occupying slots on the given day.
    ///
    /// Entries are yielded in placement order. The day label is matched
    /// exactly, like everywhere else in the engine.
    pub fn entries_on<'a>(&'a self, day: &'a str) -> impl Iterator<Item = &'a ScheduledSession> {
        self.entries.iter().filter(move |entry| entry.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(course_name: &str, day: &str, time: &str, choice: GrantedChoice) -> ScheduledSession {
        ScheduledSession {
            course_name: course_name.to_string(),
            day: day.to_string(),
            time: time.to_string(),
            granted_choice: choice,
        }
    }

    #[test]
    fn test_granted_choice_display() {
        assert_eq!(format!("{}", GrantedChoice::First), "1st choice");
        assert_eq!(format!("{}", GrantedChoice::Second), "2nd choice");
    }

    #[test]
    fn test_granted_choice_serialization() {
        let first = GrantedChoice::First;
        let json = serde_json::to_string(&first).unwrap();
        assert_eq!(json, "\"first\"");

        let deserialized: GrantedChoice = serde_json::from_str("\"second\"").unwrap();
        assert_eq!(deserialized, GrantedChoice::Second);
    }

    #[test]
    fn test_scheduled_session_serialization() {
        let entry = make_entry("Mathematics", "Monday", "10:00", GrantedChoice::First);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"granted_choice\":\"first\""));

        let deserialized: ScheduledSession = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_schedule_deserialization_defaults_dropped() {
        let json = r#"{
            "entries": [{
                "course_name": "Mathematics",
                "day": "Monday",
                "time": "10:00",
                "granted_choice": "first"
            }]
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.entries.len(), 1);
        assert!(schedule.dropped.is_empty());
    }

    #[test]
    fn test_is_empty() {
        let empty = Schedule {
            entries: vec![],
            dropped: vec!["Biology".to_string()],
        };
        assert!(empty.is_empty());

        let populated = Schedule {
            entries: vec![make_entry("Mathematics", "Monday", "10:00", GrantedChoice::First)],
            dropped: vec![],
        };
        assert!(!populated.is_empty());
    }

    #[test]
    fn test_entries_on_filters_by_day_in_placement_order() {
        let schedule = Schedule {
            entries: vec![
                make_entry("Mathematics", "Monday", "10:00", GrantedChoice::First),
                make_entry("Biology", "Tuesday", "10:00", GrantedChoice::First),
                make_entry("World History", "Monday", "14:00", GrantedChoice::Second),
            ],
            dropped: vec![],
        };

        let monday: Vec<&str> = schedule
            .entries_on("Monday")
            .map(|entry| entry.course_name.as_str())
            .collect();
        assert_eq!(monday, vec!["Mathematics", "World History"]);

        assert_eq!(schedule.entries_on("Friday").count(), 0);
    }

    #[test]
    fn test_entries_on_matches_day_exactly() {
        let schedule = Schedule {
            entries: vec![make_entry("Mathematics", "Monday", "10:00", GrantedChoice::First)],
            dropped: vec![],
        };

        assert_eq!(schedule.entries_on("monday").count(), 0);
        assert_eq!(schedule.entries_on("Monday").count(), 1);
    }
}

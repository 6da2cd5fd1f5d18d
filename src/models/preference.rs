//! Preference model for course requests.

use serde::{Deserialize, Serialize};

/// Represents a single course request with two candidate times.
///
/// A preference does not name a day: each candidate time is resolved
/// against the catalog to find the session (and therefore the day) that the
/// course holds at that time. The first choice is always attempted before
/// the second, and preferences earlier in the input take priority over
/// later ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// The name of the requested course.
    pub course_name: String,
    /// The preferred start time label, e.g. "10:00".
    pub first_choice_time: String,
    /// The fallback start time label tried when the first is unavailable.
    pub second_choice_time: String,
}

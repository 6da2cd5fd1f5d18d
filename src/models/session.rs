//! Session model for the course catalog.
//!
//! This module defines the Session struct representing one sitting of a
//! course in the weekly catalog.

use serde::{Deserialize, Serialize};

/// Represents one sitting of a course in the session catalog.
///
/// A course that meets at several times appears once per offered time, so
/// the same `name` may occur on many catalog rows. The `day` and `time`
/// fields are opaque labels: they are compared for exact equality and
/// never parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The course name, e.g. "Mathematics".
    pub name: String,
    /// The weekday label on which the session meets, e.g. "Monday".
    pub day: String,
    /// The start time label at which the session meets, e.g. "10:00".
    pub time: String,
}

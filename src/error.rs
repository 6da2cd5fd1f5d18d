//! Error types for the timetable engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions around reading input files and writing the
//! saved timetable.

use thiserror::Error;

/// The main error type for the timetable engine.
///
/// Assignment itself never fails: a preference that cannot be placed is
/// reported inside [`Schedule`](crate::models::Schedule), not as an error.
/// Errors only arise at the edges, while loading input files or writing
/// the rendered timetable.
///
/// # Example
///
/// ```
/// use timetable_engine::error::PlannerError;
///
/// let error = PlannerError::SourceNotFound {
///     path: "/missing/sessions.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/sessions.csv");
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// An input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    SourceRead {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the underlying I/O error.
        message: String,
    },

    /// An input file held more records than the documented capacity.
    #[error("Too many records in '{path}': the limit is {limit}")]
    RecordLimitExceeded {
        /// The path to the oversized file.
        path: String,
        /// The maximum number of records accepted from this file.
        limit: usize,
    },

    /// The rendered timetable could not be written to disk.
    #[error("Failed to write timetable to '{path}': {message}")]
    OutputWrite {
        /// The destination path.
        path: String,
        /// A description of the underlying I/O error.
        message: String,
    },
}

/// A type alias for Results that return PlannerError.
pub type PlannerResult<T> = Result<T, PlannerError>;

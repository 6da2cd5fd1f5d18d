//! Weekly Timetable Engine
//!
//! This crate builds a weekly course timetable from a session catalog and an
//! ordered list of student preferences, granting each request its first
//! choice of time when the slot is free and falling back to the second
//! choice otherwise.

#![warn(missing_docs)]

pub mod assignment;
pub mod error;
pub mod models;
pub mod records;
pub mod render;

//! Weekly course timetabling.
//!
//! Decides whether a course booking may be placed at a (day, slot) in a
//! classroom with an instructor, and colors the bookings of a scope so
//! that offerings drawn in the same grid cell are visually distinct.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `TimeSlot`, `Grade`, `Classroom`,
//!   `Booking`, `Instructor`
//! - **`validation`**: Conflict checking (room or instructor double-booking)
//!   and scope integrity checks
//! - **`coloring`**: Conflict graph, first-fit coloring, HSL palette
//! - **`timetable`**: In-memory course management over the above
//! - **`config`**: Room set, palette and logging settings
//!
//! # Architecture
//!
//! `validation` and `coloring` are pure functions over an explicit booking
//! collection. Storage, HTTP and UI belong to the caller; `timetable` is
//! an in-memory stand-in for that layer.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - de Werra (1985), "An introduction to timetabling"

pub mod coloring;
pub mod config;
pub mod error;
pub mod models;
pub mod timetable;
pub mod validation;

pub use error::{ColoringError, ParseError, TimetableError};

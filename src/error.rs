//! Error taxonomy.
//!
//! Conflicts are ordinary results carrying [`ConflictReason`]s. Coloring
//! errors indicate a malformed scope and are never defaulted away.

use thiserror::Error;

use crate::models::{BookingId, Classroom, InstructorId};
use crate::validation::ConflictReason;

/// A value outside one of the closed scheduling vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not one of monday..friday.
    #[error("unknown day '{0}'")]
    Day(String),
    /// Not one of the eight one-hour slots between 9:00 and 17:00.
    #[error("unknown time slot '{0}'")]
    TimeSlot(String),
    /// Not one of "1".."4".
    #[error("unknown grade '{0}'")]
    Grade(String),
    /// Not a room number.
    #[error("invalid classroom '{0}'")]
    Classroom(String),
}

/// Scope-construction bugs surfaced by the slot colorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// A color was requested for a booking that is not a graph node.
    #[error("booking {0} is not part of the colored scope")]
    UnregisteredBooking(BookingId),
    /// The same booking was listed twice in one scope.
    #[error("booking {0} appears more than once in the scope")]
    DuplicateBooking(BookingId),
    /// A color class has no palette entry.
    #[error("color class {class} exceeds palette of {palette_len} colors")]
    ClassOutsidePalette {
        /// The unmapped class.
        class: u32,
        /// Palette size.
        palette_len: usize,
    },
}

/// Errors returned by [`crate::timetable::Timetable`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimetableError {
    /// The booking collides with existing bookings.
    #[error("booking rejected: {}", describe_conflicts(.0))]
    Conflict(Vec<ConflictReason>),
    /// No booking with this id.
    #[error("booking {0} not found")]
    UnknownBooking(BookingId),
    /// No instructor with this id.
    #[error("instructor {0} not found")]
    UnknownInstructor(InstructorId),
    /// The instructor still teaches at least one booking.
    #[error("instructor '{name}' still has {bookings} booking(s) and cannot be deleted")]
    InstructorInUse {
        /// Instructor name.
        name: String,
        /// Number of bookings referencing the instructor.
        bookings: usize,
    },
    /// The room is not in the configured classroom set.
    #[error("classroom {0} is not a schedulable room")]
    UnknownClassroom(Classroom),
    /// A required text field was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    /// Rendering failed on a malformed scope.
    #[error(transparent)]
    Coloring(#[from] ColoringError),
}

fn describe_conflicts(reasons: &[ConflictReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, TimeSlot};

    #[test]
    fn test_conflict_message_lists_all_reasons() {
        let err = TimetableError::Conflict(vec![
            ConflictReason::ClassroomTaken {
                booking: BookingId(3),
                day: Day::Monday,
                slot: TimeSlot::Nine,
                classroom: Classroom(1036),
            },
            ConflictReason::InstructorBusy {
                booking: BookingId(4),
                day: Day::Monday,
                slot: TimeSlot::Nine,
                instructor: InstructorId(2),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("classroom 1036"));
        assert!(msg.contains("instructor 2"));
        assert!(msg.contains("; "));
    }

    #[test]
    fn test_instructor_in_use_names_instructor() {
        let err = TimetableError::InstructorInUse {
            name: "Ada".into(),
            bookings: 2,
        };
        assert!(err.to_string().contains("'Ada'"));
    }
}

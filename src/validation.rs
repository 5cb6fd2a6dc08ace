//! Booking conflict detection and scope validation.
//!
//! A booking is rejected when, on the same day and slot, its classroom
//! or its instructor is already taken. Grade plays no part here: two
//! grades may not share a room, and one instructor cannot teach two
//! grades at once. Grade only matters for how bookings are drawn (see
//! [`crate::coloring`]).
//!
//! The checker is advisory. It assumes no concurrent writers while it
//! runs; a store that accepts concurrent inserts must enforce the same
//! uniqueness itself.

use crate::models::{Booking, BookingId, Classroom, Day, Instructor, InstructorId, TimeSlot};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Why a proposed booking collides with an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictReason {
    /// The classroom is already booked at this day and slot.
    ClassroomTaken {
        /// The existing booking holding the room.
        booking: BookingId,
        day: Day,
        slot: TimeSlot,
        classroom: Classroom,
    },
    /// The instructor already teaches at this day and slot.
    InstructorBusy {
        /// The existing booking the instructor teaches.
        booking: BookingId,
        day: Day,
        slot: TimeSlot,
        instructor: InstructorId,
    },
}

impl ConflictReason {
    /// The existing booking that causes the conflict.
    pub fn booking(&self) -> BookingId {
        match self {
            ConflictReason::ClassroomTaken { booking, .. }
            | ConflictReason::InstructorBusy { booking, .. } => *booking,
        }
    }
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::ClassroomTaken {
                booking,
                day,
                slot,
                classroom,
            } => write!(
                f,
                "classroom {classroom} is already booked on {day} at {slot} (booking {booking})"
            ),
            ConflictReason::InstructorBusy {
                booking,
                day,
                slot,
                instructor,
            } => write!(
                f,
                "instructor {instructor} already teaches on {day} at {slot} (booking {booking})"
            ),
        }
    }
}

/// Returns `true` if a booking at `(day, slot)` in `classroom` taught by
/// `instructor` would collide with any of `existing`.
///
/// A collision is an existing booking sharing `(day, slot, classroom)` or
/// `(day, slot, instructor)`. Grade is ignored.
pub fn check_conflict(
    day: Day,
    slot: TimeSlot,
    classroom: Classroom,
    instructor: InstructorId,
    existing: &[Booking],
) -> bool {
    existing.iter().any(|b| {
        b.occupies(day, slot) && (b.classroom == classroom || b.instructor == instructor)
    })
}

/// Collects every conflict a proposed booking would cause.
///
/// `ignore` excludes one existing booking, so a booking being updated is
/// never reported as conflicting with itself. Reasons come out in the
/// order of `existing`; one booking can yield both kinds.
pub fn find_conflicts(
    day: Day,
    slot: TimeSlot,
    classroom: Classroom,
    instructor: InstructorId,
    existing: &[Booking],
    ignore: Option<BookingId>,
) -> Vec<ConflictReason> {
    let mut reasons = Vec::new();

    for b in existing {
        if Some(b.id) == ignore || !b.occupies(day, slot) {
            continue;
        }
        if b.classroom == classroom {
            reasons.push(ConflictReason::ClassroomTaken {
                booking: b.id,
                day,
                slot,
                classroom,
            });
        }
        if b.instructor == instructor {
            reasons.push(ConflictReason::InstructorBusy {
                booking: b.id,
                day,
                slot,
                instructor,
            });
        }
    }

    reasons
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A booking references an instructor that doesn't exist.
    UnknownInstructor,
    /// Two bookings hold the same classroom at the same day and slot.
    ClassroomDoubleBooked,
    /// Two bookings share an instructor at the same day and slot.
    InstructorDoubleBooked,
    /// A booking uses a room outside the schedulable set.
    UnknownClassroom,
    /// No identifier is left after the highest one in use.
    IdExhausted,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a booking collection loaded from outside the timetable.
///
/// Checks:
/// 1. No duplicate instructor IDs
/// 2. No duplicate booking IDs
/// 3. Every booking references a known instructor
/// 4. No classroom is booked twice at the same day and slot
/// 5. No instructor is booked twice at the same day and slot
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scope(bookings: &[Booking], instructors: &[Instructor]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut instructor_ids = HashSet::new();
    for i in instructors {
        if !instructor_ids.insert(i.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate instructor ID: {}", i.id),
            ));
        }
    }

    let mut booking_ids = HashSet::new();
    for b in bookings {
        if !booking_ids.insert(b.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate booking ID: {}", b.id),
            ));
        }
        if !instructor_ids.contains(&b.instructor) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownInstructor,
                format!(
                    "Booking '{}' references unknown instructor '{}'",
                    b.id, b.instructor
                ),
            ));
        }
    }

    // First holder of each (day, slot, room) and (day, slot, instructor)
    let mut rooms: HashMap<(Day, TimeSlot, Classroom), BookingId> = HashMap::new();
    let mut teachers: HashMap<(Day, TimeSlot, InstructorId), BookingId> = HashMap::new();

    for b in bookings {
        if let Some(first) = rooms.get(&(b.day, b.slot, b.classroom)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ClassroomDoubleBooked,
                format!(
                    "Bookings '{}' and '{}' both hold classroom {} on {} at {}",
                    first, b.id, b.classroom, b.day, b.slot
                ),
            ));
        } else {
            rooms.insert((b.day, b.slot, b.classroom), b.id);
        }

        if let Some(first) = teachers.get(&(b.day, b.slot, b.instructor)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InstructorDoubleBooked,
                format!(
                    "Bookings '{}' and '{}' both need instructor {} on {} at {}",
                    first, b.id, b.instructor, b.day, b.slot
                ),
            ));
        } else {
            teachers.insert((b.day, b.slot, b.instructor), b.id);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! In-memory course timetable.
//!
//! Keeps instructors and bookings and enforces the booking rules:
//! every new booking goes through the conflict checker, committed
//! bookings keep their day, slot and classroom, and an instructor can
//! only be removed once nothing references them.
//!
//! Rendering a day takes a snapshot of that day's bookings and hands it
//! to [`crate::coloring`]; no coloring state survives between renders.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::coloring::{color_schedule_with, RenderColor};
use crate::config::TimetableConfig;
use crate::error::TimetableError;
use crate::models::{
    Booking, BookingDraft, BookingId, BookingPatch, Day, Grade, Instructor, InstructorId, TimeSlot,
};
use crate::validation::{
    find_conflicts, validate_scope, ValidationError, ValidationErrorKind, ValidationResult,
};

/// Instructors and bookings of one teaching week.
///
/// Bookings and instructors are kept in creation order, which is the
/// order used when coloring a day.
#[derive(Debug, Clone)]
pub struct Timetable {
    config: TimetableConfig,
    instructors: Vec<Instructor>,
    bookings: Vec<Booking>,
    next_booking: u64,
    next_instructor: u64,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new(config: TimetableConfig) -> Self {
        Self {
            config,
            instructors: Vec::new(),
            bookings: Vec::new(),
            next_booking: 1,
            next_instructor: 1,
        }
    }

    /// Rebuilds a timetable from previously stored records.
    ///
    /// # Errors
    /// All structural problems found by [`validate_scope`], plus bookings
    /// in rooms outside `config.classrooms` and ids at `u64::MAX`.
    pub fn from_records(
        config: TimetableConfig,
        instructors: Vec<Instructor>,
        bookings: Vec<Booking>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = validate_scope(&bookings, &instructors).err().unwrap_or_default();

        for b in &bookings {
            if !config.has_classroom(b.classroom) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownClassroom,
                    format!("Booking '{}' uses unknown classroom {}", b.id, b.classroom),
                ));
            }
        }

        let next_booking = next_id(bookings.iter().map(|b| b.id.0), "booking", &mut errors);
        let next_instructor =
            next_id(instructors.iter().map(|i| i.id.0), "instructor", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            config,
            instructors,
            bookings,
            next_booking,
            next_instructor,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Registers an instructor.
    pub fn add_instructor(
        &mut self,
        name: impl Into<String>,
    ) -> Result<InstructorId, TimetableError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TimetableError::EmptyField("instructor name"));
        }

        let id = InstructorId(self.next_instructor);
        self.next_instructor += 1;
        info!(instructor = %id, %name, "instructor created");
        self.instructors.push(Instructor::new(id, name));
        Ok(id)
    }

    /// Instructors in creation order.
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// Looks up an instructor.
    pub fn instructor(&self, id: InstructorId) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    /// Removes an instructor that teaches no booking.
    ///
    /// # Errors
    /// - [`TimetableError::UnknownInstructor`] if the id is unknown.
    /// - [`TimetableError::InstructorInUse`] naming the instructor while
    ///   any booking references them.
    pub fn remove_instructor(&mut self, id: InstructorId) -> Result<Instructor, TimetableError> {
        let pos = self
            .instructors
            .iter()
            .position(|i| i.id == id)
            .ok_or(TimetableError::UnknownInstructor(id))?;

        let referencing = self.bookings.iter().filter(|b| b.instructor == id).count();
        if referencing > 0 {
            let name = self.instructors[pos].name.clone();
            warn!(instructor = %id, %name, bookings = referencing, "instructor deletion blocked");
            return Err(TimetableError::InstructorInUse {
                name,
                bookings: referencing,
            });
        }

        info!(instructor = %id, "instructor deleted");
        Ok(self.instructors.remove(pos))
    }

    /// Checks whether a booking at `(day, slot)` in `draft`'s classroom
    /// and with its instructor would collide with a committed booking.
    pub fn check_conflict(&self, draft: &BookingDraft) -> bool {
        crate::validation::check_conflict(
            draft.day,
            draft.slot,
            draft.classroom,
            draft.instructor,
            &self.bookings,
        )
    }

    /// Commits a new booking if it is valid and conflict-free.
    ///
    /// # Errors
    /// - [`TimetableError::EmptyField`] for a blank course name.
    /// - [`TimetableError::UnknownClassroom`] for a room outside the
    ///   configured set.
    /// - [`TimetableError::UnknownInstructor`] for an unregistered instructor.
    /// - [`TimetableError::Conflict`] with every collision found.
    pub fn create_booking(&mut self, draft: BookingDraft) -> Result<BookingId, TimetableError> {
        if draft.name.trim().is_empty() {
            return Err(TimetableError::EmptyField("course name"));
        }
        if !self.config.has_classroom(draft.classroom) {
            return Err(TimetableError::UnknownClassroom(draft.classroom));
        }
        if self.instructor(draft.instructor).is_none() {
            return Err(TimetableError::UnknownInstructor(draft.instructor));
        }

        let reasons = find_conflicts(
            draft.day,
            draft.slot,
            draft.classroom,
            draft.instructor,
            &self.bookings,
            None,
        );
        if !reasons.is_empty() {
            warn!(
                day = %draft.day,
                slot = %draft.slot,
                classroom = %draft.classroom,
                conflicts = reasons.len(),
                "booking rejected"
            );
            return Err(TimetableError::Conflict(reasons));
        }

        let id = BookingId(self.next_booking);
        self.next_booking += 1;
        info!(booking = %id, day = %draft.day, slot = %draft.slot, "booking created");
        self.bookings.push(Booking::new(id, draft));
        Ok(id)
    }

    /// Applies a patch to a committed booking.
    ///
    /// Only name, grade and instructor can change. A new instructor is
    /// re-checked against the booking's day and slot.
    ///
    /// # Errors
    /// - [`TimetableError::UnknownBooking`] if the id is unknown.
    /// - [`TimetableError::EmptyField`] for a blank new name.
    /// - [`TimetableError::UnknownInstructor`] for an unregistered instructor.
    /// - [`TimetableError::Conflict`] if the new instructor is busy.
    pub fn update_booking(
        &mut self,
        id: BookingId,
        patch: BookingPatch,
    ) -> Result<&Booking, TimetableError> {
        let pos = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(TimetableError::UnknownBooking(id))?;

        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(TimetableError::EmptyField("course name"));
            }
        }

        if let Some(instructor) = patch.instructor {
            if self.instructor(instructor).is_none() {
                return Err(TimetableError::UnknownInstructor(instructor));
            }
            let current = &self.bookings[pos];
            let reasons: Vec<_> = find_conflicts(
                current.day,
                current.slot,
                current.classroom,
                instructor,
                &self.bookings,
                Some(id),
            );
            if !reasons.is_empty() {
                warn!(booking = %id, instructor = %instructor, "booking update rejected");
                return Err(TimetableError::Conflict(reasons));
            }
        }

        let booking = &mut self.bookings[pos];
        if let Some(name) = patch.name {
            booking.name = name;
        }
        if let Some(grade) = patch.grade {
            booking.grade = grade;
        }
        if let Some(instructor) = patch.instructor {
            booking.instructor = instructor;
        }
        info!(booking = %id, "booking updated");
        Ok(&*booking)
    }

    /// Removes a booking.
    pub fn delete_booking(&mut self, id: BookingId) -> Result<Booking, TimetableError> {
        let pos = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(TimetableError::UnknownBooking(id))?;
        info!(booking = %id, "booking deleted");
        Ok(self.bookings.remove(pos))
    }

    /// Looks up a booking.
    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// All bookings in creation order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Snapshot of one day's bookings in creation order.
    pub fn bookings_for_day(&self, day: Day) -> Vec<Booking> {
        self.bookings.iter().filter(|b| b.day == day).cloned().collect()
    }

    /// Bookings shown together in one grid cell.
    pub fn cell(&self, day: Day, slot: TimeSlot, grade: Grade) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.occupies(day, slot) && b.grade == grade)
            .collect()
    }

    /// Display colors for one day.
    pub fn render_day(&self, day: Day) -> Result<HashMap<BookingId, RenderColor>, TimetableError> {
        let scope = self.bookings_for_day(day);
        Ok(color_schedule_with(&scope, &self.config.palette)?)
    }

    /// Re-validates the whole timetable.
    pub fn validate(&self) -> ValidationResult {
        validate_scope(&self.bookings, &self.instructors)
    }
}

/// First id after the highest in use, or 1 for none.
fn next_id(
    ids: impl Iterator<Item = u64>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> u64 {
    let highest = ids.max().unwrap_or(0);
    highest.checked_add(1).unwrap_or_else(|| {
        errors.push(ValidationError::new(
            ValidationErrorKind::IdExhausted,
            format!("No {entity} ID left after {highest}"),
        ));
        0
    })
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new(TimetableConfig::default())
    }
}

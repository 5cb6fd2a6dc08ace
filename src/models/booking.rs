//! Booking model.
//!
//! A booking is one scheduled course occurrence: a named course for one
//! grade, taught by one instructor, in one classroom, at one weekly
//! (day, slot) position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Day, InstructorId, TimeSlot};
use crate::error::ParseError;

/// Opaque booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student grade (year) a course is offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    First,
    Second,
    Third,
    Fourth,
}

impl Grade {
    /// All grades in ascending order.
    pub const ALL: [Grade; 4] = [Grade::First, Grade::Second, Grade::Third, Grade::Fourth];

    /// Canonical form value (`"1"`..`"4"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::First => "1",
            Grade::Second => "2",
            Grade::Third => "3",
            Grade::Fourth => "4",
        }
    }

    /// Column header label (`"1st"`..`"4th"`).
    pub fn ordinal(self) -> &'static str {
        match self {
            Grade::First => "1st",
            Grade::Second => "2nd",
            Grade::Third => "3rd",
            Grade::Fourth => "4th",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| ParseError::Grade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}

/// Classroom (room number).
///
/// Membership in the schedulable room set is checked by the timetable
/// against its configuration, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classroom(pub u16);

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Classroom {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Classroom)
            .map_err(|_| ParseError::Classroom(s.to_string()))
    }
}

/// A committed course booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Course name.
    pub name: String,
    pub day: Day,
    #[serde(rename = "time")]
    pub slot: TimeSlot,
    pub grade: Grade,
    pub classroom: Classroom,
    /// Teaching instructor (reference, not ownership).
    pub instructor: InstructorId,
}

impl Booking {
    /// Creates a booking from its parts.
    pub fn new(id: BookingId, draft: BookingDraft) -> Self {
        Self {
            id,
            name: draft.name,
            day: draft.day,
            slot: draft.slot,
            grade: draft.grade,
            classroom: draft.classroom,
            instructor: draft.instructor,
        }
    }

    /// Whether this booking occupies `(day, slot)`.
    #[inline]
    pub fn occupies(&self, day: Day, slot: TimeSlot) -> bool {
        self.day == day && self.slot == slot
    }

    /// Whether this booking is drawn in the same schedule cell as `other`.
    #[inline]
    pub fn shares_cell(&self, other: &Booking) -> bool {
        self.slot == other.slot && self.grade == other.grade
    }
}

/// A proposed booking that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub day: Day,
    #[serde(rename = "time")]
    pub slot: TimeSlot,
    pub grade: Grade,
    pub classroom: Classroom,
    pub instructor: InstructorId,
}

impl BookingDraft {
    /// Creates a draft with an empty name.
    pub fn new(
        day: Day,
        slot: TimeSlot,
        grade: Grade,
        classroom: Classroom,
        instructor: InstructorId,
    ) -> Self {
        Self {
            name: String::new(),
            day,
            slot,
            grade,
            classroom,
            instructor,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Changes allowed on a committed booking.
///
/// Day, slot and classroom are fixed once a booking exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub grade: Option<Grade>,
    pub instructor: Option<InstructorId>,
}

impl BookingPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the course.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Moves the course to another grade.
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Reassigns the instructor.
    pub fn with_instructor(mut self, instructor: InstructorId) -> Self {
        self.instructor = Some(instructor);
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.grade.is_none() && self.instructor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Booking {
        Booking::new(
            BookingId(1),
            BookingDraft::new(
                Day::Monday,
                TimeSlot::Nine,
                Grade::First,
                Classroom(1036),
                InstructorId(7),
            )
            .with_name("Algebra"),
        )
    }

    #[test]
    fn test_grade_parse() {
        assert_eq!("3".parse::<Grade>().unwrap(), Grade::Third);
        assert_eq!("5".parse::<Grade>(), Err(ParseError::Grade("5".into())));
        assert!("first".parse::<Grade>().is_err());
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(Grade::Second.ordinal(), "2nd");
        assert_eq!(Grade::Fourth.to_string(), "4");
    }

    #[test]
    fn test_classroom_parse() {
        assert_eq!("1040".parse::<Classroom>().unwrap(), Classroom(1040));
        assert!("A12".parse::<Classroom>().is_err());
    }

    #[test]
    fn test_booking_from_draft() {
        let b = sample();
        assert_eq!(b.id, BookingId(1));
        assert_eq!(b.name, "Algebra");
        assert!(b.occupies(Day::Monday, TimeSlot::Nine));
        assert!(!b.occupies(Day::Tuesday, TimeSlot::Nine));
    }

    #[test]
    fn test_shares_cell_ignores_day_and_room() {
        let a = sample();
        let mut b = sample();
        b.id = BookingId(2);
        b.classroom = Classroom(1044);
        assert!(a.shares_cell(&b));

        b.grade = Grade::Second;
        assert!(!a.shares_cell(&b));
    }

    #[test]
    fn test_patch_builder() {
        assert!(BookingPatch::new().is_empty());
        let p = BookingPatch::new().with_grade(Grade::Third);
        assert!(!p.is_empty());
        assert_eq!(p.grade, Some(Grade::Third));
    }

    #[test]
    fn test_booking_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["day"], "monday");
        assert_eq!(json["time"], "9:00-10:00");
        assert_eq!(json["grade"], "1");
        assert_eq!(json["classroom"], 1036);
        assert_eq!(json["instructor"], 7);

        let back: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}

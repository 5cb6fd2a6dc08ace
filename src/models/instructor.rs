//! Instructor model.
//!
//! Instructors are referenced by bookings but never owned by them; an
//! instructor can only be removed once no booking points at it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque instructor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorId(pub u64);

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A teaching instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    /// Display name.
    pub name: String,
}

impl Instructor {
    /// Creates a new instructor.
    pub fn new(id: InstructorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

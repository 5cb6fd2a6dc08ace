//! Timetabling domain models.
//!
//! Closed vocabularies (`Day`, `TimeSlot`, `Grade`) are enums so an
//! out-of-range value cannot reach the conflict checker or the colorer.
//!
//! # Mapping to the schedule grid
//!
//! | Model | Grid position |
//! |-------|---------------|
//! | Day | Row group |
//! | TimeSlot | Row within a day |
//! | Grade | Column |
//! | Booking | Entry in a (day, slot, grade) cell |

mod booking;
mod calendar;
mod instructor;

pub use booking::{Booking, BookingDraft, BookingId, BookingPatch, Classroom, Grade};
pub use calendar::{Day, TimeSlot};
pub use instructor::{Instructor, InstructorId};

//! Slot coloring for schedule rendering.
//!
//! Bookings drawn in the same grid cell (same time slot and grade) get
//! different colors so a viewer can tell simultaneous offerings apart.
//!
//! # Pipeline
//!
//! 1. [`ConflictGraph::build`]: one node per booking, edges between
//!    bookings sharing a cell.
//! 2. [`greedy_color`]: first-fit color classes in booking order.
//! 3. [`Palette::generate`]: one evenly spaced hue per class.
//! 4. Map each booking's class onto the palette.
//!
//! Every call builds from the bookings it is given and keeps nothing
//! between calls. Callers must pass a consistent snapshot of the scope.
//!
//! # Example
//!
//! ```
//! use u_timetable::coloring::color_schedule;
//! use u_timetable::models::*;
//!
//! let draft = |grade| {
//!     BookingDraft::new(Day::Monday, TimeSlot::Nine, grade, Classroom(1036), InstructorId(1))
//! };
//! let scope = vec![
//!     Booking::new(BookingId(1), draft(Grade::First)),
//!     Booking::new(BookingId(2), draft(Grade::First)),
//! ];
//! let colors = color_schedule(&scope).unwrap();
//! assert_ne!(colors[&BookingId(1)], colors[&BookingId(2)]);
//! ```

mod graph;
mod greedy;
mod palette;

pub use graph::ConflictGraph;
pub use greedy::{greedy_color, ColorAssignment, ColorClass};
pub use palette::{Palette, PaletteConfig, RenderColor};

use std::collections::HashMap;
use tracing::debug;

use crate::error::ColoringError;
use crate::models::{Booking, BookingId};

/// Computes color classes for a scope.
pub fn color_classes(bookings: &[Booking]) -> Result<ColorAssignment, ColoringError> {
    let graph = ConflictGraph::build(bookings)?;
    let colors = greedy_color(&graph);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        colors = colors.color_count(),
        "colored scope"
    );
    Ok(colors)
}

/// Maps every booking in the scope to a display color, using the default
/// 80% saturation / 50% lightness palette.
pub fn color_schedule(
    bookings: &[Booking],
) -> Result<HashMap<BookingId, RenderColor>, ColoringError> {
    color_schedule_with(bookings, &PaletteConfig::default())
}

/// Maps every booking in the scope to a display color.
///
/// An empty scope yields an empty map.
pub fn color_schedule_with(
    bookings: &[Booking],
    config: &PaletteConfig,
) -> Result<HashMap<BookingId, RenderColor>, ColoringError> {
    let colors = color_classes(bookings)?;
    let palette = Palette::generate(colors.color_count(), config);

    let mut mapped = HashMap::with_capacity(bookings.len());
    for b in bookings {
        let class = colors.color_of(b.id)?;
        let color = palette
            .color_for(class)
            .ok_or(ColoringError::ClassOutsidePalette {
                class,
                palette_len: palette.len(),
            })?;
        mapped.insert(b.id, color);
    }
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingDraft, Classroom, Day, Grade, InstructorId, TimeSlot};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn booking(id: u64, slot: TimeSlot, grade: Grade) -> Booking {
        Booking::new(
            BookingId(id),
            BookingDraft::new(Day::Monday, slot, grade, Classroom(1036), InstructorId(id))
                .with_name(format!("C{id}")),
        )
    }

    fn random_scope(rng: &mut StdRng) -> Vec<Booking> {
        (0..rng.random_range(0..30))
            .map(|i| {
                booking(
                    i,
                    TimeSlot::ALL[rng.random_range(0..3)],
                    Grade::ALL[rng.random_range(0..4)],
                )
            })
            .collect()
    }

    #[test]
    fn test_three_in_one_cell() {
        let scope = vec![
            booking(1, TimeSlot::Nine, Grade::First),
            booking(2, TimeSlot::Nine, Grade::First),
            booking(3, TimeSlot::Nine, Grade::First),
        ];
        let classes = color_classes(&scope).unwrap();
        assert_eq!(classes.color_of(BookingId(1)), Ok(1));
        assert_eq!(classes.color_of(BookingId(2)), Ok(2));
        assert_eq!(classes.color_of(BookingId(3)), Ok(3));

        let colors = color_schedule(&scope).unwrap();
        assert_eq!(colors[&BookingId(1)].hue, 0.0);
        assert_eq!(colors[&BookingId(2)].hue, 120.0);
        assert_eq!(colors[&BookingId(3)].hue, 240.0);
    }

    #[test]
    fn test_different_grades_share_color() {
        let scope = vec![
            booking(1, TimeSlot::Nine, Grade::First),
            booking(4, TimeSlot::Nine, Grade::Second),
        ];
        let classes = color_classes(&scope).unwrap();
        assert_eq!(classes.color_count(), 1);

        let colors = color_schedule(&scope).unwrap();
        assert_eq!(colors[&BookingId(1)], colors[&BookingId(4)]);
        assert_eq!(colors[&BookingId(1)], RenderColor::hsl(0.0, 80, 50));
    }

    #[test]
    fn test_empty_scope() {
        assert!(color_schedule(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_booking_surfaces() {
        let scope = vec![
            booking(1, TimeSlot::Nine, Grade::First),
            booking(1, TimeSlot::Nine, Grade::First),
        ];
        assert_eq!(
            color_schedule(&scope).unwrap_err(),
            ColoringError::DuplicateBooking(BookingId(1))
        );
    }

    #[test]
    fn test_palette_config_applied() {
        let scope = vec![booking(1, TimeSlot::Nine, Grade::First)];
        let config = PaletteConfig {
            saturation: 30,
            lightness: 90,
        };
        let colors = color_schedule_with(&scope, &config).unwrap();
        assert_eq!(colors[&BookingId(1)], RenderColor::hsl(0.0, 30, 90));
    }

    #[test]
    fn test_random_scopes_properties() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let scope = random_scope(&mut rng);
            let classes = color_classes(&scope).unwrap();

            // Proper coloring and one class per member of each cell
            let mut cells: HashMap<(TimeSlot, Grade), Vec<ColorClass>> = HashMap::new();
            for b in &scope {
                cells
                    .entry((b.slot, b.grade))
                    .or_default()
                    .push(classes.color_of(b.id).unwrap());
            }
            for members in cells.values() {
                let distinct: HashSet<_> = members.iter().collect();
                assert_eq!(distinct.len(), members.len());
            }

            // Classes are contiguous and the largest cell sets the count
            let largest = cells.values().map(Vec::len).max().unwrap_or(0);
            assert_eq!(classes.color_count() as usize, largest);

            // Same input, same output
            assert_eq!(color_classes(&scope).unwrap(), classes);

            // Palette size and hue spacing
            let colors = color_schedule(&scope).unwrap();
            let k = f64::from(classes.color_count());
            for b in &scope {
                let c = f64::from(classes.color_of(b.id).unwrap());
                assert!((colors[&b.id].hue - (c - 1.0) * 360.0 / k).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_shuffled_order_keeps_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scope = random_scope(&mut rng);
        let before = color_classes(&scope).unwrap().color_count();

        scope.shuffle(&mut rng);
        assert_eq!(color_classes(&scope).unwrap().color_count(), before);
    }
}

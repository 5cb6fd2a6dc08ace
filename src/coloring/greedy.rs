//! First-fit greedy coloring.
//!
//! # Algorithm
//!
//! Visit nodes in insertion order. Each node takes the smallest positive
//! color not already held by one of its colored neighbors.
//!
//! Not optimal on general graphs. Conflict graphs here are disjoint
//! cliques (one per time slot × grade cell), where first-fit uses exactly
//! as many colors as the largest cell holds.
//!
//! # Complexity
//! O(V + E).
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::collections::{HashMap, HashSet};

use super::ConflictGraph;
use crate::error::ColoringError;
use crate::models::BookingId;

/// A 1-based color class.
pub type ColorClass = u32;

/// Color class per booking, in graph node order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    order: Vec<(BookingId, ColorClass)>,
    index: HashMap<BookingId, ColorClass>,
}

impl ColorAssignment {
    /// Color class of a booking.
    ///
    /// # Errors
    /// [`ColoringError::UnregisteredBooking`] if the booking was not a node
    /// of the colored graph.
    pub fn color_of(&self, id: BookingId) -> Result<ColorClass, ColoringError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(ColoringError::UnregisteredBooking(id))
    }

    /// Highest color class used (0 for an empty scope).
    ///
    /// Classes are contiguous from 1, so this is also the number of
    /// distinct classes.
    pub fn color_count(&self) -> u32 {
        self.order.iter().map(|&(_, c)| c).max().unwrap_or(0)
    }

    /// `(booking, class)` pairs in coloring order.
    pub fn iter(&self) -> impl Iterator<Item = (BookingId, ColorClass)> + '_ {
        self.order.iter().copied()
    }

    /// Number of colored bookings.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was colored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn assign(&mut self, id: BookingId, color: ColorClass) {
        self.order.push((id, color));
        self.index.insert(id, color);
    }
}

/// Colors a conflict graph with the first-fit heuristic.
pub fn greedy_color(graph: &ConflictGraph) -> ColorAssignment {
    let mut colors = ColorAssignment::default();

    for &node in graph.nodes() {
        let taken: HashSet<ColorClass> = graph
            .neighbors(node)
            .unwrap_or_default()
            .iter()
            .filter_map(|n| colors.index.get(n).copied())
            .collect();

        colors.assign(node, smallest_free(&taken));
    }

    colors
}

/// Smallest positive color not in `taken`.
fn smallest_free(taken: &HashSet<ColorClass>) -> ColorClass {
    (1..).find(|c| !taken.contains(c)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[u64], edges: &[(u64, u64)]) -> ConflictGraph {
        let mut g = ConflictGraph::new();
        for &n in nodes {
            g.add_node(BookingId(n)).unwrap();
        }
        for &(a, b) in edges {
            g.add_edge(BookingId(a), BookingId(b));
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let colors = greedy_color(&ConflictGraph::new());
        assert!(colors.is_empty());
        assert_eq!(colors.color_count(), 0);
    }

    #[test]
    fn test_triangle_uses_three_colors() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);
        let colors = greedy_color(&g);
        assert_eq!(colors.color_of(BookingId(1)), Ok(1));
        assert_eq!(colors.color_of(BookingId(2)), Ok(2));
        assert_eq!(colors.color_of(BookingId(3)), Ok(3));
        assert_eq!(colors.color_count(), 3);
    }

    #[test]
    fn test_isolated_nodes_share_first_color() {
        let g = graph(&[1, 2, 3], &[]);
        let colors = greedy_color(&g);
        assert!(colors.iter().all(|(_, c)| c == 1));
    }

    #[test]
    fn test_reuses_lowest_free_color() {
        // Path 1-2-3: 3 only touches 2, so it can take color 1 again
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let colors = greedy_color(&g);
        assert_eq!(colors.color_of(BookingId(3)), Ok(1));
        assert_eq!(colors.color_count(), 2);
    }

    #[test]
    fn test_order_decides_classes() {
        // Two disjoint edges; node 4 takes a different class in each order
        let edges = [(1, 4), (2, 3)];
        let a = greedy_color(&graph(&[1, 2, 3, 4], &edges));
        let b = greedy_color(&graph(&[4, 3, 2, 1], &edges));
        assert_eq!(a.color_of(BookingId(4)), Ok(2));
        assert_eq!(b.color_of(BookingId(4)), Ok(1));
        assert_eq!(a.color_count(), b.color_count());
    }

    #[test]
    fn test_unregistered_lookup_is_error() {
        let colors = greedy_color(&graph(&[1], &[]));
        assert_eq!(
            colors.color_of(BookingId(42)),
            Err(ColoringError::UnregisteredBooking(BookingId(42)))
        );
    }

    #[test]
    fn test_iter_follows_node_order() {
        let colors = greedy_color(&graph(&[7, 3, 5], &[(7, 5)]));
        let ids: Vec<_> = colors.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![BookingId(7), BookingId(3), BookingId(5)]);
        assert_eq!(colors.len(), 3);
    }
}

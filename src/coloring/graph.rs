//! Conflict graph over one scope of bookings.

use std::collections::HashMap;

use crate::error::ColoringError;
use crate::models::{Booking, BookingId};

/// Undirected graph whose edges join bookings drawn in the same cell
/// (equal time slot and equal grade).
///
/// Nodes keep their insertion order; coloring depends on it. Every
/// edge is stored in both directions.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    nodes: Vec<BookingId>,
    adjacency: HashMap<BookingId, Vec<BookingId>>,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for a scope, one node per booking in slice order.
    ///
    /// # Errors
    /// [`ColoringError::DuplicateBooking`] if a booking id is listed twice.
    pub fn build(bookings: &[Booking]) -> Result<Self, ColoringError> {
        let mut graph = Self::new();
        for b in bookings {
            graph.add_node(b.id)?;
        }

        for (i, a) in bookings.iter().enumerate() {
            for b in &bookings[i + 1..] {
                if a.shares_cell(b) {
                    graph.add_edge(a.id, b.id);
                }
            }
        }

        Ok(graph)
    }

    /// Registers a node.
    pub fn add_node(&mut self, id: BookingId) -> Result<(), ColoringError> {
        if self.adjacency.contains_key(&id) {
            return Err(ColoringError::DuplicateBooking(id));
        }
        self.nodes.push(id);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Adds an undirected edge.
    ///
    /// Self-loops, repeated edges and edges touching unknown nodes are
    /// ignored. Returns whether an edge was added.
    pub fn add_edge(&mut self, a: BookingId, b: BookingId) -> bool {
        if a == b
            || !self.adjacency.contains_key(&a)
            || !self.adjacency.contains_key(&b)
            || self.are_adjacent(a, b)
        {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push(a);
        }
        true
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[BookingId] {
        &self.nodes
    }

    /// Neighbors of a node, or `None` if the node is unknown.
    pub fn neighbors(&self, id: BookingId) -> Option<&[BookingId]> {
        self.adjacency.get(&id).map(Vec::as_slice)
    }

    /// Whether the graph has this node.
    pub fn contains(&self, id: BookingId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Whether `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: BookingId, b: BookingId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|list| list.contains(&b))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

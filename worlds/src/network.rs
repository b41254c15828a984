//! Explicit weighted digraph world with zero heuristic.
//!
//! The uniform-cost (Dijkstra) reference client: `estimated_cost` is
//! constant zero, so searches over a `Network` exercise the engine's
//! heuristic-free mode. Adjacency lists keep insertion order, so
//! enumeration is deterministic.

use std::hash::{Hash, Hasher};

use wayfarer_search::SearchState;

/// A directed graph with non-negative edge weights.
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: Vec<Vec<(u64, usize)>>,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its index.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Add a directed edge `from → to` with the given weight.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint has not been added.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        assert!(from < self.adjacency.len(), "unknown source node {from}");
        assert!(to < self.adjacency.len(), "unknown target node {to}");
        self.adjacency[from].push((weight, to));
    }

    /// Add edges in both directions with the same weight.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint has not been added.
    pub fn add_edge_undirected(&mut self, a: usize, b: usize, weight: u64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// A search-state handle for node `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` has not been added.
    #[must_use]
    pub fn node(&self, id: usize) -> NetworkNode<'_> {
        assert!(id < self.adjacency.len(), "unknown node {id}");
        NetworkNode { network: self, id }
    }
}

/// A node handle implementing the search contract with zero heuristic.
#[derive(Debug, Clone, Copy)]
pub struct NetworkNode<'a> {
    network: &'a Network,
    pub id: usize,
}

impl PartialEq for NetworkNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NetworkNode<'_> {}

impl Hash for NetworkNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl SearchState for NetworkNode<'_> {
    fn estimated_cost(&self, _goal: &Self) -> u64 {
        0
    }

    fn adjacent_states(&self) -> Vec<(u64, Self)> {
        self.network.adjacency[self.id]
            .iter()
            .map(|&(weight, to)| (weight, self.network.node(to)))
            .collect()
    }
}

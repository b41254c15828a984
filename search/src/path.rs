//! Search results, aggregate counters, and path reconstruction.

use crate::node::SearchNode;

/// A successful search outcome.
///
/// `cost` equals the sum of edge costs along `path`, and — under the
/// admissible-heuristic assumption — the minimum achievable cost. `path`
/// runs from the initial state to the goal inclusive; it is one minimizing
/// sequence, deterministic per the frontier tie-break rule but not
/// necessarily the unique minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<S> {
    /// Accumulated cost of the path.
    pub cost: u64,
    /// Ordered states from initial to goal inclusive.
    pub path: Vec<S>,
}

/// Aggregate counters for one search execution.
///
/// Purely observational: the counters describe how the engine got to its
/// answer and are never part of the result contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped, found live, and expanded.
    pub expansions: u64,
    /// Nodes created in the arena (including the initial node).
    pub nodes_created: u64,
    /// Frontier entries discarded at pop time (state already settled).
    pub stale_pops: u64,
    /// Neighbors discarded at push time (already settled at ≤ tentative g).
    pub neighbors_discarded: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
}

/// Result of a search execution, successful or not.
///
/// `result` is `None` when the frontier exhausted without reaching a
/// goal-equal state; `stats` is populated either way.
#[derive(Debug, Clone)]
pub struct SearchReport<S> {
    /// The found path, if any.
    pub result: Option<PathResult<S>>,
    /// Aggregate counters for the run.
    pub stats: SearchStats,
}

impl<S> SearchReport<S> {
    /// Returns `true` if the search reached a goal-equal state.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.result.is_some()
    }
}

/// Reconstruct the state sequence from the initial node to `goal_node_id`.
///
/// Walks parent IDs back to the root, then reverses. `node_id` equals the
/// arena index, so the walk is O(path length).
///
/// # Panics
///
/// Panics if `goal_node_id` or any parent ID is out of bounds for `arena`;
/// the engine only calls this with IDs it assigned.
#[must_use]
pub fn reconstruct_path<S: Clone>(arena: &[SearchNode<S>], goal_node_id: u64) -> Vec<S> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        #[allow(clippy::cast_possible_truncation)]
        let node = &arena[id as usize];
        path.push(node.state.clone());
        current_id = node.parent_id;
    }

    path.reverse();
    path
}

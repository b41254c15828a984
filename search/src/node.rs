//! Arena node and frontier ordering key.

/// An immutable search node in the arena.
///
/// Nodes are created once, assigned a monotonically increasing `node_id`
/// equal to their arena index, and never mutated. Ordering for frontier
/// extraction uses `(f_cost, depth, creation_order)` where
/// `f_cost = g_cost + h_cost`. Lower is better; ties broken by shallower
/// depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Monotonic node identifier; equals the node's index in the arena.
    pub node_id: u64,
    /// Parent node ID (`None` for the initial state).
    pub parent_id: Option<u64>,
    /// The client state at this node.
    pub state: S,
    /// Path length from the initial state (initial = 0).
    pub depth: u32,
    /// Accumulated cost along the path from the initial state.
    pub g_cost: u64,
    /// Heuristic estimate of remaining cost to the goal.
    pub h_cost: u64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNode<S> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older `creation_order`.
/// Because `creation_order` is unique, the order is total and frontier pops
/// are FIFO among entries with equal `f_cost` and depth — the documented
/// deterministic tie-break rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S> From<&SearchNode<S>> for FrontierKey {
    fn from(node: &SearchNode<S>) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}

//! Search entry point and expansion loop.

use crate::contract::SearchState;
use crate::frontier::{BestFirstFrontier, ClosedSet};
use crate::node::{FrontierKey, SearchNode};
use crate::path::{reconstruct_path, PathResult, SearchReport, SearchStats};

/// Compute the lowest-cost path from `initial` to a state equal to `goal`.
///
/// Returns `None` when the frontier exhausts without reaching a goal-equal
/// state (goal unreachable). Thin wrapper over [`run_search`] for callers
/// who don't need the counters.
#[must_use]
pub fn shortest_path<S: SearchState>(initial: &S, goal: &S) -> Option<PathResult<S>> {
    run_search(initial, goal).result
}

/// Run best-first search from `initial` toward `goal`, keeping counters.
///
/// A* over the client state space: frontier ordered by
/// `f = g + estimated_cost`, duplicates allowed in the frontier and
/// resolved lazily at pop time against the closed set. With a constant-zero
/// estimate this is uniform-cost (Dijkstra) search.
///
/// Goal detection happens at pop time via `==` on the state type, so a
/// client equality that ignores auxiliary fields terminates the search on
/// the first equal state popped. `initial == goal` returns cost 0 and the
/// single-element path without expanding any neighbors.
///
/// The engine never loops on cycles (closed-set discard) but does not
/// bound the state space; termination on infinite spaces is a caller
/// obligation. Panics from `estimated_cost` / `adjacent_states` propagate
/// unmodified.
#[must_use]
pub fn run_search<S: SearchState>(initial: &S, goal: &S) -> SearchReport<S> {
    let mut frontier = BestFirstFrontier::new();
    let mut closed: ClosedSet<S> = ClosedSet::new();
    let mut arena: Vec<SearchNode<S>> = Vec::new();
    let mut next_creation_order: u64 = 0;
    let mut stats = SearchStats::default();

    let root = SearchNode {
        node_id: 0,
        parent_id: None,
        state: initial.clone(),
        depth: 0,
        g_cost: 0,
        h_cost: initial.estimated_cost(goal),
        creation_order: next_creation_order,
    };
    next_creation_order += 1;
    frontier.push(FrontierKey::from(&root), root.node_id);
    arena.push(root);
    stats.nodes_created += 1;

    let result = loop {
        // Frontier exhausted: goal unreachable.
        let Some(node_id) = frontier.pop() else {
            break None;
        };

        #[allow(clippy::cast_possible_truncation)]
        let current = arena[node_id as usize].clone();

        // Goal detection precedes the stale check: client equality decides,
        // and the first goal-equal pop carries the lowest f among open
        // entries.
        if current.state == *goal {
            break Some(PathResult {
                cost: current.g_cost,
                path: reconstruct_path(&arena, current.node_id),
            });
        }

        // Stale entry: this state was already settled at an equal or lower
        // cost by an earlier pop.
        if closed.settled_at_or_below(&current.state, current.g_cost) {
            stats.stale_pops += 1;
            continue;
        }

        closed.close(current.state.clone(), current.g_cost);
        stats.expansions += 1;

        for (edge_cost, neighbor) in current.state.adjacent_states() {
            let tentative_g = current.g_cost.saturating_add(edge_cost);

            if closed.settled_at_or_below(&neighbor, tentative_g) {
                stats.neighbors_discarded += 1;
                continue;
            }

            let h_cost = neighbor.estimated_cost(goal);
            let child = SearchNode {
                node_id: arena.len() as u64,
                parent_id: Some(current.node_id),
                state: neighbor,
                depth: current.depth + 1,
                g_cost: tentative_g,
                h_cost,
                creation_order: next_creation_order,
            };
            next_creation_order += 1;
            frontier.push(FrontierKey::from(&child), child.node_id);
            arena.push(child);
            stats.nodes_created += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    SearchReport { result, stats }
}

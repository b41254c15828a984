//! Search state contract trait.

use std::hash::Hash;

/// Trait for state types that support best-first search.
///
/// A state is one node in a discrete combinatorial space: a grid cell, a
/// room configuration, a partial solution. The engine is generic over this
/// trait and holds no domain knowledge of its own.
///
/// # Contract
///
/// - Equality and hashing come from the `Eq + Hash` supertraits and must
///   agree (equal states hash identically). Equality semantics are
///   client-defined: goal detection uses `==`, so a state type may
///   deliberately ignore auxiliary bookkeeping fields when comparing.
/// - `estimated_cost` must be a lower bound on the true remaining cost
///   (admissible) for the engine's optimality guarantee to hold. A
///   non-admissible estimate degrades the result to a valid but possibly
///   non-minimal path; termination is unaffected. Constant zero is an
///   explicitly supported mode and turns the engine into uniform-cost
///   (Dijkstra) search.
/// - `adjacent_states` must return a finite collection; an empty result is
///   a valid dead end. Enumeration should be deterministic: same state →
///   same neighbors in the same order.
/// - Both methods are expected to be side-effect-free; the engine may call
///   them repeatedly for the same state. Panics propagate unmodified to the
///   caller of the search.
///
/// Edge costs and estimates are `u64`, so negative costs are
/// unrepresentable. The engine saturates on addition rather than wrapping.
pub trait SearchState: Clone + Eq + Hash {
    /// Lower-bound estimate of the remaining cost from `self` to `goal`.
    fn estimated_cost(&self, goal: &Self) -> u64;

    /// Enumerate all `(edge_cost, state)` pairs reachable in one step.
    fn adjacent_states(&self) -> Vec<(u64, Self)>;
}

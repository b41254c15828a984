//! Best-first frontier (open set) and closed-set bookkeeping.
//!
//! The frontier stores `(key, node_id)` entries rather than full nodes;
//! states live in the caller's arena. Multiple entries for the same state
//! may coexist — stale ones are resolved lazily at pop time against the
//! closed set.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::node::FrontierKey;

/// A frontier entry wrapping a node ID with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager (the open set).
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push a node onto the frontier.
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest `FrontierKey`) node ID from the frontier.
    #[must_use]
    pub fn pop(&mut self) -> Option<u64> {
        self.heap.pop().map(|e| e.node_id)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// The closed set: states whose optimal cost-so-far is finalized.
///
/// Keyed by state identity (`Eq + Hash`), mapping to the g-cost the state
/// was settled at. Only point queries are performed — the map is never
/// iterated, so `HashMap` ordering cannot leak into search results.
#[derive(Debug)]
pub struct ClosedSet<S> {
    settled: HashMap<S, u64>,
}

impl<S: Eq + Hash> ClosedSet<S> {
    /// Create a new empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settled: HashMap::new(),
        }
    }

    /// Mark a state as settled at cost `g_cost`.
    ///
    /// Keeps the lower cost if the state was already settled.
    pub fn close(&mut self, state: S, g_cost: u64) {
        self.settled
            .entry(state)
            .and_modify(|g| {
                if g_cost < *g {
                    *g = g_cost;
                }
            })
            .or_insert(g_cost);
    }

    /// Whether `state` is settled at a cost less than or equal to `g_cost`.
    ///
    /// This is the stale-entry test: a frontier entry (or a freshly
    /// discovered neighbor) at cost `g_cost` is discarded when this holds.
    #[must_use]
    pub fn settled_at_or_below(&self, state: &S, g_cost: u64) -> bool {
        self.settled.get(state).is_some_and(|&g| g <= g_cost)
    }

    /// Number of settled states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    /// Whether no state has been settled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}

impl<S: Eq + Hash> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

//! Wayfarer Search: deterministic best-first search over client state spaces.
//!
//! This crate is the engine core. It has no external dependencies and knows
//! nothing about any concrete problem domain — clients supply a state type
//! implementing [`SearchState`] and consume a [`PathResult`].
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfarer_search  ←  wayfarer_worlds  ←  lock-tests / benchmarks
//! (engine core)       (reference state     (cross-crate properties,
//!                      spaces)              criterion suites)
//! ```
//!
//! # Key types
//!
//! - [`SearchState`] — the capability contract a client state type implements
//! - [`SearchNode`] — immutable arena node with deterministic ordering
//! - [`BestFirstFrontier`] — the open set (min-heap over [`FrontierKey`])
//! - [`ClosedSet`] — settled states with their final g-costs
//! - [`PathResult`] — cost plus the reconstructed state sequence
//! - [`shortest_path`] / [`run_search`] — the engine entry points

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod node;
pub mod path;
pub mod search;

pub use contract::SearchState;
pub use frontier::{BestFirstFrontier, ClosedSet};
pub use node::{FrontierKey, SearchNode};
pub use path::{PathResult, SearchReport, SearchStats};
pub use search::{run_search, shortest_path};

//! Wayfarer Worlds: reference state spaces for the search engine.
//!
//! Each module is a self-contained client of the `SearchState` contract,
//! used by the lock tests and benchmarks. Worlds own their data layout and
//! input parsing; the engine never sees anything but the contract.
//!
//! - [`grid`] — uniform-cost grid with blocked cells, Manhattan heuristic
//! - [`risk`] — weighted grid parsed from digit text, entry-risk edges
//! - [`network`] — explicit weighted digraph with zero heuristic
//!   (uniform-cost reference client)

#![forbid(unsafe_code)]

pub mod grid;
pub mod network;
pub mod risk;

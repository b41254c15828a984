//! Uniform-cost grid world: 4-connectivity, cost 1 per step.
//!
//! The state handle borrows the grid, so equality and hashing deliberately
//! cover coordinates only — two handles into different grids of the same
//! shape compare equal, which is fine: a search never mixes grids.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use wayfarer_search::SearchState;

/// A rectangular grid where every open cell costs 1 to enter.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    width: u32,
    height: u32,
    blocked: HashSet<(u32, u32)>,
}

impl UniformGrid {
    /// Create an open grid of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blocked: HashSet::new(),
        }
    }

    /// Mark a cell as impassable.
    pub fn block(&mut self, x: u32, y: u32) {
        self.blocked.insert((x, y));
    }

    /// Whether `(x, y)` is inside the grid and not blocked.
    #[must_use]
    pub fn is_open(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && !self.blocked.contains(&(x, y))
    }

    /// A search-state handle for the cell at `(x, y)`.
    #[must_use]
    pub fn pos(&self, x: u32, y: u32) -> GridPos<'_> {
        GridPos { grid: self, x, y }
    }
}

/// A cell handle implementing the search contract.
#[derive(Debug, Clone, Copy)]
pub struct GridPos<'a> {
    grid: &'a UniformGrid,
    pub x: u32,
    pub y: u32,
}

impl PartialEq for GridPos<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.x, self.y) == (other.x, other.y)
    }
}

impl Eq for GridPos<'_> {}

impl Hash for GridPos<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x, self.y).hash(state);
    }
}

impl SearchState for GridPos<'_> {
    /// Manhattan distance: admissible because every step costs exactly 1.
    fn estimated_cost(&self, goal: &Self) -> u64 {
        u64::from(self.x.abs_diff(goal.x)) + u64::from(self.y.abs_diff(goal.y))
    }

    fn adjacent_states(&self) -> Vec<(u64, Self)> {
        // Fixed W, E, N, S order keeps enumeration deterministic.
        let steps = [
            (self.x.wrapping_sub(1), self.y),
            (self.x + 1, self.y),
            (self.x, self.y.wrapping_sub(1)),
            (self.x, self.y + 1),
        ];
        steps
            .into_iter()
            .filter(|&(x, y)| self.grid.is_open(x, y))
            .map(|(x, y)| (1, self.grid.pos(x, y)))
            .collect()
    }
}

//! Weighted grid world: per-cell entry risk 1–9, parsed from digit text.
//!
//! Entering a cell costs that cell's risk; the starting cell's risk is
//! never paid. Manhattan distance stays admissible because the minimum
//! entry risk is 1.

use std::hash::{Hash, Hasher};

use wayfarer_search::SearchState;

/// Typed failure for risk-grid parsing.
///
/// `row` and `column` are grid coordinates: leading and trailing blank
/// lines are ignored and never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// Input contained no rows.
    EmptyGrid,
    /// A blank line appeared between grid rows.
    BlankRow { row: usize },
    /// A row's length differs from the first row's.
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A character outside `1..=9` was found.
    InvalidDigit { row: usize, column: usize, found: char },
}

impl std::fmt::Display for GridParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid input contains no rows"),
            Self::BlankRow { row } => {
                write!(f, "blank line inside grid before row {row}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::InvalidDigit { row, column, found } => {
                write!(f, "invalid risk digit {found:?} at row {row}, column {column}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

/// A rectangular grid of per-cell entry risks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskGrid {
    width: u32,
    height: u32,
    risk: Vec<u8>,
}

impl RiskGrid {
    /// Parse a grid from lines of digits `1..=9`.
    ///
    /// Leading and trailing blank lines are ignored; blank lines between
    /// grid rows are rejected. Error positions are grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] when the input is empty, a blank line
    /// appears between grid rows, a row length differs from the first row,
    /// or a non-risk character appears.
    pub fn parse(input: &str) -> Result<Self, GridParseError> {
        let mut width: Option<usize> = None;
        let mut risk = Vec::new();
        let mut height = 0u32;
        let mut past_grid = false;

        for line in input.lines().map(str::trim) {
            if line.is_empty() {
                past_grid = height > 0;
                continue;
            }
            let row = height as usize;
            if past_grid {
                return Err(GridParseError::BlankRow { row });
            }
            let expected = *width.get_or_insert(line.chars().count());
            let found = line.chars().count();
            if found != expected {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            for (column, c) in line.chars().enumerate() {
                match c.to_digit(10) {
                    Some(d @ 1..=9) => {
                        #[allow(clippy::cast_possible_truncation)]
                        risk.push(d as u8);
                    }
                    _ => return Err(GridParseError::InvalidDigit { row, column, found: c }),
                }
            }
            height += 1;
        }

        let Some(width) = width else {
            return Err(GridParseError::EmptyGrid);
        };
        #[allow(clippy::cast_possible_truncation)]
        let width = width as u32;
        Ok(Self {
            width,
            height,
            risk,
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Entry risk of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn risk_at(&self, x: u32, y: u32) -> u64 {
        assert!(x < self.width && y < self.height, "cell outside grid");
        u64::from(self.risk[(y * self.width + x) as usize])
    }

    /// A search-state handle for the cell at `(x, y)`.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> RiskCell<'_> {
        RiskCell { grid: self, x, y }
    }

    /// Handle for the top-left cell.
    #[must_use]
    pub fn top_left(&self) -> RiskCell<'_> {
        self.cell(0, 0)
    }

    /// Handle for the bottom-right cell.
    #[must_use]
    pub fn bottom_right(&self) -> RiskCell<'_> {
        self.cell(self.width - 1, self.height - 1)
    }
}

/// A cell handle implementing the search contract.
#[derive(Debug, Clone, Copy)]
pub struct RiskCell<'a> {
    grid: &'a RiskGrid,
    pub x: u32,
    pub y: u32,
}

impl PartialEq for RiskCell<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.x, self.y) == (other.x, other.y)
    }
}

impl Eq for RiskCell<'_> {}

impl Hash for RiskCell<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x, self.y).hash(state);
    }
}

impl SearchState for RiskCell<'_> {
    fn estimated_cost(&self, goal: &Self) -> u64 {
        u64::from(self.x.abs_diff(goal.x)) + u64::from(self.y.abs_diff(goal.y))
    }

    fn adjacent_states(&self) -> Vec<(u64, Self)> {
        let steps = [
            (self.x.wrapping_sub(1), self.y),
            (self.x + 1, self.y),
            (self.x, self.y.wrapping_sub(1)),
            (self.x, self.y + 1),
        ];
        steps
            .into_iter()
            .filter(|&(x, y)| x < self.grid.width && y < self.grid.height)
            .map(|(x, y)| (self.grid.risk_at(x, y), self.grid.cell(x, y)))
            .collect()
    }
}

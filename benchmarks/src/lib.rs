//! Shared helpers for wayfarer benchmark suites.

#![forbid(unsafe_code)]

use wayfarer_worlds::risk::RiskGrid;

/// Generate a deterministic `side × side` risk grid.
///
/// Cell risks follow a fixed arithmetic pattern in `1..=9`, so every run
/// and machine benchmarks the same search problem without shipping a large
/// fixture file.
///
/// # Panics
///
/// Panics if the generated text fails to parse, which would indicate a
/// broken generator.
#[must_use]
pub fn generated_risk_grid(side: u32) -> RiskGrid {
    let mut text = String::with_capacity((side * (side + 1)) as usize);
    for y in 0..side {
        for x in 0..side {
            let risk = (x * 7 + y * 3 + (x * y) % 5) % 9 + 1;
            text.push(char::from_digit(risk, 10).expect("risk in 1..=9"));
        }
        text.push('\n');
    }
    RiskGrid::parse(&text).expect("generated grid parses")
}

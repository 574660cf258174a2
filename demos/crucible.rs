//! Minimal heat loss through a city map under both crucible regimes.
//!
//! Usage: `crucible [PATH]` (defaults to `input.txt`). The map is one row of
//! digits per line; the route runs from the top-left to the bottom-right
//! block.

use std::error::Error;

use crucible_core::CostGrid;
use crucible_paths::{RunLimits, solve};

const DEFAULT_INPUT: &str = "input.txt";

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let text = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
    let grid: CostGrid = text.parse()?;

    // The grid is immutable, so both regimes can read it at once.
    let (crucible, ultra) = std::thread::scope(|s| {
        let crucible = s.spawn(|| solve(&grid, RunLimits::CRUCIBLE));
        let ultra = s.spawn(|| solve(&grid, RunLimits::ULTRA));
        (crucible.join(), ultra.join())
    });
    let crucible = crucible.map_err(|_| "crucible search panicked")??;
    let ultra = ultra.map_err(|_| "ultra crucible search panicked")??;

    println!("crucible ({}): {crucible}", RunLimits::CRUCIBLE);
    println!("ultra crucible ({}): {ultra}", RunLimits::ULTRA);
    Ok(())
}

use crucible_core::{CostGrid, Point};

use crate::distance::manhattan;

/// Lower-bound estimate of the remaining cost between two points.
///
/// Must never overestimate the true cost (admissible), otherwise the search
/// may settle on a suboptimal answer.
pub trait Heuristic {
    /// Heuristic estimate of the cost of travelling from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> u32;
}

/// Manhattan distance scaled by the cheapest cell in the grid.
///
/// Every path covers at least that many cells and pays at least the grid
/// minimum for each, so the estimate is admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCostManhattan {
    min_cost: u32,
}

impl MinCostManhattan {
    /// Build the heuristic for `grid`.
    pub fn for_grid(grid: &CostGrid) -> Self {
        Self {
            min_cost: grid.min_cell_cost(),
        }
    }
}

impl Heuristic for MinCostManhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u32 {
        manhattan(from, to).saturating_mul(self.min_cost)
    }
}

/// The constant-zero estimate. Turns the search into plain Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> u32 {
        0
    }
}

impl<F: Fn(Point, Point) -> u32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u32 {
        self(from, to)
    }
}

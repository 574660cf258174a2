use crucible_core::{CostGrid, Direction, Point};

use crate::limits::RunLimits;
use crate::search::{SearchError, accumulate};
use crate::state::State;

/// A state reachable in one transition, with the cost of getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub state: State,
    pub cost: u32,
}

/// Append the successors of `state` into `buf`. The caller clears `buf`
/// before calling.
///
/// Continuing straight moves a single cell and spends one unit of budget.
/// Turning (or leaving the start state) commits to `limits.min()` cells at
/// once and refills the budget. Reversing is never allowed, and transitions
/// that would leave the grid are dropped whole.
///
/// Errors come from the bounds-checked cost lookups, or from a committed
/// run whose summed cost overflows.
pub fn expand(
    grid: &CostGrid,
    limits: RunLimits,
    state: &State,
    buf: &mut Vec<Successor>,
) -> Result<(), SearchError> {
    for dir in Direction::ALL {
        match state.dir {
            Some(cur) if cur.is_opposite(dir) => continue,
            Some(cur) if cur == dir => {
                if state.budget == 0 {
                    continue;
                }
                let next = state.pos.step(dir, 1);
                if !grid.contains(next) {
                    continue;
                }
                buf.push(Successor {
                    state: State {
                        pos: next,
                        dir: Some(dir),
                        budget: state.budget - 1,
                    },
                    cost: grid.cost_at(next)?,
                });
            }
            _ => {
                let Some((pos, cost)) = run(grid, state.pos, dir, limits.min())? else {
                    continue;
                };
                buf.push(Successor {
                    state: State {
                        pos,
                        dir: Some(dir),
                        budget: limits.budget(),
                    },
                    cost,
                });
            }
        }
    }
    Ok(())
}

/// Walk `n` cells from `from` towards `dir`, summing entry costs.
///
/// Returns `None` when the walk would leave the grid.
fn run(
    grid: &CostGrid,
    from: Point,
    dir: Direction,
    n: u32,
) -> Result<Option<(Point, u32)>, SearchError> {
    // A run of n cells needs n + 1 cells along the axis.
    let extent = grid.rows().max(grid.cols());
    if n as usize >= extent {
        return Ok(None);
    }
    let n = n as i32;
    let end = from.step(dir, n);
    if !grid.contains(end) {
        return Ok(None);
    }
    let mut cost = 0u32;
    for i in 1..=n {
        cost = accumulate(cost, grid.cost_at(from.step(dir, i))?)?;
    }
    Ok(Some((end, cost)))
}

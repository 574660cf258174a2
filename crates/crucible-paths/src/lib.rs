//! Shortest paths on cost grids under run-length limits.
//!
//! A path moves between orthogonally adjacent cells and pays the cost of
//! every cell it enters. It may never reverse, must cross at least
//! `min` cells after each turn (and on its first move), and may cross at
//! most `max` cells in one direction before turning.
//!
//! The search runs A\* over an augmented state space where a node is a
//! cell together with the direction of travel and the number of single
//! steps still allowed before a turn:
//!
//! - [`expand`] generates the successors of a [`State`]
//! - [`Frontier`] and [`BestCosts`] hold the open list and relaxation table
//! - [`Search`] drives the loop and yields an [`Outcome`]
//!
//! ```
//! use crucible_core::CostGrid;
//! use crucible_paths::{solve, Outcome, RunLimits};
//!
//! let grid: CostGrid = "12\n34".parse().unwrap();
//! assert_eq!(solve(&grid, RunLimits::CRUCIBLE).unwrap(), Outcome::Finished(6));
//! ```

mod distance;
mod expand;
mod frontier;
mod heuristic;
mod limits;
mod search;
mod state;

pub use distance::manhattan;
pub use expand::{Successor, expand};
pub use frontier::{BestCosts, Entry, Frontier};
pub use heuristic::{Heuristic, MinCostManhattan, Zero};
pub use limits::RunLimits;
pub use search::{Outcome, Search, SearchError, SearchStats, solve, solve_regimes};
pub use state::State;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crucible_core::{CostGrid, GridError, Point};

use crate::expand::expand;
use crate::frontier::{BestCosts, Frontier};
use crate::heuristic::{Heuristic, MinCostManhattan};
use crate::limits::RunLimits;
use crate::state::State;

/// Result of a search that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The destination was reached; holds the minimal accumulated cost.
    Finished(u32),
    /// Every reachable state was explored without touching the destination.
    Unreachable,
}

impl Outcome {
    /// The minimal cost, or `None` if the destination is unreachable.
    #[inline]
    pub fn cost(self) -> Option<u32> {
        match self {
            Outcome::Finished(c) => Some(c),
            Outcome::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Outcome::Finished(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Finished(c) => write!(f, "{c}"),
            Outcome::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries taken off the frontier.
    pub popped: usize,
    /// Popped entries superseded by a cheaper copy of the same state.
    pub stale: usize,
    /// Popped entries that could not beat the best arrival found so far.
    pub pruned: usize,
    /// States whose successors were generated.
    pub expanded: usize,
    /// Entries put on the frontier, the start state included.
    pub pushed: usize,
    /// Popped entries sitting on the destination.
    pub arrivals: usize,
}

/// Errors that stop a search before it produces an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Run lengths must satisfy `1 <= min <= max`.
    Constraint { min: u32, max: u32 },
    /// An endpoint or a cost lookup fell outside the grid.
    Grid(GridError),
    /// The cancellation flag was raised mid-search.
    Cancelled,
    /// An accumulated path cost no longer fits in a `u32`.
    CostOverflow,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constraint { min, max } => write!(
                f,
                "invalid run limits {min}..={max}: need 1 <= min <= max"
            ),
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::CostOverflow => write!(f, "search: accumulated cost overflows u32"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Run-constrained shortest-path search over a [`CostGrid`].
///
/// A `Search` borrows the grid and may be [`run`](Search::run) any number of
/// times; each run builds its own frontier and best-cost table, so runs never
/// observe each other. Searches over the same grid can run on different
/// threads at once.
pub struct Search<'a, H = MinCostManhattan> {
    grid: &'a CostGrid,
    limits: RunLimits,
    heuristic: H,
    cancel: Option<&'a AtomicBool>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Create an A* search guided by [`MinCostManhattan`].
    pub fn new(grid: &'a CostGrid, limits: RunLimits) -> Self {
        Self {
            grid,
            limits,
            heuristic: MinCostManhattan::for_grid(grid),
            cancel: None,
            stats: SearchStats::default(),
        }
    }
}

impl<'a, H: Heuristic> Search<'a, H> {
    /// Replace the heuristic. It must be admissible for the result to stay
    /// optimal.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> Search<'a, H2> {
        Search {
            grid: self.grid,
            limits: self.limits,
            heuristic,
            cancel: self.cancel,
            stats: self.stats,
        }
    }

    /// Abort with [`SearchError::Cancelled`] once `flag` becomes `true`.
    ///
    /// The flag is polled once per frontier pop.
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Counters from the most recent [`run`](Search::run).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the minimal cost of travelling from `from` to `to`.
    ///
    /// The cost of `from` itself is never paid. Every state is explored (or
    /// shown unable to beat the best arrival) before an answer is returned,
    /// because the first arrival popped is not necessarily the cheapest one
    /// across arrival directions and budgets.
    pub fn run(&mut self, from: Point, to: Point) -> Result<Outcome, SearchError> {
        for p in [from, to] {
            if !self.grid.contains(p) {
                return Err(GridError::OutOfRange(p).into());
            }
        }

        log::debug!(
            "search {from} -> {to} on {}x{} grid, runs {}",
            self.grid.cols(),
            self.grid.rows(),
            self.limits
        );

        let mut stats = SearchStats::default();
        let mut best = BestCosts::new();
        let mut frontier = Frontier::new();
        let mut succ = Vec::with_capacity(4);
        let mut answer: Option<u32> = None;

        let start = State::start(from);
        best.try_improve(start, 0);
        frontier.push(start, 0, self.heuristic.estimate(from, to));
        stats.pushed += 1;

        while let Some(entry) = frontier.pop_min() {
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                self.stats = stats;
                log::debug!("search {from} -> {to} cancelled after {} pops", stats.popped);
                return Err(SearchError::Cancelled);
            }
            stats.popped += 1;

            if best.get(&entry.state).is_some_and(|c| entry.cost > c) {
                stats.stale += 1;
                continue;
            }

            if answer.is_some_and(|a| entry.priority >= u64::from(a)) {
                stats.pruned += 1;
                continue;
            }

            if entry.state.pos == to {
                stats.arrivals += 1;
                log::trace!(
                    "arrival at {to} from {:?} with cost {}",
                    entry.state.dir,
                    entry.cost
                );
                answer = Some(answer.map_or(entry.cost, |a| a.min(entry.cost)));
                continue;
            }

            stats.expanded += 1;
            succ.clear();
            expand(self.grid, self.limits, &entry.state, &mut succ)?;
            for s in &succ {
                let candidate = accumulate(entry.cost, s.cost)?;
                if best.try_improve(s.state, candidate) {
                    frontier.push(s.state, candidate, self.heuristic.estimate(s.state.pos, to));
                    stats.pushed += 1;
                }
            }
        }

        self.stats = stats;
        let outcome = match answer {
            Some(c) => Outcome::Finished(c),
            None => Outcome::Unreachable,
        };
        log::debug!(
            "search {from} -> {to}: {outcome} ({} states, {} pops, {} stale, {} pruned)",
            best.len(),
            stats.popped,
            stats.stale,
            stats.pruned
        );
        Ok(outcome)
    }
}

/// Add a step's cost to a path cost, refusing to wrap or cap.
pub(crate) fn accumulate(cost: u32, step: u32) -> Result<u32, SearchError> {
    cost.checked_add(step).ok_or(SearchError::CostOverflow)
}

/// Minimal cost from the top-left to the bottom-right cell of `grid`.
pub fn solve(grid: &CostGrid, limits: RunLimits) -> Result<Outcome, SearchError> {
    Search::new(grid, limits).run(grid.top_left(), grid.bottom_right())
}

/// Run [`solve`] once per entry of `regimes`, returning outcomes in order.
pub fn solve_regimes(grid: &CostGrid, regimes: &[RunLimits]) -> Result<Vec<Outcome>, SearchError> {
    regimes.iter().map(|&limits| solve(grid, limits)).collect()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        for o in [Outcome::Finished(102), Outcome::Unreachable] {
            let json = serde_json::to_string(&o).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(o, back);
        }
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            popped: 10,
            stale: 2,
            pruned: 1,
            expanded: 6,
            pushed: 10,
            arrivals: 1,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}

use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use crate::state::State;

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// A pending state with its accumulated cost, ordered by `priority`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Entry {
    pub state: State,
    pub cost: u32,
    /// `cost` plus the heuristic estimate at `state.pos`. Wide enough that
    /// the sum never wraps.
    pub priority: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of pending states.
///
/// The same state may be pushed many times; callers drop the stale copies
/// when they pop them.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `state` reached at `cost`, keyed by `cost + estimate`.
    pub fn push(&mut self, state: State, cost: u32, estimate: u32) {
        self.heap.push(Entry {
            state,
            cost,
            priority: u64::from(cost) + u64::from(estimate),
        });
    }

    /// Remove the entry with the smallest priority. Ties are broken
    /// arbitrarily.
    pub fn pop_min(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

// ---------------------------------------------------------------------------
// BestCosts
// ---------------------------------------------------------------------------

/// Smallest accumulated cost seen so far for each state.
///
/// Unseen states count as infinitely expensive. Recorded costs only ever
/// go down.
#[derive(Debug, Default)]
pub struct BestCosts {
    costs: HashMap<State, u32>,
}

impl BestCosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `candidate` for `state` if it beats the current best.
    ///
    /// Returns `true` when the table changed.
    pub fn try_improve(&mut self, state: State, candidate: u32) -> bool {
        match self.costs.entry(state) {
            MapEntry::Vacant(v) => {
                v.insert(candidate);
                true
            }
            MapEntry::Occupied(mut o) => {
                if candidate < *o.get() {
                    o.insert(candidate);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// The recorded cost of `state`, if it was ever reached.
    pub fn get(&self, state: &State) -> Option<u32> {
        self.costs.get(state).copied()
    }

    /// Number of distinct states reached.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

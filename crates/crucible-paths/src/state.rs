use crucible_core::{Direction, Point};

/// A node of the augmented search space.
///
/// Two states at the same cell are distinct when they arrived from different
/// directions or with a different remaining run budget, because they allow
/// different continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub pos: Point,
    /// Direction of the last move, `None` only before the first move.
    pub dir: Option<Direction>,
    /// Single steps still allowed in `dir` before a turn is mandatory.
    pub budget: u32,
}

impl State {
    /// The synthetic start state at `pos`.
    #[inline]
    pub const fn start(pos: Point) -> Self {
        Self {
            pos,
            dir: None,
            budget: 0,
        }
    }
}

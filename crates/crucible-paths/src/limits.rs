use std::fmt;

use crate::search::SearchError;

/// Minimum and maximum run lengths for one search.
///
/// After every turn (and on the first move) exactly `min` cells must be
/// crossed in the new direction; no more than `max` cells may be crossed in
/// one direction before turning. `1 <= min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLimits")
)]
pub struct RunLimits {
    min: u32,
    max: u32,
}

impl RunLimits {
    /// Regular crucible: turn after at most three cells.
    pub const CRUCIBLE: Self = Self { min: 1, max: 3 };

    /// Ultra crucible: at least four cells per run, at most ten.
    pub const ULTRA: Self = Self { min: 4, max: 10 };

    /// Validate and build a run-length pair.
    pub fn new(min: u32, max: u32) -> Result<Self, SearchError> {
        if min == 0 || min > max {
            return Err(SearchError::Constraint { min, max });
        }
        Ok(Self { min, max })
    }

    /// Cells that must be crossed after a turn.
    #[inline]
    pub fn min(self) -> u32 {
        self.min
    }

    /// Cells that may be crossed in one direction before a turn.
    #[inline]
    pub fn max(self) -> u32 {
        self.max
    }

    /// Single steps still allowed right after a turn.
    #[inline]
    pub fn budget(self) -> u32 {
        self.max - self.min
    }
}

impl fmt::Display for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLimits {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLimits> for RunLimits {
    type Error = SearchError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_pairs() {
        assert_eq!(RunLimits::new(1, 3), Ok(RunLimits::CRUCIBLE));
        assert_eq!(RunLimits::new(4, 10), Ok(RunLimits::ULTRA));
        let one = RunLimits::new(1, 1).unwrap();
        assert_eq!((one.min(), one.max()), (1, 1));
        assert_eq!(one.budget(), 0);
        assert_eq!((RunLimits::ULTRA.min(), RunLimits::ULTRA.max()), (4, 10));
        assert_eq!(RunLimits::ULTRA.budget(), 6);
        assert_eq!(RunLimits::ULTRA.to_string(), "4..=10");
    }

    #[test]
    fn rejects_invalid_pairs() {
        assert_eq!(
            RunLimits::new(0, 3),
            Err(SearchError::Constraint { min: 0, max: 3 })
        );
        assert_eq!(
            RunLimits::new(4, 3),
            Err(SearchError::Constraint { min: 4, max: 3 })
        );
        assert!(RunLimits::new(0, 0).is_err());
    }
}

//! An immutable grid of per-cell entry costs.
//!
//! [`CostGrid`] is parsed once from a block of decimal digits (one row per
//! line) and is read-only afterwards, so a single grid can back any number
//! of searches, including searches running on other threads.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// A rectangular table of single-digit entry costs.
///
/// The cost of a cell is paid when a path *enters* it; the starting cell is
/// free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CostGrid {
    cells: Vec<u8>,
    bounds: Range,
    min_cost: u32,
}

impl CostGrid {
    /// Parse a grid from text, one row per line.
    ///
    /// Both `\n` and `\r\n` line endings are accepted, as is a single
    /// trailing newline.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(text.len());
        let mut width = 0usize;
        let mut height = 0usize;

        for (y, line) in text.lines().enumerate() {
            let mut found = 0usize;
            for (x, ch) in line.chars().enumerate() {
                let Some(d) = ch.to_digit(10) else {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                cells.push(d as u8);
                found += 1;
            }
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        // Never empty past this point.
        let min_cost = cells.iter().copied().min().map_or(0, u32::from);
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
            min_cost,
        })
    }

    /// Number of rows (the grid height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns (the grid width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` names a cell of the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Cost of entering the cell at `p`.
    pub fn cost_at(&self, p: Point) -> Result<u32, GridError> {
        if !self.bounds.contains(p) {
            return Err(GridError::OutOfRange(p));
        }
        let idx = p.y as usize * self.cols() + p.x as usize;
        Ok(u32::from(self.cells[idx]))
    }

    /// Smallest cost of any cell in the grid.
    #[inline]
    pub fn min_cell_cost(&self) -> u32 {
        self.min_cost
    }

    /// The top-left cell, the conventional search source.
    #[inline]
    pub fn top_left(&self) -> Point {
        self.bounds.min
    }

    /// The bottom-right cell, the conventional search destination.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.cols()).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &d in row {
                write!(f, "{d}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for CostGrid {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CostGrid> for String {
    fn from(grid: CostGrid) -> Self {
        grid.to_string()
    }
}

/// Errors that can occur when building or reading a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows, or its rows have no cells.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `0`-`9` was found.
    InvalidDigit { ch: char, pos: Point },
    /// A lookup fell outside the grid.
    OutOfRange(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "grid contains invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfRange(p) => write!(f, "grid: point {p} is out of range"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
241
321
325
";

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.bounds(), Range::new(0, 0, 3, 3));
        assert_eq!(g.top_left(), Point::new(0, 0));
        assert_eq!(g.bottom_right(), Point::new(2, 2));
    }

    #[test]
    fn cost_lookup() {
        let g: CostGrid = SMALL.parse().unwrap();
        assert_eq!(g.cost_at(Point::new(0, 0)), Ok(2));
        assert_eq!(g.cost_at(Point::new(1, 0)), Ok(4));
        assert_eq!(g.cost_at(Point::new(0, 1)), Ok(3));
        assert_eq!(g.cost_at(Point::new(2, 2)), Ok(5));
    }

    #[test]
    fn cost_lookup_out_of_range() {
        let g = CostGrid::parse(SMALL).unwrap();
        for p in [Point::new(3, 0), Point::new(0, 3), Point::new(-1, 1)] {
            assert_eq!(g.cost_at(p), Err(GridError::OutOfRange(p)));
            assert!(!g.contains(p));
        }
    }

    #[test]
    fn min_cell_cost() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.min_cell_cost(), 1);
        let zero = CostGrid::parse("99\n09").unwrap();
        assert_eq!(zero.min_cell_cost(), 0);
    }

    #[test]
    fn crlf_and_no_trailing_newline() {
        let a = CostGrid::parse("12\r\n34\r\n").unwrap();
        let b = CostGrid::parse("12\n34").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_round_trips_text() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.to_string(), SMALL.trim_end());
        let single = CostGrid::parse("7").unwrap();
        assert_eq!(single.to_string(), "7");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = CostGrid::parse("123\n12\n123").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        // A blank line in the middle is a zero-width row.
        assert!(matches!(
            CostGrid::parse("12\n\n12"),
            Err(GridError::InconsistentWidth { row: 1, found: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_digits() {
        let err = CostGrid::parse("12\n3x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(CostGrid::parse("1 2").is_err());
        assert!(CostGrid::parse("-1").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(CostGrid::parse(""), Err(GridError::Empty));
        assert_eq!(CostGrid::parse("\n"), Err(GridError::Empty));
    }

    #[test]
    fn error_messages() {
        let err = CostGrid::parse("1a").unwrap_err();
        assert_eq!(
            err.to_string(),
            "grid contains invalid digit \u{201c}a\u{201d} at (1, 0)"
        );
        assert_eq!(
            GridError::OutOfRange(Point::new(4, 2)).to_string(),
            "grid: point (4, 2) is out of range"
        );
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CostGrid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_text() {
        let g = CostGrid::parse("12\n34").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"12\\n34\"");
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn invalid_text_fails_to_deserialize() {
        let res: Result<CostGrid, _> = serde_json::from_str("\"1\\n22\"");
        assert!(res.is_err());
    }
}

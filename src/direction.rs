//! Directions a word can run in, and the configured set of them.
//!
//! Rows grow downward and columns grow to the right, so a direction is just a
//! `(row_step, col_step)` pair:
//!
//! | Direction      | row step | col step |
//! |----------------|----------|----------|
//! | `Horizontal`   | 0        | +1       |
//! | `Vertical`     | +1       | 0        |
//! | `DiagonalDown` | +1       | +1       |
//! | `DiagonalUp`   | -1       | +1       |
//!
//! Every direction reads left-to-right or top-to-bottom; there are no
//! reversed words.

use std::fmt;

/// The direction a placed word reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Vertical,
    Horizontal,
    /// Row and column both increase.
    DiagonalDown,
    /// Row decreases while column increases.
    DiagonalUp,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// `(row_step, col_step)` for one letter along this direction.
    #[must_use]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Cells of a `len`-long line from `(row, col)`. The span must be in bounds.
    pub fn walk(self, row: usize, col: usize, len: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.step();
        (0..len).map(move |i| {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            (r as usize, c as usize)
        })
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Vertical => "Vertical",
            Direction::Horizontal => "Horizontal",
            Direction::DiagonalDown => "DiagonalDown",
            Direction::DiagonalUp => "DiagonalUp",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags work in the solution key
        f.pad(self.name())
    }
}

/// Ordered set of directions the search may use.
///
/// Horizontal and vertical are always present; the diagonals are opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionSet {
    directions: Vec<Direction>,
}

impl DirectionSet {
    #[must_use]
    pub fn new(down_diagonals: bool, up_diagonals: bool) -> Self {
        let mut directions = vec![Direction::Horizontal, Direction::Vertical];
        if down_diagonals {
            directions.push(Direction::DiagonalDown);
        }
        if up_diagonals {
            directions.push(Direction::DiagonalUp);
        }
        Self { directions }
    }

    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.directions.iter().copied()
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl<'a> IntoIterator for &'a DirectionSet {
    type Item = Direction;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Direction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.directions.iter().copied()
    }
}

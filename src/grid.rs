//! The letter matrix and its directional line writers.
//!
//! A [`Grid`] starts out with every cell empty. Words are written with one of
//! the `place_*` writers, each of which either commits the whole word or
//! leaves the grid untouched:
//!
//! 1. the cell span is computed from the start cell, the direction and the
//!    word length, and rejected if any end falls outside the grid;
//! 2. every target cell is checked: empty, or already holding the same letter
//!    (a legitimate crossing);
//! 3. only then are the letters written.
//!
//! Once set, a word cell is never overwritten. The final [`Grid::fill_unused`]
//! pass fills whatever is still empty.
//!
//! ```
//! use wordsearch::direction::Direction;
//! use wordsearch::grid::Grid;
//!
//! let mut grid = Grid::new(3, 3);
//! assert!(grid.place_horizontal(b"CAT", 0, 0));
//! // 'B' would overwrite the 'A' of CAT
//! assert!(!grid.place_vertical(b"BAD", 0, 1));
//! // crosses on the shared 'A'
//! assert!(grid.place_vertical(b"AXE", 0, 1));
//! assert_eq!(grid.read_word(0, 1, Direction::Vertical, 3).as_deref(), Some("AXE"));
//! ```

use std::fmt;

use rand::Rng;

use crate::direction::{Direction, DirectionSet};
use crate::letters::{GridLetter, LETTERS, PLACEHOLDER};

/// How [`Grid::fill_unused`] fills cells no word covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// A letter drawn uniformly from A-Z.
    #[default]
    RandomLetters,
    /// The [`PLACEHOLDER`] glyph (`.`).
    Placeholder,
}

impl Fill {
    #[must_use]
    pub fn from_dots(fill_dots: bool) -> Self {
        if fill_dots {
            Fill::Placeholder
        } else {
            Fill::RandomLetters
        }
    }
}

/// Row-major `nrows × ncols` matrix of optional letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nrows: usize,
    ncols: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// An empty grid. A zero dimension gives a grid with no cells.
    #[must_use]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            cells: vec![None; nrows * ncols],
        }
    }

    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The letter at `(row, col)`, or `None` if the cell is empty or out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.nrows && col < self.ncols {
            self.cells[self.index(row, col)]
        } else {
            None
        }
    }

    /// True once every cell holds a letter or the placeholder.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_some_and(|b| b.is_fill_glyph()))
    }

    /// Number of cells currently holding a letter.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u8>]> + '_ {
        self.cells.chunks(self.ncols.max(1))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.ncols + col
    }

    /// Index of the `i`-th cell of a line whose span was already bounds-checked.
    fn index_along(&self, row: usize, col: usize, direction: Direction, i: usize) -> usize {
        let (dr, dc) = direction.step();
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        self.index(r as usize, c as usize)
    }

    /// Whether a line of `len` cells starting at `(row, col)` fits inside the grid.
    ///
    /// Checks both ends of the span, which is enough for straight lines.
    #[must_use]
    pub fn fits(&self, len: usize, row: usize, col: usize, direction: Direction) -> bool {
        if len == 0 || row >= self.nrows || col >= self.ncols {
            return false;
        }
        let (dr, dc) = direction.step();
        let span = (len - 1) as isize;
        let end_row = row.checked_add_signed(dr * span);
        let end_col = col.checked_add_signed(dc * span);
        matches!(
            (end_row, end_col),
            (Some(r), Some(c)) if r < self.nrows && c < self.ncols
        )
    }

    /// Write `word` along `direction` from `(row, col)` if it fits without conflict.
    ///
    /// Returns `false` and leaves the grid untouched when any cell would fall
    /// outside the grid or already holds a different letter.
    pub fn place(&mut self, word: &[u8], row: usize, col: usize, direction: Direction) -> bool {
        debug_assert!(
            word.iter().all(GridLetter::is_grid_letter),
            "placed words must be normalized"
        );
        if !self.fits(word.len(), row, col, direction) {
            return false;
        }

        // validate
        let conflict = word.iter().enumerate().any(|(i, &letter)| {
            let idx = self.index_along(row, col, direction, i);
            matches!(self.cells[idx], Some(existing) if existing != letter)
        });
        if conflict {
            return false;
        }

        // commit
        for (i, &letter) in word.iter().enumerate() {
            let idx = self.index_along(row, col, direction, i);
            self.cells[idx] = Some(letter);
        }
        true
    }

    pub fn place_horizontal(&mut self, word: &[u8], row: usize, col: usize) -> bool {
        self.place(word, row, col, Direction::Horizontal)
    }

    pub fn place_vertical(&mut self, word: &[u8], row: usize, col: usize) -> bool {
        self.place(word, row, col, Direction::Vertical)
    }

    pub fn place_diagonal_down(&mut self, word: &[u8], row: usize, col: usize) -> bool {
        self.place(word, row, col, Direction::DiagonalDown)
    }

    pub fn place_diagonal_up(&mut self, word: &[u8], row: usize, col: usize) -> bool {
        self.place(word, row, col, Direction::DiagonalUp)
    }

    /// Read `len` letters along `direction`; `None` if the span leaves the
    /// grid or crosses an empty cell.
    #[must_use]
    pub fn read_word(&self, row: usize, col: usize, direction: Direction, len: usize) -> Option<String> {
        if !self.fits(len, row, col, direction) {
            return None;
        }
        (0..len)
            .map(|i| self.cells[self.index_along(row, col, direction, i)].map(char::from))
            .collect()
    }

    /// Every `(row, col, direction)` where `word` reads along one of `directions`.
    #[must_use]
    pub fn occurrences(&self, word: &[u8], directions: &DirectionSet) -> Vec<(usize, usize, Direction)> {
        let mut found = Vec::new();
        for row in 0..self.nrows {
            for col in 0..self.ncols {
                for direction in directions {
                    if self.reads_at(word, row, col, direction) {
                        found.push((row, col, direction));
                    }
                }
            }
        }
        found
    }

    fn reads_at(&self, word: &[u8], row: usize, col: usize, direction: Direction) -> bool {
        self.fits(word.len(), row, col, direction)
            && word
                .iter()
                .enumerate()
                .all(|(i, &letter)| self.cells[self.index_along(row, col, direction, i)] == Some(letter))
    }

    /// Empty the given cells again so the next fill redraws them.
    pub(crate) fn clear_cells(&mut self, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            if row < self.nrows && col < self.ncols {
                let idx = self.index(row, col);
                self.cells[idx] = None;
            }
        }
    }

    /// Give every still-empty cell a glyph.
    pub fn fill_unused<R: Rng + ?Sized>(&mut self, fill: Fill, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(match fill {
                Fill::Placeholder => PLACEHOLDER,
                Fill::RandomLetters => LETTERS[rng.gen_range(0..LETTERS.len())],
            });
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.map_or(' ', char::from)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.nrows(), 3);
        assert_eq!(grid.ncols(), 5);
        assert_eq!(grid.filled_cells(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|r| r.len() == 5));
    }

    #[test]
    fn test_place_horizontal_in_bounds() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.place_horizontal(b"CAT", 1, 1));
        assert_eq!(grid.get(1, 1), Some(b'C'));
        assert_eq!(grid.get(1, 2), Some(b'A'));
        assert_eq!(grid.get(1, 3), Some(b'T'));
        assert_eq!(grid.filled_cells(), 3);
    }

    #[test]
    fn test_place_horizontal_out_of_bounds() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.place_horizontal(b"CAT", 0, 2));
        assert!(!grid.place_horizontal(b"CAT", 4, 0));
        assert_eq!(grid.filled_cells(), 0);
    }

    #[test]
    fn test_word_exactly_fills_a_row() {
        let mut grid = Grid::new(2, 4);
        assert!(grid.place_horizontal(b"LION", 1, 0));
        assert_eq!(grid.read_word(1, 0, Direction::Horizontal, 4).as_deref(), Some("LION"));
    }

    #[test]
    fn test_place_vertical_bounds() {
        let mut grid = Grid::new(3, 2);
        assert!(!grid.place_vertical(b"FOUR", 0, 0));
        assert!(grid.place_vertical(b"DOG", 0, 1));
        assert_eq!(grid.read_word(0, 1, Direction::Vertical, 3).as_deref(), Some("DOG"));
    }

    #[test]
    fn test_place_diagonal_down_bounds() {
        let mut grid = Grid::new(3, 4);
        assert!(!grid.place_diagonal_down(b"OWL", 1, 0)); // runs off the bottom
        assert!(!grid.place_diagonal_down(b"OWL", 0, 2)); // runs off the right
        assert!(grid.place_diagonal_down(b"OWL", 0, 1));
        assert_eq!(grid.get(0, 1), Some(b'O'));
        assert_eq!(grid.get(1, 2), Some(b'W'));
        assert_eq!(grid.get(2, 3), Some(b'L'));
    }

    #[test]
    fn test_place_diagonal_up_bounds() {
        let mut grid = Grid::new(3, 3);
        // needs row >= len - 1
        assert!(!grid.place_diagonal_up(b"EMU", 1, 0));
        assert!(!grid.place_diagonal_up(b"EMU", 2, 1));
        assert!(grid.place_diagonal_up(b"EMU", 2, 0));
        assert_eq!(grid.get(2, 0), Some(b'E'));
        assert_eq!(grid.get(1, 1), Some(b'M'));
        assert_eq!(grid.get(0, 2), Some(b'U'));
        assert_eq!(grid.read_word(2, 0, Direction::DiagonalUp, 3).as_deref(), Some("EMU"));
    }

    #[test]
    fn test_crossing_on_matching_letter() {
        let mut grid = Grid::new(5, 5);
        assert!(grid.place_horizontal(b"HORSE", 2, 0));
        // 'R' at (2, 2) is shared
        assert!(grid.place_vertical(b"ART", 1, 2));
        assert_eq!(grid.get(2, 2), Some(b'R'));
        assert_eq!(grid.filled_cells(), 7);
    }

    #[test]
    fn test_conflict_mutates_nothing() {
        let mut grid = Grid::new(5, 5);
        assert!(grid.place_horizontal(b"HORSE", 2, 0));
        let before = grid.clone();
        // first two cells are free, the third clashes with 'R'
        assert!(!grid.place_vertical(b"OXEN", 0, 2));
        assert_eq!(grid, before);
        // clash on the very last letter
        assert!(!grid.place_diagonal_down(b"CAT", 0, 2));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_same_word_twice_in_place_is_idempotent() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.place_horizontal(b"BEE", 0, 0));
        let before = grid.clone();
        assert!(grid.place_horizontal(b"BEE", 0, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let mut grid = Grid::new(2, 2);
        for d in Direction::ALL {
            assert!(!grid.place(b"", 0, 0, d));
        }
    }

    #[test]
    fn test_fits_covers_every_in_bounds_span() {
        let grid = Grid::new(4, 6);
        for d in Direction::ALL {
            for len in 1..=6 {
                for row in 0..4 {
                    for col in 0..6 {
                        let (dr, dc) = d.step();
                        let end_r = row as isize + dr * (len as isize - 1);
                        let end_c = col as isize + dc * (len as isize - 1);
                        let expected = (0..4).contains(&end_r) && (0..6).contains(&end_c);
                        assert_eq!(grid.fits(len, row, col, d), expected, "{d} len={len} at ({row},{col})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_read_word_stops_at_empty_cells() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.place_horizontal(b"AB", 0, 0));
        assert_eq!(grid.read_word(0, 0, Direction::Horizontal, 3), None);
        assert_eq!(grid.read_word(0, 0, Direction::Horizontal, 2).as_deref(), Some("AB"));
        assert_eq!(grid.read_word(0, 2, Direction::Horizontal, 2), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_fill_with_placeholder() {
        let mut grid = Grid::new(2, 3);
        assert!(grid.place_horizontal(b"ANT", 0, 0));
        let mut rng = StdRng::seed_from_u64(7);
        grid.fill_unused(Fill::Placeholder, &mut rng);
        assert!(grid.is_complete());
        assert_eq!(grid.to_string(), "ANT\n...\n");
    }

    #[test]
    fn test_fill_with_random_letters_keeps_placed_words() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.place_vertical(b"YAK", 0, 3));
        let mut rng = StdRng::seed_from_u64(99);
        grid.fill_unused(Fill::RandomLetters, &mut rng);
        assert!(grid.is_complete());
        assert_eq!(grid.read_word(0, 3, Direction::Vertical, 3).as_deref(), Some("YAK"));
        for row in grid.rows() {
            for cell in row {
                assert!(cell.is_some_and(|c| c.is_grid_letter()));
            }
        }
    }

    #[test]
    fn test_fill_from_dots() {
        assert_eq!(Fill::from_dots(true), Fill::Placeholder);
        assert_eq!(Fill::from_dots(false), Fill::RandomLetters);
    }

    #[test]
    fn test_zero_sized_grid_has_no_rows() {
        let grid = Grid::new(0, 4);
        assert_eq!(grid.rows().count(), 0);
        let grid = Grid::new(3, 0);
        assert_eq!(grid.rows().count(), 0);
        assert!(!grid.fits(1, 0, 0, Direction::Horizontal));
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_occurrences_in_every_direction() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.place_horizontal(b"OX", 0, 0));
        assert!(grid.place_vertical(b"OX", 0, 0));
        assert!(grid.place_diagonal_down(b"OX", 0, 0));
        assert!(grid.place_diagonal_up(b"OX", 2, 1));
        let mut found = grid.occurrences(b"OX", &DirectionSet::new(true, true));
        found.sort_unstable();
        assert_eq!(
            found,
            vec![
                (0, 0, Direction::Vertical),
                (0, 0, Direction::Horizontal),
                (0, 0, Direction::DiagonalDown),
                (2, 1, Direction::DiagonalUp),
            ]
        );
        // only the enabled directions are searched
        assert_eq!(grid.occurrences(b"OX", &DirectionSet::default()).len(), 2);
        assert!(grid.occurrences(b"OO", &DirectionSet::new(true, true)).is_empty());
    }

    #[test]
    fn test_clear_cells_lets_fill_redraw() {
        let mut grid = Grid::new(1, 3);
        assert!(grid.place_horizontal(b"AB", 0, 0));
        let mut rng = StdRng::seed_from_u64(1);
        grid.fill_unused(Fill::Placeholder, &mut rng);
        grid.clear_cells(&[(0, 2), (5, 5)]);
        assert!(!grid.is_complete());
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.read_word(0, 0, Direction::Horizontal, 2).as_deref(), Some("AB"));
    }

    #[test]
    fn test_display_shows_empty_cells_as_spaces() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.place_vertical(b"OX", 0, 1));
        assert_eq!(grid.to_string(), " O\n X\n");
    }
}

//! A finished word search and its placement records.

use crate::direction::Direction;
use crate::grid::Grid;
use crate::word_entry::WordEntry;

/// Where one word ended up.
///
/// `row` and `col` are 0-based; renderers print them 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word as written in the input, for the word list.
    pub original: String,
    /// The normalized letters actually in the grid.
    pub word: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub(crate) fn new(entry: &WordEntry, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            original: entry.original.clone(),
            word: entry.word.clone(),
            direction,
            row,
            col,
        }
    }

    /// Grid cells this word covers, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.direction.walk(self.row, self.col, self.word.len())
    }
}

/// How much searching a build took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    /// Grid sizes visited, including the one that succeeded.
    pub dimensions_tried: usize,
    /// Placement attempts across all sizes.
    pub attempts: usize,
}

/// A complete puzzle: every word placed, every other cell filled.
#[derive(Debug, Clone)]
pub struct WordSearch {
    title: String,
    description: String,
    grid: Grid,
    placements: Vec<Placement>,
    stats: BuildStats,
}

impl WordSearch {
    pub(crate) fn new(
        title: &str,
        description: &str,
        grid: Grid,
        placements: Vec<Placement>,
        stats: BuildStats,
    ) -> Self {
        debug_assert!(grid.is_complete(), "a finished word search has no empty cells");
        Self {
            title: title.to_string(),
            description: description.to_string(),
            grid,
            placements,
            stats,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn nrows(&self) -> usize {
        self.grid.nrows()
    }

    #[must_use]
    pub fn ncols(&self) -> usize {
        self.grid.ncols()
    }

    /// Placement records in the order the words were placed.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement records sorted by original word, for the solution key.
    #[must_use]
    pub fn sorted_placements(&self) -> Vec<&Placement> {
        let mut sorted: Vec<&Placement> = self.placements.iter().collect();
        sorted.sort_by(|a, b| a.original.cmp(&b.original));
        sorted
    }

    /// Original words, sorted, as printed beside the puzzle.
    #[must_use]
    pub fn word_list(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.placements.iter().map(|p| p.original.as_str()).collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> WordSearch {
        let mut grid = Grid::new(4, 5);
        let zebra = WordEntry::new("Zebra?").unwrap();
        let owl = WordEntry::new("owl").unwrap();
        assert!(grid.place_vertical(b"OWL", 0, 0));
        assert!(grid.place_horizontal(b"ZEBRA", 3, 0));
        let placements = vec![
            Placement::new(&owl, 0, 0, Direction::Vertical),
            Placement::new(&zebra, 3, 0, Direction::Horizontal),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        grid.fill_unused(crate::grid::Fill::Placeholder, &mut rng);
        WordSearch::new("Zoo", "Find them", grid, placements, BuildStats { dimensions_tried: 1, attempts: 2 })
    }

    #[test]
    fn test_accessors() {
        let ws = sample();
        assert_eq!(ws.title(), "Zoo");
        assert_eq!(ws.description(), "Find them");
        assert_eq!((ws.nrows(), ws.ncols()), (4, 5));
        assert_eq!(ws.stats().attempts, 2);
        assert_eq!(ws.placements().len(), 2);
    }

    #[test]
    fn test_sorted_placements_and_word_list_use_originals() {
        let ws = sample();
        let sorted: Vec<&str> = ws.sorted_placements().iter().map(|p| p.original.as_str()).collect();
        // uppercase sorts before lowercase
        assert_eq!(sorted, vec!["Zebra?", "owl"]);
        assert_eq!(ws.word_list(), vec!["Zebra?", "owl"]);
    }

    #[test]
    fn test_cells_follow_direction() {
        let owl = WordEntry::new("owl").unwrap();
        let p = Placement::new(&owl, 2, 0, Direction::DiagonalUp);
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(2, 0), (1, 1), (0, 2)]);
        let p = Placement::new(&owl, 0, 1, Direction::Horizontal);
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 3)]);
    }
}

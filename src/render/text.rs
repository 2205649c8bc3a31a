//! Terminal output: the letter grid and the solution key.

use crate::grid::Grid;
use crate::puzzle::WordSearch;

/// The grid, one row per line, letters separated by a space.
#[must_use]
pub fn grid_to_string(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.nrows() * (grid.ncols() * 2 + 1));
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|c| c.map_or(' ', char::from).to_string()).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// One line per word, sorted by the word as written, with 1-based positions.
///
/// ```text
///                    Cat:         Vertical (R1, C3)
/// ```
#[must_use]
pub fn solution_to_string(ws: &WordSearch) -> String {
    let mut out = String::new();
    for p in ws.sorted_placements() {
        out.push_str(&format!("{:>22}: {:>16} (R{}, C{})\n", p.original, p.direction, p.row + 1, p.col + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::search::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn puzzle() -> WordSearch {
        let config = BuildConfig {
            min_rows: 5,
            max_rows: 5,
            min_cols: 5,
            max_cols: 5,
            fill_dots: true,
            ..BuildConfig::default()
        };
        generate("Pets", "", ["dog", "Cat"], &config, &mut StdRng::seed_from_u64(10)).unwrap()
    }

    #[test]
    fn test_grid_to_string_shape() {
        let ws = puzzle();
        let text = grid_to_string(ws.grid());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.split(' ').count(), 5);
        }
    }

    #[test]
    fn test_grid_to_string_small() {
        let mut grid = Grid::new(2, 3);
        assert!(grid.place_horizontal(b"EEL", 1, 0));
        assert_eq!(grid_to_string(&grid), "\nE E L\n");
    }

    #[test]
    fn test_solution_is_sorted_and_one_based() {
        let ws = puzzle();
        let text = solution_to_string(&ws);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("Cat:"));
        assert!(lines[1].trim_start().starts_with("dog:"));
        for (line, p) in lines.iter().zip(ws.sorted_placements()) {
            assert!(line.ends_with(&format!("(R{}, C{})", p.row + 1, p.col + 1)));
            assert!(line.contains(p.direction.name()));
        }
        // right-aligned to 22 columns before the colon
        assert_eq!(lines[0].find(':'), Some(22));
    }
}

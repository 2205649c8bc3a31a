//! The placement search: find a grid size and arrangement holding every word.
//!
//! # Algorithm
//!
//! 1. Normalize the raw words, report duplicates and containment, and
//!    collapse duplicates (a word is never hidden twice).
//! 2. Walk the grid sizes from the configured minimum, growing both axes by
//!    one per step until either would pass its maximum.
//! 3. At each size, make up to `num_tries` attempts. An attempt starts from an
//!    empty grid and a freshly shuffled word order, then places the words one
//!    at a time: the flat list of every `(row, col, direction)` candidate is
//!    reshuffled and scanned, and the first candidate the grid's line writer
//!    accepts wins.
//! 4. An attempt fails as soon as one word has no accepted candidate, or (when
//!    `require_all_directions` is set) if some enabled direction ended up
//!    unused. A failed attempt is thrown away and never reported.
//! 5. The unused cells of a successful attempt are filled. Fill cells that
//!    spell a second copy of a word are redrawn, so every word reads exactly
//!    once (copies inside a longer word are left alone). If placed letters
//!    alone spell a second copy, the attempt fails.
//! 6. The first attempt that survives the fill is returned. Running out of
//!    sizes is the only search failure.
//!
//! All randomness comes from the `rng` argument, so a seeded generator gives
//! reproducible puzzles.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use wordsearch::config::BuildConfig;
//! use wordsearch::search::generate;
//!
//! let config = BuildConfig { min_rows: 4, min_cols: 4, num_tries: 50, ..BuildConfig::default() };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let puzzle = generate("Pets", "", &["CAT", "DOG"], &config, &mut rng)?;
//!
//! for p in puzzle.placements() {
//!     let found = puzzle.grid().read_word(p.row, p.col, p.direction, p.word.len());
//!     assert_eq!(found.as_deref(), Some(p.word.as_str()));
//! }
//! # Ok::<(), wordsearch::errors::BuildError>(())
//! ```

use std::collections::HashSet;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::BuildConfig;
use crate::direction::{Direction, DirectionSet};
use crate::errors::BuildError;
use crate::grid::{Fill, Grid};
use crate::puzzle::{BuildStats, Placement, WordSearch};
use crate::word_entry::{self, WordEntry};

/// A potential placement site, before the grid has checked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Every `(row, col, direction)` triple for a grid of this size.
///
/// The list is not filtered by word length; the line writer rejects spans
/// that leave the grid.
#[must_use]
pub fn candidates(nrows: usize, ncols: usize, directions: &DirectionSet) -> Vec<Candidate> {
    let mut all = Vec::with_capacity(nrows * ncols * directions.len());
    for row in 0..nrows {
        for col in 0..ncols {
            for direction in directions {
                all.push(Candidate { row, col, direction });
            }
        }
    }
    all
}

/// Grid sizes to visit, smallest first.
///
/// Both axes grow together, and the schedule ends once either axis would pass
/// its maximum. An inverted range yields nothing.
pub fn dimension_schedule(config: &BuildConfig) -> impl Iterator<Item = (usize, usize)> {
    let (min_rows, min_cols) = (config.min_rows, config.min_cols);
    let steps = config
        .max_rows
        .checked_sub(min_rows)
        .zip(config.max_cols.checked_sub(min_cols))
        .map(|(rows, cols)| rows.min(cols));
    steps
        .into_iter()
        .flat_map(move |steps| (0..=steps).map(move |i| (min_rows + i, min_cols + i)))
}

/// Build a word search from raw words.
///
/// # Errors
///
/// - [`BuildError::InvalidConfig`] if `config` fails [`BuildConfig::validate`];
/// - [`BuildError::NoWords`] if no word survives normalization;
/// - [`BuildError::DimensionsExhausted`] if no attempt succeeds at any size.
pub fn generate<I, S, R>(
    title: &str,
    description: &str,
    raw_words: I,
    config: &BuildConfig,
    rng: &mut R,
) -> Result<WordSearch, BuildError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    config.validate()?;

    let entries = word_entry::word_entries(raw_words);
    let issues = word_entry::validate(&entries);
    if !issues.is_empty() {
        debug!("{} word-list issue(s) in \"{title}\"", issues.len());
    }
    let mut entries = word_entry::dedup(entries);
    if entries.is_empty() {
        return Err(BuildError::NoWords);
    }

    let directions = config.directions();
    let longest = entries.iter().map(WordEntry::len).max().unwrap_or(0);
    let mut stats = BuildStats::default();

    for (nrows, ncols) in dimension_schedule(config) {
        stats.dimensions_tried += 1;
        if !longest_fits(longest, nrows, ncols, &directions) {
            debug!("skipping {nrows}x{ncols}: a {longest}-letter word cannot fit");
            continue;
        }
        info!("trying {nrows} rows and {ncols} cols");

        let mut sites = candidates(nrows, ncols, &directions);
        for attempt in 1..=config.num_tries {
            stats.attempts += 1;
            entries.shuffle(rng);
            let placed = try_place_all(&entries, nrows, ncols, &directions, &mut sites, config.require_all_directions, rng)
                .and_then(|(mut grid, placements)| {
                    fill_hiding_each_once(&mut grid, &placements, &directions, config.fill(), rng)
                        .then_some((grid, placements))
                });
            match placed {
                Some((grid, placements)) => {
                    info!(
                        "placed {} words in a {nrows}x{ncols} grid after {} attempts",
                        placements.len(),
                        stats.attempts
                    );
                    return Ok(WordSearch::new(title, description, grid, placements, stats));
                }
                None => debug!("attempt {attempt}/{} at {nrows}x{ncols} failed", config.num_tries),
            }
        }
    }

    Err(BuildError::DimensionsExhausted {
        max_rows: config.max_rows,
        max_cols: config.max_cols,
        attempts: stats.attempts,
    })
}

/// Whether a word of length `len` fits in at least one enabled direction.
fn longest_fits(len: usize, nrows: usize, ncols: usize, directions: &DirectionSet) -> bool {
    directions.iter().any(|d| {
        let (dr, dc) = d.step();
        (dr == 0 || len <= nrows) && (dc == 0 || len <= ncols)
    })
}

/// One attempt: place every entry into a fresh grid, in the given order.
fn try_place_all<R: Rng + ?Sized>(
    entries: &[WordEntry],
    nrows: usize,
    ncols: usize,
    directions: &DirectionSet,
    sites: &mut [Candidate],
    require_all_directions: bool,
    rng: &mut R,
) -> Option<(Grid, Vec<Placement>)> {
    let mut grid = Grid::new(nrows, ncols);
    let mut placements = Vec::with_capacity(entries.len());

    for entry in entries {
        placements.push(place_word(&mut grid, entry, sites, rng)?);
    }

    // with fewer words than directions the check could never pass
    if require_all_directions && entries.len() >= directions.len() {
        let used: HashSet<Direction> = placements.iter().map(|p| p.direction).collect();
        if let Some(unused) = directions.iter().find(|d| !used.contains(d)) {
            debug!("no word runs {unused}");
            return None;
        }
    }

    Some((grid, placements))
}

/// Fill the unused cells so that each placed word reads exactly once.
///
/// A copy of a word lying inside a longer placed word does not count. Fill
/// cells under a stray copy are redrawn until none is left; returns `false`
/// if a stray copy is made of placed letters only, or the redraws run out.
fn fill_hiding_each_once<R: Rng + ?Sized>(
    grid: &mut Grid,
    placements: &[Placement],
    directions: &DirectionSet,
    fill: Fill,
    rng: &mut R,
) -> bool {
    let covered: HashSet<(usize, usize)> = placements.iter().flat_map(Placement::cells).collect();
    let spans: Vec<(usize, HashSet<(usize, usize)>)> =
        placements.iter().map(|p| (p.word.len(), p.cells().collect())).collect();

    for _ in 0..=grid.nrows() * grid.ncols() {
        grid.fill_unused(fill, rng);
        let Some(stray) = stray_copy(grid, placements, &spans, directions) else {
            return true;
        };
        let redraw: Vec<(usize, usize)> = stray.into_iter().filter(|cell| !covered.contains(cell)).collect();
        if redraw.is_empty() {
            debug!("placed words spell a second copy of a word");
            return false;
        }
        grid.clear_cells(&redraw);
    }
    debug!("fill kept spelling extra words");
    false
}

/// Cells of the first copy of a placed word that is neither the word's own
/// placement nor inside a longer placed word.
fn stray_copy(
    grid: &Grid,
    placements: &[Placement],
    spans: &[(usize, HashSet<(usize, usize)>)],
    directions: &DirectionSet,
) -> Option<Vec<(usize, usize)>> {
    placements.iter().find_map(|p| {
        let len = p.word.len();
        grid.occurrences(p.word.as_bytes(), directions)
            .into_iter()
            .filter(|&(row, col, direction)| (row, col, direction) != (p.row, p.col, p.direction))
            .map(|(row, col, direction)| direction.walk(row, col, len).collect::<Vec<_>>())
            .find(|cells| {
                !spans
                    .iter()
                    .any(|(outer, span)| *outer > len && cells.iter().all(|cell| span.contains(cell)))
            })
    })
}

/// Shuffle the candidates and commit `entry` at the first one the grid accepts.
pub(crate) fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    entry: &WordEntry,
    sites: &mut [Candidate],
    rng: &mut R,
) -> Option<Placement> {
    sites.shuffle(rng);
    let word = entry.word.as_bytes();
    sites
        .iter()
        .find(|c| grid.place(word, c.row, c.col, c.direction))
        .map(|c| Placement::new(entry, c.row, c.col, c.direction))
}

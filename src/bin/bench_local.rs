//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of puzzle builds on *your* machine.
//! - Runs each case several times with consecutive seeds and reports the median.
//! - Cases cover plain, diagonal and crowded word lists; add a YAML file with `-f`.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the last grid per case:   `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Cases live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use wordsearch::config::BuildConfig;
use wordsearch::puzzle::WordSearch;
use wordsearch::puzzle_file::PuzzleDefinition;
use wordsearch::render::text;
use wordsearch::search;

/// Simple local benchmark runner: build each case several times and time it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Extra puzzle definition to time alongside the built-in cases
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// First seed; run `i` uses `seed + i`
    #[arg(short = 's', long, default_value_t = 1)]
    seed: u64,

    /// Print the grid from the last run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: a name, the raw words and the build settings.
#[derive(Clone)]
struct Case {
    name: String,
    words: Vec<String>,
    config: BuildConfig,
}

fn case(name: &str, words: &[&str], config: BuildConfig) -> Case {
    Case {
        name: name.to_string(),
        words: words.iter().map(|w| (*w).to_string()).collect(),
        config,
    }
}

const ANIMALS: &[&str] = &[
    "Aardvark", "Buffalo", "Cheetah", "Dolphin", "Elephant", "Flamingo", "Giraffe",
    "Hedgehog", "Iguana", "Jaguar", "Kangaroo", "Leopard", "Meerkat", "Narwhal",
    "Ostrich", "Penguin", "Quokka", "Raccoon", "Squirrel", "Tortoise",
];

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    let diagonals = BuildConfig { down_diagonals: true, up_diagonals: true, ..BuildConfig::default() };
    vec![
        case("animals (h/v)", ANIMALS, BuildConfig::default()),
        case("animals (all directions)", ANIMALS, diagonals.clone()),
        case("animals, tight 10x10 start", ANIMALS, BuildConfig { min_rows: 10, min_cols: 10, ..diagonals }),
        case(
            "short words, small grid",
            &["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen", "owl", "pig", "rat", "yak"],
            BuildConfig { min_rows: 5, max_rows: 12, min_cols: 5, max_cols: 12, ..BuildConfig::default() },
        ),
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 32;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the benchmark summary: (case name, median seconds,
    /// grid size of the last run, attempts in the last run).
    type SummaryRow = (String, f64, String, usize);

    let cli = Cli::parse();

    let mut cases = get_cases();
    if let Some(path) = &cli.file {
        let def = PuzzleDefinition::load_from_path(path)?;
        let words: Vec<&str> = def.words.iter().map(String::as_str).collect();
        cases.push(case(&def.title, &words, BuildConfig::default()));
    }

    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({} words)", idx + 1, case.name, case.words.len());

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last: Option<WordSearch> = None;

        for rep in 0..cli.num_repeats {
            let mut rng = StdRng::seed_from_u64(cli.seed + rep as u64);

            // Keep only the *core* operation inside the timed region.
            let t_build = Instant::now();
            let result = search::generate(black_box(&case.name), "", &case.words, &case.config, &mut rng);
            let build_secs = t_build.elapsed().as_secs_f64();

            let ws = match result {
                Ok(ws) => ws,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e.display_detailed());
                    continue;
                }
            };

            times.push(build_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({}x{}, {} attempts)",
                rep + 1,
                cli.num_repeats,
                build_secs,
                ws.nrows(),
                ws.ncols(),
                ws.stats().attempts
            );
            last = Some(ws);
        }

        let med = median(times);

        if cli.print_grid {
            if let Some(ws) = &last {
                print!("{}", text::grid_to_string(ws.grid()));
            }
        }

        let (size, attempts) = last
            .as_ref()
            .map(|ws| (format!("{}x{}", ws.nrows(), ws.ncols()), ws.stats().attempts))
            .unwrap_or_else(|| ("-".to_string(), 0));
        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((case.name.clone(), med, size, attempts));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>7} | {:>8}", "case", "median (s)", "size", "attempts");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<7}-+-{:-<8}", "", "", "", "");
    for (name, med, size, attempts) in &summary {
        // Trim very long names for readability in the summary.
        let display = if name.chars().count() > MAX_NAME_LEN {
            format!("{}…", name.chars().take(MAX_NAME_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_NAME_LEN$} | {med:>10.3} | {size:>7} | {attempts:>8}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_have_valid_configs() {
        for case in get_cases() {
            assert!(case.config.validate().is_ok(), "{}", case.name);
            assert!(!case.words.is_empty());
        }
    }
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::config::{self, BuildConfig};
use wordsearch::errors::BuildError;
use wordsearch::puzzle::WordSearch;
use wordsearch::puzzle_file::{LoadError, PuzzleDefinition};
use wordsearch::render::pdf::PdfBuilder;
use wordsearch::render::{text, RenderError};
use wordsearch::search;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Puzzle definition files (YAML with title, description, words)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Minimum number of columns
    #[arg(short = 'c', long, default_value_t = config::DEFAULT_MIN_COLS)]
    min_cols: usize,

    /// Minimum number of rows
    #[arg(short = 'r', long, default_value_t = config::DEFAULT_MIN_ROWS)]
    min_rows: usize,

    /// Maximum number of columns
    #[arg(short = 'C', long, default_value_t = config::DEFAULT_MAX_COLS)]
    max_cols: usize,

    /// Maximum number of rows
    #[arg(short = 'R', long, default_value_t = config::DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Max number of tries at each grid size
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_NUM_TRIES)]
    num_tries: usize,

    /// Print the solution key after each grid
    #[arg(short = 's', long)]
    print_solution: bool,

    /// Use down diagonals
    #[arg(short = 'd', long)]
    down_diagonals: bool,

    /// Use up diagonals
    #[arg(short = 'u', long)]
    up_diagonals: bool,

    /// Fill unused cells with dots instead of letters
    #[arg(short = 'D', long)]
    fill_dots: bool,

    /// Output PDF file (if not specified, output to stdout)
    #[arg(short = 'p', long = "pdf")]
    pdf_name: Option<PathBuf>,

    /// Seed for the random generator, to reproduce a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Accept arrangements that leave an enabled direction unused
    #[arg(long)]
    no_direction_check: bool,
}

impl Cli {
    fn build_config(&self) -> BuildConfig {
        BuildConfig {
            min_rows: self.min_rows,
            max_rows: self.max_rows,
            min_cols: self.min_cols,
            max_cols: self.max_cols,
            num_tries: self.num_tries,
            down_diagonals: self.down_diagonals,
            up_diagonals: self.up_diagonals,
            fill_dots: self.fill_dots,
            require_all_directions: !self.no_direction_check,
        }
    }
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`]; any error is printed with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var(wordsearch::log::DEBUG_ENV_VAR).is_ok();
    wordsearch::log::init_logger(debug_enabled);

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", detailed(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. For each file: load the definition, build the puzzle, then print it
///    or queue it as a PDF page. A failing file is reported and skipped.
/// 3. Write the PDF, if one was requested.
///
/// Returns `Ok(false)` if any file failed, and `Err` only when the PDF
/// cannot be written.
fn try_main() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.build_config();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pdf = cli.pdf_name.as_ref().map(|_| PdfBuilder::new());
    let mut all_ok = true;

    for file in &cli.files {
        println!("------ {} ------", file.display());
        let ws = match build_from_file(file, &config, &mut rng) {
            Ok(ws) => ws,
            Err(e) => {
                eprintln!("{}", detailed(e.as_ref()));
                all_ok = false;
                continue;
            }
        };

        let stats = ws.stats();
        log::info!(
            "built {}x{} grid for \"{}\" ({} sizes, {} attempts)",
            ws.nrows(),
            ws.ncols(),
            ws.title(),
            stats.dimensions_tried,
            stats.attempts
        );

        match pdf.as_mut() {
            Some(builder) => builder.add_puzzle(&ws),
            None => {
                print!("{}", text::grid_to_string(ws.grid()));
                if cli.print_solution {
                    print!("{}", text::solution_to_string(&ws));
                }
            }
        }
    }

    if let (Some(builder), Some(path)) = (pdf, cli.pdf_name.as_ref()) {
        let pages = builder.page_count();
        builder.write_to_path(path)?;
        log::info!("wrote {pages} page(s) to {}", path.display());
    }

    Ok(all_ok)
}

fn build_from_file(
    path: &Path,
    config: &BuildConfig,
    rng: &mut StdRng,
) -> Result<WordSearch, Box<dyn std::error::Error>> {
    let def = PuzzleDefinition::load_from_path(path)?;
    let ws = search::generate(&def.title, &def.description, &def.words, config, rng)?;
    Ok(ws)
}

/// Detailed (code + help) rendering for our own error types.
fn detailed(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(err) = e.downcast_ref::<BuildError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<LoadError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<RenderError>() {
        err.display_detailed()
    } else {
        e.to_string()
    }
}

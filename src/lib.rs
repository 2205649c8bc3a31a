// Reusable library API, shared by the CLI and the helper binaries
pub mod config;
pub mod direction;
pub mod errors;
pub mod grid;
mod letters;
pub mod log;
pub mod puzzle;
pub mod puzzle_file;
pub mod render;
pub mod search;
pub mod word_entry;

pub use letters::PLACEHOLDER;

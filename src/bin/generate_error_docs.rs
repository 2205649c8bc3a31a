//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `BuildError`, `LoadError` and `RenderError`
//! implementations via their `code()`, `description()`, `details()`, and
//! `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::path::PathBuf;

use wordsearch::errors::BuildError;
use wordsearch::puzzle_file::{LoadError, PuzzleDefinition};
use wordsearch::render::RenderError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `BuildError` variants for documentation
fn all_build_error_variants() -> Vec<BuildError> {
    vec![
        BuildError::DimensionsExhausted { max_rows: 25, max_cols: 22, attempts: 1300 },
        BuildError::InvalidConfig { reason: "min_rows (30) exceeds max_rows (25)".to_string() },
        BuildError::NoWords,
    ]
}

/// Helper to create all `LoadError` variants for documentation
fn all_load_error_variants() -> Vec<LoadError> {
    let path = PathBuf::from("animals.yaml");
    // Yaml--create by parsing a definition with no word list
    let yaml = PuzzleDefinition::parse_from_str("title: Animals\n", &path).unwrap_err();
    vec![
        LoadError::Io {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
        yaml,
    ]
}

/// Helper to create all `RenderError` variants for documentation
fn all_render_error_variants() -> Vec<RenderError> {
    vec![RenderError::Io {
        path: PathBuf::from("out/puzzles.pdf"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
    }]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Build Errors (W001–W003)](#build-errors)");
    println!("- [Load Errors (L001–L002)](#load-errors)");
    println!("- [Render Errors (R001)](#render-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_build_error_docs();
    generate_load_error_docs();
    generate_render_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: no usable words (each needs at least 2 letters A-Z) (W003)");
    println!("Add a 'words:' list with at least one word of two or more letters");
    println!("```\n");
    println!("1. Note the error code (e.g., `W003`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_build_error_docs() {
    println!("## Build Errors\n");
    println!("Errors from the placement search. Failed placement attempts are retried silently; only these are reported.\n");
    generate_error_docs!(all_build_error_variants());
}

fn generate_load_error_docs() {
    println!("## Load Errors\n");
    println!("Errors that occur when reading puzzle definition files.\n");
    generate_error_docs!(all_load_error_variants());
}

fn generate_render_error_docs() {
    println!("## Render Errors\n");
    println!("Errors that occur when saving rendered output.\n");
    generate_error_docs!(all_render_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_variant_has_a_unique_code() {
        let mut codes = HashSet::new();
        for e in all_build_error_variants() {
            assert!(codes.insert(e.code()));
        }
        for e in all_load_error_variants() {
            assert!(codes.insert(e.code()));
        }
        for e in all_render_error_variants() {
            assert!(codes.insert(e.code()));
        }
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_sample_yaml_error_is_the_yaml_variant() {
        let errors = all_load_error_variants();
        assert_eq!(errors[1].code(), "L002");
        assert!(errors[1].to_string().contains("animals.yaml"));
    }
}

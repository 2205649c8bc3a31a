//! `puzzle_file`: loading puzzle definitions from YAML.
//!
//! A definition file holds one puzzle:
//!
//! ```yaml
//! title: Ocean Life
//! description: Find the sea creatures
//! words:
//!   - Octopus
//!   - Sea horse
//!   - Jellyfish
//! ```
//!
//! `description` may be omitted. Words are kept exactly as written; the
//! search normalizes them and the word list prints them as-is.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::format_error_with_code_and_help;

/// Title, description and raw words for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleDefinition {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub words: Vec<String>,
}

/// Failure to read or parse a definition file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read puzzle file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid puzzle file '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LoadError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "L001",
            LoadError::Yaml { .. } => "L002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "Puzzle file could not be read",
            LoadError::Yaml { .. } => "Puzzle file is not a valid definition",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "The file does not exist, is not readable, or is not valid UTF-8.",
            LoadError::Yaml { .. } => "The file parsed as YAML but does not have a string 'title' and a 'words' list of strings, or it is not YAML at all.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::Io { .. } => Some("Check the path and file permissions"),
            LoadError::Yaml { .. } => Some("Expected format:\ntitle: Ocean Life\ndescription: Find the sea creatures\nwords:\n  - Octopus\n  - Sea horse"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl PuzzleDefinition {
    /// Parse a definition from an in-memory YAML string.
    ///
    /// `origin` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Yaml`] if `contents` is not a valid definition.
    pub fn parse_from_str(contents: &str, origin: &Path) -> Result<Self, LoadError> {
        serde_yaml::from_str(contents).map_err(|source| LoadError::Yaml {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Yaml`] if it is not a valid definition.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| LoadError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&data, path_ref)
    }
}

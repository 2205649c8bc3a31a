//! Error types for building word searches, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - W001: `DimensionsExhausted` (No arrangement found within the size and retry bounds)
//! - W002: `InvalidConfig` (Inconsistent build configuration)
//! - W003: `NoWords` (No usable words after normalization)
//!
//! Loading and rendering have their own enums ([`crate::puzzle_file::LoadError`],
//! [`crate::render::RenderError`]) with the same `code()` / `help()` /
//! `display_detailed()` shape.
//!
//! # Examples
//!
//! ```
//! use wordsearch::config::BuildConfig;
//! use wordsearch::errors::BuildError;
//! use wordsearch::search::generate;
//! use rand::SeedableRng;
//!
//! let config = BuildConfig { min_rows: 3, max_rows: 4, min_cols: 3, max_cols: 4, ..BuildConfig::default() };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! match generate("Too long", "", &["CROCODILE"], &config, &mut rng) {
//!     Err(e @ BuildError::DimensionsExhausted { .. }) => {
//!         assert_eq!(e.code(), "W001");
//!         println!("{}", e.display_detailed());
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

/// Failure to produce a word search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("no arrangement found within {max_rows}x{max_cols} after {attempts} attempts")]
    DimensionsExhausted {
        max_rows: usize,
        max_cols: usize,
        attempts: usize,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("no usable words (each needs at least 2 letters A-Z)")]
    NoWords,
}

impl BuildError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::DimensionsExhausted { .. } => "W001",
            BuildError::InvalidConfig { .. } => "W002",
            BuildError::NoWords => "W003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BuildError::DimensionsExhausted { .. } => "No arrangement found within the size and retry bounds",
            BuildError::InvalidConfig { .. } => "Inconsistent build configuration",
            BuildError::NoWords => "No usable words after normalization",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BuildError::DimensionsExhausted { .. } => "Every grid size from the minimum up to the maximum was tried, each with the configured number of attempts, and no attempt placed every word. Failed attempts are normal; only running out of sizes is reported.",
            BuildError::InvalidConfig { .. } => "The size range or retry count cannot be searched: a dimension is zero, a minimum exceeds its maximum, or the number of tries is zero.",
            BuildError::NoWords => "Words are uppercased and stripped of everything outside A-Z. Words left with fewer than two letters are dropped, and none remained.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BuildError::DimensionsExhausted { .. } => Some("Raise --max-rows/--max-cols, raise --num-tries, or enable diagonals with -d/-u"),
            BuildError::InvalidConfig { .. } => Some("Check that each --min-* value is at most the matching --max-* value and every value is at least 1"),
            BuildError::NoWords => Some("Add a 'words:' list with at least one word of two or more letters"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

//! Output for finished puzzles: plain text for the terminal and PDF pages.

pub mod pdf;
pub mod text;

use std::path::PathBuf;

use crate::errors::format_error_with_code_and_help;

/// Failure to write rendered output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Io { .. } => "R001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            RenderError::Io { .. } => "Output file could not be written",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            RenderError::Io { .. } => "The PDF was rendered in memory but saving it failed, usually because the directory does not exist or is not writable.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            RenderError::Io { .. } => Some("Check that the directory given to --pdf exists and is writable"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

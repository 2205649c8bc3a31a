//! Build configuration for the placement search.

use crate::direction::DirectionSet;
use crate::errors::BuildError;
use crate::grid::Fill;

pub const DEFAULT_MIN_ROWS: usize = 13;
pub const DEFAULT_MAX_ROWS: usize = 25;
pub const DEFAULT_MIN_COLS: usize = 10;
pub const DEFAULT_MAX_COLS: usize = 22;
/// Attempts per grid size before growing the grid.
pub const DEFAULT_NUM_TRIES: usize = 100;

/// Everything the search needs besides the words and the random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub min_rows: usize,
    pub max_rows: usize,
    pub min_cols: usize,
    pub max_cols: usize,
    /// Attempts at each grid size.
    pub num_tries: usize,
    pub down_diagonals: bool,
    pub up_diagonals: bool,
    /// Fill unused cells with `.` instead of random letters.
    pub fill_dots: bool,
    /// Reject an attempt unless every enabled direction holds at least one word.
    pub require_all_directions: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: DEFAULT_MAX_ROWS,
            min_cols: DEFAULT_MIN_COLS,
            max_cols: DEFAULT_MAX_COLS,
            num_tries: DEFAULT_NUM_TRIES,
            down_diagonals: false,
            up_diagonals: false,
            fill_dots: false,
            require_all_directions: true,
        }
    }
}

impl BuildConfig {
    /// Check that the size range and retry count can be searched.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidConfig`] if a dimension is zero, a
    /// minimum exceeds its maximum, or `num_tries` is zero.
    pub fn validate(&self) -> Result<(), BuildError> {
        let invalid = |reason: String| -> Result<(), BuildError> { Err(BuildError::InvalidConfig { reason }) };
        if self.min_rows == 0 || self.min_cols == 0 {
            return invalid(format!(
                "grid dimensions must be at least 1 (got {} rows, {} cols)",
                self.min_rows, self.min_cols
            ));
        }
        if self.min_rows > self.max_rows {
            return invalid(format!("min_rows ({}) exceeds max_rows ({})", self.min_rows, self.max_rows));
        }
        if self.min_cols > self.max_cols {
            return invalid(format!("min_cols ({}) exceeds max_cols ({})", self.min_cols, self.max_cols));
        }
        if self.num_tries == 0 {
            return invalid("num_tries must be at least 1".to_string());
        }
        Ok(())
    }

    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        DirectionSet::new(self.down_diagonals, self.up_diagonals)
    }

    #[must_use]
    pub fn fill(&self) -> Fill {
        Fill::from_dots(self.fill_dots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_defaults_validate() {
        let config = BuildConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_rows, 13);
        assert_eq!(config.max_cols, 22);
        assert_eq!(config.num_tries, 100);
        assert_eq!(config.fill(), Fill::RandomLetters);
        assert_eq!(config.directions().len(), 2);
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let config = BuildConfig { min_rows: 9, max_rows: 3, ..BuildConfig::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "W002");
        assert!(err.to_string().contains("min_rows (9) exceeds max_rows (3)"));

        let config = BuildConfig { min_cols: 30, ..BuildConfig::default() };
        assert!(config.validate().unwrap_err().to_string().contains("min_cols"));
    }

    #[test]
    fn test_zero_values_are_rejected() {
        assert!(BuildConfig { min_rows: 0, ..BuildConfig::default() }.validate().is_err());
        assert!(BuildConfig { min_cols: 0, ..BuildConfig::default() }.validate().is_err());
        assert!(BuildConfig { num_tries: 0, ..BuildConfig::default() }.validate().is_err());
    }

    #[test]
    fn test_flags_map_to_directions_and_fill() {
        let config = BuildConfig {
            down_diagonals: true,
            up_diagonals: true,
            fill_dots: true,
            ..BuildConfig::default()
        };
        assert!(config.directions().contains(Direction::DiagonalUp));
        assert!(config.directions().contains(Direction::DiagonalDown));
        assert_eq!(config.fill(), Fill::Placeholder);
    }
}

//! `word_entry`: turning raw input strings into placeable words.
//!
//! Each raw string becomes a [`WordEntry`] holding two forms:
//! - `original`: the string exactly as given, used for the printed word list;
//! - `word`: the normalized form the search places in the grid.
//!
//! Normalization:
//! - the string is uppercased;
//! - every character that is not `A`-`Z` afterwards is dropped (spaces,
//!   hyphens, digits, accented letters);
//! - a result shorter than [`MIN_WORD_LEN`] letters is discarded.
//!
//! [`validate`] looks for pairs of entries that make a puzzle ambiguous
//! (duplicates, or one word hidden inside another). It only reports; the
//! caller decides what to do. The search collapses duplicates with
//! [`dedup`] and keeps everything else.

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

use crate::letters::GridLetter;

/// Shortest normalized word worth hiding.
pub const MIN_WORD_LEN: usize = 2;

/// Uppercase `raw` and strip everything outside `A`-`Z`.
///
/// Returns `None` when fewer than [`MIN_WORD_LEN`] letters survive.
///
/// ```
/// use wordsearch::word_entry::normalize;
///
/// assert_eq!(normalize("ice cream").as_deref(), Some("ICECREAM"));
/// assert_eq!(normalize("x-1"), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .to_uppercase()
        .chars()
        .filter(GridLetter::is_grid_letter)
        .collect();
    (word.len() >= MIN_WORD_LEN).then_some(word)
}

/// A word as the user wrote it, plus its normalized grid form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub original: String,
    pub word: String,
}

impl WordEntry {
    /// `None` if `raw` normalizes to fewer than [`MIN_WORD_LEN`] letters.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        normalize(raw).map(|word| WordEntry {
            original: raw.to_string(),
            word,
        })
    }

    /// Length of the normalized form (the number of cells it occupies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Build entries for every raw word that survives normalization, keeping input order.
pub fn word_entries<I, S>(raw_words: I) -> Vec<WordEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_words
        .into_iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let entry = WordEntry::new(raw);
            if entry.is_none() {
                debug!("dropping \"{raw}\": fewer than {MIN_WORD_LEN} letters");
            }
            entry
        })
        .collect()
}

/// A word-list problem that can make the puzzle ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListIssue {
    /// Two entries normalize to the same word.
    Duplicate { word: String },
    /// `outer` contains `inner`, so finding `outer` also reveals `inner`.
    Contains { outer: String, inner: String },
}

impl fmt::Display for WordListIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListIssue::Duplicate { word } => write!(f, "Duplicate word: {word}"),
            WordListIssue::Contains { outer, inner } => write!(f, "{outer} contains {inner}"),
        }
    }
}

/// Check every pair of entries for duplicates and containment.
///
/// Each issue is also logged as a warning.
pub fn validate(entries: &[WordEntry]) -> Vec<WordListIssue> {
    let mut issues = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.word == b.word {
                issues.push(WordListIssue::Duplicate { word: a.word.clone() });
            } else if a.word.contains(b.word.as_str()) {
                issues.push(WordListIssue::Contains { outer: a.word.clone(), inner: b.word.clone() });
            } else if b.word.contains(a.word.as_str()) {
                issues.push(WordListIssue::Contains { outer: b.word.clone(), inner: a.word.clone() });
            }
        }
    }
    for issue in &issues {
        warn!("{issue}");
    }
    issues
}

/// Drop entries whose normalized form already appeared, keeping the first.
pub fn dedup(entries: Vec<WordEntry>) -> Vec<WordEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|e| seen.insert(e.word.clone()))
        .collect()
}

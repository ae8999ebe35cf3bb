//! Priority-ordered classification driver
//!
//! The driver turns candidate spans into accepted spans: every matcher runs
//! exactly once, in the order its set holds them, and each candidate is
//! offered to the table in production order. Earlier categories claim
//! contested ranges first; later overlapping candidates are dropped without
//! comment. A run either produces the full table or fails outright.

use std::fmt;

use super::patterns::{MatcherSet, PatternError};
use super::table::{InvalidSpanError, LexemeTable};

/// Classify `text` with the given matcher set.
///
/// Overlap rejections are the normal first-writer-wins outcome and are
/// ignored; a zero-length candidate aborts the run and no partial table
/// escapes. An empty table is a valid result for text with no recognizable
/// lexemes.
pub fn classify(text: &str, matchers: &MatcherSet) -> Result<LexemeTable, InvalidSpanError> {
    let mut table = LexemeTable::new();
    for matcher in matchers.matchers() {
        for (start, len) in matcher.candidates(text) {
            table.try_add(matcher.category(), start, len)?;
        }
    }
    Ok(table)
}

/// Classify `text` with the built-in VB.NET patterns.
pub fn classify_vb(text: &str) -> Result<LexemeTable, HighlightError> {
    let matchers = MatcherSet::vb()?;
    Ok(classify(text, &matchers)?)
}

/// Any failure a classification run can end with.
#[derive(Debug, Clone)]
pub enum HighlightError {
    /// A pattern failed to compile while the matcher set was built.
    Pattern(PatternError),
    /// A matcher produced a zero-length candidate while scanning.
    InvalidSpan(InvalidSpanError),
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::Pattern(err) => write!(f, "{}", err),
            HighlightError::InvalidSpan(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighlightError::Pattern(err) => Some(err),
            HighlightError::InvalidSpan(err) => Some(err),
        }
    }
}

impl From<PatternError> for HighlightError {
    fn from(err: PatternError) -> Self {
        HighlightError::Pattern(err)
    }
}

impl From<InvalidSpanError> for HighlightError {
    fn from(err: InvalidSpanError) -> Self {
        HighlightError::InvalidSpan(err)
    }
}

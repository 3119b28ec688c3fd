//! Source location tracking.
//!
//! `Position` records where a token or AST node starts in source code.
//! Positions exist for diagnostics only; nothing in the pipeline makes a
//! parse decision based on them.

use std::fmt;
use std::sync::Arc;

/// Filename used for sources that do not come from a file.
pub const ANONYMOUS_SOURCE: &str = "<input>";

/// A location in source text.
///
/// The filename is shared between every position produced from the same
/// source, so cloning a position never copies the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Name of the source file.
    pub filename: Arc<str>,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: u32, column: u32, filename: Arc<str>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Creates a position at the start of an anonymous source.
    #[must_use]
    pub fn at_start() -> Self {
        Self::new(1, 1, Arc::from(ANONYMOUS_SOURCE))
    }

    /// Returns the same location in a different file.
    #[must_use]
    pub fn in_file(mut self, filename: Arc<str>) -> Self {
        self.filename = filename;
        self
    }

    /// Returns true if this position belongs to an anonymous source.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        &*self.filename == ANONYMOUS_SOURCE
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::at_start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

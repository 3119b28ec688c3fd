//! Error types for the Prosaic front end.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::position::Position;

/// Result type alias using the Prosaic error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Prosaic operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a "no grammar rule matched" error for a token slice that
    /// starts at `position`.
    #[must_use]
    pub fn no_matching_rule(
        category: &'static str,
        position: &Position,
        excerpt: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::NoMatchingRule {
            category,
            line: position.line,
            column: position.column,
            filename: position.filename.to_string(),
            excerpt: excerpt.into(),
        })
        .with_context(ErrorContext::new().at(position))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, error: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: error.to_string(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the source position this error refers to, if known.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        match &self.kind {
            ErrorKind::NoMatchingRule { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No grammar rule accepted a token slice.
    #[error("could not parse {category} at {filename}:{line}:{column}: no grammar rule matches `{excerpt}`")]
    NoMatchingRule {
        /// Node category that was requested (`statement` or `expression`).
        category: &'static str,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// Source file name.
        filename: String,
        /// The source text of the rejected slice.
        excerpt: String,
    },

    /// The input contained no tokens to parse.
    #[error("nothing to parse")]
    EmptyInput,

    /// A file could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Operating system error message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
    /// Stack of enclosing constructs being parsed.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Sets source, line and column from a [`Position`].
    #[must_use]
    pub fn at(self, position: &Position) -> Self {
        self.with_source(position.filename.to_string())
            .with_position(position.line, position.column)
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation and tests substitute a scripted one.

use std::borrow::Cow;
use std::sync::Arc;

use prosaic_foundation::position::ANONYMOUS_SOURCE;
use prosaic_foundation::{Error, Result};
use prosaic_language::condenser::condense;
use prosaic_language::keywords::{KEYWORDS, canonical_type_name};
use prosaic_language::navigator::unclosed_openers;
use prosaic_language::{Scanner, SymbolClassifier};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use crate::highlight::ProsaicHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Read a continuation line of a multi-line statement.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Returns true if `input` can be parsed as it stands: no literal or block
/// comment is left open and every `(` and `execute the following;` is
/// closed.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    is_complete_with(&SymbolClassifier::new(), input)
}

/// Like [`is_complete`], scanning with `classifier`.
#[must_use]
pub fn is_complete_with(classifier: &SymbolClassifier, input: &str) -> bool {
    let report = Scanner::new(classifier, Arc::from(ANONYMOUS_SOURCE)).scan_report(input);
    report.unterminated.is_none() && unclosed_openers(&condense(&report.tokens)) == 0
}

/// True if `text` ends inside a literal or block comment.
fn ends_inside_literal(classifier: &SymbolClassifier, text: &str) -> bool {
    Scanner::new(classifier, Arc::from(ANONYMOUS_SOURCE))
        .scan_report(text)
        .unterminated
        .is_some()
}

/// Helper for rustyline that provides completion, hints, highlighting, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct ProsaicHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: BlockValidator,
    highlighter: ProsaicHighlighter,
}

impl Highlighter for ProsaicHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for keywords and type names.
struct KeywordCompleter {
    keywords: Vec<String>,
    classifier: SymbolClassifier,
}

impl KeywordCompleter {
    fn new() -> Self {
        Self {
            keywords: default_keywords(),
            classifier: SymbolClassifier::new(),
        }
    }

    fn candidates(&self, word: &str) -> Vec<Pair> {
        let lower = word.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| keyword.starts_with(&lower))
            .map(|keyword| Pair {
                display: keyword.clone(),
                replacement: keyword.clone(),
            })
            .collect()
    }
}

/// Every keyword plus the canonical primitive type names.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    let mut keywords: Vec<String> = KEYWORDS.iter().map(|word| (*word).to_string()).collect();
    for spelling in [
        "integer",
        "float",
        "string",
        "boolean",
        "character",
        "byte",
        "list",
    ] {
        if let Some(canonical) = canonical_type_name(spelling) {
            keywords.push(canonical.to_string());
        }
    }
    keywords.sort();
    keywords.dedup();
    keywords
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .char_indices()
            .rfind(|(_, c)| !c.is_alphanumeric())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &line[start..pos];

        // Sigiled names and literal contents are not keywords
        let after_sigil = line[..start]
            .chars()
            .next_back()
            .is_some_and(|c| self.classifier.is_sigil(c));
        if word.is_empty() || after_sigil || ends_inside_literal(&self.classifier, &line[..start]) {
            return Ok((start, Vec::new()));
        }

        Ok((start, self.candidates(word)))
    }
}

/// Keeps reading lines while a block, group, or literal is open.
#[derive(Default)]
struct BlockValidator {
    classifier: SymbolClassifier,
}

impl Validator for BlockValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete_with(&self.classifier, ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ProsaicHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = ProsaicHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: BlockValidator::default(),
            highlighter: ProsaicHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}

//! Character scanner for the Prosaic language.
//!
//! The scanner makes a single left-to-right pass over the source and emits
//! primitive tokens. It keeps a pending word buffer and switches between a
//! normal mode and four exclusive modes (line comment, block comment, string
//! literal, character literal). Words are classified against the keyword
//! table when they are flushed.
//!
//! Scanning never fails. An unterminated literal is emitted with whatever
//! was read, and an unterminated block comment swallows the rest of the
//! input; both are reported through `tracing` at warn level and through
//! [`ScanReport::unterminated`].

use std::sync::Arc;

use prosaic_foundation::Position;
use prosaic_foundation::position::ANONYMOUS_SOURCE;
use tracing::{debug, warn};

use crate::keywords::classify_word;
use crate::symbols::SymbolClassifier;
use crate::token::{Token, TokenKind};

/// Scans source text into primitive tokens.
#[derive(Debug)]
pub struct Scanner<'c> {
    classifier: &'c SymbolClassifier,
    filename: Arc<str>,
}

impl<'c> Scanner<'c> {
    /// Creates a scanner that attaches `filename` to every position.
    #[must_use]
    pub fn new(classifier: &'c SymbolClassifier, filename: Arc<str>) -> Self {
        Self {
            classifier,
            filename,
        }
    }

    /// Scans `source` into primitive tokens.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Token> {
        self.scan_report(source).tokens
    }

    /// Scans `source`, also reporting a comment or literal the input left
    /// open.
    #[must_use]
    pub fn scan_report(&self, source: &str) -> ScanReport {
        let mut state = ScanState::new(self.classifier, Arc::clone(&self.filename), source);
        state.run();
        debug!(
            filename = %self.filename,
            tokens = state.tokens.len(),
            "scanned source"
        );
        ScanReport {
            tokens: state.tokens,
            unterminated: state.unterminated,
        }
    }
}

/// Scans `source` with the default classifier.
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let classifier = SymbolClassifier::new();
    Scanner::new(&classifier, Arc::from(ANONYMOUS_SOURCE)).scan(source)
}

/// A construct still open when the input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unterminated {
    /// A block comment with no closing marker.
    BlockComment,
    /// A string or character literal with no closing quote.
    Literal(TokenKind),
}

/// The tokens of one scan and what, if anything, was left open.
#[derive(Clone, Debug)]
pub struct ScanReport {
    /// The primitive tokens, as [`Scanner::scan`] returns them.
    pub tokens: Vec<Token>,
    /// The comment or literal still open at end of input.
    pub unterminated: Option<Unterminated>,
}

/// The exclusive scanning modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    LineComment,
    BlockComment,
    Literal { kind: TokenKind, quote: char },
}

/// Mutable state of one scan.
struct ScanState<'c> {
    classifier: &'c SymbolClassifier,
    filename: Arc<str>,
    chars: Vec<char>,
    index: usize,
    line: u32,
    column: u32,
    mode: Mode,
    tokens: Vec<Token>,
    /// Pending word or literal payload.
    buffer: String,
    /// Where the pending buffer (or the open literal) started.
    buffer_start: (u32, u32),
    /// The pending word began directly after a sigil.
    buffer_after_sigil: bool,
    /// The last thing emitted was a sigil, with nothing in between.
    last_was_sigil: bool,
    unterminated: Option<Unterminated>,
}

impl<'c> ScanState<'c> {
    fn new(classifier: &'c SymbolClassifier, filename: Arc<str>, source: &str) -> Self {
        Self {
            classifier,
            filename,
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
            mode: Mode::Normal,
            tokens: Vec::new(),
            buffer: String::new(),
            buffer_start: (1, 1),
            buffer_after_sigil: false,
            last_was_sigil: false,
            unterminated: None,
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek(0) {
            match self.mode {
                Mode::Normal => self.scan_normal(c),
                Mode::LineComment => {
                    if c == '\n' {
                        self.mode = Mode::Normal;
                    }
                    self.advance();
                }
                Mode::BlockComment => {
                    let [first, second] = self.classifier.block_comment_close;
                    if c == first && self.peek(1) == Some(second) {
                        self.advance();
                        self.advance();
                        self.mode = Mode::Normal;
                    } else {
                        self.advance();
                    }
                }
                Mode::Literal { kind, quote } => self.scan_literal(c, kind, quote),
            }
        }
        self.finish();
    }

    fn scan_normal(&mut self, c: char) {
        let classifier = self.classifier;

        if classifier.is_whitespace(c) {
            self.flush_word();
            self.last_was_sigil = false;
            self.advance();
        } else if self.starts_marker(classifier.line_comment) {
            self.flush_word();
            self.last_was_sigil = false;
            self.mode = Mode::LineComment;
            self.advance();
            self.advance();
        } else if self.starts_marker(classifier.block_comment_open) {
            self.flush_word();
            self.last_was_sigil = false;
            self.mode = Mode::BlockComment;
            self.advance();
            self.advance();
        } else if c == classifier.string_quote || c == classifier.char_quote {
            self.flush_word();
            let kind = if c == classifier.string_quote {
                TokenKind::StringLiteral
            } else {
                TokenKind::CharLiteral
            };
            self.buffer_start = (self.line, self.column);
            self.mode = Mode::Literal { kind, quote: c };
            self.advance();
        } else if classifier.is_digit(c) && self.buffer.is_empty() {
            self.scan_number(c);
        } else if let Some(kind) = classifier.punctuation(c) {
            self.flush_word();
            let position = self.position(self.line, self.column);
            self.tokens.push(Token::new(kind, c.to_string(), position));
            self.last_was_sigil = kind.is_sigil();
            self.advance();
        } else {
            if self.buffer.is_empty() {
                self.buffer_start = (self.line, self.column);
                self.buffer_after_sigil = self.last_was_sigil;
            }
            self.buffer.push(c);
            self.advance();
        }
    }

    fn scan_literal(&mut self, c: char, kind: TokenKind, quote: char) {
        if c == self.classifier.escape {
            self.buffer.push(c);
            self.advance();
            if let Some(next) = self.peek(0) {
                self.buffer.push(next);
                self.advance();
            }
        } else if c == quote {
            self.advance();
            self.emit_literal(kind);
        } else {
            self.buffer.push(c);
            self.advance();
        }
    }

    fn scan_number(&mut self, first: char) {
        let classifier = self.classifier;
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        let prefix = self.peek(1);
        let radix_digit: Option<fn(&SymbolClassifier, char) -> bool> = match prefix {
            Some(p) if first == '0' && p == classifier.hex_prefix => {
                Some(SymbolClassifier::is_hex_digit)
            }
            Some(p) if first == '0' && p == classifier.binary_prefix => {
                Some(SymbolClassifier::is_binary_digit)
            }
            _ => None,
        };

        match (radix_digit, prefix) {
            (Some(is_radix_digit), Some(prefix))
                if self.peek(2).is_some_and(|c| is_radix_digit(classifier, c)) =>
            {
                text.push(first);
                text.push(prefix);
                self.advance();
                self.advance();
                while let Some(c) = self.peek(0).filter(|c| is_radix_digit(classifier, *c)) {
                    text.push(c);
                    self.advance();
                }
            }
            _ => {
                let mut seen_point = false;
                while let Some(c) = self.peek(0) {
                    if classifier.is_digit(c) {
                        text.push(c);
                        self.advance();
                    } else if c == classifier.decimal_point
                        && !seen_point
                        && self.peek(1).is_some_and(|next| classifier.is_digit(next))
                    {
                        seen_point = true;
                        text.push(c);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        let position = self.position(line, column);
        self.tokens
            .push(Token::new(TokenKind::NumberLiteral, text, position));
        self.last_was_sigil = false;
    }

    fn starts_marker(&self, marker: [char; 2]) -> bool {
        self.peek(0) == Some(marker[0]) && self.peek(1) == Some(marker[1])
    }

    fn flush_word(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.buffer);
        let kind = if self.buffer_after_sigil {
            TokenKind::Unknown
        } else {
            classify_word(&word)
        };
        let (line, column) = self.buffer_start;
        let position = self.position(line, column);
        self.tokens.push(Token::new(kind, word, position));
        self.buffer_after_sigil = false;
        self.last_was_sigil = false;
    }

    fn emit_literal(&mut self, kind: TokenKind) {
        let payload = std::mem::take(&mut self.buffer);
        let (line, column) = self.buffer_start;
        let position = self.position(line, column);
        self.tokens.push(Token::new(kind, payload, position));
        self.mode = Mode::Normal;
        self.last_was_sigil = false;
    }

    fn finish(&mut self) {
        match self.mode {
            Mode::Literal { kind, .. } => {
                let (line, column) = self.buffer_start;
                warn!(
                    filename = %self.filename,
                    line,
                    column,
                    "unterminated {} literal runs to end of input",
                    kind.name()
                );
                self.emit_literal(kind);
                self.unterminated = Some(Unterminated::Literal(kind));
            }
            Mode::BlockComment => {
                warn!(
                    filename = %self.filename,
                    line = self.line,
                    column = self.column,
                    "unterminated block comment runs to end of input"
                );
                self.unterminated = Some(Unterminated::BlockComment);
            }
            Mode::Normal | Mode::LineComment => self.flush_word(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek(0) {
            self.index += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn position(&self, line: u32, column: u32) -> Position {
        Position::new(line, column, Arc::clone(&self.filename))
    }
}

//! Syntax highlighting for the REPL.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

use prosaic_language::keywords::{canonical_type_name, classify_word};
use prosaic_language::{SymbolClassifier, TokenKind};

const RESET: &str = "\x1b[0m";
const COMMENT: &str = "\x1b[2;3m";
const LITERAL: &str = "\x1b[33m";
const NUMBER: &str = "\x1b[35m";
const KEYWORD: &str = "\x1b[32m";
const BLOCK: &str = "\x1b[1;32m";
const TYPE: &str = "\x1b[36m";

/// Highlighter for Prosaic source.
///
/// Works on characters rather than tokens so that partial input, which the
/// scanner would treat as an unterminated literal, still colors sensibly.
/// Comment markers, quotes and sigils come from the same
/// [`SymbolClassifier`] the scanner uses.
pub struct ProsaicHighlighter {
    classifier: SymbolClassifier,
}

impl ProsaicHighlighter {
    /// Creates a highlighter for the default alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(SymbolClassifier::new())
    }

    /// Creates a highlighter for the given alphabet.
    #[must_use]
    pub const fn with_classifier(classifier: SymbolClassifier) -> Self {
        Self { classifier }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let classifier = &self.classifier;
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if starts_marker(c, &mut chars, classifier.line_comment) {
                // Line comments run to the end of the line
                result.push_str(COMMENT);
                result.extend(classifier.line_comment);
                while let Some(next) = chars.next_if(|n| *n != '\n') {
                    result.push(next);
                }
                result.push_str(RESET);
            } else if starts_marker(c, &mut chars, classifier.block_comment_open) {
                result.push_str(COMMENT);
                result.extend(classifier.block_comment_open);
                let [close_first, close_second] = classifier.block_comment_close;
                let mut previous = None;
                for next in chars.by_ref() {
                    result.push(next);
                    if previous == Some(close_first) && next == close_second {
                        break;
                    }
                    previous = Some(next);
                }
                result.push_str(RESET);
            } else if c == classifier.string_quote || c == classifier.char_quote {
                result.push_str(LITERAL);
                result.push(c);
                self.push_literal(&mut result, &mut chars, c);
                result.push_str(RESET);
            } else if let Some(kind) = classifier.punctuation(c).filter(|kind| kind.is_sigil()) {
                result.push_str(sigil_color(kind));
                result.push(c);
                push_word(&mut result, &mut chars);
                result.push_str(RESET);
            } else if classifier.is_digit(c) {
                result.push_str(NUMBER);
                result.push(c);
                while let Some(next) = chars.next_if(|n| continues_number(classifier, *n)) {
                    result.push(next);
                }
                result.push_str(RESET);
            } else if c.is_alphabetic() {
                let mut word = String::from(c);
                push_word(&mut word, &mut chars);
                match word_color(&word) {
                    Some(color) => {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str(RESET);
                    }
                    None => result.push_str(&word),
                }
            } else {
                result.push(c);
            }
        }

        Cow::Owned(result)
    }

    fn push_literal(&self, result: &mut String, chars: &mut Peekable<Chars<'_>>, quote: char) {
        while let Some(next) = chars.next() {
            result.push(next);
            if next == self.classifier.escape {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            } else if next == quote {
                break;
            }
        }
    }
}

impl Default for ProsaicHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumes the second character of `marker` if `c` starts it.
fn starts_marker(c: char, chars: &mut Peekable<Chars<'_>>, marker: [char; 2]) -> bool {
    c == marker[0] && chars.next_if_eq(&marker[1]).is_some()
}

fn continues_number(classifier: &SymbolClassifier, c: char) -> bool {
    c.is_ascii_alphanumeric() || c == classifier.decimal_point
}

fn push_word(result: &mut String, chars: &mut Peekable<Chars<'_>>) {
    while let Some(next) = chars.next_if(|n| n.is_alphanumeric() || *n == '_') {
        result.push(next);
    }
}

const fn sigil_color(sigil: TokenKind) -> &'static str {
    match sigil {
        TokenKind::VariableSigil => "\x1b[34m",
        TokenKind::FunctionSigil => "\x1b[1;34m",
        TokenKind::StructureSigil => "\x1b[36m",
        TokenKind::LabelSigil => "\x1b[1;33m",
        _ => "\x1b[35m",
    }
}

fn word_color(word: &str) -> Option<&'static str> {
    if canonical_type_name(word).is_some() {
        return Some(TYPE);
    }
    match classify_word(word) {
        TokenKind::Unknown => None,
        TokenKind::NumberWord | TokenKind::OrdinalWord => Some(NUMBER),
        TokenKind::Execute | TokenKind::Following | TokenKind::Fin => Some(BLOCK),
        _ => Some(KEYWORD),
    }
}

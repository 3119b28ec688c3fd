//! Character classes and delimiters used by the scanner.
//!
//! The scanner never hard-codes a character. Everything it needs to decide
//! comes from a [`SymbolClassifier`], so an alternate alphabet only needs a
//! different classifier value.

use crate::token::TokenKind;

/// Character-class predicates and delimiter characters for scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolClassifier {
    /// Opens and closes a string literal.
    pub string_quote: char,
    /// Opens and closes a character literal.
    pub char_quote: char,
    /// Escapes the next character inside a literal.
    pub escape: char,
    /// Two-character line comment marker.
    pub line_comment: [char; 2],
    /// Two-character block comment open marker.
    pub block_comment_open: [char; 2],
    /// Two-character block comment close marker.
    pub block_comment_close: [char; 2],
    /// Separates the integer and fractional digits of a number.
    pub decimal_point: char,
    /// Follows a leading `0` to start a hexadecimal literal.
    pub hex_prefix: char,
    /// Follows a leading `0` to start a binary literal.
    pub binary_prefix: char,
    /// Single-character tokens, sigils included.
    pub punctuation: Vec<(char, TokenKind)>,
}

impl SymbolClassifier {
    /// Creates the default classifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            string_quote: '"',
            char_quote: '`',
            escape: '\\',
            line_comment: ['/', '/'],
            block_comment_open: ['/', '*'],
            block_comment_close: ['*', '/'],
            decimal_point: '.',
            hex_prefix: 'x',
            binary_prefix: 'b',
            punctuation: vec![
                ('$', TokenKind::VariableSigil),
                ('@', TokenKind::FunctionSigil),
                ('&', TokenKind::StructureSigil),
                (':', TokenKind::LabelSigil),
                ('~', TokenKind::AliasSigil),
                ('(', TokenKind::ParenOpen),
                (')', TokenKind::ParenClose),
                (',', TokenKind::Comma),
                (';', TokenKind::Semicolon),
                ('.', TokenKind::Period),
                ('\'', TokenKind::Apostrophe),
                ('+', TokenKind::Plus),
                ('-', TokenKind::Minus),
            ],
        }
    }

    /// Returns true for decimal digits.
    #[must_use]
    pub const fn is_digit(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    /// Returns true for hexadecimal digits.
    #[must_use]
    pub const fn is_hex_digit(&self, c: char) -> bool {
        c.is_ascii_hexdigit()
    }

    /// Returns true for binary digits.
    #[must_use]
    pub const fn is_binary_digit(&self, c: char) -> bool {
        matches!(c, '0' | '1')
    }

    /// Returns true for whitespace.
    #[must_use]
    pub fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }

    /// Returns the token kind of a punctuation character.
    #[must_use]
    pub fn punctuation(&self, c: char) -> Option<TokenKind> {
        self.punctuation
            .iter()
            .find(|(candidate, _)| *candidate == c)
            .map(|(_, kind)| *kind)
    }

    /// Returns true if `c` is a punctuation character.
    #[must_use]
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation(c).is_some()
    }

    /// Returns true if `c` is a sigil.
    #[must_use]
    pub fn is_sigil(&self, c: char) -> bool {
        self.punctuation(c).is_some_and(TokenKind::is_sigil)
    }
}

impl Default for SymbolClassifier {
    fn default() -> Self {
        Self::new()
    }
}

//! Parser entry points.
//!
//! The parser runs the whole front end: scan, condense, split the token
//! stream into top-level statements, and dispatch each one through the
//! grammar. Parsing a program is all-or-nothing; the first statement no
//! rule accepts becomes the error.

use prosaic_foundation::{Error, ErrorKind, Result};
use tracing::debug;

use crate::ast::{Expression, Program, Statement};
use crate::condenser::condense;
use crate::config::FrontendConfig;
use crate::grammar::{Grammar, excerpt, split_statements};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Parser for Prosaic source code.
///
/// Holds no per-parse state, so one parser can serve many threads.
#[derive(Debug, Default)]
pub struct Parser {
    config: FrontendConfig,
    grammar: Grammar,
}

impl Parser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FrontendConfig::default())
    }

    /// Creates a parser with the given configuration.
    #[must_use]
    pub fn with_config(config: FrontendConfig) -> Self {
        let grammar = Grammar::new().with_rule_tracing(config.trace_rules);
        Self { config, grammar }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Returns the grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Scans `source` into primitive tokens without condensing them.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Token> {
        Scanner::new(&self.config.classifier, self.config.filename.clone()).scan(source)
    }

    /// Scans and condenses `source` into the tokens the grammar sees.
    #[must_use]
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        condense(&self.scan(source))
    }

    /// Parses `source` as a whole program.
    ///
    /// # Errors
    /// Returns [`ErrorKind::NoMatchingRule`] for the first top-level
    /// statement no grammar rule accepts.
    pub fn parse_program(&self, source: &str) -> Result<Program> {
        self.parse_tokens(&self.tokenize(source))
    }

    /// Parses already condensed tokens as a whole program.
    ///
    /// # Errors
    /// See [`Parser::parse_program`].
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<Program> {
        let statements = split_statements(tokens)
            .into_iter()
            .map(|segment| {
                self.grammar.parse_statement(segment).ok_or_else(|| {
                    Error::no_matching_rule("statement", &segment[0].position, excerpt(segment))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            filename = %self.config.filename,
            statements = statements.len(),
            "parsed program"
        );
        Ok(Program {
            statements,
            filename: self.config.filename.to_string(),
        })
    }

    /// Parses `source` as a single statement. One trailing `.` or `;` is
    /// allowed.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyInput`] if there are no tokens, or
    /// [`ErrorKind::NoMatchingRule`] if no statement rule accepts them.
    pub fn parse_statement(&self, source: &str) -> Result<Statement> {
        let tokens = self.tokenize(source);
        let tokens = trim_terminator(&tokens);
        let first = tokens
            .first()
            .ok_or_else(|| Error::new(ErrorKind::EmptyInput))?;
        self.grammar
            .parse_statement(tokens)
            .ok_or_else(|| Error::no_matching_rule("statement", &first.position, excerpt(tokens)))
    }

    /// Parses `source` as a single expression.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyInput`] if there are no tokens, or
    /// [`ErrorKind::NoMatchingRule`] if no expression rule accepts them.
    pub fn parse_expression(&self, source: &str) -> Result<Expression> {
        let tokens = self.tokenize(source);
        let first = tokens
            .first()
            .ok_or_else(|| Error::new(ErrorKind::EmptyInput))?;
        self.grammar
            .parse_expression(&tokens)
            .ok_or_else(|| Error::no_matching_rule("expression", &first.position, excerpt(&tokens)))
    }
}

fn trim_terminator(tokens: &[Token]) -> &[Token] {
    match tokens.split_last() {
        Some((last, rest)) if matches!(last.kind, TokenKind::Period | TokenKind::Semicolon) => rest,
        _ => tokens,
    }
}

/// Parses source code into a program.
///
/// # Errors
/// Returns an error if any top-level statement cannot be parsed.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new().parse_program(source)
}

/// Scans and condenses source code with the default configuration.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Parser::new().tokenize(source)
}

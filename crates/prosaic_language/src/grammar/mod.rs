//! Priority-ordered grammar rules.
//!
//! A [`GrammarRule`] is one candidate parser for one syntactic form. Rules
//! for a node category are held by a [`Dispatcher`], sorted ascending by
//! priority, and the first rule that produces a node wins. Rules recurse
//! only through a [`ParseSession`], which dispatches through the
//! [`Grammar`] and remembers every result for the token buffer it parses.
//!
//! An ordinary mismatch is `None`. There is no backtracking beyond the
//! discrete split points a rule locates with the navigator, and a slice is
//! dispatched at most once per category within a session, so rules that try
//! several split points stay polynomial in the input length.

pub mod expression;
pub mod statement;

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use crate::ast::{Expression, Statement};
use crate::navigator::top_layer_indices_where;
use crate::token::{Token, TokenKind};

/// One candidate parser for a node of type `T`.
pub trait GrammarRule<T>: Send + Sync {
    /// Name used in traces.
    fn name(&self) -> &'static str;

    /// Lower priorities are tried first.
    fn priority(&self) -> u32;

    /// Attempts to parse the whole of `tokens` as one node.
    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<T>;
}

/// A rule set for one node category, sorted by priority.
pub struct Dispatcher<T> {
    category: &'static str,
    rules: Vec<Box<dyn GrammarRule<T>>>,
}

impl<T> Dispatcher<T> {
    /// Creates a dispatcher. Rules with equal priority keep their
    /// registration order.
    #[must_use]
    pub fn new(category: &'static str, mut rules: Vec<Box<dyn GrammarRule<T>>>) -> Self {
        rules.sort_by_key(|rule| rule.priority());
        Self { category, rules }
    }

    /// Returns the category name (`expression` or `statement`).
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.category
    }

    /// Returns the rule names in the order they are tried.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Tries each rule in order and returns the first node produced.
    pub fn dispatch(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<T> {
        if tokens.is_empty() {
            return None;
        }
        self.rules.iter().find_map(|rule| {
            let node = rule.try_parse(tokens, session);
            if session.grammar.trace_rules {
                trace!(
                    category = self.category,
                    rule = rule.name(),
                    tokens = tokens.len(),
                    matched = node.is_some(),
                    "tried grammar rule"
                );
            }
            node
        })
    }
}

impl<T> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("category", &self.category)
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// The complete grammar: one dispatcher per node category.
///
/// Immutable after construction and shareable across threads.
#[derive(Debug)]
pub struct Grammar {
    expressions: Dispatcher<Expression>,
    statements: Dispatcher<Statement>,
    trace_rules: bool,
}

impl Grammar {
    /// Builds the grammar from the static rule registrations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expressions: Dispatcher::new("expression", expression::rules()),
            statements: Dispatcher::new("statement", statement::rules()),
            trace_rules: false,
        }
    }

    /// Enables or disables a trace event per rule attempt.
    #[must_use]
    pub const fn with_rule_tracing(mut self, enabled: bool) -> Self {
        self.trace_rules = enabled;
        self
    }

    /// Parses `tokens` as one expression.
    #[must_use]
    pub fn parse_expression(&self, tokens: &[Token]) -> Option<Expression> {
        ParseSession::new(self, tokens).parse_expression(tokens)
    }

    /// Parses `tokens` as one statement.
    #[must_use]
    pub fn parse_statement(&self, tokens: &[Token]) -> Option<Statement> {
        ParseSession::new(self, tokens).parse_statement(tokens)
    }

    /// Parses `tokens` as a sequence of statements, or `None` if any
    /// segment fails.
    #[must_use]
    pub fn parse_statements(&self, tokens: &[Token]) -> Option<Vec<Statement>> {
        ParseSession::new(self, tokens).parse_statements(tokens)
    }

    /// Returns the expression dispatcher.
    #[must_use]
    pub const fn expressions(&self) -> &Dispatcher<Expression> {
        &self.expressions
    }

    /// Returns the statement dispatcher.
    #[must_use]
    pub const fn statements(&self) -> &Dispatcher<Statement> {
        &self.statements
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Results already computed for one slice, keyed by `(offset, len)` in the
/// session's token buffer.
type Memo<T> = RefCell<HashMap<(usize, usize), Option<T>>>;

/// One parse of one token buffer.
///
/// Every rule of a session works on sub-slices of the same buffer, so a
/// result is identified by where its slice sits in that buffer. Slices from
/// anywhere else are dispatched without being remembered.
pub struct ParseSession<'g, 't> {
    grammar: &'g Grammar,
    buffer: &'t [Token],
    expressions: Memo<Expression>,
    statements: Memo<Statement>,
}

impl<'g, 't> ParseSession<'g, 't> {
    /// Starts a session over `buffer`.
    #[must_use]
    pub fn new(grammar: &'g Grammar, buffer: &'t [Token]) -> Self {
        Self {
            grammar,
            buffer,
            expressions: RefCell::default(),
            statements: RefCell::default(),
        }
    }

    /// Returns the grammar this session dispatches through.
    #[must_use]
    pub const fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Parses `tokens` as one expression.
    #[must_use]
    pub fn parse_expression(&self, tokens: &[Token]) -> Option<Expression> {
        self.memoized(&self.expressions, &self.grammar.expressions, tokens)
    }

    /// Parses `tokens` as one statement.
    #[must_use]
    pub fn parse_statement(&self, tokens: &[Token]) -> Option<Statement> {
        self.memoized(&self.statements, &self.grammar.statements, tokens)
    }

    /// Parses `tokens` as a sequence of statements, or `None` if any
    /// segment fails.
    #[must_use]
    pub fn parse_statements(&self, tokens: &[Token]) -> Option<Vec<Statement>> {
        split_statements(tokens)
            .into_iter()
            .map(|segment| self.parse_statement(segment))
            .collect()
    }

    /// Number of slices with a remembered result, across both categories.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.expressions.borrow().len() + self.statements.borrow().len()
    }

    /// Locates `tokens` inside the buffer.
    fn key(&self, tokens: &[Token]) -> Option<(usize, usize)> {
        let size = size_of::<Token>();
        let distance = (tokens.as_ptr() as usize).checked_sub(self.buffer.as_ptr() as usize)?;
        let offset = distance / size;
        (distance % size == 0 && offset + tokens.len() <= self.buffer.len())
            .then_some((offset, tokens.len()))
    }

    fn memoized<T: Clone>(
        &self,
        memo: &Memo<T>,
        dispatcher: &Dispatcher<T>,
        tokens: &[Token],
    ) -> Option<T> {
        if tokens.is_empty() {
            return None;
        }
        let Some(key) = self.key(tokens) else {
            return dispatcher.dispatch(tokens, self);
        };
        let remembered = memo.borrow().get(&key).cloned();
        if let Some(node) = remembered {
            return node;
        }
        let node = dispatcher.dispatch(tokens, self);
        memo.borrow_mut().insert(key, node.clone());
        node
    }
}

impl std::fmt::Debug for ParseSession<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseSession")
            .field("tokens", &self.buffer.len())
            .field("remembered", &self.remembered())
            .finish_non_exhaustive()
    }
}

/// Splits a token slice into statements at top-layer `;` and `.`.
///
/// A `;` directly after `define function @name` or `define structure &name`
/// opens a parameter list and does not end the statement. Empty segments
/// are dropped.
#[must_use]
pub fn split_statements(tokens: &[Token]) -> Vec<&[Token]> {
    let separators = top_layer_indices_where(tokens, |kind| {
        matches!(kind, TokenKind::Semicolon | TokenKind::Period)
    });

    let mut segments = Vec::new();
    let mut start = 0;
    for separator in separators {
        if opens_parameter_list(&tokens[start..separator]) {
            continue;
        }
        segments.push(&tokens[start..separator]);
        start = separator + 1;
    }
    segments.push(&tokens[start..]);

    segments.retain(|segment| !segment.is_empty());
    segments
}

/// True if `head` is exactly a definition header awaiting parameters.
fn opens_parameter_list(head: &[Token]) -> bool {
    matches!(
        head,
        [definition, name]
            if (definition.kind == TokenKind::DefineFunction
                && name.kind == TokenKind::FunctionIdentifier)
                || (definition.kind == TokenKind::DefineStructure
                    && name.kind == TokenKind::StructureIdentifier)
    )
}

/// Renders a token slice as source-like text for diagnostics.
#[must_use]
pub fn excerpt(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::StringLiteral => format!("\"{}\"", token.raw),
            TokenKind::CharLiteral => format!("`{}`", token.raw),
            _ => token.raw.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

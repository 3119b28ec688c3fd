//! Front end for Prosaic, a programming language written as English prose.
//!
//! Source text goes through four stages:
//!
//! ```text
//! "Set $total to the sum of twenty five and $x."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SCANNER       │  → [Set, $, total, To, The, Sum, Of, twenty, five, And, $, x, .]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CONDENSER     │  → [Set, $total, To, SumOf, 25, And, $x, .]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   GRAMMAR       │  → rules tried in priority order over top-layer splits
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AST           │  → Assignment { target: $total, value: MathOperation(Add) }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`scanner`] - Characters to primitive tokens
//! - [`condenser`] - Identifier, phrase and number fusion
//! - [`navigator`] - Nesting-aware token searches
//! - [`grammar`] - Priority-ordered expression and statement rules
//! - [`ast`] - Syntax tree types
//! - [`parser`] - Entry points tying the stages together
//! - [`declarations`] - Grouping of top-level declarations
//! - [`pretty`] - Canonical printing of trees
//! - [`visitor`] - Tree traversal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod condenser;
pub mod config;
pub mod declarations;
pub mod grammar;
pub mod keywords;
pub mod navigator;
pub mod parser;
pub mod pretty;
pub mod scanner;
pub mod symbols;
pub mod token;
pub mod visitor;


// Re-export main types for convenience
pub use ast::{
    ComparisonOperator, Expression, ImportAlias, IndexSelector, LogicalOperator, MathOperator,
    Program, Statement, VariableDefinition,
};
pub use config::FrontendConfig;
pub use declarations::{DeclarationBuckets, SortedDeclarations, sort_declarations};
pub use grammar::{Grammar, GrammarRule, ParseSession};
pub use parser::{Parser, parse, tokenize};
pub use scanner::{ScanReport, Scanner, Unterminated, scan};
pub use symbols::SymbolClassifier;
pub use token::{IdentifierCategory, Token, TokenKind};

pub use prosaic_foundation::{Error, ErrorKind, Position, Result};

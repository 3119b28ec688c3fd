//! Integration tests for Layer 1: Language
//!
//! Tests for the scanner, condenser, navigator, grammar, and the tools built
//! on the syntax tree.

mod expressions;
mod navigation;
mod programs;
mod properties;
mod statements;
mod tokens;

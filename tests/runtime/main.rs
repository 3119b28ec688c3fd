//! Integration tests for Layer 2: Runtime
//!
//! Tests for output rendering, the REPL, and the editor helpers.

mod editor;
mod render;
mod repl;

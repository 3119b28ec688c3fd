//! Prosaic - front end for an English-sentence-styled programming language
//!
//! This crate re-exports all layers of the Prosaic front end for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: prosaic_runtime    - Logging setup, REPL, CLI
//! Layer 1: prosaic_language   - Scanner, condenser, navigator, grammar, AST
//! Layer 0: prosaic_foundation - Core types (Position, Error)
//! ```

pub use prosaic_foundation as foundation;
pub use prosaic_language as language;
pub use prosaic_runtime as runtime;

//! REPL, CLI, and logging setup for Prosaic.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-parse-print loop
//! - [`render`] - The output formats shared by the REPL and the `prosaic` binary
//! - [`logging`] - The `tracing` subscriber for command-line use

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::LogLevel;
pub use render::OutputFormat;
pub use repl::Repl;

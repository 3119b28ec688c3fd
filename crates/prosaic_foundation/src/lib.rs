//! Core types for the Prosaic front end.
//!
//! This crate provides:
//! - [`Position`] - Line/column/filename source locations
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod position;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use position::Position;

//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Position and Error.

mod errors;
mod positions;

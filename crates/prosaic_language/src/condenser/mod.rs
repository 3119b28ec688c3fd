//! The token condenser.
//!
//! Three passes turn primitive tokens into the tokens the grammar works
//! with. Each pass reads the previous pass's output and builds a new
//! sequence:
//!
//! 1. [`fuse_identifiers`] merges sigils with their names.
//! 2. [`fuse_phrases`] fuses multi-word keywords using [`PHRASES`].
//! 3. [`fuse_numbers`] turns digit and number-word runs into literals.
//!
//! None of the passes can fail; a fusion that does not apply leaves its
//! tokens untouched.

mod identifiers;
mod numbers;
mod phrases;

pub use identifiers::fuse_identifiers;
pub use numbers::fuse_numbers;
pub use phrases::{PHRASES, Phrase, fuse_phrases};

use tracing::debug;

use crate::token::Token;

/// Runs all three condenser passes.
#[must_use]
pub fn condense(tokens: &[Token]) -> Vec<Token> {
    let identified = fuse_identifiers(tokens);
    let phrased = fuse_phrases(&identified);
    let numbered = fuse_numbers(&phrased);
    debug!(
        primitive = tokens.len(),
        identifiers = identified.len(),
        phrases = phrased.len(),
        numbers = numbered.len(),
        "condensed tokens"
    );
    numbered
}

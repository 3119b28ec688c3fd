//! Nesting-aware queries over token slices.
//!
//! Every search tracks a signed depth counter. Closers (`)` and `fin`)
//! decrement it before the token is checked, openers (`(` and `execute the
//! following;`) increment it after, so an opener or closer at the outer level
//! is itself a top-layer token. A match only counts at depth zero, and a
//! closer that drives the depth below zero stops the search.
//!
//! Grammar rules split slices exclusively through these functions.

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Why a top-layer search found nothing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No top-layer token of the requested kind exists.
    #[error("no top-layer token of the requested kind")]
    NotFound,
    /// A closer without an opener was found at this index.
    #[error("unbalanced closer at token {0}")]
    Unbalanced(usize),
}

/// Visits top-layer tokens from `start`, stopping when `visit` returns
/// `false` or nesting goes negative.
fn walk_top_layer(
    tokens: &[Token],
    start: usize,
    mut visit: impl FnMut(usize, TokenKind) -> bool,
) -> Result<(), NavigationError> {
    let mut depth: i32 = 0;
    for (index, token) in tokens.iter().enumerate().skip(start) {
        if token.kind.is_closer() {
            depth -= 1;
            if depth < 0 {
                return Err(NavigationError::Unbalanced(index));
            }
        }
        if depth == 0 && !visit(index, token.kind) {
            return Ok(());
        }
        if token.kind.is_opener() {
            depth += 1;
        }
    }
    Ok(())
}

/// Returns the index of the first top-layer token of `kind`.
///
/// # Errors
///
/// Returns [`NavigationError::NotFound`] if there is none, or
/// [`NavigationError::Unbalanced`] if a stray closer ends the search first.
pub fn first_top_layer_index_of(
    tokens: &[Token],
    kind: TokenKind,
) -> Result<usize, NavigationError> {
    first_top_layer_index_of_from(tokens, kind, 0)
}

/// Like [`first_top_layer_index_of`], starting the scan at `start`.
///
/// # Errors
///
/// See [`first_top_layer_index_of`].
pub fn first_top_layer_index_of_from(
    tokens: &[Token],
    kind: TokenKind,
    start: usize,
) -> Result<usize, NavigationError> {
    let mut found = None;
    walk_top_layer(tokens, start, |index, candidate| {
        if candidate == kind {
            found = Some(index);
            false
        } else {
            true
        }
    })?;
    found.ok_or(NavigationError::NotFound)
}

/// Returns the index of the first top-layer token of `kind`, if any.
#[must_use]
pub fn try_first_top_layer_index_of(tokens: &[Token], kind: TokenKind) -> Option<usize> {
    first_top_layer_index_of(tokens, kind).ok()
}

/// Returns the index of the last top-layer token of `kind`, if any.
///
/// An unbalanced slice has no last index.
#[must_use]
pub fn try_last_top_layer_index_of(tokens: &[Token], kind: TokenKind) -> Option<usize> {
    top_layer_indices_of(tokens, kind).last().copied()
}

/// Returns every top-layer index of `kind`, ascending.
///
/// An unbalanced slice yields no indices.
#[must_use]
pub fn top_layer_indices_of(tokens: &[Token], kind: TokenKind) -> Vec<usize> {
    top_layer_indices_where(tokens, |candidate| candidate == kind)
}

/// Returns every top-layer index whose kind satisfies `predicate`.
///
/// An unbalanced slice yields no indices.
#[must_use]
pub fn top_layer_indices_where(
    tokens: &[Token],
    predicate: impl Fn(TokenKind) -> bool,
) -> Vec<usize> {
    let mut indices = Vec::new();
    let walked = walk_top_layer(tokens, 0, |index, candidate| {
        if predicate(candidate) {
            indices.push(index);
        }
        true
    });
    match walked {
        Ok(()) => indices,
        Err(_) => Vec::new(),
    }
}

/// Returns top-layer indices of `x`, stopping at the first top-layer `y`.
///
/// Used to split `a, b, and c`: the commas are collected up to the final
/// `, and`.
#[must_use]
pub fn top_layer_indices_of_x_before_y(tokens: &[Token], x: TokenKind, y: TokenKind) -> Vec<usize> {
    let mut indices = Vec::new();
    let walked = walk_top_layer(tokens, 0, |index, candidate| {
        if candidate == y {
            return false;
        }
        if candidate == x {
            indices.push(index);
        }
        true
    });
    match walked {
        Ok(()) => indices,
        Err(_) => Vec::new(),
    }
}

/// Returns the index of the closer matching the opener at `open_index`.
#[must_use]
pub fn matching_close(tokens: &[Token], open_index: usize) -> Option<usize> {
    if !tokens.get(open_index)?.kind.is_opener() {
        return None;
    }
    let mut depth: usize = 0;
    for (index, token) in tokens.iter().enumerate().skip(open_index) {
        if token.kind.is_opener() {
            depth += 1;
        } else if token.kind.is_closer() {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Returns how many openers are still waiting for a closer at the end of
/// `tokens`. A stray closer is ignored.
#[must_use]
pub fn unclosed_openers(tokens: &[Token]) -> usize {
    tokens.iter().fold(0, |open, token| {
        if token.kind.is_opener() {
            open + 1
        } else if token.kind.is_closer() {
            open.saturating_sub(1)
        } else {
            open
        }
    })
}

//! Numeric fusion: the third condenser pass.
//!
//! Maximal runs of adjacent digit literals, number words and `point` become
//! a single literal whose `raw` is the decimal value. Integer parts are
//! accumulated in groups: `hundred` multiplies the current group, larger
//! scales move the group into the running total. Digits after `point` are
//! appended textually, so fractions never drift.
//!
//! A run that cannot be converted passes through unchanged.

use crate::keywords::number_word;
use crate::token::{Token, TokenKind};

/// Fuses runs of number tokens into literals.
#[must_use]
pub fn fuse_numbers(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        if !tokens[index].kind.is_numeric_part() {
            output.push(tokens[index].clone());
            index += 1;
            continue;
        }

        let end = tokens[index..]
            .iter()
            .position(|token| !token.kind.is_numeric_part())
            .map_or(tokens.len(), |offset| index + offset);
        let run = &tokens[index..end];

        match convert_run(run) {
            Some(token) => output.push(token),
            None => output.extend_from_slice(run),
        }
        index = end;
    }

    output
}

/// Converts one run, or returns `None` if the run is not a decimal value.
fn convert_run(run: &[Token]) -> Option<Token> {
    let first = run.first()?;

    // A lone digit literal (decimal, hex or binary) is already final.
    if run.len() == 1 && first.kind == TokenKind::NumberLiteral {
        return Some(first.clone());
    }

    let mut total: u128 = 0;
    let mut group: u128 = 0;
    let mut fraction: Option<String> = None;

    for token in run {
        match token.kind {
            TokenKind::Point => {
                if fraction.is_some() {
                    return None;
                }
                fraction = Some(String::new());
            }
            TokenKind::NumberLiteral => {
                if !token.raw.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                match fraction.as_mut() {
                    Some(digits) => digits.push_str(&token.raw),
                    None => group = group.checked_add(token.raw.parse().ok()?)?,
                }
            }
            TokenKind::NumberWord | TokenKind::OrdinalWord => {
                let word = number_word(&token.raw)?;
                if let Some(digits) = fraction.as_mut() {
                    if word.is_scale() {
                        return None;
                    }
                    digits.push_str(&word.value.to_string());
                } else if word.value == 100 {
                    group = group.max(1).checked_mul(100)?;
                } else if word.is_scale() {
                    total = total.checked_add(group.max(1).checked_mul(word.value)?)?;
                    group = 0;
                } else {
                    group = group.checked_add(word.value)?;
                }
            }
            _ => return None,
        }
    }

    let integer = total.checked_add(group)?;
    let raw = match fraction {
        Some(digits) if digits.is_empty() => return None,
        Some(digits) => format!("{integer}.{digits}"),
        None => integer.to_string(),
    };

    let kind = if run.last().is_some_and(|t| t.kind == TokenKind::OrdinalWord) {
        TokenKind::OrdinalLiteral
    } else {
        TokenKind::NumberLiteral
    };

    Some(Token::new(kind, raw, first.position.clone()))
}

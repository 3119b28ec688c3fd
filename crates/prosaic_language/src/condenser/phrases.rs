//! Keyword-phrase fusion: the second condenser pass.
//!
//! A phrase is a fixed sequence of token kinds. At each position the table
//! is tried in order and the first phrase whose kinds all match is emitted
//! as one compound token.

use crate::token::TokenKind as K;
use crate::token::{Token, TokenKind};

/// One entry of the phrase table.
#[derive(Clone, Copy, Debug)]
pub struct Phrase {
    /// Head kind followed by the continuation kinds.
    pub parts: &'static [TokenKind],
    /// Kind of the compound token.
    pub result: TokenKind,
}

const fn phrase(parts: &'static [TokenKind], result: TokenKind) -> Phrase {
    Phrase { parts, result }
}

/// The phrase table, in match order.
pub const PHRASES: &[Phrase] = &[
    phrase(&[K::Apostrophe, K::S], K::Possessive),
    phrase(&[K::The, K::Sum, K::Of], K::SumOf),
    phrase(&[K::The, K::Difference, K::Of], K::DifferenceOf),
    phrase(&[K::The, K::Product, K::Of], K::ProductOf),
    phrase(&[K::The, K::Quotient, K::Of], K::QuotientOf),
    phrase(
        &[K::Raised, K::To, K::The, K::Power, K::Of],
        K::RaisedToThePowerOf,
    ),
    phrase(&[K::Shifted, K::Left, K::By], K::ShiftedLeftBy),
    phrase(&[K::Shifted, K::Right, K::By], K::ShiftedRightBy),
    phrase(&[K::Rotated, K::Left, K::By], K::RotatedLeftBy),
    phrase(&[K::Rotated, K::Right, K::By], K::RotatedRightBy),
    phrase(&[K::Bitwise, K::And], K::BitwiseAnd),
    phrase(&[K::Bitwise, K::Or], K::BitwiseOr),
    phrase(&[K::Bitwise, K::Xor], K::BitwiseXor),
    phrase(&[K::Bitwise, K::Not], K::BitwiseNot),
    phrase(&[K::Is, K::Not, K::NullLiteral], K::IsNotNull),
    phrase(&[K::Is, K::NullLiteral], K::IsNull),
    phrase(&[K::Is, K::Of, K::Type], K::IsOfType),
    phrase(
        &[K::Greater, K::Than, K::Or, K::Equal, K::To],
        K::GreaterThanOrEqualTo,
    ),
    phrase(&[K::Greater, K::Than], K::GreaterThan),
    phrase(
        &[K::Less, K::Than, K::Or, K::Equal, K::To],
        K::LessThanOrEqualTo,
    ),
    phrase(&[K::Less, K::Than], K::LessThan),
    phrase(&[K::Equal, K::To], K::EqualTo),
    phrase(&[K::Beginning, K::At], K::BeginningAt),
    phrase(&[K::Ending, K::At], K::EndingAt),
    phrase(&[K::From, K::Last], K::FromLast),
    phrase(&[K::With, K::Index, K::As], K::WithIndexAs),
    phrase(&[K::With, K::Value, K::As], K::WithValueAs),
    phrase(&[K::For, K::Each], K::ForEach),
    phrase(&[K::Iterate, K::Over], K::IterateOver),
    phrase(&[K::For, K::Architecture], K::ForArchitecture),
    phrase(&[K::Define, K::Function], K::DefineFunction),
    phrase(&[K::Define, K::Structure], K::DefineStructure),
    phrase(&[K::Program, K::Colon], K::EntryPoint),
    phrase(
        &[K::Execute, K::The, K::Following, K::Semicolon],
        K::BlockStart,
    ),
    phrase(&[K::Fin], K::BlockEnd),
    phrase(&[K::Go, K::To], K::GoTo),
    phrase(&[K::Comma, K::And], K::CommaAnd),
    phrase(&[K::Plus, K::Plus], K::Increment),
    phrase(&[K::Minus, K::Minus], K::Decrement),
];

/// Fuses keyword phrases into compound tokens.
#[must_use]
pub fn fuse_phrases(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let rest = &tokens[index..];
        let matched = PHRASES.iter().find(|phrase| {
            phrase.parts.len() <= rest.len()
                && phrase
                    .parts
                    .iter()
                    .zip(rest)
                    .all(|(kind, token)| token.kind == *kind)
        });

        if let Some(phrase) = matched {
            let parts = &rest[..phrase.parts.len()];
            output.push(Token::new(phrase.result, phrase_text(parts), parts[0].position.clone()));
            index += parts.len();
        } else {
            output.push(rest[0].clone());
            index += 1;
        }
    }

    output
}

/// Joins the raw text of a phrase the way it is written.
fn phrase_text(parts: &[Token]) -> String {
    let mut text = String::new();
    let mut previous: Option<TokenKind> = None;
    for token in parts {
        let glued = matches!(
            token.kind,
            K::Colon | K::Semicolon | K::Comma | K::Period | K::S
        ) || matches!(
            (previous, token.kind),
            (Some(K::Plus), K::Plus) | (Some(K::Minus), K::Minus)
        );
        if previous.is_some() && !glued {
            text.push(' ');
        }
        text.push_str(&token.raw);
        previous = Some(token.kind);
    }
    text
}

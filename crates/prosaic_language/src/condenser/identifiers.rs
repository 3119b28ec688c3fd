//! Identifier fusion: the first condenser pass.

use crate::token::{IdentifierCategory, Token, TokenKind};

/// Merges each sigil with the word that follows it into one identifier.
///
/// A lone alias sigil becomes [`TokenKind::Wildcard`] and a lone label
/// sigil becomes [`TokenKind::Colon`]. Other lone sigils pass through.
/// Running the pass on its own output changes nothing.
#[must_use]
pub fn fuse_identifiers(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        let Some(category) = token.kind.sigil_category() else {
            output.push(token.clone());
            index += 1;
            continue;
        };

        match tokens.get(index + 1) {
            Some(next) if next.kind == TokenKind::Unknown => {
                output.push(Token::new(
                    identifier_kind(category),
                    format!("{}{}", token.raw, next.raw),
                    token.position.clone(),
                ));
                index += 2;
            }
            _ => {
                let kind = match category {
                    IdentifierCategory::Alias => TokenKind::Wildcard,
                    IdentifierCategory::Label => TokenKind::Colon,
                    _ => token.kind,
                };
                output.push(Token::new(kind, token.raw.clone(), token.position.clone()));
                index += 1;
            }
        }
    }

    output
}

fn identifier_kind(category: IdentifierCategory) -> TokenKind {
    match category {
        IdentifierCategory::Variable => TokenKind::VariableIdentifier,
        IdentifierCategory::Function => TokenKind::FunctionIdentifier,
        IdentifierCategory::Structure => TokenKind::StructureIdentifier,
        IdentifierCategory::Label => TokenKind::LabelIdentifier,
        IdentifierCategory::Alias => TokenKind::AliasIdentifier,
        IdentifierCategory::Type => unreachable!("no sigil introduces a type"),
    }
}

//! Integration tests for scanning and condensing
//!
//! Tests the token streams the grammar sees for realistic source.

use prosaic_language::condenser::condense;
use prosaic_language::{FrontendConfig, Parser, TokenKind, scan, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

// =============================================================================
// Scanner
// =============================================================================

#[test]
fn scan_keeps_sigils_separate() {
    let tokens = scan("set $total to 5");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Set,
            TokenKind::VariableSigil,
            TokenKind::Unknown,
            TokenKind::To,
            TokenKind::NumberLiteral,
        ]
    );
    assert_eq!(tokens[2].raw, "total");
}

#[test]
fn scan_tracks_lines_and_columns() {
    let tokens = scan("set $x\n  to 5");
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.position.line, t.position.column))
        .collect();
    assert_eq!(positions, vec![(1, 1), (1, 5), (1, 6), (2, 3), (2, 6)]);
}

#[test]
fn scan_skips_comments() {
    let source = "break // trailing\n/* a\nblock */ continue";
    let tokens = scan(source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Continue);
    assert_eq!(tokens[1].position.line, 3);
}

#[test]
fn scan_literals_keep_payload() {
    let tokens = scan(r#"call @log with "say \"hi\"", and `x`"#);
    let string = tokens
        .iter()
        .find(|t| t.kind == TokenKind::StringLiteral)
        .expect("string literal");
    assert_eq!(string.raw, r#"say \"hi\""#);
    let character = tokens
        .iter()
        .find(|t| t.kind == TokenKind::CharLiteral)
        .expect("char literal");
    assert_eq!(character.raw, "x");
}

#[test]
fn scan_uses_configured_filename() {
    let parser = Parser::with_config(FrontendConfig::for_file("demo.prose"));
    let tokens = parser.scan("break");
    assert_eq!(&*tokens[0].position.filename, "demo.prose");
    assert_eq!(tokens[0].position.to_string(), "demo.prose:1:1");
}

// =============================================================================
// Condenser
// =============================================================================

#[test]
fn condense_full_statement() {
    assert_eq!(
        kinds("set $total to the sum of twenty five and $x."),
        vec![
            TokenKind::Set,
            TokenKind::VariableIdentifier,
            TokenKind::To,
            TokenKind::SumOf,
            TokenKind::NumberLiteral,
            TokenKind::And,
            TokenKind::VariableIdentifier,
            TokenKind::Period,
        ]
    );
}

#[test]
fn condense_matches_parser_tokenize() {
    let source = "if $a is greater than or equal to one hundred then break";
    let parser = Parser::new();
    assert_eq!(condense(&scan(source)), parser.tokenize(source));
}

#[test]
fn identifiers_keep_sigil_in_raw_text() {
    let tokens = tokenize("call $list's @push with 3");
    assert_eq!(tokens[1].kind, TokenKind::VariableIdentifier);
    assert_eq!(tokens[1].raw, "$list");
    assert_eq!(tokens[1].name(), "list");
    assert_eq!(tokens[2].kind, TokenKind::Possessive);
    assert_eq!(tokens[3].kind, TokenKind::FunctionIdentifier);
}

#[test]
fn number_words_fuse() {
    let tokens = tokenize("set $x to two hundred fifty six point five");
    let number = tokens.last().expect("number");
    assert_eq!(number.kind, TokenKind::NumberLiteral);
    assert_eq!(number.raw, "256.5");

    let tokens = tokenize("the seventy second of $items");
    assert_eq!(tokens[1].kind, TokenKind::OrdinalLiteral);
    assert_eq!(tokens[1].raw, "72");
}

#[test]
fn phrases_keep_their_words() {
    let tokens = tokenize("$x is Greater Than or equal to 5");
    assert_eq!(tokens[1].kind, TokenKind::Is);
    assert_eq!(tokens[2].kind, TokenKind::GreaterThanOrEqualTo);
    assert_eq!(tokens[2].raw, "Greater Than or equal to");
}

#[test]
fn block_markers_fuse() {
    let tokens = tokenize("execute the following; break; fin");
    assert_eq!(tokens[0].kind, TokenKind::BlockStart);
    assert!(tokens[0].kind.is_opener());
    let last = tokens.last().expect("fin");
    assert_eq!(last.kind, TokenKind::BlockEnd);
    assert!(last.kind.is_closer());
}

#[test]
fn list_and_operator_phrases() {
    assert_eq!(kinds("$a, and $b")[1], TokenKind::CommaAnd);
    assert_eq!(
        kinds("$i ++"),
        vec![TokenKind::VariableIdentifier, TokenKind::Increment]
    );
    assert_eq!(kinds("program: break")[0], TokenKind::EntryPoint);
    assert_eq!(kinds("$x is not null")[1], TokenKind::IsNotNull);
}

#[test]
fn unknown_words_pass_through() {
    assert_eq!(
        kinds("the banana"),
        vec![TokenKind::The, TokenKind::Unknown]
    );
}

#[test]
fn condensing_twice_changes_nothing() {
    let once = tokenize("set $p's $x to the sum of forty and two.");
    assert_eq!(condense(&once), once);
}

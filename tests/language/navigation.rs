//! Integration tests for nesting-aware token search

use prosaic_language::navigator::{
    NavigationError, first_top_layer_index_of, matching_close, top_layer_indices_of,
    top_layer_indices_of_x_before_y, try_last_top_layer_index_of,
};
use prosaic_language::{TokenKind, tokenize};

#[test]
fn grouped_operator_is_hidden() {
    let tokens = tokenize("(1 + (2 + 3))");
    let inner = &tokens[1..tokens.len() - 1];
    assert_eq!(first_top_layer_index_of(inner, TokenKind::Plus), Ok(1));
}

#[test]
fn missing_kind_is_not_found() {
    let tokens = tokenize("($a, and $b)");
    assert_eq!(
        first_top_layer_index_of(&tokens, TokenKind::CommaAnd),
        Err(NavigationError::NotFound)
    );
}

#[test]
fn stray_closer_stops_search() {
    let tokens = tokenize("$a) and $b");
    assert_eq!(
        first_top_layer_index_of(&tokens, TokenKind::And),
        Err(NavigationError::Unbalanced(1))
    );
}

#[test]
fn blocks_count_as_nesting() {
    let tokens = tokenize("while $x: execute the following; break; fin; continue");
    let semicolons = top_layer_indices_of(&tokens, TokenKind::Semicolon);
    assert_eq!(semicolons.len(), 1);
    assert_eq!(tokens[semicolons[0] + 1].kind, TokenKind::Continue);
}

#[test]
fn last_top_layer_occurrence() {
    let tokens = tokenize("$a modulo ($b modulo $c) modulo $d");
    let last = try_last_top_layer_index_of(&tokens, TokenKind::Modulo).expect("found");
    assert_eq!(tokens[last + 1].raw, "$d");
}

#[test]
fn list_commas_before_final_and() {
    let tokens = tokenize("$a, ($b, and $c), $d, and $e");
    let commas = top_layer_indices_of_x_before_y(&tokens, TokenKind::Comma, TokenKind::CommaAnd);
    assert_eq!(commas.len(), 2);
}

#[test]
fn matching_close_pairs_nested_groups() {
    let tokens = tokenize("((1) + 2) + 3");
    assert_eq!(matching_close(&tokens, 0), Some(6));
    assert_eq!(matching_close(&tokens, 1), Some(3));
    assert_eq!(matching_close(&tokens, 2), None);
}

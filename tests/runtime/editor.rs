//! Integration tests for the editor helpers

use prosaic_runtime::editor::{default_keywords, is_complete};
use prosaic_runtime::highlight::ProsaicHighlighter;

#[test]
fn statements_spanning_lines() {
    let mut input = String::from("define function @run: execute the following;");
    assert!(!is_complete(&input));
    input.push_str("\n    set $msg to \"fin (\";");
    assert!(!is_complete(&input));
    input.push_str("\n    call @print with $msg;");
    assert!(!is_complete(&input));
    input.push_str("\nfin.");
    assert!(is_complete(&input));
}

#[test]
fn comments_hide_openers() {
    assert!(is_complete("break // execute the following;"));
    assert!(!is_complete("break /* execute the following;"));
}

#[test]
fn keyword_list_is_sorted_and_unique() {
    let keywords = default_keywords();
    assert!(keywords.windows(2).all(|pair| pair[0] < pair[1]));
    for expected in ["call", "fin", "integer", "while"] {
        assert!(keywords.iter().any(|k| k == expected), "missing {expected}");
    }
}

#[test]
fn highlighting_preserves_text() {
    let line = r#"if $n is greater than twenty then call @warn with "too many" // check"#;
    let highlighted = ProsaicHighlighter::new().highlight(line, 0);
    assert!(highlighted.contains("\x1b["));

    let mut plain = String::new();
    let mut chars = highlighted.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for code in chars.by_ref() {
                if code == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    assert_eq!(plain, line);
}

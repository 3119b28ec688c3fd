//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::sync::Arc;

use prosaic_foundation::{Error, ErrorContext, ErrorKind, Position};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_no_matching_rule() {
    let position = Position::new(3, 7, Arc::from("main.prose"));
    let err = Error::no_matching_rule("statement", &position, "set 5 to $x");
    assert!(matches!(
        err.kind,
        ErrorKind::NoMatchingRule {
            category: "statement",
            line: 3,
            column: 7,
            ..
        }
    ));
    assert_eq!(err.position(), Some((3, 7)));
}

#[test]
fn error_no_matching_rule_carries_context() {
    let position = Position::new(2, 1, Arc::from("lib.prose"));
    let err = Error::no_matching_rule("expression", &position, "is is");
    let context = err.context.expect("context is attached");
    assert_eq!(context.source.as_deref(), Some("lib.prose"));
    assert_eq!((context.line, context.column), (Some(2), Some(1)));
}

#[test]
fn error_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = Error::io("missing.prose", &io);
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert_eq!(err.position(), None);
    let msg = format!("{err}");
    assert!(msg.contains("missing.prose"));
    assert!(msg.contains("no such file"));
}

#[test]
fn error_internal() {
    let err = Error::internal("broken invariant");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(format!("{err}").contains("broken invariant"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_no_matching_rule() {
    let err = Error::no_matching_rule("statement", &Position::at_start(), "foo bar");
    let msg = format!("{err}");
    assert!(msg.contains("statement"));
    assert!(msg.contains("<input>:1:1"));
    assert!(msg.contains("`foo bar`"));
}

#[test]
fn error_display_empty_input() {
    let err = Error::new(ErrorKind::EmptyInput);
    assert_eq!(format!("{err}"), "nothing to parse");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_with_frames() {
    let context = ErrorContext::new()
        .with_source("main.prose")
        .with_position(4, 2)
        .with_frame("if statement")
        .with_frame("block");
    let text = format!("{context}");
    assert!(text.starts_with("at main.prose:4:2"));
    assert!(text.contains("if statement"));
    assert!(text.contains("block"));
}

#[test]
fn context_replaces_previous() {
    let err = Error::internal("x")
        .with_context(ErrorContext::new().with_source("a"))
        .with_context(ErrorContext::new().with_source("b"));
    assert_eq!(err.context.and_then(|c| c.source).as_deref(), Some("b"));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::new(ErrorKind::EmptyInput));
}

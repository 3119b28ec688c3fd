//! Integration tests for Position
//!
//! Tests construction, display, and filename sharing.

use std::sync::Arc;

use prosaic_foundation::Position;
use prosaic_foundation::position::ANONYMOUS_SOURCE;

#[test]
fn position_at_start() {
    let position = Position::at_start();
    assert_eq!((position.line, position.column), (1, 1));
    assert!(position.is_anonymous());
    assert_eq!(&*position.filename, ANONYMOUS_SOURCE);
}

#[test]
fn position_display() {
    let position = Position::new(12, 5, Arc::from("demo.prose"));
    assert_eq!(format!("{position}"), "demo.prose:12:5");
}

#[test]
fn position_in_file() {
    let position = Position::new(2, 3, Arc::from("a.prose")).in_file(Arc::from("b.prose"));
    assert_eq!(&*position.filename, "b.prose");
    assert_eq!((position.line, position.column), (2, 3));
    assert!(!position.is_anonymous());
}

#[test]
fn position_clones_share_filename() {
    let position = Position::new(1, 1, Arc::from("shared.prose"));
    let copy = position.clone();
    assert!(Arc::ptr_eq(&position.filename, &copy.filename));
    assert_eq!(position, copy);
}

#[test]
fn positions_compare_by_all_fields() {
    let name: Arc<str> = Arc::from("x.prose");
    assert_ne!(
        Position::new(1, 1, Arc::clone(&name)),
        Position::new(1, 2, Arc::clone(&name))
    );
    assert_ne!(Position::new(1, 1, name), Position::at_start());
}

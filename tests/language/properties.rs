//! Property tests for the front end
//!
//! The front end must never panic, whatever the input, and positions must
//! follow source order.

use proptest::prelude::*;

use prosaic_language::pretty::pretty_print_program;
use prosaic_language::{Parser, parse, scan, tokenize};

proptest! {
    #[test]
    fn parsing_never_panics(source in "[ -~\n]{0,120}") {
        let _ = parse(&source);
    }

    #[test]
    fn prose_like_input_never_panics(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "set", "$x", "to", "the", "sum", "of", "and", "(", ")", ",", ";", ".",
                "execute", "following", "fin", "if", "then", "otherwise", "call", "@f",
                "with", "is", "not", "less", "than", "twenty", "first", "'s", "++",
            ]),
            0..24,
        )
    ) {
        let source = words.join(" ");
        let parser = Parser::new();
        let _ = parser.parse_program(&source);
        let _ = parser.parse_expression(&source);
    }

    #[test]
    fn scanned_positions_are_ordered(source in "[a-z$@ ,.;\n]{0,80}") {
        let tokens = scan(&source);
        for pair in tokens.windows(2) {
            let a = (pair[0].position.line, pair[0].position.column);
            let b = (pair[1].position.line, pair[1].position.column);
            prop_assert!(a < b, "{a:?} is not before {b:?}");
        }
    }

    #[test]
    fn condensing_never_adds_tokens(source in "[a-z$@ ,.;'+\n]{0,80}") {
        prop_assert!(tokenize(&source).len() <= scan(&source).len());
    }

    #[test]
    fn simple_assignments_print_back_unchanged(name in "v[a-z0-9]{0,6}", value in any::<u32>()) {
        let source = format!("set ${name} to {value}.\n");
        let program = parse(&source).expect("assignment parses");
        prop_assert_eq!(pretty_print_program(&program), source);
    }
}

//! Integration tests for expression parsing
//!
//! Tests operator priority, associativity, and the shapes of the expression
//! nodes the grammar builds.

use std::time::{Duration, Instant};

use prosaic_language::{
    ComparisonOperator, ErrorKind, Expression, IdentifierCategory, IndexSelector, LogicalOperator,
    MathOperator, Parser,
};

fn parse(source: &str) -> Expression {
    Parser::new()
        .parse_expression(source)
        .unwrap_or_else(|e| panic!("`{source}` failed to parse: {e}"))
}

fn rejects(source: &str) -> bool {
    Parser::new().parse_expression(source).is_err()
}

// =============================================================================
// Literals and identifiers
// =============================================================================

#[test]
fn literal_values() {
    let Expression::NumberLiteral { value, .. } = parse("forty two") else {
        panic!("expected number");
    };
    assert_eq!(value, "42");
    assert!(matches!(
        parse("True"),
        Expression::BooleanLiteral { value: true, .. }
    ));
    assert!(matches!(parse("null"), Expression::NullLiteral { .. }));
    let Expression::StringLiteral { value, .. } = parse(r#""hi""#) else {
        panic!("expected string");
    };
    assert_eq!(value, "hi");
}

#[test]
fn identifier_categories() {
    assert_eq!(
        parse("$count").as_identifier(),
        Some(("count", IdentifierCategory::Variable))
    );
    assert_eq!(
        parse("Int").as_identifier(),
        Some(("integer", IdentifierCategory::Type))
    );
}

#[test]
fn parentheses_group_without_nodes() {
    assert_eq!(
        parse("(($x))").as_identifier(),
        Some(("x", IdentifierCategory::Variable))
    );
    assert!(rejects("($x) ($y)"));
}

// =============================================================================
// Priority
// =============================================================================

#[test]
fn comparison_beats_call() {
    let Expression::Comparison { operator, left, .. } = parse("call @f with $a is less than 5")
    else {
        panic!("expected comparison");
    };
    assert_eq!(operator, ComparisonOperator::LessThan);
    assert!(matches!(*left, Expression::FunctionCall { .. }));
}

#[test]
fn logical_wraps_comparisons() {
    let source = "both $a is equal to 1 and $b is less than the sum of $c and $d";
    let Expression::Logical {
        operator,
        left,
        right,
        ..
    } = parse(source)
    else {
        panic!("expected logical");
    };
    assert_eq!(operator, LogicalOperator::And);
    assert!(matches!(*left, Expression::Comparison { .. }));
    assert!(matches!(*right, Expression::Comparison { .. }));
}

#[test]
fn negated_comparator_is_inverted() {
    assert!(matches!(
        parse("$a is not less than 5"),
        Expression::Comparison {
            operator: ComparisonOperator::GreaterThanOrEqual,
            ..
        }
    ));
}

#[test]
fn header_math_nests_on_the_left() {
    let source = "the sum of the product of $a and $b and $c";
    let Expression::MathOperation { operator, left, .. } = parse(source) else {
        panic!("expected math");
    };
    assert_eq!(operator, MathOperator::Add);
    assert!(matches!(
        *left,
        Expression::MathOperation {
            operator: MathOperator::Multiply,
            ..
        }
    ));
}

#[test]
fn power_is_right_associative() {
    let Expression::MathOperation { right, .. } =
        parse("2 raised to the power of 3 raised to the power of 2")
    else {
        panic!("expected math");
    };
    assert!(matches!(
        *right,
        Expression::MathOperation {
            operator: MathOperator::Power,
            ..
        }
    ));
}

#[test]
fn modulo_is_left_associative() {
    let Expression::MathOperation { left, right, .. } = parse("$a modulo $b modulo $c") else {
        panic!("expected math");
    };
    assert!(matches!(*left, Expression::MathOperation { .. }));
    assert_eq!(
        right.as_identifier(),
        Some(("c", IdentifierCategory::Variable))
    );
}

// =============================================================================
// Calls, lists, and access
// =============================================================================

#[test]
fn call_with_list_arguments() {
    let Expression::FunctionCall {
        target, arguments, ..
    } = parse("call @f with 1, 2, and 3")
    else {
        panic!("expected call");
    };
    assert_eq!(
        target.as_identifier(),
        Some(("f", IdentifierCategory::Function))
    );
    assert!(matches!(
        arguments.as_deref(),
        Some(Expression::List { items, .. }) if items.len() == 3
    ));
}

#[test]
fn lists_need_a_final_and() {
    assert!(matches!(parse("$a, and $b"), Expression::List { .. }));
    assert!(rejects("$a, $b"));
}

#[test]
fn method_call_through_member_access() {
    let Expression::FunctionCall { target, .. } = parse("call $list's @push with 3") else {
        panic!("expected call");
    };
    let Expression::MemberAccess { owner, member, .. } = *target else {
        panic!("expected member access");
    };
    assert_eq!(
        owner.as_identifier(),
        Some(("list", IdentifierCategory::Variable))
    );
    assert_eq!(
        member.as_identifier(),
        Some(("push", IdentifierCategory::Function))
    );
}

#[test]
fn ordinal_array_access() {
    let Expression::ArrayAccess { index, target, .. } = parse("the third of $items") else {
        panic!("expected array access");
    };
    let Expression::Index {
        selector: IndexSelector::Single { index, from_last },
        ..
    } = *index
    else {
        panic!("expected single index");
    };
    assert!(!from_last);
    let Expression::NumberLiteral { value, .. } = *index else {
        panic!("expected number");
    };
    assert_eq!(value, "3");
    assert_eq!(
        target.as_identifier(),
        Some(("items", IdentifierCategory::Variable))
    );
}

#[test]
fn index_forms() {
    assert!(matches!(
        parse("second from last"),
        Expression::Index {
            selector: IndexSelector::Single {
                from_last: true,
                ..
            },
            ..
        }
    ));
    assert!(matches!(
        parse("items beginning at 2 ending at 5"),
        Expression::Index {
            selector: IndexSelector::Range {
                start: Some(_),
                end: Some(_)
            },
            ..
        }
    ));
}

#[test]
fn checks_and_unary_operators() {
    assert!(matches!(
        parse("$x's $next is not null"),
        Expression::NullCheck { negated: true, .. }
    ));
    assert!(matches!(parse("$x is of type &point"), Expression::TypeCheck { .. }));
    assert!(matches!(parse("not $done"), Expression::Not { .. }));
    assert!(matches!(parse("bitwise not $mask"), Expression::BitwiseNot { .. }));
    assert!(matches!(parse("$x ++"), Expression::Increment { .. }));
    assert!(matches!(
        parse("decrement the first of $xs"),
        Expression::Decrement { .. }
    ));
}

#[test]
fn parameter_lists() {
    let source = "; $x as integer, $y as float, and $label as string with value \"origin\"";
    let Expression::StructParameterList { parameters, .. } = parse(source) else {
        panic!("expected parameter list");
    };
    let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y", "label"]);
    assert!(parameters[2].value.is_some());
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn malformed_expressions_fail() {
    assert!(rejects("call $notAFunction"));
    assert!(rejects("call @f with"));
    assert!(rejects("the sum of $a and"));
    assert!(rejects("increment 5"));
    assert!(rejects("$x is of type $y"));
}

#[test]
fn failure_names_the_expression_category() {
    let err = Parser::new().parse_expression("is is").expect_err("fails");
    assert!(matches!(
        err.kind,
        ErrorKind::NoMatchingRule {
            category: "expression",
            ..
        }
    ));
    let expected = "could not parse expression at <input>:1:1";
    assert!(err.to_string().starts_with(expected));
}

#[test]
fn trailing_comparators_fail_in_bounded_time() {
    let source = "$a is equal to ".repeat(40);
    let started = Instant::now();
    assert!(rejects(&source));
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn long_comparison_chains_parse() {
    let source = format!("{}$b", "$a is equal to ".repeat(40));
    let Expression::Comparison { left, right, .. } = parse(&source) else {
        panic!("expected comparison");
    };
    assert_eq!(
        left.as_identifier(),
        Some(("a", IdentifierCategory::Variable))
    );
    assert!(matches!(*right, Expression::Comparison { .. }));
}

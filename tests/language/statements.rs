//! Integration tests for statement parsing

use std::time::{Duration, Instant};

use prosaic_language::{
    ErrorKind, Expression, IdentifierCategory, ImportAlias, Parser, Statement,
};

fn parse(source: &str) -> Statement {
    Parser::new()
        .parse_statement(source)
        .unwrap_or_else(|e| panic!("`{source}` failed to parse: {e}"))
}

fn rejects(source: &str) -> bool {
    Parser::new().parse_statement(source).is_err()
}

// =============================================================================
// Simple statements
// =============================================================================

#[test]
fn jumps_and_labels() {
    let Statement::Label { name, .. } = parse(":top:") else {
        panic!("expected label");
    };
    assert_eq!(name, "top");
    let Statement::Goto { label, .. } = parse("go to :top") else {
        panic!("expected goto");
    };
    assert_eq!(label, "top");
    assert!(matches!(parse("break."), Statement::Break { .. }));
    assert!(matches!(parse("continue;"), Statement::Continue { .. }));
}

#[test]
fn returns() {
    assert!(matches!(parse("return"), Statement::Return { value: None, .. }));
    assert!(matches!(
        parse("return the sum of $a and $b"),
        Statement::Return {
            value: Some(Expression::MathOperation { .. }),
            ..
        }
    ));
}

#[test]
fn imports_with_aliases() {
    assert!(matches!(
        parse(r#"import "math""#),
        Statement::Import { ref path, alias: None, .. } if path == "math"
    ));
    assert!(matches!(
        parse(r#"import "math" as ~m"#),
        Statement::Import { alias: Some(ImportAlias::Named(ref name)), .. } if name == "m"
    ));
    assert!(matches!(
        parse(r#"import "math" as ~"#),
        Statement::Import {
            alias: Some(ImportAlias::Wildcard),
            ..
        }
    ));
    assert!(rejects(r#"import "math" as $m"#));
}

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn function_definition_with_parameters() {
    let source = "define function @add; $a as integer, and $b as integer: \
                  return the sum of $a and $b";
    let Statement::FunctionDefinition {
        name,
        parameters,
        body,
        ..
    } = parse(source)
    else {
        panic!("expected function definition");
    };
    assert_eq!(name, "add");
    let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(
        parameters[0].data_type.as_identifier(),
        Some(("integer", IdentifierCategory::Type))
    );
    assert!(matches!(*body, Statement::Return { .. }));
}

#[test]
fn structure_definition() {
    let Statement::StructureDefinition { name, fields, .. } =
        parse("define structure &point; $x as integer, and $y as integer")
    else {
        panic!("expected structure definition");
    };
    assert_eq!(name, "point");
    assert_eq!(fields.len(), 2);
}

#[test]
fn variable_definitions() {
    let Statement::VariableDefinition(definition) = parse("define $origin as &point") else {
        panic!("expected variable definition");
    };
    assert_eq!(
        definition.data_type.as_identifier(),
        Some(("point", IdentifierCategory::Structure))
    );
    assert!(definition.value.is_none());

    let Statement::VariableDefinition(definition) =
        parse("$count as int with value the sum of 1 and 2")
    else {
        panic!("expected variable definition");
    };
    assert_eq!(definition.name, "count");
    assert!(matches!(definition.value, Some(Expression::MathOperation { .. })));
}

#[test]
fn entry_point_and_architecture() {
    assert!(matches!(parse("program: call @main"), Statement::EntryPoint { .. }));
    let source = r#"for architecture "x86": define $width as integer with value 64"#;
    let Statement::Architecture { name, body, .. } = parse(source) else {
        panic!("expected architecture");
    };
    assert_eq!(name, "x86");
    assert!(matches!(*body, Statement::VariableDefinition(_)));
}

// =============================================================================
// Control flow
// =============================================================================

#[test]
fn nested_blocks() {
    let source = "execute the following; execute the following; break; fin; continue; fin";
    let Statement::Block { statements, .. } = parse(source) else {
        panic!("expected block");
    };
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Statement::Block { .. }));
    assert!(matches!(statements[1], Statement::Continue { .. }));
}

#[test]
fn if_with_otherwise() {
    let Statement::If {
        then_branch,
        else_branch,
        ..
    } = parse("if $a is greater than 3 then break otherwise continue")
    else {
        panic!("expected if");
    };
    assert!(matches!(*then_branch, Statement::Break { .. }));
    assert!(matches!(else_branch.as_deref(), Some(Statement::Continue { .. })));
}

#[test]
fn dangling_otherwise_binds_to_innermost_if() {
    let Statement::If {
        then_branch,
        else_branch,
        ..
    } = parse("if $a then if $b then break otherwise continue")
    else {
        panic!("expected if");
    };
    assert!(else_branch.is_none());
    assert!(matches!(
        *then_branch,
        Statement::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn loops() {
    let source = "while $i is less than 10: execute the following; $i ++; fin";
    let Statement::While { body, .. } = parse(source) else {
        panic!("expected while");
    };
    assert!(matches!(*body, Statement::Block { .. }));

    let Statement::ForEach {
        collection,
        index,
        value,
        ..
    } = parse("for each $item in $items: call @show with $item")
    else {
        panic!("expected for each");
    };
    assert_eq!(
        collection.as_identifier(),
        Some(("items", IdentifierCategory::Variable))
    );
    assert_eq!(index, None);
    assert_eq!(value.as_deref(), Some("item"));

    let source = "iterate over $items with index as $i and with value as $v: break";
    let Statement::ForEach { index, value, .. } = parse(source) else {
        panic!("expected iterate");
    };
    assert_eq!(index.as_deref(), Some("i"));
    assert_eq!(value.as_deref(), Some("v"));
}

#[test]
fn iterate_clauses_are_ordered() {
    assert!(rejects(
        "iterate over $items with value as $v and with index as $i: break",
    ));
}

// =============================================================================
// Assignments and expression statements
// =============================================================================

#[test]
fn both_assignment_forms() {
    assert!(matches!(parse("set $x to 5"), Statement::Assignment { .. }));
    assert!(matches!(parse("$x is equal to 5"), Statement::Assignment { .. }));
    assert!(matches!(
        parse("set $p's $x to the third of $xs"),
        Statement::Assignment {
            target: Expression::MemberAccess { .. },
            value: Expression::ArrayAccess { .. },
            ..
        }
    ));
    assert!(rejects("set 5 to $x"));
}

#[test]
fn only_effectful_expressions_stand_alone() {
    assert!(matches!(
        parse("call @doThing with $x"),
        Statement::Expression(Expression::FunctionCall { .. })
    ));
    assert!(matches!(
        parse("$i ++"),
        Statement::Expression(Expression::Increment { .. })
    ));
    assert!(rejects("$a is less than 5"));
    assert!(rejects("the sum of $a and $b"));
}

#[test]
fn empty_statement_is_an_error() {
    let err = Parser::new()
        .parse_statement("  // only a comment")
        .expect_err("fails");
    assert!(matches!(err.kind, ErrorKind::EmptyInput));
    assert_eq!(err.to_string(), "nothing to parse");
}

#[test]
fn nested_ifs_resolve_in_bounded_time() {
    let balanced = format!(
        "{}break{}",
        "if $x then ".repeat(20),
        " otherwise break".repeat(20)
    );
    assert!(matches!(
        parse(&balanced),
        Statement::If {
            else_branch: Some(_),
            ..
        }
    ));

    let unmatched = format!(
        "{}break{}",
        "if $x then ".repeat(20),
        " otherwise break".repeat(21)
    );
    let started = Instant::now();
    assert!(rejects(&unmatched));
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

//! Integration tests for whole programs
//!
//! Tests parsing multi-statement sources and the tools that consume the
//! resulting tree: the declaration sorter, the pretty printer, and visitors.

use prosaic_language::pretty::pretty_print_program;
use prosaic_language::visitor::{IdentifierCollector, NodeCounter, walk_program};
use prosaic_language::{
    ErrorKind, FrontendConfig, IdentifierCategory, Parser, Statement, parse, sort_declarations,
};

const GEOMETRY: &str = r#"
import "io" as ~io.

// Shapes
define structure &point; $x as integer, and $y as integer.

define function @width; $a as &point, and $b as &point:
    return the difference of $b's $x and $a's $x.

for architecture "arm": $word as integer with value thirty two.

program: execute the following;
    $origin as &point;
    set $count to 0;
    for each $item in $items: increment $count;
    if $count is greater than ten then call @report with $count otherwise continue;
fin.
"#;

fn geometry() -> prosaic_language::Program {
    parse(GEOMETRY).unwrap_or_else(|e| panic!("geometry failed to parse: {e}"))
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parses_every_top_level_statement() {
    let program = geometry();
    let kinds: Vec<_> = program
        .statements
        .iter()
        .map(Statement::kind_name)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "import",
            "structure definition",
            "function definition",
            "architecture",
            "entry point",
        ]
    );
    assert_eq!(program.imports(), vec!["io"]);
}

#[test]
fn statement_positions_point_at_first_token() {
    let program = geometry();
    let lines: Vec<_> = program
        .statements
        .iter()
        .map(|s| s.position().line)
        .collect();
    assert_eq!(lines, vec![2, 5, 7, 10, 12]);
}

#[test]
fn entry_point_block_holds_every_statement() {
    let program = geometry();
    let Statement::EntryPoint { body, .. } = &program.statements[4] else {
        panic!("expected entry point");
    };
    let Statement::Block { statements, .. } = body.as_ref() else {
        panic!("expected block");
    };
    let kinds: Vec<_> = statements.iter().map(Statement::kind_name).collect();
    assert_eq!(
        kinds,
        vec!["variable definition", "assignment", "for each", "if"]
    );
}

#[test]
fn empty_program_is_valid() {
    let program = parse("/* nothing */ // at all\n").expect("parses");
    assert!(program.statements.is_empty());
}

#[test]
fn first_failing_statement_is_reported() {
    let parser = Parser::with_config(FrontendConfig::for_file("broken.prose"));
    let err = parser
        .parse_program("break.\nset 5 to $x.\nfoo bar.")
        .expect_err("fails");
    assert!(matches!(
        err.kind,
        ErrorKind::NoMatchingRule {
            category: "statement",
            line: 2,
            column: 1,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "could not parse statement at broken.prose:2:1: no grammar rule matches `set 5 to $x`"
    );
}

#[test]
fn parse_tokens_matches_parse_program() {
    let parser = Parser::new();
    let tokens = parser.tokenize(GEOMETRY);
    assert_eq!(
        parser.parse_tokens(&tokens).expect("parses"),
        parser.parse_program(GEOMETRY).expect("parses")
    );
}

#[test]
fn rule_tracing_does_not_change_results() {
    let quiet = Parser::new();
    let traced = Parser::with_config(FrontendConfig::debug());
    assert!(traced.config().trace_rules);
    assert_eq!(
        traced.parse_program(GEOMETRY).expect("parses"),
        quiet.parse_program(GEOMETRY).expect("parses")
    );
}

// =============================================================================
// Declaration sorting
// =============================================================================

#[test]
fn declarations_sort_by_architecture() {
    let program = geometry();
    let sorted = sort_declarations(&program.statements);

    assert_eq!(sorted.common.structures.len(), 1);
    assert_eq!(sorted.common.functions.len(), 1);
    assert!(sorted.common.variables.is_empty());
    assert_eq!(sorted.common.entry_points.len(), 1);

    let arm = sorted.architecture("arm").expect("arm bucket");
    assert_eq!(arm.variables.len(), 1);
    assert_eq!(arm.len(), 1);
    assert!(sorted.skipped.is_empty());
}

#[test]
fn non_declarations_are_skipped() {
    let program = parse("set $x to 1.\nbreak.").expect("parses");
    let sorted = sort_declarations(&program.statements);
    let lines: Vec<_> = sorted.skipped.iter().map(|p| p.line).collect();
    assert_eq!(lines, vec![1, 2]);
    assert!(sorted.common.is_empty());
}

// =============================================================================
// Pretty printing
// =============================================================================

#[test]
fn canonical_form_normalizes_spelling() {
    let program = parse("Set $x to The Sum of One and Two. $y is equal to 5.").expect("parses");
    assert_eq!(
        pretty_print_program(&program),
        "set $x to the sum of 1 and 2.\nset $y to 5.\n"
    );
}

#[test]
fn canonical_form_reaches_a_fixpoint() {
    let once = pretty_print_program(&geometry());
    let twice = pretty_print_program(&parse(&once).expect("canonical form parses"));
    assert_eq!(once, twice);
    assert!(once.contains("with value 32"));
}

// =============================================================================
// Visitors
// =============================================================================

#[test]
fn identifiers_are_collected_across_the_program() {
    let mut collector = IdentifierCollector::default();
    walk_program(&mut collector, &geometry());
    let variables = collector.names_of(IdentifierCategory::Variable);
    assert!(variables.contains(&"count"));
    assert!(variables.contains(&"items"));
    let functions = collector.names_of(IdentifierCategory::Function);
    assert!(functions.contains(&"report"));
}

#[test]
fn node_counter_sees_nested_statements() {
    let program = parse("while $x: execute the following; break; continue; fin.").expect("parses");
    let mut counter = NodeCounter::default();
    walk_program(&mut counter, &program);
    // while, block, break, continue
    assert_eq!(counter.statements, 4);
    assert_eq!(counter.expressions, 1);
}

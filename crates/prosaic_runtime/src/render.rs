//! Rendering of front-end results for the CLI and the REPL.
//!
//! Each [`OutputFormat`] turns source text into a printable string: the
//! canonical prose, the condensed token stream, the debug tree, JSON, or a
//! summary of the sorted declarations.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use prosaic_foundation::{Error, Result};
use prosaic_language::pretty::pretty_print_program;
use prosaic_language::{DeclarationBuckets, Parser, Program, Statement, sort_declarations};
use serde::Serialize;

/// What to print for parsed source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical prose, one statement per line.
    #[default]
    Canonical,
    /// The condensed token stream.
    Tokens,
    /// The `Debug` rendering of the syntax tree.
    Tree,
    /// The syntax tree as pretty JSON.
    Json,
    /// Declarations grouped by architecture and kind.
    Sort,
}

impl OutputFormat {
    /// Every format, in help order.
    pub const ALL: [Self; 5] = [
        Self::Canonical,
        Self::Tokens,
        Self::Tree,
        Self::Json,
        Self::Sort,
    ];

    /// Returns the format's name as used by `--<name>` and `.<name>`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Tokens => "tokens",
            Self::Tree => "tree",
            Self::Json => "json",
            Self::Sort => "sort",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| Error::internal(format!("unknown output format: {s}")))
    }
}

/// Renders `source` in `format`.
///
/// # Errors
///
/// Returns the parse error for every format except [`OutputFormat::Tokens`],
/// which never fails.
pub fn render(parser: &Parser, source: &str, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Tokens {
        return Ok(render_tokens(parser, source));
    }

    let program = parser.parse_program(source)?;
    match format {
        OutputFormat::Canonical => Ok(pretty_print_program(&program)),
        OutputFormat::Tree => Ok(format!("{program:#?}\n")),
        OutputFormat::Json => to_json(&program),
        OutputFormat::Sort => Ok(render_sorted(&program)),
        OutputFormat::Tokens => Ok(render_tokens(parser, source)),
    }
}

/// One `line:column kind raw` row per condensed token.
#[must_use]
pub fn render_tokens(parser: &Parser, source: &str) -> String {
    let mut output = String::new();
    for token in parser.tokenize(source) {
        let _ = writeln!(
            output,
            "{:>4}:{:<4} {:<24} {}",
            token.position.line,
            token.position.column,
            token.kind.name(),
            token.raw
        );
    }
    output
}

/// Serializes any front-end value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| Error::internal(format!("failed to serialize: {e}")))
}

/// Summarizes the declarations of `program` per architecture and kind.
#[must_use]
pub fn render_sorted(program: &Program) -> String {
    let sorted = sort_declarations(&program.statements);
    let mut output = String::new();

    write_buckets(&mut output, "common", &sorted.common);
    for (name, buckets) in &sorted.architectures {
        write_buckets(&mut output, &format!("architecture \"{name}\""), buckets);
    }
    for position in &sorted.skipped {
        let _ = writeln!(output, "skipped statement at {position}");
    }
    output
}

fn write_buckets(output: &mut String, heading: &str, buckets: &DeclarationBuckets<'_>) {
    let _ = writeln!(output, "{heading}:");
    for (kind, statements) in [
        ("structures", &buckets.structures),
        ("functions", &buckets.functions),
        ("variables", &buckets.variables),
        ("entry points", &buckets.entry_points),
    ] {
        let names: Vec<&str> = statements.iter().map(|s| declared_name(s)).collect();
        let _ = writeln!(output, "  {kind:<12} {}", names.join(", "));
    }
}

fn declared_name(statement: &Statement) -> &str {
    match statement {
        Statement::StructureDefinition { name, .. }
        | Statement::FunctionDefinition { name, .. } => name,
        Statement::VariableDefinition(definition) => &definition.name,
        _ => "program",
    }
}

/// Reads a source file.
///
/// # Errors
///
/// Returns [`prosaic_foundation::ErrorKind::Io`] if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), &e))
}

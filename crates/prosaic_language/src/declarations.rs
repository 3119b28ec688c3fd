//! Sorting of top-level declarations.
//!
//! A code generator wants declarations grouped by kind, and grouped again
//! by the architecture they were tagged for. [`sort_declarations`] builds
//! that grouping without copying any node.

use prosaic_foundation::Position;
use tracing::debug;

use crate::ast::Statement;

/// Declarations of one scope, by kind, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclarationBuckets<'a> {
    /// Structure definitions.
    pub structures: Vec<&'a Statement>,
    /// Function definitions.
    pub functions: Vec<&'a Statement>,
    /// Variable definitions.
    pub variables: Vec<&'a Statement>,
    /// Program entry points.
    pub entry_points: Vec<&'a Statement>,
}

impl<'a> DeclarationBuckets<'a> {
    /// Places a declaration in its bucket. Returns false for anything that
    /// is not a declaration.
    fn insert(&mut self, statement: &'a Statement) -> bool {
        let bucket = match statement {
            Statement::StructureDefinition { .. } => &mut self.structures,
            Statement::FunctionDefinition { .. } => &mut self.functions,
            Statement::VariableDefinition(_) => &mut self.variables,
            Statement::EntryPoint { .. } => &mut self.entry_points,
            _ => return false,
        };
        bucket.push(statement);
        true
    }

    /// Total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
            + self.functions.len()
            + self.variables.len()
            + self.entry_points.len()
    }

    /// Returns true if no declaration was sorted here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The result of [`sort_declarations`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortedDeclarations<'a> {
    /// Declarations without an architecture tag.
    pub common: DeclarationBuckets<'a>,
    /// Tagged declarations per architecture, in order of first appearance.
    pub architectures: Vec<(String, DeclarationBuckets<'a>)>,
    /// Positions of statements that are not declarations.
    pub skipped: Vec<Position>,
}

impl<'a> SortedDeclarations<'a> {
    /// Returns the buckets for one architecture.
    #[must_use]
    pub fn architecture(&self, name: &str) -> Option<&DeclarationBuckets<'a>> {
        self.architectures
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, buckets)| buckets)
    }

    fn architecture_mut(&mut self, name: &str) -> &mut DeclarationBuckets<'a> {
        let existing = self
            .architectures
            .iter()
            .position(|(candidate, _)| candidate == name);
        let index = match existing {
            Some(index) => index,
            None => {
                let buckets = DeclarationBuckets::default();
                self.architectures.push((name.to_string(), buckets));
                self.architectures.len() - 1
            }
        };
        &mut self.architectures[index].1
    }

    fn skip(&mut self, statement: &Statement) {
        debug!(
            kind = statement.kind_name(),
            position = %statement.position(),
            "skipping non-declaration"
        );
        self.skipped.push(statement.position().clone());
    }
}

/// Partitions top-level statements into declaration buckets.
///
/// An architecture tag applies to a single declaration or to every
/// declaration of a block it wraps. Imports are left to the loader and
/// ignored here; every other non-declaration is reported in
/// [`SortedDeclarations::skipped`].
#[must_use]
pub fn sort_declarations(statements: &[Statement]) -> SortedDeclarations<'_> {
    let mut sorted = SortedDeclarations::default();

    for statement in statements {
        match statement {
            Statement::Import { .. } => {}
            Statement::Architecture { name, body, .. } => {
                let tagged: &[Statement] = match body.as_ref() {
                    Statement::Block { statements, .. } => statements,
                    single => std::slice::from_ref(single),
                };
                for inner in tagged {
                    if !sorted.architecture_mut(name).insert(inner) {
                        sorted.skip(inner);
                    }
                }
            }
            _ => {
                if !sorted.common.insert(statement) {
                    sorted.skip(statement);
                }
            }
        }
    }

    debug!(
        common = sorted.common.len(),
        architectures = sorted.architectures.len(),
        skipped = sorted.skipped.len(),
        "sorted declarations"
    );
    sorted
}

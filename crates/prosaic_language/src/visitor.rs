//! Read-only traversal of syntax trees.
//!
//! Implement the `visit_*` methods of [`AstVisitor`] for the nodes of
//! interest and drive the traversal with [`walk_statement`],
//! [`walk_expression`] or [`walk_program`].
//!
//! # Example
//!
//! ```
//! use prosaic_language::parse;
//! use prosaic_language::visitor::{AstVisitor, walk_program};
//! use prosaic_language::{IdentifierCategory, Position};
//!
//! struct CallCounter(usize);
//!
//! impl AstVisitor for CallCounter {
//!     fn visit_identifier(&mut self, _name: &str, category: IdentifierCategory, _position: &Position) {
//!         if category == IdentifierCategory::Function {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let program = parse("call @setup. call @run with 3.").unwrap();
//! let mut counter = CallCounter(0);
//! walk_program(&mut counter, &program);
//! assert_eq!(counter.0, 2);
//! ```

use prosaic_foundation::Position;

use crate::ast::{
    ComparisonOperator, Expression, ImportAlias, IndexSelector, LogicalOperator, MathOperator,
    Program, Statement, VariableDefinition,
};
use crate::token::IdentifierCategory;

/// Trait for read-only AST visitors.
///
/// The `visit_*` method for a node is called before its children are
/// walked. The default implementations do nothing.
#[allow(unused_variables)]
pub trait AstVisitor {
    /// Called when entering any statement (before its `visit_*` method).
    fn enter_statement(&mut self, statement: &Statement) {}

    /// Called when leaving any statement (after its children).
    fn leave_statement(&mut self, statement: &Statement) {}

    /// Called when entering any expression (before its `visit_*` method).
    fn enter_expression(&mut self, expression: &Expression) {}

    /// Called when leaving any expression (after its children).
    fn leave_expression(&mut self, expression: &Expression) {}

    /// Visit a block.
    fn visit_block(&mut self, statements: &[Statement], position: &Position) {}

    /// Visit a label.
    fn visit_label(&mut self, name: &str, position: &Position) {}

    /// Visit a go-to.
    fn visit_goto(&mut self, label: &str, position: &Position) {}

    /// Visit a break.
    fn visit_break(&mut self, position: &Position) {}

    /// Visit a continue.
    fn visit_continue(&mut self, position: &Position) {}

    /// Visit a return.
    fn visit_return(&mut self, value: Option<&Expression>, position: &Position) {}

    /// Visit an import.
    fn visit_import(&mut self, path: &str, alias: Option<&ImportAlias>, position: &Position) {}

    /// Visit the program entry point.
    fn visit_entry_point(&mut self, body: &Statement, position: &Position) {}

    /// Visit an architecture tag.
    fn visit_architecture(&mut self, name: &str, body: &Statement, position: &Position) {}

    /// Visit a function definition.
    fn visit_function_definition(
        &mut self,
        name: &str,
        parameters: &[VariableDefinition],
        body: &Statement,
        position: &Position,
    ) {
    }

    /// Visit a structure definition.
    fn visit_structure_definition(
        &mut self,
        name: &str,
        fields: &[VariableDefinition],
        position: &Position,
    ) {
    }

    /// Visit a variable definition, whether a statement or a parameter.
    fn visit_variable_definition(&mut self, definition: &VariableDefinition) {}

    /// Visit an if statement.
    fn visit_if(
        &mut self,
        condition: &Expression,
        then_branch: &Statement,
        else_branch: Option<&Statement>,
        position: &Position,
    ) {
    }

    /// Visit a while loop.
    fn visit_while(&mut self, condition: &Expression, body: &Statement, position: &Position) {}

    /// Visit a for-each loop.
    fn visit_for_each(
        &mut self,
        collection: &Expression,
        index: Option<&str>,
        value: Option<&str>,
        body: &Statement,
        position: &Position,
    ) {
    }

    /// Visit an assignment.
    fn visit_assignment(&mut self, target: &Expression, value: &Expression, position: &Position) {}

    /// Visit an expression used as a statement.
    fn visit_expression_statement(&mut self, expression: &Expression) {}

    /// Visit a string literal.
    fn visit_string(&mut self, value: &str, position: &Position) {}

    /// Visit a character literal.
    fn visit_char(&mut self, value: &str, position: &Position) {}

    /// Visit a number literal.
    fn visit_number(&mut self, value: &str, position: &Position) {}

    /// Visit a boolean literal.
    fn visit_boolean(&mut self, value: bool, position: &Position) {}

    /// Visit a null literal.
    fn visit_null(&mut self, position: &Position) {}

    /// Visit an identifier.
    fn visit_identifier(&mut self, name: &str, category: IdentifierCategory, position: &Position) {}

    /// Visit a parameter list.
    fn visit_parameter_list(&mut self, parameters: &[VariableDefinition], position: &Position) {}

    /// Visit a logical operation.
    fn visit_logical(
        &mut self,
        operator: LogicalOperator,
        left: &Expression,
        right: &Expression,
        position: &Position,
    ) {
    }

    /// Visit a negation.
    fn visit_not(&mut self, operand: &Expression, position: &Position) {}

    /// Visit a comparison.
    fn visit_comparison(
        &mut self,
        operator: ComparisonOperator,
        left: &Expression,
        right: &Expression,
        position: &Position,
    ) {
    }

    /// Visit a null check.
    fn visit_null_check(&mut self, operand: &Expression, negated: bool, position: &Position) {}

    /// Visit a type check.
    fn visit_type_check(
        &mut self,
        operand: &Expression,
        data_type: &Expression,
        position: &Position,
    ) {
    }

    /// Visit a function call.
    fn visit_function_call(
        &mut self,
        target: &Expression,
        arguments: Option<&Expression>,
        position: &Position,
    ) {
    }

    /// Visit a list.
    fn visit_list(&mut self, items: &[Expression], position: &Position) {}

    /// Visit a math operation.
    fn visit_math(
        &mut self,
        operator: MathOperator,
        left: &Expression,
        right: &Expression,
        position: &Position,
    ) {
    }

    /// Visit a bitwise not.
    fn visit_bitwise_not(&mut self, operand: &Expression, position: &Position) {}

    /// Visit a member access.
    fn visit_member_access(
        &mut self,
        owner: &Expression,
        member: &Expression,
        position: &Position,
    ) {
    }

    /// Visit an array access.
    fn visit_array_access(&mut self, index: &Expression, target: &Expression, position: &Position) {
    }

    /// Visit an index selector.
    fn visit_index(&mut self, selector: &IndexSelector, position: &Position) {}

    /// Visit an increment.
    fn visit_increment(&mut self, operand: &Expression, position: &Position) {}

    /// Visit a decrement.
    fn visit_decrement(&mut self, operand: &Expression, position: &Position) {}
}

/// Walk a statement depth-first, calling the matching visitor methods.
pub fn walk_statement<V: AstVisitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    visitor.enter_statement(statement);

    match statement {
        Statement::Block {
            statements,
            position,
        } => {
            visitor.visit_block(statements, position);
            for inner in statements {
                walk_statement(visitor, inner);
            }
        }
        Statement::Label { name, position } => visitor.visit_label(name, position),
        Statement::Goto { label, position } => visitor.visit_goto(label, position),
        Statement::Break { position } => visitor.visit_break(position),
        Statement::Continue { position } => visitor.visit_continue(position),
        Statement::Return { value, position } => {
            visitor.visit_return(value.as_ref(), position);
            if let Some(value) = value {
                walk_expression(visitor, value);
            }
        }
        Statement::Import {
            path,
            alias,
            position,
        } => visitor.visit_import(path, alias.as_ref(), position),
        Statement::EntryPoint { body, position } => {
            visitor.visit_entry_point(body, position);
            walk_statement(visitor, body);
        }
        Statement::Architecture {
            name,
            body,
            position,
        } => {
            visitor.visit_architecture(name, body, position);
            walk_statement(visitor, body);
        }
        Statement::FunctionDefinition {
            name,
            parameters,
            body,
            position,
        } => {
            visitor.visit_function_definition(name, parameters, body, position);
            for parameter in parameters {
                walk_definition(visitor, parameter);
            }
            walk_statement(visitor, body);
        }
        Statement::StructureDefinition {
            name,
            fields,
            position,
        } => {
            visitor.visit_structure_definition(name, fields, position);
            for field in fields {
                walk_definition(visitor, field);
            }
        }
        Statement::VariableDefinition(definition) => walk_definition(visitor, definition),
        Statement::If {
            condition,
            then_branch,
            else_branch,
            position,
        } => {
            visitor.visit_if(condition, then_branch, else_branch.as_deref(), position);
            walk_expression(visitor, condition);
            walk_statement(visitor, then_branch);
            if let Some(else_branch) = else_branch {
                walk_statement(visitor, else_branch);
            }
        }
        Statement::While {
            condition,
            body,
            position,
        } => {
            visitor.visit_while(condition, body, position);
            walk_expression(visitor, condition);
            walk_statement(visitor, body);
        }
        Statement::ForEach {
            collection,
            index,
            value,
            body,
            position,
        } => {
            visitor.visit_for_each(
                collection,
                index.as_deref(),
                value.as_deref(),
                body,
                position,
            );
            walk_expression(visitor, collection);
            walk_statement(visitor, body);
        }
        Statement::Assignment {
            target,
            value,
            position,
        } => {
            visitor.visit_assignment(target, value, position);
            walk_expression(visitor, target);
            walk_expression(visitor, value);
        }
        Statement::Expression(expression) => {
            visitor.visit_expression_statement(expression);
            walk_expression(visitor, expression);
        }
    }

    visitor.leave_statement(statement);
}

fn walk_definition<V: AstVisitor + ?Sized>(visitor: &mut V, definition: &VariableDefinition) {
    visitor.visit_variable_definition(definition);
    walk_expression(visitor, &definition.data_type);
    if let Some(value) = &definition.value {
        walk_expression(visitor, value);
    }
}

/// Walk an expression depth-first, calling the matching visitor methods.
pub fn walk_expression<V: AstVisitor + ?Sized>(visitor: &mut V, expression: &Expression) {
    visitor.enter_expression(expression);

    match expression {
        Expression::StringLiteral { value, position } => visitor.visit_string(value, position),
        Expression::CharLiteral { value, position } => visitor.visit_char(value, position),
        Expression::NumberLiteral { value, position } => visitor.visit_number(value, position),
        Expression::BooleanLiteral { value, position } => visitor.visit_boolean(*value, position),
        Expression::NullLiteral { position } => visitor.visit_null(position),
        Expression::Identifier {
            name,
            category,
            position,
        } => visitor.visit_identifier(name, *category, position),
        Expression::StructParameterList {
            parameters,
            position,
        } => {
            visitor.visit_parameter_list(parameters, position);
            for parameter in parameters {
                walk_definition(visitor, parameter);
            }
        }
        Expression::Logical {
            operator,
            left,
            right,
            position,
        } => {
            visitor.visit_logical(*operator, left, right, position);
            walk_expression(visitor, left);
            walk_expression(visitor, right);
        }
        Expression::Not { operand, position } => {
            visitor.visit_not(operand, position);
            walk_expression(visitor, operand);
        }
        Expression::Comparison {
            operator,
            left,
            right,
            position,
        } => {
            visitor.visit_comparison(*operator, left, right, position);
            walk_expression(visitor, left);
            walk_expression(visitor, right);
        }
        Expression::NullCheck {
            operand,
            negated,
            position,
        } => {
            visitor.visit_null_check(operand, *negated, position);
            walk_expression(visitor, operand);
        }
        Expression::TypeCheck {
            operand,
            data_type,
            position,
        } => {
            visitor.visit_type_check(operand, data_type, position);
            walk_expression(visitor, operand);
            walk_expression(visitor, data_type);
        }
        Expression::FunctionCall {
            target,
            arguments,
            position,
        } => {
            visitor.visit_function_call(target, arguments.as_deref(), position);
            walk_expression(visitor, target);
            if let Some(arguments) = arguments {
                walk_expression(visitor, arguments);
            }
        }
        Expression::List { items, position } => {
            visitor.visit_list(items, position);
            for item in items {
                walk_expression(visitor, item);
            }
        }
        Expression::MathOperation {
            operator,
            left,
            right,
            position,
        } => {
            visitor.visit_math(*operator, left, right, position);
            walk_expression(visitor, left);
            walk_expression(visitor, right);
        }
        Expression::BitwiseNot { operand, position } => {
            visitor.visit_bitwise_not(operand, position);
            walk_expression(visitor, operand);
        }
        Expression::MemberAccess {
            owner,
            member,
            position,
        } => {
            visitor.visit_member_access(owner, member, position);
            walk_expression(visitor, owner);
            walk_expression(visitor, member);
        }
        Expression::ArrayAccess {
            index,
            target,
            position,
        } => {
            visitor.visit_array_access(index, target, position);
            walk_expression(visitor, index);
            walk_expression(visitor, target);
        }
        Expression::Index { selector, position } => {
            visitor.visit_index(selector, position);
            match selector {
                IndexSelector::Single { index, .. } => walk_expression(visitor, index),
                IndexSelector::Range { start, end } => {
                    for bound in [start, end].into_iter().flatten() {
                        walk_expression(visitor, bound);
                    }
                }
            }
        }
        Expression::Increment { operand, position } => {
            visitor.visit_increment(operand, position);
            walk_expression(visitor, operand);
        }
        Expression::Decrement { operand, position } => {
            visitor.visit_decrement(operand, position);
            walk_expression(visitor, operand);
        }
    }

    visitor.leave_expression(expression);
}

/// Walk every top-level statement of a program in order.
pub fn walk_program<V: AstVisitor + ?Sized>(visitor: &mut V, program: &Program) {
    for statement in &program.statements {
        walk_statement(visitor, statement);
    }
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Collects every identifier referenced in a tree, in visit order.
#[derive(Debug, Default)]
pub struct IdentifierCollector {
    /// Collected names with their categories.
    pub identifiers: Vec<(String, IdentifierCategory)>,
}

impl IdentifierCollector {
    /// Returns the collected names of one category.
    #[must_use]
    pub fn names_of(&self, category: IdentifierCategory) -> Vec<&str> {
        self.identifiers
            .iter()
            .filter(|(_, candidate)| *candidate == category)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl AstVisitor for IdentifierCollector {
    fn visit_identifier(&mut self, name: &str, category: IdentifierCategory, _position: &Position) {
        self.identifiers.push((name.to_string(), category));
    }
}

/// Counts statements and expressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    /// Number of statements visited.
    pub statements: usize,
    /// Number of expressions visited.
    pub expressions: usize,
}

impl AstVisitor for NodeCounter {
    fn enter_statement(&mut self, _statement: &Statement) {
        self.statements += 1;
    }

    fn enter_expression(&mut self, _expression: &Expression) {
        self.expressions += 1;
    }
}

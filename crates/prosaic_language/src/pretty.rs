//! Pretty-printer for AST nodes.
//!
//! Renders nodes back to canonical Prosaic prose. Re-parsing the output
//! yields the same tree: composite operands are parenthesized, and an
//! `otherwise` that would attach to a nested `if` is kept outside it with
//! a block.
//!
//! # Example
//!
//! ```
//! use prosaic_language::{parse, pretty::pretty_print_program};
//!
//! let program = parse("Set $X to the Sum of one and $y.").unwrap();
//! assert_eq!(pretty_print_program(&program), "set $X to the sum of 1 and $y.\n");
//! ```

use crate::ast::{
    Expression, ImportAlias, IndexSelector, LogicalOperator, Program, Statement,
    VariableDefinition,
};
use crate::token::IdentifierCategory;

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether block statements are spread over several lines.
    pub multi_line_blocks: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            multi_line_blocks: true,
        }
    }
}

impl PrettyConfig {
    /// Creates a configuration that keeps every statement on one line.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            multi_line_blocks: false,
            ..Self::default()
        }
    }
}

/// Pretty-print an expression.
#[must_use]
pub fn pretty_print_expression(expression: &Expression) -> String {
    let mut printer = PrettyPrinter::new(PrettyConfig::default());
    printer.expression(expression);
    printer.output
}

/// Pretty-print a statement without its terminator.
#[must_use]
pub fn pretty_print_statement(statement: &Statement) -> String {
    pretty_print_statement_with_config(statement, PrettyConfig::default())
}

/// Pretty-print a statement with custom configuration.
#[must_use]
pub fn pretty_print_statement_with_config(statement: &Statement, config: PrettyConfig) -> String {
    let mut printer = PrettyPrinter::new(config);
    printer.statement(statement);
    printer.output
}

/// Pretty-print a program, one terminated statement per line.
#[must_use]
pub fn pretty_print_program(program: &Program) -> String {
    pretty_print_program_with_config(program, &PrettyConfig::default())
}

/// Pretty-print a program with custom configuration.
#[must_use]
pub fn pretty_print_program_with_config(program: &Program, config: &PrettyConfig) -> String {
    program
        .statements
        .iter()
        .map(|statement| {
            let printed = pretty_print_statement_with_config(statement, config.clone());
            format!("{printed}.\n")
        })
        .collect()
}

/// Pretty-printer state.
struct PrettyPrinter {
    config: PrettyConfig,
    output: String,
    indent_level: usize,
}

impl PrettyPrinter {
    fn new(config: PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn newline(&mut self) {
        self.output.push('\n');
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block { statements, .. } => self.block(statements),
            Statement::Label { name, .. } => {
                self.push(":");
                self.push(name);
                self.push(":");
            }
            Statement::Goto { label, .. } => {
                self.push("go to :");
                self.push(label);
            }
            Statement::Break { .. } => self.push("break"),
            Statement::Continue { .. } => self.push("continue"),
            Statement::Return { value, .. } => {
                self.push("return");
                if let Some(value) = value {
                    self.push(" ");
                    self.expression(value);
                }
            }
            Statement::Import { path, alias, .. } => {
                self.push("import ");
                self.string(path);
                match alias {
                    Some(ImportAlias::Named(name)) => {
                        self.push(" as ~");
                        self.push(name);
                    }
                    Some(ImportAlias::Wildcard) => self.push(" as ~"),
                    None => {}
                }
            }
            Statement::EntryPoint { body, .. } => {
                self.push("program: ");
                self.statement(body);
            }
            Statement::Architecture { name, body, .. } => {
                self.push("for architecture ");
                self.string(name);
                self.push(": ");
                self.statement(body);
            }
            Statement::FunctionDefinition {
                name,
                parameters,
                body,
                ..
            } => {
                self.push("define function @");
                self.push(name);
                self.parameters(parameters);
                self.push(": ");
                self.statement(body);
            }
            Statement::StructureDefinition { name, fields, .. } => {
                self.push("define structure &");
                self.push(name);
                self.parameters(fields);
            }
            Statement::VariableDefinition(definition) => self.definition(definition, false),
            Statement::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => self.if_statement(condition, then_branch, else_branch.as_deref()),
            Statement::While {
                condition, body, ..
            } => {
                self.push("while ");
                self.expression(condition);
                self.push(": ");
                self.statement(body);
            }
            Statement::ForEach {
                collection,
                index,
                value,
                body,
                ..
            } => {
                match (index, value) {
                    (None, Some(value)) => {
                        self.push("for each $");
                        self.push(value);
                        self.push(" in ");
                        self.expression(collection);
                    }
                    _ => {
                        self.push("iterate over ");
                        self.expression(collection);
                        if let Some(index) = index {
                            self.push(" with index as $");
                            self.push(index);
                        }
                        if let Some(value) = value {
                            self.push(if index.is_some() { " and" } else { "" });
                            self.push(" with value as $");
                            self.push(value);
                        }
                    }
                }
                self.push(": ");
                self.statement(body);
            }
            Statement::Assignment { target, value, .. } => {
                self.push("set ");
                self.expression(target);
                self.push(" to ");
                self.expression(value);
            }
            Statement::Expression(expression) => self.expression(expression),
        }
    }

    fn block(&mut self, statements: &[Statement]) {
        self.push("execute the following;");
        if !self.config.multi_line_blocks {
            for statement in statements {
                self.push(" ");
                self.statement(statement);
                self.push(";");
            }
            self.push(" fin");
            return;
        }

        self.indent_level += 1;
        for statement in statements {
            self.newline();
            self.statement(statement);
            self.push(";");
        }
        self.indent_level = self.indent_level.saturating_sub(1);
        self.newline();
        self.push("fin");
    }

    fn if_statement(
        &mut self,
        condition: &Expression,
        then_branch: &Statement,
        else_branch: Option<&Statement>,
    ) {
        self.push("if ");
        self.expression(condition);
        self.push(" then ");

        // An else-less trailing `if` would capture our `otherwise`.
        let captures_otherwise = else_branch.is_some() && ends_with_open_if(then_branch);
        if captures_otherwise {
            self.block(std::slice::from_ref(then_branch));
        } else {
            self.statement(then_branch);
        }

        if let Some(else_branch) = else_branch {
            self.push(" otherwise ");
            self.statement(else_branch);
        }
    }

    fn parameters(&mut self, parameters: &[VariableDefinition]) {
        if parameters.is_empty() {
            return;
        }
        self.push("; ");
        self.series(parameters, |printer, item| printer.definition(item, true));
    }

    fn definition(&mut self, definition: &VariableDefinition, in_list: bool) {
        self.push("$");
        self.push(&definition.name);
        self.push(" as ");
        self.expression(&definition.data_type);
        if let Some(value) = &definition.value {
            self.push(" with value ");
            if in_list {
                self.operand(value);
            } else {
                self.expression(value);
            }
        }
    }

    /// Writes `a`, `a, and b` or `a, b, and c`.
    fn series<T>(&mut self, items: &[T], mut item: impl FnMut(&mut Self, &T)) {
        let last = items.len().saturating_sub(1);
        for (position, entry) in items.iter().enumerate() {
            if position > 0 {
                self.push(if position == last { ", and " } else { ", " });
            }
            item(self, entry);
        }
    }

    fn string(&mut self, value: &str) {
        self.push("\"");
        self.push(value);
        self.push("\"");
    }

    /// Writes an operand, parenthesizing anything that is not a single
    /// word or a member access. Parameter lists bring their own parentheses.
    fn operand(&mut self, expression: &Expression) {
        let simple = matches!(
            expression,
            Expression::StringLiteral { .. }
                | Expression::CharLiteral { .. }
                | Expression::NumberLiteral { .. }
                | Expression::BooleanLiteral { .. }
                | Expression::NullLiteral { .. }
                | Expression::Identifier { .. }
                | Expression::MemberAccess { .. }
                | Expression::StructParameterList { .. }
        );
        if simple {
            self.expression(expression);
        } else {
            self.push("(");
            self.expression(expression);
            self.push(")");
        }
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::StringLiteral { value, .. } => self.string(value),
            Expression::CharLiteral { value, .. } => {
                self.push("`");
                self.push(value);
                self.push("`");
            }
            Expression::NumberLiteral { value, .. } => self.push(value),
            Expression::BooleanLiteral { value, .. } => {
                self.push(if *value { "true" } else { "false" });
            }
            Expression::NullLiteral { .. } => self.push("null"),
            Expression::Identifier { name, category, .. } => {
                self.push(&identifier_text(name, *category));
            }
            Expression::StructParameterList { parameters, .. } => {
                self.push("(");
                self.parameters(parameters);
                self.push(")");
            }
            Expression::Logical {
                operator,
                left,
                right,
                ..
            } => {
                let (head, connective) = match operator {
                    LogicalOperator::And => ("both ", " and "),
                    LogicalOperator::Or => ("either ", " or "),
                };
                self.push(head);
                self.operand(left);
                self.push(connective);
                self.operand(right);
            }
            Expression::Not { operand, .. } => {
                self.push("not ");
                self.operand(operand);
            }
            Expression::Comparison {
                operator,
                left,
                right,
                ..
            } => {
                self.operand(left);
                self.push(" ");
                self.push(operator.phrase());
                self.push(" ");
                self.operand(right);
            }
            Expression::NullCheck {
                operand, negated, ..
            } => {
                self.operand(operand);
                self.push(if *negated { " is not null" } else { " is null" });
            }
            Expression::TypeCheck {
                operand, data_type, ..
            } => {
                self.operand(operand);
                self.push(" is of type ");
                self.expression(data_type);
            }
            Expression::FunctionCall {
                target, arguments, ..
            } => {
                self.push("call ");
                self.expression(target);
                match arguments.as_deref() {
                    Some(list @ Expression::List { .. }) => {
                        self.push(" with ");
                        self.expression(list);
                    }
                    Some(argument) => {
                        self.push(" with ");
                        self.operand(argument);
                    }
                    None => {}
                }
            }
            Expression::List { items, .. } => {
                self.series(items, |printer, item| printer.operand(item));
            }
            Expression::MathOperation {
                operator,
                left,
                right,
                ..
            } => {
                if operator.is_header() {
                    self.push(operator.phrase());
                    self.push(" ");
                    self.operand(left);
                    self.push(" and ");
                    self.operand(right);
                } else {
                    self.operand(left);
                    self.push(" ");
                    self.push(operator.phrase());
                    self.push(" ");
                    self.operand(right);
                }
            }
            Expression::BitwiseNot { operand, .. } => {
                self.push("bitwise not ");
                self.operand(operand);
            }
            Expression::MemberAccess { owner, member, .. } => {
                self.expression(owner);
                self.push("'s ");
                self.operand(member);
            }
            Expression::ArrayAccess { index, target, .. } => {
                self.push("the ");
                self.expression(index);
                self.push(" of ");
                self.expression(target);
            }
            Expression::Index { selector, .. } => self.index(selector),
            Expression::Increment { operand, .. } => {
                self.push("increment ");
                self.expression(operand);
            }
            Expression::Decrement { operand, .. } => {
                self.push("decrement ");
                self.expression(operand);
            }
        }
    }

    fn index(&mut self, selector: &IndexSelector) {
        match selector {
            IndexSelector::Single { index, from_last } => {
                self.push("index ");
                self.operand(index);
                if *from_last {
                    self.push(" from last");
                }
            }
            IndexSelector::Range { start, end } => {
                self.push("items");
                if let Some(start) = start {
                    self.push(" beginning at ");
                    self.operand(start);
                }
                if let Some(end) = end {
                    self.push(" ending at ");
                    self.operand(end);
                }
            }
        }
    }
}

/// Returns true if the statement's last clause is an `if` without an
/// `otherwise`, so text printed after it would extend that `if`.
fn ends_with_open_if(statement: &Statement) -> bool {
    match statement {
        Statement::If {
            else_branch: None, ..
        } => true,
        Statement::If {
            else_branch: Some(tail),
            ..
        } => ends_with_open_if(tail),
        Statement::EntryPoint { body, .. }
        | Statement::Architecture { body, .. }
        | Statement::FunctionDefinition { body, .. }
        | Statement::While { body, .. }
        | Statement::ForEach { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

/// Returns the name as written in source, sigil included.
#[must_use]
pub fn identifier_text(name: &str, category: IdentifierCategory) -> String {
    match category.sigil() {
        Some(sigil) => format!("{sigil}{name}"),
        None => name.to_string(),
    }
}

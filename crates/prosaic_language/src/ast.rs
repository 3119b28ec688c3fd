//! Abstract Syntax Tree for the Prosaic language.
//!
//! The tree has two disjoint families, [`Expression`] and [`Statement`].
//! Nodes are built once by the grammar rule that wins dispatch and are
//! never mutated afterwards. Every node carries the [`Position`] of its
//! first token.

use prosaic_foundation::Position;

use crate::token::IdentifierCategory;

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ComparisonOperator {
    /// `is equal to`
    Equal,
    /// `is not equal to`
    NotEqual,
    /// `is less than`
    LessThan,
    /// `is less than or equal to`
    LessThanOrEqual,
    /// `is greater than`
    GreaterThan,
    /// `is greater than or equal to`
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// Returns the operator that holds exactly when this one does not.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Equal => Self::NotEqual,
            Self::NotEqual => Self::Equal,
            Self::LessThan => Self::GreaterThanOrEqual,
            Self::GreaterThanOrEqual => Self::LessThan,
            Self::GreaterThan => Self::LessThanOrEqual,
            Self::LessThanOrEqual => Self::GreaterThan,
        }
    }

    /// Returns the prose spelling of this operator.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Equal => "is equal to",
            Self::NotEqual => "is not equal to",
            Self::LessThan => "is less than",
            Self::LessThanOrEqual => "is less than or equal to",
            Self::GreaterThan => "is greater than",
            Self::GreaterThanOrEqual => "is greater than or equal to",
        }
    }
}

/// Binary arithmetic and bitwise operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MathOperator {
    /// `the sum of`
    Add,
    /// `the difference of`
    Subtract,
    /// `the product of`
    Multiply,
    /// `the quotient of`
    Divide,
    /// `modulo`
    Modulo,
    /// `raised to the power of`
    Power,
    /// `shifted left by`
    ShiftLeft,
    /// `shifted right by`
    ShiftRight,
    /// `rotated left by`
    RotateLeft,
    /// `rotated right by`
    RotateRight,
    /// `bitwise and`
    BitwiseAnd,
    /// `bitwise or`
    BitwiseOr,
    /// `bitwise xor`
    BitwiseXor,
}

impl MathOperator {
    /// Returns true for operators written as a header phrase
    /// (`the sum of A and B`) rather than between operands.
    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide
        )
    }

    /// Returns the prose spelling of this operator.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Add => "the sum of",
            Self::Subtract => "the difference of",
            Self::Multiply => "the product of",
            Self::Divide => "the quotient of",
            Self::Modulo => "modulo",
            Self::Power => "raised to the power of",
            Self::ShiftLeft => "shifted left by",
            Self::ShiftRight => "shifted right by",
            Self::RotateLeft => "rotated left by",
            Self::RotateRight => "rotated right by",
            Self::BitwiseAnd => "bitwise and",
            Self::BitwiseOr => "bitwise or",
            Self::BitwiseXor => "bitwise xor",
        }
    }
}

/// Logical connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LogicalOperator {
    /// `both A and B`
    And,
    /// `either A or B`
    Or,
}

/// What an [`Expression::Index`] selects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndexSelector {
    /// One element, counted from the front or from the back.
    Single {
        /// The element number.
        index: Box<Expression>,
        /// Count from the last element.
        from_last: bool,
    },
    /// A run of elements.
    Range {
        /// First element, if bounded.
        start: Option<Box<Expression>>,
        /// Last element, if bounded.
        end: Option<Box<Expression>>,
    },
}

/// The alias of an import.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImportAlias {
    /// `as ~name`
    Named(String),
    /// `as ~`
    Wildcard,
}

/// A typed variable declaration, used both as a statement and as an entry
/// of a parameter list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariableDefinition {
    /// Variable name, without its sigil.
    pub name: String,
    /// Declared type: a type or structure identifier.
    pub data_type: Expression,
    /// Initial value, if any.
    pub value: Option<Expression>,
    /// Where the definition starts.
    pub position: Position,
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expression {
    /// `"text"`; the payload keeps its escapes verbatim.
    StringLiteral {
        /// Unquoted payload.
        value: String,
        /// Source location.
        position: Position,
    },
    /// `` `c` ``
    CharLiteral {
        /// Unquoted payload.
        value: String,
        /// Source location.
        position: Position,
    },
    /// A number, kept as its decimal (or hex/binary) text.
    NumberLiteral {
        /// Numeric text.
        value: String,
        /// Source location.
        position: Position,
    },
    /// `true` or `false`
    BooleanLiteral {
        /// The value.
        value: bool,
        /// Source location.
        position: Position,
    },
    /// `null`
    NullLiteral {
        /// Source location.
        position: Position,
    },
    /// A named entity.
    Identifier {
        /// Name without sigil; canonical lowercase for types.
        name: String,
        /// What the name refers to.
        category: IdentifierCategory,
        /// Source location.
        position: Position,
    },
    /// `; $a as integer, and $b as float`
    StructParameterList {
        /// The declared parameters.
        parameters: Vec<VariableDefinition>,
        /// Source location.
        position: Position,
    },
    /// `both A and B`, `either A or B`
    Logical {
        /// The connective.
        operator: LogicalOperator,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `not A`
    Not {
        /// The negated operand.
        operand: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `A is equal to B`
    Comparison {
        /// The comparator, after any negation was applied.
        operator: ComparisonOperator,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `A is null`, `A is not null`
    NullCheck {
        /// The tested operand.
        operand: Box<Expression>,
        /// True for `is not null`.
        negated: bool,
        /// Source location.
        position: Position,
    },
    /// `A is of type T`
    TypeCheck {
        /// The tested operand.
        operand: Box<Expression>,
        /// The type identifier.
        data_type: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `call @f with A`
    FunctionCall {
        /// A function identifier or a member access ending in one.
        target: Box<Expression>,
        /// The argument expression, if any.
        arguments: Option<Box<Expression>>,
        /// Source location.
        position: Position,
    },
    /// `A, B, and C`
    List {
        /// The items, in order.
        items: Vec<Expression>,
        /// Source location.
        position: Position,
    },
    /// `the sum of A and B`, `A modulo B`, ...
    MathOperation {
        /// The operator.
        operator: MathOperator,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `bitwise not A`
    BitwiseNot {
        /// The operand.
        operand: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `$owner's member`
    MemberAccess {
        /// A container-capable identifier.
        owner: Box<Expression>,
        /// The accessed member, possibly a further access or call.
        member: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `the third of $list`
    ArrayAccess {
        /// An [`Expression::Index`].
        index: Box<Expression>,
        /// The indexed collection.
        target: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `third`, `index $i from last`, `items beginning at 2`
    Index {
        /// What is selected.
        selector: IndexSelector,
        /// Source location.
        position: Position,
    },
    /// `increment $x`, `$x ++`
    Increment {
        /// The incremented place.
        operand: Box<Expression>,
        /// Source location.
        position: Position,
    },
    /// `decrement $x`, `$x --`
    Decrement {
        /// The decremented place.
        operand: Box<Expression>,
        /// Source location.
        position: Position,
    },
}

impl Expression {
    /// Returns the source position of this expression.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::StringLiteral { position, .. }
            | Self::CharLiteral { position, .. }
            | Self::NumberLiteral { position, .. }
            | Self::BooleanLiteral { position, .. }
            | Self::NullLiteral { position }
            | Self::Identifier { position, .. }
            | Self::StructParameterList { position, .. }
            | Self::Logical { position, .. }
            | Self::Not { position, .. }
            | Self::Comparison { position, .. }
            | Self::NullCheck { position, .. }
            | Self::TypeCheck { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::List { position, .. }
            | Self::MathOperation { position, .. }
            | Self::BitwiseNot { position, .. }
            | Self::MemberAccess { position, .. }
            | Self::ArrayAccess { position, .. }
            | Self::Index { position, .. }
            | Self::Increment { position, .. }
            | Self::Decrement { position, .. } => position,
        }
    }

    /// Returns true if this expression is also legal as a bare statement.
    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        matches!(
            self,
            Self::Increment { .. } | Self::Decrement { .. } | Self::FunctionCall { .. }
        )
    }

    /// Returns true if this expression names a place that can be assigned,
    /// incremented or decremented.
    #[must_use]
    pub const fn is_place(&self) -> bool {
        matches!(
            self,
            Self::Identifier { .. } | Self::MemberAccess { .. } | Self::ArrayAccess { .. }
        )
    }

    /// Returns true if this expression can appear where a type is expected.
    #[must_use]
    pub const fn is_type_reference(&self) -> bool {
        matches!(
            self,
            Self::Identifier {
                category: IdentifierCategory::Type | IdentifierCategory::Structure,
                ..
            }
        )
    }

    /// Returns the name and category if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<(&str, IdentifierCategory)> {
        match self {
            Self::Identifier { name, category, .. } => Some((name, *category)),
            _ => None,
        }
    }

    /// Returns a short name for this node kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::StringLiteral { .. } => "string literal",
            Self::CharLiteral { .. } => "character literal",
            Self::NumberLiteral { .. } => "number literal",
            Self::BooleanLiteral { .. } => "boolean literal",
            Self::NullLiteral { .. } => "null literal",
            Self::Identifier { .. } => "identifier",
            Self::StructParameterList { .. } => "parameter list",
            Self::Logical { .. } => "logical operation",
            Self::Not { .. } => "negation",
            Self::Comparison { .. } => "comparison",
            Self::NullCheck { .. } => "null check",
            Self::TypeCheck { .. } => "type check",
            Self::FunctionCall { .. } => "function call",
            Self::List { .. } => "list",
            Self::MathOperation { .. } => "math operation",
            Self::BitwiseNot { .. } => "bitwise not",
            Self::MemberAccess { .. } => "member access",
            Self::ArrayAccess { .. } => "array access",
            Self::Index { .. } => "index",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
        }
    }
}

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// `execute the following; ...; fin`
    Block {
        /// The statements, in order.
        statements: Vec<Statement>,
        /// Source location.
        position: Position,
    },
    /// `:name:`
    Label {
        /// Label name without sigil.
        name: String,
        /// Source location.
        position: Position,
    },
    /// `go to :name`
    Goto {
        /// Target label name without sigil.
        label: String,
        /// Source location.
        position: Position,
    },
    /// `break`
    Break {
        /// Source location.
        position: Position,
    },
    /// `continue`
    Continue {
        /// Source location.
        position: Position,
    },
    /// `return [E]`
    Return {
        /// The returned value, if any.
        value: Option<Expression>,
        /// Source location.
        position: Position,
    },
    /// `import "path" [as ~alias]`
    Import {
        /// The import target, as written.
        path: String,
        /// The alias, if any.
        alias: Option<ImportAlias>,
        /// Source location.
        position: Position,
    },
    /// `program: S`
    EntryPoint {
        /// The program body.
        body: Box<Statement>,
        /// Source location.
        position: Position,
    },
    /// `for architecture "name": S`
    Architecture {
        /// Architecture name.
        name: String,
        /// The tagged declaration or block of declarations.
        body: Box<Statement>,
        /// Source location.
        position: Position,
    },
    /// `define function @f; params: S`
    FunctionDefinition {
        /// Function name without sigil.
        name: String,
        /// Declared parameters.
        parameters: Vec<VariableDefinition>,
        /// Function body.
        body: Box<Statement>,
        /// Source location.
        position: Position,
    },
    /// `define structure &s; fields`
    StructureDefinition {
        /// Structure name without sigil.
        name: String,
        /// Declared fields.
        fields: Vec<VariableDefinition>,
        /// Source location.
        position: Position,
    },
    /// `[define] $v as T [with value E]`
    VariableDefinition(VariableDefinition),
    /// `if C then S [otherwise S]`
    If {
        /// The condition.
        condition: Expression,
        /// Taken when the condition holds.
        then_branch: Box<Statement>,
        /// Taken otherwise, if present.
        else_branch: Option<Box<Statement>>,
        /// Source location.
        position: Position,
    },
    /// `while C: S`
    While {
        /// The loop condition.
        condition: Expression,
        /// The loop body.
        body: Box<Statement>,
        /// Source location.
        position: Position,
    },
    /// `for each $v in E: S`, `iterate over E with index as $i ...: S`
    ForEach {
        /// The iterated collection.
        collection: Expression,
        /// Name bound to the element index.
        index: Option<String>,
        /// Name bound to the element value.
        value: Option<String>,
        /// The loop body.
        body: Box<Statement>,
        /// Source location.
        position: Position,
    },
    /// `set X to E`, `X is equal to E`
    Assignment {
        /// The assigned place.
        target: Expression,
        /// The new value.
        value: Expression,
        /// Source location.
        position: Position,
    },
    /// A standalone expression used as a statement.
    Expression(Expression),
}

impl Statement {
    /// Returns the source position of this statement.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::Block { position, .. }
            | Self::Label { position, .. }
            | Self::Goto { position, .. }
            | Self::Break { position }
            | Self::Continue { position }
            | Self::Return { position, .. }
            | Self::Import { position, .. }
            | Self::EntryPoint { position, .. }
            | Self::Architecture { position, .. }
            | Self::FunctionDefinition { position, .. }
            | Self::StructureDefinition { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. }
            | Self::ForEach { position, .. }
            | Self::Assignment { position, .. } => position,
            Self::VariableDefinition(definition) => &definition.position,
            Self::Expression(expression) => expression.position(),
        }
    }

    /// Returns true for top-level declarations the sorter buckets.
    #[must_use]
    pub const fn is_declaration(&self) -> bool {
        matches!(
            self,
            Self::FunctionDefinition { .. }
                | Self::StructureDefinition { .. }
                | Self::VariableDefinition(_)
                | Self::EntryPoint { .. }
        )
    }

    /// Returns a short name for this node kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Block { .. } => "block",
            Self::Label { .. } => "label",
            Self::Goto { .. } => "go to",
            Self::Break { .. } => "break",
            Self::Continue { .. } => "continue",
            Self::Return { .. } => "return",
            Self::Import { .. } => "import",
            Self::EntryPoint { .. } => "entry point",
            Self::Architecture { .. } => "architecture",
            Self::FunctionDefinition { .. } => "function definition",
            Self::StructureDefinition { .. } => "structure definition",
            Self::VariableDefinition(_) => "variable definition",
            Self::If { .. } => "if",
            Self::While { .. } => "while",
            Self::ForEach { .. } => "for each",
            Self::Assignment { .. } => "assignment",
            Self::Expression(_) => "expression",
        }
    }
}

/// A parsed source file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
    /// Name of the source file.
    pub filename: String,
}

impl Program {
    /// Returns the targets of every top-level import, in source order.
    #[must_use]
    pub fn imports(&self) -> Vec<&str> {
        self.statements
            .iter()
            .filter_map(|statement| match statement {
                Statement::Import { path, .. } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}

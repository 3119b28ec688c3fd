//! Token types for the Prosaic language.
//!
//! Tokens are the output of the scanner and condenser and the input to the
//! grammar rules. Every token keeps the exact source text it was built from
//! in `raw`, so compound tokens can be rendered back to their phrase.

use std::fmt;

use prosaic_foundation::Position;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// Source text (or decimal value, for fused number literals).
    pub raw: String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, raw: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            raw: raw.into(),
            position,
        }
    }

    /// Returns true if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns the identifier name of this token: the raw text without its
    /// leading sigil for identifier tokens, the raw text otherwise.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.kind.identifier_category().is_some() {
            let mut chars = self.raw.chars();
            chars.next();
            chars.as_str()
        } else {
            &self.raw
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.raw)
    }
}

/// The category an identifier belongs to.
///
/// Fixed by the sigil at scan time and carried through to the AST.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IdentifierCategory {
    /// `$name`
    Variable,
    /// `@name`
    Function,
    /// `&name`
    Structure,
    /// `:name`
    Label,
    /// `~name`
    Alias,
    /// A primitive type keyword such as `integer`.
    Type,
}

impl IdentifierCategory {
    /// Returns true if values of this category can own members.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Variable | Self::Structure | Self::Alias)
    }

    /// Returns the sigil written before names of this category.
    #[must_use]
    pub const fn sigil(self) -> Option<char> {
        match self {
            Self::Variable => Some('$'),
            Self::Function => Some('@'),
            Self::Structure => Some('&'),
            Self::Label => Some(':'),
            Self::Alias => Some('~'),
            Self::Type => None,
        }
    }

    /// Returns a human-readable name for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Structure => "structure",
            Self::Label => "label",
            Self::Alias => "alias",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for IdentifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token kinds for the Prosaic language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// `"text"`
    StringLiteral,
    /// `` `c` ``
    CharLiteral,
    /// `42`, `3.5`, `0x1F`, or a fused number-word run
    NumberLiteral,
    /// A fused run ending in an ordinal word, such as `twenty first`
    OrdinalLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `null` or `nothing`
    NullLiteral,

    // Number words, consumed by numeric fusion
    /// `five`, `twenty`, `hundred`
    NumberWord,
    /// `fifth`, `twentieth`, `hundredth`
    OrdinalWord,
    /// `point`
    Point,

    // Sigils
    /// `$`
    VariableSigil,
    /// `@`
    FunctionSigil,
    /// `&`
    StructureSigil,
    /// `:`
    LabelSigil,
    /// `~`
    AliasSigil,

    // Sigil-tagged identifiers
    /// `$name`
    VariableIdentifier,
    /// `@name`
    FunctionIdentifier,
    /// `&name`
    StructureIdentifier,
    /// `:name`
    LabelIdentifier,
    /// `~name`
    AliasIdentifier,
    /// A lone `~`
    Wildcard,

    /// `integer`, `float`, `string`, ...
    PrimitiveType,

    // Keywords
    /// `and`
    And,
    /// `as`
    As,
    /// `at`
    At,
    /// `beginning`
    Beginning,
    /// `bitwise`
    Bitwise,
    /// `both`
    Both,
    /// `break`
    Break,
    /// `by`
    By,
    /// `call`
    Call,
    /// `continue`
    Continue,
    /// `define`
    Define,
    /// `difference`
    Difference,
    /// `each`
    Each,
    /// `either`
    Either,
    /// `ending`
    Ending,
    /// `equal`
    Equal,
    /// `execute`
    Execute,
    /// `fin`
    Fin,
    /// `following`
    Following,
    /// `for`
    For,
    /// `from`
    From,
    /// `function`
    Function,
    /// `go`
    Go,
    /// `greater`
    Greater,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `index`
    Index,
    /// `is`
    Is,
    /// `items`
    Items,
    /// `iterate`
    Iterate,
    /// `last`
    Last,
    /// `left`
    Left,
    /// `less`
    Less,
    /// `modulo`
    Modulo,
    /// `not`
    Not,
    /// `of`
    Of,
    /// `or`
    Or,
    /// `otherwise`
    Otherwise,
    /// `over`
    Over,
    /// `power`
    Power,
    /// `product`
    Product,
    /// `program`
    Program,
    /// `quotient`
    Quotient,
    /// `raised`
    Raised,
    /// `return`
    Return,
    /// `right`
    Right,
    /// `rotated`
    Rotated,
    /// `s`, the tail of a possessive `'s`
    S,
    /// `set`
    Set,
    /// `shifted`
    Shifted,
    /// `structure`
    Structure,
    /// `sum`
    Sum,
    /// `than`
    Than,
    /// `the`
    The,
    /// `then`
    Then,
    /// `to`
    To,
    /// `type`
    Type,
    /// `value`
    Value,
    /// `while`
    While,
    /// `with`
    With,
    /// `xor`
    Xor,
    /// `architecture`
    Architecture,

    // Compound keywords
    /// `'s`
    Possessive,
    /// `the sum of`
    SumOf,
    /// `the difference of`
    DifferenceOf,
    /// `the product of`
    ProductOf,
    /// `the quotient of`
    QuotientOf,
    /// `raised to the power of`
    RaisedToThePowerOf,
    /// `shifted left by`
    ShiftedLeftBy,
    /// `shifted right by`
    ShiftedRightBy,
    /// `rotated left by`
    RotatedLeftBy,
    /// `rotated right by`
    RotatedRightBy,
    /// `bitwise and`
    BitwiseAnd,
    /// `bitwise or`
    BitwiseOr,
    /// `bitwise xor`
    BitwiseXor,
    /// `bitwise not`
    BitwiseNot,
    /// `is not null`
    IsNotNull,
    /// `is null`
    IsNull,
    /// `is of type`
    IsOfType,
    /// `greater than or equal to`
    GreaterThanOrEqualTo,
    /// `greater than`
    GreaterThan,
    /// `less than or equal to`
    LessThanOrEqualTo,
    /// `less than`
    LessThan,
    /// `equal to`
    EqualTo,
    /// `beginning at`
    BeginningAt,
    /// `ending at`
    EndingAt,
    /// `from last`
    FromLast,
    /// `with index as`
    WithIndexAs,
    /// `with value as`
    WithValueAs,
    /// `for each`
    ForEach,
    /// `iterate over`
    IterateOver,
    /// `for architecture`
    ForArchitecture,
    /// `define function`
    DefineFunction,
    /// `define structure`
    DefineStructure,
    /// `program:`
    EntryPoint,
    /// `go to`
    GoTo,
    /// `, and`
    CommaAnd,
    /// `increment` or `++`
    Increment,
    /// `decrement` or `--`
    Decrement,

    // Structure
    /// `execute the following;`
    BlockStart,
    /// `fin`
    BlockEnd,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,

    // Punctuation
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Period,
    /// `'`
    Apostrophe,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `:` that does not start a label
    Colon,

    /// A word that is not a keyword.
    Unknown,
}

impl TokenKind {
    /// Returns true if this kind raises nesting depth.
    #[must_use]
    pub const fn is_opener(self) -> bool {
        matches!(self, Self::ParenOpen | Self::BlockStart)
    }

    /// Returns true if this kind lowers nesting depth.
    #[must_use]
    pub const fn is_closer(self) -> bool {
        matches!(self, Self::ParenClose | Self::BlockEnd)
    }

    /// Returns the identifier category a sigil of this kind introduces.
    #[must_use]
    pub const fn sigil_category(self) -> Option<IdentifierCategory> {
        match self {
            Self::VariableSigil => Some(IdentifierCategory::Variable),
            Self::FunctionSigil => Some(IdentifierCategory::Function),
            Self::StructureSigil => Some(IdentifierCategory::Structure),
            Self::LabelSigil => Some(IdentifierCategory::Label),
            Self::AliasSigil => Some(IdentifierCategory::Alias),
            _ => None,
        }
    }

    /// Returns the category of an identifier token of this kind.
    #[must_use]
    pub const fn identifier_category(self) -> Option<IdentifierCategory> {
        match self {
            Self::VariableIdentifier => Some(IdentifierCategory::Variable),
            Self::FunctionIdentifier => Some(IdentifierCategory::Function),
            Self::StructureIdentifier => Some(IdentifierCategory::Structure),
            Self::LabelIdentifier => Some(IdentifierCategory::Label),
            Self::AliasIdentifier => Some(IdentifierCategory::Alias),
            _ => None,
        }
    }

    /// Returns true if this kind is a sigil character.
    #[must_use]
    pub const fn is_sigil(self) -> bool {
        self.sigil_category().is_some()
    }

    /// Returns true if this kind can take part in numeric fusion.
    #[must_use]
    pub const fn is_numeric_part(self) -> bool {
        matches!(
            self,
            Self::NumberLiteral | Self::NumberWord | Self::OrdinalWord | Self::Point
        )
    }

    /// Returns true if this kind is a single-token literal.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral
                | Self::CharLiteral
                | Self::NumberLiteral
                | Self::OrdinalLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
        )
    }

    /// Returns true if this kind is fused by the phrase pass.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(
            self,
            Self::Possessive
                | Self::SumOf
                | Self::DifferenceOf
                | Self::ProductOf
                | Self::QuotientOf
                | Self::RaisedToThePowerOf
                | Self::ShiftedLeftBy
                | Self::ShiftedRightBy
                | Self::RotatedLeftBy
                | Self::RotatedRightBy
                | Self::BitwiseAnd
                | Self::BitwiseOr
                | Self::BitwiseXor
                | Self::BitwiseNot
                | Self::IsNotNull
                | Self::IsNull
                | Self::IsOfType
                | Self::GreaterThanOrEqualTo
                | Self::GreaterThan
                | Self::LessThanOrEqualTo
                | Self::LessThan
                | Self::EqualTo
                | Self::BeginningAt
                | Self::EndingAt
                | Self::FromLast
                | Self::WithIndexAs
                | Self::WithValueAs
                | Self::ForEach
                | Self::IterateOver
                | Self::ForArchitecture
                | Self::DefineFunction
                | Self::DefineStructure
                | Self::EntryPoint
                | Self::GoTo
                | Self::CommaAnd
                | Self::BlockStart
                | Self::BlockEnd
        )
    }

    /// Returns true if this kind is a comparator produced by phrase fusion.
    #[must_use]
    pub const fn is_comparator(self) -> bool {
        matches!(
            self,
            Self::GreaterThanOrEqualTo
                | Self::GreaterThan
                | Self::LessThanOrEqualTo
                | Self::LessThan
                | Self::EqualTo
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StringLiteral => "string",
            Self::CharLiteral => "character",
            Self::NumberLiteral => "number",
            Self::OrdinalLiteral => "ordinal",
            Self::BooleanLiteral => "boolean",
            Self::NullLiteral => "null",
            Self::NumberWord => "number word",
            Self::OrdinalWord => "ordinal word",
            Self::Point => "point",
            Self::VariableSigil => "'$'",
            Self::FunctionSigil => "'@'",
            Self::StructureSigil => "'&'",
            Self::LabelSigil => "':'",
            Self::AliasSigil => "'~'",
            Self::VariableIdentifier => "variable",
            Self::FunctionIdentifier => "function",
            Self::StructureIdentifier => "structure",
            Self::LabelIdentifier => "label",
            Self::AliasIdentifier => "alias",
            Self::Wildcard => "wildcard",
            Self::PrimitiveType => "type",
            Self::And => "and",
            Self::As => "as",
            Self::At => "at",
            Self::Beginning => "beginning",
            Self::Bitwise => "bitwise",
            Self::Both => "both",
            Self::Break => "break",
            Self::By => "by",
            Self::Call => "call",
            Self::Continue => "continue",
            Self::Define => "define",
            Self::Difference => "difference",
            Self::Each => "each",
            Self::Either => "either",
            Self::Ending => "ending",
            Self::Equal => "equal",
            Self::Execute => "execute",
            Self::Fin => "fin",
            Self::Following => "following",
            Self::For => "for",
            Self::From => "from",
            Self::Function => "function keyword",
            Self::Go => "go",
            Self::Greater => "greater",
            Self::If => "if",
            Self::Import => "import",
            Self::In => "in",
            Self::Index => "index",
            Self::Is => "is",
            Self::Items => "items",
            Self::Iterate => "iterate",
            Self::Last => "last",
            Self::Left => "left",
            Self::Less => "less",
            Self::Modulo => "modulo",
            Self::Not => "not",
            Self::Of => "of",
            Self::Or => "or",
            Self::Otherwise => "otherwise",
            Self::Over => "over",
            Self::Power => "power",
            Self::Product => "product",
            Self::Program => "program",
            Self::Quotient => "quotient",
            Self::Raised => "raised",
            Self::Return => "return",
            Self::Right => "right",
            Self::Rotated => "rotated",
            Self::S => "s",
            Self::Set => "set",
            Self::Shifted => "shifted",
            Self::Structure => "structure keyword",
            Self::Sum => "sum",
            Self::Than => "than",
            Self::The => "the",
            Self::Then => "then",
            Self::To => "to",
            Self::Type => "type keyword",
            Self::Value => "value",
            Self::While => "while",
            Self::With => "with",
            Self::Xor => "xor",
            Self::Architecture => "architecture",
            Self::Possessive => "'s",
            Self::SumOf => "the sum of",
            Self::DifferenceOf => "the difference of",
            Self::ProductOf => "the product of",
            Self::QuotientOf => "the quotient of",
            Self::RaisedToThePowerOf => "raised to the power of",
            Self::ShiftedLeftBy => "shifted left by",
            Self::ShiftedRightBy => "shifted right by",
            Self::RotatedLeftBy => "rotated left by",
            Self::RotatedRightBy => "rotated right by",
            Self::BitwiseAnd => "bitwise and",
            Self::BitwiseOr => "bitwise or",
            Self::BitwiseXor => "bitwise xor",
            Self::BitwiseNot => "bitwise not",
            Self::IsNotNull => "is not null",
            Self::IsNull => "is null",
            Self::IsOfType => "is of type",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
            Self::GreaterThan => "greater than",
            Self::LessThanOrEqualTo => "less than or equal to",
            Self::LessThan => "less than",
            Self::EqualTo => "equal to",
            Self::BeginningAt => "beginning at",
            Self::EndingAt => "ending at",
            Self::FromLast => "from last",
            Self::WithIndexAs => "with index as",
            Self::WithValueAs => "with value as",
            Self::ForEach => "for each",
            Self::IterateOver => "iterate over",
            Self::ForArchitecture => "for architecture",
            Self::DefineFunction => "define function",
            Self::DefineStructure => "define structure",
            Self::EntryPoint => "program:",
            Self::GoTo => "go to",
            Self::CommaAnd => "', and'",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::BlockStart => "execute the following;",
            Self::BlockEnd => "fin",
            Self::ParenOpen => "'('",
            Self::ParenClose => "')'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Period => "'.'",
            Self::Apostrophe => "'''",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Colon => "':'",
            Self::Unknown => "word",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

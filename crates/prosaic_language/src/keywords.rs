//! The keyword table.
//!
//! Maps words to token kinds. Matching is case-insensitive; the token keeps
//! the original spelling in `raw`.

use crate::token::TokenKind;

/// Every word the scanner classifies as something other than [`TokenKind::Unknown`].
pub const KEYWORDS: &[&str] = &[
    "and", "architecture", "as", "at", "beginning", "bitwise", "both", "break", "by", "call",
    "continue", "decrement", "define", "difference", "each", "either", "ending", "equal",
    "execute", "false", "fin", "following", "for", "from", "function", "go", "greater", "if",
    "import", "in", "increment", "index", "is", "items", "iterate", "last", "left", "less",
    "modulo", "not", "nothing", "null", "of", "or", "otherwise", "over", "point", "power",
    "product", "program", "quotient", "raised", "return", "right", "rotated", "s", "set",
    "shifted", "structure", "sum", "than", "the", "then", "to", "true", "type", "value", "while",
    "with", "xor",
];

/// Primitive type names with their canonical spelling.
const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("integer", "integer"),
    ("int", "integer"),
    ("float", "float"),
    ("decimal", "float"),
    ("string", "string"),
    ("text", "string"),
    ("boolean", "boolean"),
    ("bool", "boolean"),
    ("character", "character"),
    ("char", "character"),
    ("byte", "byte"),
    ("list", "list"),
    ("array", "list"),
];

/// The value of a number word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberWord {
    /// Numeric value of the word.
    pub value: u128,
    /// True for ordinal forms such as `fifth`.
    pub ordinal: bool,
}

impl NumberWord {
    /// Returns true for `hundred` and larger scale words.
    #[must_use]
    pub const fn is_scale(self) -> bool {
        self.value >= 100
    }
}

/// Cardinal and ordinal spellings of every number word.
const NUMBER_WORDS: &[(&str, &str, u128)] = &[
    ("zero", "zeroth", 0),
    ("one", "first", 1),
    ("two", "second", 2),
    ("three", "third", 3),
    ("four", "fourth", 4),
    ("five", "fifth", 5),
    ("six", "sixth", 6),
    ("seven", "seventh", 7),
    ("eight", "eighth", 8),
    ("nine", "ninth", 9),
    ("ten", "tenth", 10),
    ("eleven", "eleventh", 11),
    ("twelve", "twelfth", 12),
    ("thirteen", "thirteenth", 13),
    ("fourteen", "fourteenth", 14),
    ("fifteen", "fifteenth", 15),
    ("sixteen", "sixteenth", 16),
    ("seventeen", "seventeenth", 17),
    ("eighteen", "eighteenth", 18),
    ("nineteen", "nineteenth", 19),
    ("twenty", "twentieth", 20),
    ("thirty", "thirtieth", 30),
    ("forty", "fortieth", 40),
    ("fifty", "fiftieth", 50),
    ("sixty", "sixtieth", 60),
    ("seventy", "seventieth", 70),
    ("eighty", "eightieth", 80),
    ("ninety", "ninetieth", 90),
    ("hundred", "hundredth", 100),
    ("thousand", "thousandth", 1_000),
    ("million", "millionth", 1_000_000),
    ("billion", "billionth", 1_000_000_000),
    ("trillion", "trillionth", 1_000_000_000_000),
    ("quadrillion", "quadrillionth", 1_000_000_000_000_000),
    ("quintillion", "quintillionth", 1_000_000_000_000_000_000),
];

/// Looks up a number word (case-insensitive).
#[must_use]
pub fn number_word(word: &str) -> Option<NumberWord> {
    let lower = word.to_lowercase();
    NUMBER_WORDS.iter().find_map(|(cardinal, ordinal, value)| {
        if *cardinal == lower {
            Some(NumberWord {
                value: *value,
                ordinal: false,
            })
        } else if *ordinal == lower {
            Some(NumberWord {
                value: *value,
                ordinal: true,
            })
        } else {
            None
        }
    })
}

/// Returns the canonical lowercase name of a primitive type keyword.
#[must_use]
pub fn canonical_type_name(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    PRIMITIVE_TYPES
        .iter()
        .find(|(spelling, _)| *spelling == lower)
        .map(|(_, canonical)| *canonical)
}

/// Classifies a word against the keyword table.
///
/// Returns [`TokenKind::Unknown`] for words that are not keywords.
#[must_use]
pub fn classify_word(word: &str) -> TokenKind {
    let lower = word.to_lowercase();
    if let Some(number) = number_word(&lower) {
        return if number.ordinal {
            TokenKind::OrdinalWord
        } else {
            TokenKind::NumberWord
        };
    }
    if canonical_type_name(&lower).is_some() {
        return TokenKind::PrimitiveType;
    }
    keyword_kind(&lower).unwrap_or(TokenKind::Unknown)
}

fn keyword_kind(lower: &str) -> Option<TokenKind> {
    let kind = match lower {
        "true" | "false" => TokenKind::BooleanLiteral,
        "null" | "nothing" => TokenKind::NullLiteral,
        "point" => TokenKind::Point,
        "and" => TokenKind::And,
        "architecture" => TokenKind::Architecture,
        "as" => TokenKind::As,
        "at" => TokenKind::At,
        "beginning" => TokenKind::Beginning,
        "bitwise" => TokenKind::Bitwise,
        "both" => TokenKind::Both,
        "break" => TokenKind::Break,
        "by" => TokenKind::By,
        "call" => TokenKind::Call,
        "continue" => TokenKind::Continue,
        "decrement" => TokenKind::Decrement,
        "define" => TokenKind::Define,
        "difference" => TokenKind::Difference,
        "each" => TokenKind::Each,
        "either" => TokenKind::Either,
        "ending" => TokenKind::Ending,
        "equal" => TokenKind::Equal,
        "execute" => TokenKind::Execute,
        "fin" => TokenKind::Fin,
        "following" => TokenKind::Following,
        "for" => TokenKind::For,
        "from" => TokenKind::From,
        "function" => TokenKind::Function,
        "go" => TokenKind::Go,
        "greater" => TokenKind::Greater,
        "if" => TokenKind::If,
        "import" => TokenKind::Import,
        "in" => TokenKind::In,
        "increment" => TokenKind::Increment,
        "index" => TokenKind::Index,
        "is" => TokenKind::Is,
        "items" => TokenKind::Items,
        "iterate" => TokenKind::Iterate,
        "last" => TokenKind::Last,
        "left" => TokenKind::Left,
        "less" => TokenKind::Less,
        "modulo" => TokenKind::Modulo,
        "not" => TokenKind::Not,
        "of" => TokenKind::Of,
        "or" => TokenKind::Or,
        "otherwise" => TokenKind::Otherwise,
        "over" => TokenKind::Over,
        "power" => TokenKind::Power,
        "product" => TokenKind::Product,
        "program" => TokenKind::Program,
        "quotient" => TokenKind::Quotient,
        "raised" => TokenKind::Raised,
        "return" => TokenKind::Return,
        "right" => TokenKind::Right,
        "rotated" => TokenKind::Rotated,
        "s" => TokenKind::S,
        "set" => TokenKind::Set,
        "shifted" => TokenKind::Shifted,
        "structure" => TokenKind::Structure,
        "sum" => TokenKind::Sum,
        "than" => TokenKind::Than,
        "the" => TokenKind::The,
        "then" => TokenKind::Then,
        "to" => TokenKind::To,
        "type" => TokenKind::Type,
        "value" => TokenKind::Value,
        "while" => TokenKind::While,
        "with" => TokenKind::With,
        "xor" => TokenKind::Xor,
        _ => return None,
    };
    Some(kind)
}

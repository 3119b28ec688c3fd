//! Expression grammar rules.
//!
//! Single-token forms come first, then composite forms ordered so that a
//! construct which is a strict sub-case of another is tried before it.

use prosaic_foundation::Position;

use super::{GrammarRule, ParseSession};
use crate::ast::{
    ComparisonOperator, Expression, IndexSelector, LogicalOperator, MathOperator, Statement,
};
use crate::keywords::canonical_type_name;
use crate::navigator::{
    matching_close, top_layer_indices_of, top_layer_indices_of_x_before_y,
    top_layer_indices_where, try_first_top_layer_index_of, try_last_top_layer_index_of,
};
use crate::token::{IdentifierCategory, Token, TokenKind};

/// The expression rules, in registration order.
#[must_use]
pub fn rules() -> Vec<Box<dyn GrammarRule<Expression>>> {
    vec![
        Box::new(LiteralRule),
        Box::new(IdentifierRule),
        Box::new(GroupingRule),
        Box::new(ParameterListRule),
        Box::new(LogicalRule),
        Box::new(NotRule),
        Box::new(ComparisonRule),
        Box::new(NullCheckRule),
        Box::new(TypeCheckRule),
        Box::new(CallRule),
        Box::new(ListRule),
        Box::new(InfixMathRule),
        Box::new(HeaderMathRule),
        Box::new(BitwiseNotRule),
        Box::new(MemberAccessRule),
        Box::new(ArrayAccessRule),
        Box::new(IndexRule),
        Box::new(IncrementRule),
    ]
}

fn start_of(tokens: &[Token]) -> Position {
    tokens
        .first()
        .map_or_else(Position::at_start, |token| token.position.clone())
}

/// Parses both sides of a split at `index`. The operator may not be the
/// first or last token.
fn parse_split(
    session: &ParseSession<'_, '_>,
    tokens: &[Token],
    index: usize,
) -> Option<(Expression, Expression)> {
    if index == 0 || index + 1 >= tokens.len() {
        return None;
    }
    let left = session.parse_expression(&tokens[..index])?;
    let right = session.parse_expression(&tokens[index + 1..])?;
    Some((left, right))
}

/// Splits `a, b, and c` into its items. Commas are collected up to the
/// first top-layer `, and`, which separates the final item.
fn split_list(tokens: &[Token]) -> Option<Vec<&[Token]>> {
    let mut boundaries =
        top_layer_indices_of_x_before_y(tokens, TokenKind::Comma, TokenKind::CommaAnd);
    if let Some(and) = try_first_top_layer_index_of(tokens, TokenKind::CommaAnd) {
        boundaries.push(and);
    }

    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    for boundary in boundaries {
        segments.push(&tokens[start..boundary]);
        start = boundary + 1;
    }
    segments.push(&tokens[start..]);

    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// `"text"`, `` `c` ``, `42`, `true`, `null`
struct LiteralRule;

impl GrammarRule<Expression> for LiteralRule {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn priority(&self) -> u32 {
        0
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Expression> {
        let [token] = tokens else {
            return None;
        };
        let position = token.position.clone();
        let value = token.raw.clone();
        match token.kind {
            TokenKind::StringLiteral => Some(Expression::StringLiteral { value, position }),
            TokenKind::CharLiteral => Some(Expression::CharLiteral { value, position }),
            TokenKind::NumberLiteral => Some(Expression::NumberLiteral { value, position }),
            TokenKind::BooleanLiteral => Some(Expression::BooleanLiteral {
                value: value.eq_ignore_ascii_case("true"),
                position,
            }),
            TokenKind::NullLiteral => Some(Expression::NullLiteral { position }),
            _ => None,
        }
    }
}

/// `$name`, `@name`, `&name`, `:name`, `~name`, `integer`
struct IdentifierRule;

impl GrammarRule<Expression> for IdentifierRule {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn priority(&self) -> u32 {
        5
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Expression> {
        let [token] = tokens else {
            return None;
        };
        let (name, category) = match token.kind.identifier_category() {
            Some(category) => (token.name().to_string(), category),
            None if token.kind == TokenKind::PrimitiveType => (
                canonical_type_name(&token.raw)?.to_string(),
                IdentifierCategory::Type,
            ),
            None => return None,
        };
        Some(Expression::Identifier {
            name,
            category,
            position: token.position.clone(),
        })
    }
}

/// `( expr )`
struct GroupingRule;

impl GrammarRule<Expression> for GroupingRule {
    fn name(&self) -> &'static str {
        "grouping"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        if tokens.len() < 3 || tokens[0].kind != TokenKind::ParenOpen {
            return None;
        }
        if matching_close(tokens, 0)? != tokens.len() - 1 {
            return None;
        }
        session.parse_expression(&tokens[1..tokens.len() - 1])
    }
}

/// `; $a as integer, $b as float, and $c as string`
struct ParameterListRule;

impl GrammarRule<Expression> for ParameterListRule {
    fn name(&self) -> &'static str {
        "parameter list"
    }

    fn priority(&self) -> u32 {
        15
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::Semicolon || rest.is_empty() {
            return None;
        }
        let parameters = split_list(rest)?
            .into_iter()
            .map(|segment| match session.parse_statement(segment)? {
                Statement::VariableDefinition(definition) => Some(definition),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Expression::StructParameterList {
            parameters,
            position: first.position.clone(),
        })
    }
}

/// `both A and B`, `either A or B`
struct LogicalRule;

impl GrammarRule<Expression> for LogicalRule {
    fn name(&self) -> &'static str {
        "logical"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        let (operator, connective) = match first.kind {
            TokenKind::Both => (LogicalOperator::And, TokenKind::And),
            TokenKind::Either => (LogicalOperator::Or, TokenKind::Or),
            _ => return None,
        };
        top_layer_indices_of(rest, connective)
            .into_iter()
            .find_map(|index| parse_split(session, rest, index))
            .map(|(left, right)| Expression::Logical {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                position: first.position.clone(),
            })
    }
}

/// `not A`
struct NotRule;

impl GrammarRule<Expression> for NotRule {
    fn name(&self) -> &'static str {
        "not"
    }

    fn priority(&self) -> u32 {
        25
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::Not {
            return None;
        }
        let operand = session.parse_expression(rest)?;
        Some(Expression::Not {
            operand: Box::new(operand),
            position: first.position.clone(),
        })
    }
}

/// `A is [not] equal to B` and the other comparators.
struct ComparisonRule;

impl ComparisonRule {
    fn operator(kind: TokenKind) -> ComparisonOperator {
        match kind {
            TokenKind::EqualTo => ComparisonOperator::Equal,
            TokenKind::LessThan => ComparisonOperator::LessThan,
            TokenKind::LessThanOrEqualTo => ComparisonOperator::LessThanOrEqual,
            TokenKind::GreaterThan => ComparisonOperator::GreaterThan,
            TokenKind::GreaterThanOrEqualTo => ComparisonOperator::GreaterThanOrEqual,
            other => unreachable!("{other} is not a comparator"),
        }
    }

    fn parse_at(
        tokens: &[Token],
        index: usize,
        session: &ParseSession<'_, '_>,
    ) -> Option<Expression> {
        let (left_end, negated) = match &tokens[..index] {
            [.., is, not] if is.kind == TokenKind::Is && not.kind == TokenKind::Not => {
                (index - 2, true)
            }
            [.., is] if is.kind == TokenKind::Is => (index - 1, false),
            _ => return None,
        };
        if left_end == 0 || index + 1 >= tokens.len() {
            return None;
        }
        let left = session.parse_expression(&tokens[..left_end])?;
        let right = session.parse_expression(&tokens[index + 1..])?;

        let mut operator = Self::operator(tokens[index].kind);
        if negated {
            operator = operator.inverted();
        }
        Some(Expression::Comparison {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            position: start_of(tokens),
        })
    }
}

impl GrammarRule<Expression> for ComparisonRule {
    fn name(&self) -> &'static str {
        "comparison"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        top_layer_indices_where(tokens, TokenKind::is_comparator)
            .into_iter()
            .find_map(|index| Self::parse_at(tokens, index, session))
    }
}

/// `A is null`, `A is not null`
struct NullCheckRule;

impl GrammarRule<Expression> for NullCheckRule {
    fn name(&self) -> &'static str {
        "null check"
    }

    fn priority(&self) -> u32 {
        32
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (last, operand) = tokens.split_last()?;
        let negated = match last.kind {
            TokenKind::IsNull => false,
            TokenKind::IsNotNull => true,
            _ => return None,
        };
        let operand = session.parse_expression(operand)?;
        Some(Expression::NullCheck {
            operand: Box::new(operand),
            negated,
            position: start_of(tokens),
        })
    }
}

/// `A is of type T`
struct TypeCheckRule;

impl GrammarRule<Expression> for TypeCheckRule {
    fn name(&self) -> &'static str {
        "type check"
    }

    fn priority(&self) -> u32 {
        34
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let index = try_first_top_layer_index_of(tokens, TokenKind::IsOfType)?;
        let (operand, data_type) = parse_split(session, tokens, index)?;
        if !data_type.is_type_reference() {
            return None;
        }
        Some(Expression::TypeCheck {
            operand: Box::new(operand),
            data_type: Box::new(data_type),
            position: start_of(tokens),
        })
    }
}

/// `call @f [with ARGS]`
struct CallRule;

impl GrammarRule<Expression> for CallRule {
    fn name(&self) -> &'static str {
        "call"
    }

    fn priority(&self) -> u32 {
        40
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::Call {
            return None;
        }
        let (target, arguments) = match try_first_top_layer_index_of(rest, TokenKind::With) {
            Some(with) => (&rest[..with], Some(&rest[with + 1..])),
            None => (rest, None),
        };

        let target = session.parse_expression(target)?;
        let callable = matches!(
            target,
            Expression::Identifier {
                category: IdentifierCategory::Function,
                ..
            } | Expression::MemberAccess { .. }
        );
        if !callable {
            return None;
        }

        let arguments = match arguments {
            Some(arguments) => Some(Box::new(session.parse_expression(arguments)?)),
            None => None,
        };
        Some(Expression::FunctionCall {
            target: Box::new(target),
            arguments,
            position: first.position.clone(),
        })
    }
}

/// `A, B, and C`
struct ListRule;

impl GrammarRule<Expression> for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn priority(&self) -> u32 {
        45
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        try_first_top_layer_index_of(tokens, TokenKind::CommaAnd)?;
        let items = split_list(tokens)?
            .into_iter()
            .map(|segment| session.parse_expression(segment))
            .collect::<Option<Vec<_>>>()?;
        Some(Expression::List {
            items,
            position: start_of(tokens),
        })
    }
}

/// Infix operator kinds, loosest first.
const INFIX_OPERATORS: &[TokenKind] = &[
    TokenKind::BitwiseOr,
    TokenKind::BitwiseXor,
    TokenKind::BitwiseAnd,
    TokenKind::ShiftedLeftBy,
    TokenKind::ShiftedRightBy,
    TokenKind::RotatedLeftBy,
    TokenKind::RotatedRightBy,
    TokenKind::Modulo,
    TokenKind::RaisedToThePowerOf,
];

/// `A modulo B`, `A raised to the power of B`, `A shifted left by B`, ...
struct InfixMathRule;

impl InfixMathRule {
    fn operator(kind: TokenKind) -> MathOperator {
        match kind {
            TokenKind::BitwiseOr => MathOperator::BitwiseOr,
            TokenKind::BitwiseXor => MathOperator::BitwiseXor,
            TokenKind::BitwiseAnd => MathOperator::BitwiseAnd,
            TokenKind::ShiftedLeftBy => MathOperator::ShiftLeft,
            TokenKind::ShiftedRightBy => MathOperator::ShiftRight,
            TokenKind::RotatedLeftBy => MathOperator::RotateLeft,
            TokenKind::RotatedRightBy => MathOperator::RotateRight,
            TokenKind::Modulo => MathOperator::Modulo,
            TokenKind::RaisedToThePowerOf => MathOperator::Power,
            other => unreachable!("{other} is not an infix operator"),
        }
    }
}

impl GrammarRule<Expression> for InfixMathRule {
    fn name(&self) -> &'static str {
        "infix math"
    }

    fn priority(&self) -> u32 {
        50
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        INFIX_OPERATORS.iter().find_map(|&kind| {
            // Power is right-associative; everything else groups to the left.
            let index = if kind == TokenKind::RaisedToThePowerOf {
                try_first_top_layer_index_of(tokens, kind)
            } else {
                try_last_top_layer_index_of(tokens, kind)
            }?;
            let (left, right) = parse_split(session, tokens, index)?;
            Some(Expression::MathOperation {
                operator: Self::operator(kind),
                left: Box::new(left),
                right: Box::new(right),
                position: start_of(tokens),
            })
        })
    }
}

/// `the sum of A and B`, and difference, product, quotient.
struct HeaderMathRule;

impl GrammarRule<Expression> for HeaderMathRule {
    fn name(&self) -> &'static str {
        "header math"
    }

    fn priority(&self) -> u32 {
        55
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        let operator = match first.kind {
            TokenKind::SumOf => MathOperator::Add,
            TokenKind::DifferenceOf => MathOperator::Subtract,
            TokenKind::ProductOf => MathOperator::Multiply,
            TokenKind::QuotientOf => MathOperator::Divide,
            _ => return None,
        };
        top_layer_indices_of(rest, TokenKind::And)
            .into_iter()
            .find_map(|index| parse_split(session, rest, index))
            .map(|(left, right)| Expression::MathOperation {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                position: first.position.clone(),
            })
    }
}

/// `bitwise not A`
struct BitwiseNotRule;

impl GrammarRule<Expression> for BitwiseNotRule {
    fn name(&self) -> &'static str {
        "bitwise not"
    }

    fn priority(&self) -> u32 {
        58
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::BitwiseNot {
            return None;
        }
        let operand = session.parse_expression(rest)?;
        Some(Expression::BitwiseNot {
            operand: Box::new(operand),
            position: first.position.clone(),
        })
    }
}

/// `$owner's MEMBER`
struct MemberAccessRule;

impl GrammarRule<Expression> for MemberAccessRule {
    fn name(&self) -> &'static str {
        "member access"
    }

    fn priority(&self) -> u32 {
        60
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        if tokens.len() < 3 || tokens[1].kind != TokenKind::Possessive {
            return None;
        }
        let owner = IdentifierRule.try_parse(&tokens[..1], session)?;
        if !owner.as_identifier()?.1.is_container() {
            return None;
        }
        let member = session.parse_expression(&tokens[2..])?;
        Some(Expression::MemberAccess {
            owner: Box::new(owner),
            member: Box::new(member),
            position: start_of(tokens),
        })
    }
}

/// `the INDEX of TARGET`
struct ArrayAccessRule;

impl GrammarRule<Expression> for ArrayAccessRule {
    fn name(&self) -> &'static str {
        "array access"
    }

    fn priority(&self) -> u32 {
        65
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::The {
            return None;
        }
        top_layer_indices_of(rest, TokenKind::Of)
            .into_iter()
            .find_map(|of| {
                let (index, target) = parse_split(session, rest, of)?;
                (matches!(index, Expression::Index { .. }) && target.is_place())
                    .then_some((index, target))
            })
            .map(|(index, target)| Expression::ArrayAccess {
                index: Box::new(index),
                target: Box::new(target),
                position: first.position.clone(),
            })
    }
}

/// `third [from last]`, `last`, `index E [from last]`,
/// `items beginning at E [ending at E]`, `items ending at E`
struct IndexRule;

impl IndexRule {
    fn single(index: Expression, from_last: bool, position: Position) -> Expression {
        Expression::Index {
            selector: IndexSelector::Single {
                index: Box::new(index),
                from_last,
            },
            position,
        }
    }

    fn range(tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<IndexSelector> {
        let (bound, rest) = tokens.split_first()?;
        match bound.kind {
            TokenKind::BeginningAt => {
                let (start, end) = match try_first_top_layer_index_of(rest, TokenKind::EndingAt) {
                    Some(ending) => (
                        &rest[..ending],
                        Some(session.parse_expression(&rest[ending + 1..])?),
                    ),
                    None => (rest, None),
                };
                Some(IndexSelector::Range {
                    start: Some(Box::new(session.parse_expression(start)?)),
                    end: end.map(Box::new),
                })
            }
            TokenKind::EndingAt => Some(IndexSelector::Range {
                start: None,
                end: Some(Box::new(session.parse_expression(rest)?)),
            }),
            _ => None,
        }
    }
}

impl GrammarRule<Expression> for IndexRule {
    fn name(&self) -> &'static str {
        "index"
    }

    fn priority(&self) -> u32 {
        70
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        let first = tokens.first()?;
        let position = first.position.clone();

        let (body, from_last) = match tokens.split_last() {
            Some((last, body)) if last.kind == TokenKind::FromLast => (body, true),
            _ => (tokens, false),
        };

        match body {
            [ordinal] if ordinal.kind == TokenKind::OrdinalLiteral => {
                let index = Expression::NumberLiteral {
                    value: ordinal.raw.clone(),
                    position: position.clone(),
                };
                Some(Self::single(index, from_last, position))
            }
            [last] if last.kind == TokenKind::Last && !from_last => {
                let index = Expression::NumberLiteral {
                    value: "1".to_string(),
                    position: position.clone(),
                };
                Some(Self::single(index, true, position))
            }
            [keyword, rest @ ..] if keyword.kind == TokenKind::Index => {
                let index = session.parse_expression(rest)?;
                Some(Self::single(index, from_last, position))
            }
            [keyword, rest @ ..] if keyword.kind == TokenKind::Items && !from_last => {
                Some(Expression::Index {
                    selector: Self::range(rest, session)?,
                    position,
                })
            }
            _ => None,
        }
    }
}

/// `increment X`, `X ++`, `decrement X`, `X --`
struct IncrementRule;

impl GrammarRule<Expression> for IncrementRule {
    fn name(&self) -> &'static str {
        "increment"
    }

    fn priority(&self) -> u32 {
        75
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Expression> {
        if tokens.len() < 2 {
            return None;
        }
        let is_step = |token: &Token| {
            matches!(token.kind, TokenKind::Increment | TokenKind::Decrement)
        };
        let (step, operand) = if is_step(&tokens[0]) {
            (tokens[0].kind, &tokens[1..])
        } else if is_step(&tokens[tokens.len() - 1]) {
            (tokens[tokens.len() - 1].kind, &tokens[..tokens.len() - 1])
        } else {
            return None;
        };

        let operand = Box::new(session.parse_expression(operand)?);
        if !operand.is_place() {
            return None;
        }
        let position = start_of(tokens);
        Some(match step {
            TokenKind::Increment => Expression::Increment { operand, position },
            TokenKind::Decrement => Expression::Decrement { operand, position },
            other => unreachable!("{other} is not a step operator"),
        })
    }
}

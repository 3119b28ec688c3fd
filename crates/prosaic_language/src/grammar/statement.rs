//! Statement grammar rules.

use prosaic_foundation::Position;

use super::{GrammarRule, ParseSession};
use crate::ast::{Expression, ImportAlias, Statement, VariableDefinition};
use crate::navigator::{
    first_top_layer_index_of_from, matching_close, top_layer_indices_of,
    try_first_top_layer_index_of,
};
use crate::token::{Token, TokenKind};

/// The statement rules, in registration order.
#[must_use]
pub fn rules() -> Vec<Box<dyn GrammarRule<Statement>>> {
    vec![
        Box::new(BlockRule),
        Box::new(LabelRule),
        Box::new(GotoRule),
        Box::new(BreakRule),
        Box::new(ContinueRule),
        Box::new(ReturnRule),
        Box::new(ImportRule),
        Box::new(EntryPointRule),
        Box::new(ArchitectureRule),
        Box::new(FunctionDefinitionRule),
        Box::new(StructureDefinitionRule),
        Box::new(VariableDefinitionRule),
        Box::new(IfRule),
        Box::new(WhileRule),
        Box::new(ForEachRule),
        Box::new(IterateRule),
        Box::new(AssignmentRule),
        Box::new(StandaloneExpressionRule),
    ]
}

/// Splits `HEAD: BODY` at the first top-layer colon at or after `from`,
/// parsing the body as a statement.
/// True if the token after `index` is of `kind`.
fn followed_by(tokens: &[Token], index: usize, kind: TokenKind) -> bool {
    tokens.get(index + 1).is_some_and(|next| next.kind == kind)
}

fn split_body<'t>(
    tokens: &'t [Token],
    from: usize,
    session: &ParseSession<'_, '_>,
) -> Option<(&'t [Token], Statement)> {
    let colon = first_top_layer_index_of_from(tokens, TokenKind::Colon, from).ok()?;
    let body = session.parse_statement(&tokens[colon + 1..])?;
    Some((&tokens[..colon], body))
}

/// Parses an optional `; PARAMS` tail into its definitions.
fn parameters(tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Vec<VariableDefinition>> {
    if tokens.is_empty() {
        return Some(Vec::new());
    }
    match session.parse_expression(tokens)? {
        Expression::StructParameterList { parameters, .. } => Some(parameters),
        _ => None,
    }
}

/// `execute the following; S; S; fin`
struct BlockRule;

impl GrammarRule<Statement> for BlockRule {
    fn name(&self) -> &'static str {
        "block"
    }

    fn priority(&self) -> u32 {
        0
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let first = tokens.first()?;
        if first.kind != TokenKind::BlockStart || matching_close(tokens, 0)? != tokens.len() - 1 {
            return None;
        }
        let statements = session.parse_statements(&tokens[1..tokens.len() - 1])?;
        Some(Statement::Block {
            statements,
            position: first.position.clone(),
        })
    }
}

/// `:name:`
struct LabelRule;

impl GrammarRule<Statement> for LabelRule {
    fn name(&self) -> &'static str {
        "label"
    }

    fn priority(&self) -> u32 {
        5
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Statement> {
        match tokens {
            [label, colon]
                if label.kind == TokenKind::LabelIdentifier && colon.kind == TokenKind::Colon =>
            {
                Some(Statement::Label {
                    name: label.name().to_string(),
                    position: label.position.clone(),
                })
            }
            _ => None,
        }
    }
}

/// `go to :name`
struct GotoRule;

impl GrammarRule<Statement> for GotoRule {
    fn name(&self) -> &'static str {
        "goto"
    }

    fn priority(&self) -> u32 {
        5
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Statement> {
        match tokens {
            [goto, label]
                if goto.kind == TokenKind::GoTo && label.kind == TokenKind::LabelIdentifier =>
            {
                Some(Statement::Goto {
                    label: label.name().to_string(),
                    position: goto.position.clone(),
                })
            }
            _ => None,
        }
    }
}

struct BreakRule;

impl GrammarRule<Statement> for BreakRule {
    fn name(&self) -> &'static str {
        "break"
    }

    fn priority(&self) -> u32 {
        5
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Statement> {
        match tokens {
            [token] if token.kind == TokenKind::Break => Some(Statement::Break {
                position: token.position.clone(),
            }),
            _ => None,
        }
    }
}

struct ContinueRule;

impl GrammarRule<Statement> for ContinueRule {
    fn name(&self) -> &'static str {
        "continue"
    }

    fn priority(&self) -> u32 {
        5
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Statement> {
        match tokens {
            [token] if token.kind == TokenKind::Continue => Some(Statement::Continue {
                position: token.position.clone(),
            }),
            _ => None,
        }
    }
}

/// `return [E]`
struct ReturnRule;

impl GrammarRule<Statement> for ReturnRule {
    fn name(&self) -> &'static str {
        "return"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::Return {
            return None;
        }
        let value = if rest.is_empty() {
            None
        } else {
            Some(session.parse_expression(rest)?)
        };
        Some(Statement::Return {
            value,
            position: first.position.clone(),
        })
    }
}

/// `import "path" [as ~alias]`, `import "path" as ~`
struct ImportRule;

impl GrammarRule<Statement> for ImportRule {
    fn name(&self) -> &'static str {
        "import"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn try_parse(&self, tokens: &[Token], _session: &ParseSession<'_, '_>) -> Option<Statement> {
        let [import, path, rest @ ..] = tokens else {
            return None;
        };
        if import.kind != TokenKind::Import || path.kind != TokenKind::StringLiteral {
            return None;
        }
        let alias = match rest {
            [] => None,
            [as_, alias] if as_.kind == TokenKind::As => match alias.kind {
                TokenKind::AliasIdentifier => Some(ImportAlias::Named(alias.name().to_string())),
                TokenKind::Wildcard => Some(ImportAlias::Wildcard),
                _ => return None,
            },
            _ => return None,
        };
        Some(Statement::Import {
            path: path.raw.clone(),
            alias,
            position: import.position.clone(),
        })
    }
}

/// `program: S`
struct EntryPointRule;

impl GrammarRule<Statement> for EntryPointRule {
    fn name(&self) -> &'static str {
        "entry point"
    }

    fn priority(&self) -> u32 {
        15
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::EntryPoint {
            return None;
        }
        let body = session.parse_statement(rest)?;
        Some(Statement::EntryPoint {
            body: Box::new(body),
            position: first.position.clone(),
        })
    }
}

/// `for architecture "name": S`
struct ArchitectureRule;

impl GrammarRule<Statement> for ArchitectureRule {
    fn name(&self) -> &'static str {
        "architecture"
    }

    fn priority(&self) -> u32 {
        15
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let [tag, name, colon, body @ ..] = tokens else {
            return None;
        };
        if tag.kind != TokenKind::ForArchitecture
            || name.kind != TokenKind::StringLiteral
            || colon.kind != TokenKind::Colon
        {
            return None;
        }
        let body = session.parse_statement(body)?;
        Some(Statement::Architecture {
            name: name.raw.clone(),
            body: Box::new(body),
            position: tag.position.clone(),
        })
    }
}

/// `define function @f[; PARAMS]: S`
struct FunctionDefinitionRule;

impl GrammarRule<Statement> for FunctionDefinitionRule {
    fn name(&self) -> &'static str {
        "function definition"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let [define, name, ..] = tokens else {
            return None;
        };
        if define.kind != TokenKind::DefineFunction || name.kind != TokenKind::FunctionIdentifier {
            return None;
        }
        let (head, body) = split_body(tokens, 2, session)?;
        let parameters = parameters(&head[2..], session)?;
        Some(Statement::FunctionDefinition {
            name: name.name().to_string(),
            parameters,
            body: Box::new(body),
            position: define.position.clone(),
        })
    }
}

/// `define structure &s; PARAMS`
struct StructureDefinitionRule;

impl GrammarRule<Statement> for StructureDefinitionRule {
    fn name(&self) -> &'static str {
        "structure definition"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let [define, name, fields @ ..] = tokens else {
            return None;
        };
        if define.kind != TokenKind::DefineStructure || name.kind != TokenKind::StructureIdentifier
        {
            return None;
        }
        let fields = parameters(fields, session)?;
        Some(Statement::StructureDefinition {
            name: name.name().to_string(),
            fields,
            position: define.position.clone(),
        })
    }
}

/// `[define] $v as T [with value E]`
struct VariableDefinitionRule;

impl GrammarRule<Statement> for VariableDefinitionRule {
    fn name(&self) -> &'static str {
        "variable definition"
    }

    fn priority(&self) -> u32 {
        25
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let position = tokens.first()?.position.clone();
        let tokens = match tokens {
            [define, rest @ ..] if define.kind == TokenKind::Define => rest,
            _ => tokens,
        };
        let [variable, as_, rest @ ..] = tokens else {
            return None;
        };
        if variable.kind != TokenKind::VariableIdentifier || as_.kind != TokenKind::As {
            return None;
        }

        let with_value = top_layer_indices_of(rest, TokenKind::With)
            .into_iter()
            .find(|&with| followed_by(rest, with, TokenKind::Value));
        let (type_tokens, value) = match with_value {
            Some(with) => (
                &rest[..with],
                Some(session.parse_expression(&rest[with + 2..])?),
            ),
            None => (rest, None),
        };

        let data_type = session.parse_expression(type_tokens)?;
        if !data_type.is_type_reference() {
            return None;
        }
        Some(Statement::VariableDefinition(VariableDefinition {
            name: variable.name().to_string(),
            data_type,
            value,
            position,
        }))
    }
}

/// `if C then S [otherwise S]`
///
/// A trailing `otherwise` binds to the innermost `if` that can take it.
struct IfRule;

impl IfRule {
    fn parse_branches(
        tokens: &[Token],
        session: &ParseSession<'_, '_>,
    ) -> Option<(Statement, Option<Statement>)> {
        if let Some(then_branch) = session.parse_statement(tokens) {
            return Some((then_branch, None));
        }
        top_layer_indices_of(tokens, TokenKind::Otherwise)
            .into_iter()
            .find_map(|otherwise| {
                let then_branch = session.parse_statement(&tokens[..otherwise])?;
                let else_branch = session.parse_statement(&tokens[otherwise + 1..])?;
                Some((then_branch, Some(else_branch)))
            })
    }
}

impl GrammarRule<Statement> for IfRule {
    fn name(&self) -> &'static str {
        "if"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let (first, rest) = tokens.split_first()?;
        if first.kind != TokenKind::If {
            return None;
        }
        top_layer_indices_of(rest, TokenKind::Then)
            .into_iter()
            .find_map(|then| {
                let condition = session.parse_expression(&rest[..then])?;
                let (then_branch, else_branch) = Self::parse_branches(&rest[then + 1..], session)?;
                Some(Statement::If {
                    condition,
                    then_branch: Box::new(then_branch),
                    else_branch: else_branch.map(Box::new),
                    position: first.position.clone(),
                })
            })
    }
}

/// `while C: S`
struct WhileRule;

impl GrammarRule<Statement> for WhileRule {
    fn name(&self) -> &'static str {
        "while"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let first = tokens.first()?;
        if first.kind != TokenKind::While {
            return None;
        }
        let (head, body) = split_body(tokens, 1, session)?;
        let condition = session.parse_expression(&head[1..])?;
        Some(Statement::While {
            condition,
            body: Box::new(body),
            position: first.position.clone(),
        })
    }
}

/// `for each $v in E: S`
struct ForEachRule;

impl GrammarRule<Statement> for ForEachRule {
    fn name(&self) -> &'static str {
        "for each"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let [for_each, variable, in_, ..] = tokens else {
            return None;
        };
        if for_each.kind != TokenKind::ForEach
            || variable.kind != TokenKind::VariableIdentifier
            || in_.kind != TokenKind::In
        {
            return None;
        }
        let (head, body) = split_body(tokens, 3, session)?;
        let collection = session.parse_expression(&head[3..])?;
        Some(Statement::ForEach {
            collection,
            index: None,
            value: Some(variable.name().to_string()),
            body: Box::new(body),
            position: for_each.position.clone(),
        })
    }
}

/// `iterate over E [with index as $i] [and] [with value as $v]: S`
struct IterateRule;

impl IterateRule {
    /// Reads the binding clauses after the collection.
    fn bindings(clauses: &[Token]) -> Option<(Option<String>, Option<String>)> {
        let bound = |clause: &[Token], kind: TokenKind| match clause {
            [keyword, variable]
                if keyword.kind == kind && variable.kind == TokenKind::VariableIdentifier =>
            {
                Some(variable.name().to_string())
            }
            _ => None,
        };
        match clauses {
            [] => Some((None, None)),
            [_, _] => {
                if let Some(index) = bound(clauses, TokenKind::WithIndexAs) {
                    Some((Some(index), None))
                } else {
                    Some((None, Some(bound(clauses, TokenKind::WithValueAs)?)))
                }
            }
            [index_clause @ .., connective, _, _]
                if index_clause.len() == 2
                    && matches!(connective.kind, TokenKind::And | TokenKind::CommaAnd) =>
            {
                let index = bound(index_clause, TokenKind::WithIndexAs)?;
                let value = bound(&clauses[3..], TokenKind::WithValueAs)?;
                Some((Some(index), Some(value)))
            }
            [index_clause @ .., _, _] if index_clause.len() == 2 => {
                let index = bound(index_clause, TokenKind::WithIndexAs)?;
                let value = bound(&clauses[2..], TokenKind::WithValueAs)?;
                Some((Some(index), Some(value)))
            }
            _ => None,
        }
    }
}

impl GrammarRule<Statement> for IterateRule {
    fn name(&self) -> &'static str {
        "iterate"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let first = tokens.first()?;
        if first.kind != TokenKind::IterateOver {
            return None;
        }
        let (head, body) = split_body(tokens, 1, session)?;
        let head = &head[1..];

        let clauses_start = [TokenKind::WithIndexAs, TokenKind::WithValueAs]
            .into_iter()
            .filter_map(|kind| try_first_top_layer_index_of(head, kind))
            .min()
            .unwrap_or(head.len());
        let collection = session.parse_expression(&head[..clauses_start])?;
        let (index, value) = Self::bindings(&head[clauses_start..])?;

        Some(Statement::ForEach {
            collection,
            index,
            value,
            body: Box::new(body),
            position: first.position.clone(),
        })
    }
}

/// `set X to E`, `X is equal to E`
struct AssignmentRule;

impl AssignmentRule {
    fn assignment(
        target: &[Token],
        value: &[Token],
        position: Position,
        session: &ParseSession<'_, '_>,
    ) -> Option<Statement> {
        let target = session.parse_expression(target)?;
        if !target.is_place() {
            return None;
        }
        let value = session.parse_expression(value)?;
        Some(Statement::Assignment {
            target,
            value,
            position,
        })
    }
}

impl GrammarRule<Statement> for AssignmentRule {
    fn name(&self) -> &'static str {
        "assignment"
    }

    fn priority(&self) -> u32 {
        40
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        let first = tokens.first()?;
        let position = first.position.clone();

        if first.kind == TokenKind::Set {
            let to = try_first_top_layer_index_of(tokens, TokenKind::To)?;
            return Self::assignment(&tokens[1..to], &tokens[to + 1..], position, session);
        }

        let is = top_layer_indices_of(tokens, TokenKind::Is)
            .into_iter()
            .find(|&is| followed_by(tokens, is, TokenKind::EqualTo))?;
        Self::assignment(&tokens[..is], &tokens[is + 2..], position, session)
    }
}

/// Any expression that is legal on its own, such as a call.
struct StandaloneExpressionRule;

impl GrammarRule<Statement> for StandaloneExpressionRule {
    fn name(&self) -> &'static str {
        "standalone expression"
    }

    fn priority(&self) -> u32 {
        90
    }

    fn try_parse(&self, tokens: &[Token], session: &ParseSession<'_, '_>) -> Option<Statement> {
        session
            .parse_expression(tokens)
            .filter(Expression::is_standalone)
            .map(Statement::Expression)
    }
}

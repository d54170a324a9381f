use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{ParseError, Side},
    interpreter::{
        evaluator::core::Context,
        parser::{
            core::{ParseResult, parse_source},
            utils::split_arguments,
        },
        token::{Token, TokenKind},
    },
    util::num::parse_literal,
};

/// Parses an operand.
///
/// Operands are the atoms between operators:
/// - number literals, which may carry a folded minus sign,
/// - variable references,
/// - parenthesized text, parsed here as a nested expression,
/// - function calls, a function token followed by its parenthesized
///   arguments.
///
/// Grammar:
/// ```text
///     operand := number
///              | variable
///              | "(" expression ")"
///              | function "(" expression ("," expression)* ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the operand.
/// - `context`: Evaluation context used for nested text.
/// - `after`: The operator this operand belongs to on the right, if any.
///
/// # Errors
/// - `MissingOperand` if the stream ends or an operator comes next.
/// - `EmptyExpression` if there are no tokens at all.
pub(crate) fn parse_operand<'a, I>(tokens: &mut Peekable<I>,
                                   context: &Context,
                                   after: Option<&'a Token>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next_if(|token| !matches!(token.kind, TokenKind::Operator(_))) else {
        return Err(missing_operand(tokens.peek().copied(), after));
    };

    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::Variable => Ok(Expr::Variable { name: token.text.clone() }),
        TokenKind::Parentheses => parse_source(&token.text, context),
        TokenKind::Function => parse_function_call(token, tokens, context),
        TokenKind::Operator(_) | TokenKind::Start | TokenKind::End => {
            Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                              position: token.position, })
        },
    }
}

/// Builds the error for an operand that is not there.
///
/// `next` is the operator found instead, if any; `after` is the operator
/// that needed the operand on its right, if any.
fn missing_operand(next: Option<&Token>, after: Option<&Token>) -> ParseError {
    match (after, next) {
        (Some(op), _) => ParseError::MissingOperand { operator: op.text.clone(),
                                                      position: op.position,
                                                      side:     Side::Right, },
        (None, Some(op)) => ParseError::MissingOperand { operator: op.text.clone(),
                                                         position: op.position,
                                                         side:     Side::Left, },
        (None, None) => ParseError::EmptyExpression,
    }
}

/// Uses the precomputed value when there is one, otherwise parses the text.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    token.value
         .or_else(|| parse_literal(&token.text))
         .map(|value| Expr::Literal { value })
         .ok_or_else(|| ParseError::MalformedNumber { literal:  token.text.clone(),
                                                      position: token.position,
                                                      fragment: token.text.clone(), })
}

/// Parses a function call whose name token has just been consumed.
///
/// The argument text is split on every comma, including commas inside nested
/// parentheses, and each part is parsed as its own expression. The argument
/// count is checked when the call is evaluated.
fn parse_function_call<'a, I>(function: &Token,
                              tokens: &mut Peekable<I>,
                              context: &Context)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(arguments) = tokens.next_if(|token| token.kind == TokenKind::Parentheses) else {
        return Err(ParseError::UnexpectedToken { token:    function.to_string(),
                                                 position: function.position, });
    };

    let parsed = split_arguments(&arguments.text).map(|argument| parse_source(argument, context))
                                                 .collect::<ParseResult<Vec<_>>>()?;

    Ok(Expr::FunctionCall { name:      function.text.clone(),
                            arguments: parsed,
                            call:      format!("{}({})", function.text, arguments.text), })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::parser::core::parse_tokens;

    #[test]
    fn precomputed_number_skips_parsing() {
        let tokens = [Token::number(0.1 + 0.2, 0)];
        let expr = parse_tokens(&tokens, &Context::new()).unwrap();
        assert_eq!(expr, Expr::Literal { value: 0.1 + 0.2 });
    }

    #[test]
    fn nested_groups_are_parsed_eagerly() {
        let expr = parse_source("((1))", &Context::new()).unwrap();
        assert_eq!(expr, Expr::Literal { value: 1.0 });
    }

    #[test]
    fn empty_groups_and_arguments_are_empty_expressions() {
        let context = Context::new();
        assert_eq!(parse_source("()", &context).unwrap_err(), ParseError::EmptyExpression);
        assert_eq!(parse_source("sqrt()", &context).unwrap_err(), ParseError::EmptyExpression);
        assert_eq!(parse_source("pow(1,)", &context).unwrap_err(), ParseError::EmptyExpression);
    }

    #[test]
    fn call_text_is_kept_for_errors() {
        let expr = parse_source("root(8,1+2)", &Context::new()).unwrap();
        match expr {
            Expr::FunctionCall { name,
                                 arguments,
                                 call, } => {
                assert_eq!(name, "root");
                assert_eq!(arguments.len(), 2);
                assert_eq!(call, "root(8,1+2)");
            },
            other => panic!("expected a call, found {other:?}"),
        }
    }

    #[test]
    fn adjacent_operands_are_leftovers() {
        let err = parse_source("2(3)", &Context::new()).unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { token:    "(3)".to_string(),
                                                 position: 1, });
    }
}

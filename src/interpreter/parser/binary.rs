use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::Context,
        parser::{core::ParseResult, primary::parse_operand},
        token::{Token, TokenKind},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Evaluation context used for nested text.
/// - `after`: The operator this expression is the right operand of, if any.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             context: &Context,
                             after: Option<&'a Token>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, context, after)?;
    while let Some((token, op)) = take_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let right = parse_multiplicative(tokens, context, Some(token))?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `mod`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "mod") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   context: &Context,
                                   after: Option<&'a Token>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_exponent(tokens, context, after)?;
    while let Some((token, op)) =
        take_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
    {
        let right = parse_exponent(tokens, context, Some(token))?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation associates to the left like every other operator:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// The rule is: `exponent := operand ("^" operand)*`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             context: &Context,
                             after: Option<&'a Token>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens, context, after)?;
    while let Some((token, op)) = take_operator(tokens, &[BinaryOperator::Pow]) {
        let right = parse_operand(tokens, context, Some(token))?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Consumes the next token if it is one of `accepted`.
fn take_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepted: &[BinaryOperator])
                        -> Option<(&'a Token, BinaryOperator)>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next_if(|token| {
                          matches!(token.kind, TokenKind::Operator(op) if accepted.contains(&op))
                      })?;
    match token.kind {
        TokenKind::Operator(op) => Some((token, op)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{ParseError, Side},
        interpreter::{evaluator::core::Context, parser::core::parse_source},
    };

    fn tree(source: &str) -> String {
        parse_source(source, &Context::new()).unwrap().to_string()
    }

    #[test]
    fn precedence_levels() {
        assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(tree("2*3+4"), "((2 * 3) + 4)");
        assert_eq!(tree("2*3^2"), "(2 * (3 ^ 2))");
        assert_eq!(tree("7mod4*2"), "((7 mod 4) * 2)");
    }

    #[test]
    fn equal_precedence_is_left_to_right() {
        assert_eq!(tree("8-3-2"), "((8 - 3) - 2)");
        assert_eq!(tree("20/2/5"), "((20 / 2) / 5)");
        assert_eq!(tree("2^3^2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn folded_minus_binds_to_its_operand() {
        assert_eq!(tree("-2^2"), "(-2 ^ 2)");
        assert_eq!(tree("3*-1"), "(3 * -1)");
    }

    #[test]
    fn missing_operands_name_the_operator() {
        let context = Context::new();
        assert_eq!(parse_source("2+", &context).unwrap_err(),
                   ParseError::MissingOperand { operator: "+".to_string(),
                                                position: 1,
                                                side:     Side::Right, });
        assert_eq!(parse_source("*3", &context).unwrap_err(),
                   ParseError::MissingOperand { operator: "*".to_string(),
                                                position: 0,
                                                side:     Side::Left, });
        assert_eq!(parse_source("2*+3", &context).unwrap_err(),
                   ParseError::MissingOperand { operator: "*".to_string(),
                                                position: 1,
                                                side:     Side::Right, });
    }
}

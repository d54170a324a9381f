use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        parser::binary::parse_additive,
        token::Token,
        tokenizer::tokenize,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing over a token stream.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator without sentinels.
/// - `context`: Needed to tokenize parenthesized text and arguments.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, context, None)
}

/// Parses a complete token sequence, as returned by [`tokenize`].
///
/// Sentinels are skipped. Every token must belong to the expression: a token
/// left over once the expression is complete, as in `2(3)`, is an error.
///
/// # Errors
/// Returns a structural error for empty sequences, operators missing an
/// operand and leftover tokens, and any error from parsing nested text.
pub fn parse_tokens(tokens: &[Token], context: &Context) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().filter(|token| !token.is_sentinel()).peekable();
    let expr = parse_expression(&mut tokens, context)?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                 position: token.position, });
    }

    Ok(expr)
}

/// Tokenizes and parses a piece of text.
///
/// Parenthesized groups and function arguments are parsed through here, so
/// the whole tree is built before anything is evaluated.
///
/// # Example
/// ```
/// use calcline::interpreter::{evaluator::core::Context, parser::core::parse_source};
///
/// let expr = parse_source("2^3^2", &Context::new()).unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ 3) ^ 2)");
///
/// let expr = parse_source("1+2*sqrt(4)", &Context::new()).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * sqrt(4)))");
/// ```
pub fn parse_source(source: &str, context: &Context) -> ParseResult<Expr> {
    let tokens = tokenize(source, context)?;
    let expr = parse_tokens(&tokens, context)?;
    trace!(source, tree = %expr, "parsed");
    Ok(expr)
}

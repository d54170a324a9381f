use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Folds unary minus signs into the operand that follows them.
///
/// The parser only knows binary operators, so a `-` at the start of a
/// sequence or right after another operator is rewritten:
///
/// - followed by a number, it becomes part of the number (`-` `3` → `-3`);
/// - followed by a variable or parentheses, both become the parentheses
///   `0-(...)`;
/// - followed by a function call, the function and its arguments become the
///   parentheses `0-(name(...))`;
/// - otherwise it is left alone, and the parser reports the missing operand.
///
/// `fragment` is the text the tokens were scanned from, used in errors.
///
/// # Errors
/// Returns `DoubleNegation` if two `-` operators are adjacent, as in `x--2`.
/// Write `x-(-2)` instead.
///
/// # Example
/// ```
/// use calcline::interpreter::{evaluator::core::Context, token::render, tokenizer::tokenize};
///
/// // `tokenize` resolves negatives before returning.
/// let tokens = tokenize("-1-1+-2", &Context::new()).unwrap();
/// assert_eq!(render(&tokens), "-1-1+-2");
/// assert_eq!(tokens.len(), 7);
///
/// let tokens = tokenize("3*-(1+1)", &Context::new()).unwrap();
/// assert_eq!(render(&tokens), "3*(0-(1+1))");
/// ```
pub fn resolve_negatives(tokens: Vec<Token>, fragment: &str) -> ParseResult<Vec<Token>> {
    if let Some(pair) = tokens.windows(2).find(|pair| {
                                             pair[0].is_operator(BinaryOperator::Sub)
                                             && pair[1].is_operator(BinaryOperator::Sub)
                                         })
    {
        return Err(ParseError::DoubleNegation { position: pair[1].position,
                                                fragment: fragment.to_string(), });
    }

    let mut resolved = Vec::with_capacity(tokens.len());
    let mut after_operator = false;
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let unary = after_operator && token.is_operator(BinaryOperator::Sub);
        after_operator = matches!(token.kind, TokenKind::Operator(_) | TokenKind::Start);
        if !unary {
            resolved.push(token);
            continue;
        }

        let folded = match tokens.peek().map(|next| next.kind) {
            Some(TokenKind::Number) => tokens.next().map(|number| Token { kind:     TokenKind::Number,
                                                                          text:     format!("-{}", number.text),
                                                                          value:    number.value.map(|v| -v),
                                                                          position: token.position, }),
            Some(TokenKind::Variable | TokenKind::Parentheses) => tokens.next().map(|operand| {
                Token::new(TokenKind::Parentheses, format!("0-({})", operand.text), token.position)
            }),
            Some(TokenKind::Function) => {
                let function = tokens.next();
                let arguments = tokens.next_if(|next| next.kind == TokenKind::Parentheses);
                function.zip(arguments).map(|(function, arguments)| {
                    Token::new(TokenKind::Parentheses,
                               format!("0-({}({}))", function.text, arguments.text),
                               token.position)
                })
            },
            _ => None,
        };

        match folded {
            Some(folded) => {
                after_operator = false;
                resolved.push(folded);
            },
            None => resolved.push(token),
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{evaluator::core::Context, token::render, tokenizer::tokenize};

    fn context_with_x() -> Context {
        let mut context = Context::new();
        context.set_variable("x", 2.0);
        context
    }

    #[test]
    fn binary_minus_is_untouched() {
        let tokens = tokenize("5-3", &Context::new()).unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(tokens[2].is_operator(BinaryOperator::Sub));
    }

    #[test]
    fn leading_minus_merges_into_number() {
        let tokens = tokenize("-1-1+-2", &Context::new()).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["", "-1", "-", "1", "+", "-2", ""]);
        assert_eq!(tokens[1].position, 0);
    }

    #[test]
    fn precomputed_values_are_negated() {
        let tokens = vec![Token::start(),
                          Token::operator(BinaryOperator::Sub, 0),
                          Token::number(1.5, 1),
                          Token::end(2)];
        let resolved = resolve_negatives(tokens, "-1.5").unwrap();
        assert_eq!(resolved[1].value, Some(-1.5));
        assert_eq!(resolved[1].text, "-1.5");
    }

    #[test]
    fn variables_and_groups_become_subtractions() {
        let context = context_with_x();
        assert_eq!(render(&tokenize("-x", &context).unwrap()), "(0-(x))");
        assert_eq!(render(&tokenize("-(2)/4", &context).unwrap()), "(0-(2))/4");
        assert_eq!(render(&tokenize("2^-x", &context).unwrap()), "2^(0-(x))");
    }

    #[test]
    fn function_call_is_folded_whole() {
        let tokens = tokenize("1*-sqrt(4)+1", &Context::new()).unwrap();
        assert_eq!(render(&tokens), "1*(0-(sqrt(4)))+1");
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn double_minus_is_rejected() {
        let err = tokenize("2--2", &Context::new()).unwrap_err();
        assert_eq!(err,
                   ParseError::DoubleNegation { position: 2,
                                                fragment: "2--2".to_string(), });
        assert!(matches!(tokenize("x--2", &context_with_x()),
                         Err(ParseError::DoubleNegation { .. })));
    }

    #[test]
    fn minus_without_operand_passes_through() {
        let tokens = tokenize("3*-", &Context::new()).unwrap();
        assert_eq!(render(&tokens), "3*-");
        assert!(tokens[3].is_operator(BinaryOperator::Sub));
    }
}

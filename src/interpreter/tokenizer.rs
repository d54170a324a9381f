use std::ops::Range;

use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexeme, lex},
        negatives::resolve_negatives,
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

type Lexemes = [(Lexeme, Range<usize>)];

/// Removes all whitespace from a line.
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits `name=expression` into its two halves.
///
/// Returns `Ok(None)` if the line contains no `=`.
///
/// # Errors
/// - `MultipleAssignments` if the line contains more than one `=`.
/// - `InvalidVariableName` if the name is empty or contains anything but
///   ASCII letters.
///
/// # Example
/// ```
/// use calcline::{error::ParseError, interpreter::tokenizer::split_assignment};
///
/// assert_eq!(split_assignment("x=2*3").unwrap(), Some(("x", "2*3")));
/// assert_eq!(split_assignment("2*3").unwrap(), None);
/// assert!(matches!(split_assignment("x=y=1"), Err(ParseError::MultipleAssignments { .. })));
/// assert!(matches!(split_assignment("x1=1"), Err(ParseError::InvalidVariableName { .. })));
/// ```
pub fn split_assignment(line: &str) -> ParseResult<Option<(&str, &str)>> {
    let mut parts = line.split('=');
    let name = parts.next().unwrap_or_default();
    let Some(expression) = parts.next() else {
        return Ok(None);
    };

    if parts.next().is_some() {
        return Err(ParseError::MultipleAssignments { line: line.to_string() });
    }
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ParseError::InvalidVariableName { name: name.to_string() });
    }

    Ok(Some((name, expression)))
}

/// Splits an expression into tokens.
///
/// `source` must not contain whitespace or an assignment. The result starts
/// with [`TokenKind::Start`], ends with [`TokenKind::End`] and has already
/// been passed through [`resolve_negatives`].
///
/// Letter runs are matched, at each offset, against function names followed
/// by `(`, then variable names, then word operators such as `mod`. Each group
/// is tried in declaration order and the first match wins, so a shorter name
/// can shadow a longer one that starts with it. Unknown text at the start of
/// a run, or right after a word operator, becomes one variable token reaching
/// up to the next word operator (or one function call if it ends the run and
/// `(` follows), and fails when evaluated. Unknown text right after a
/// variable is a syntax error.
///
/// Parenthesized text, including function arguments, is kept as raw text in
/// a single [`TokenKind::Parentheses`] token.
///
/// # Errors
/// Returns a syntax error for characters that start no token, malformed
/// numbers, unbalanced parentheses and doubled minus signs.
///
/// # Example
/// ```
/// use calcline::interpreter::{
///     evaluator::core::Context,
///     token::{TokenKind, render},
///     tokenizer::tokenize,
/// };
///
/// let mut context = Context::new();
/// context.set_variable("x", 2.0);
///
/// let tokens = tokenize("xmod3+sin((1+2)*x)", &context).unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(tokens[6].text, "(1+2)*x");
/// assert_eq!(kinds.len(), 8);
/// assert_eq!(kinds[0], TokenKind::Start);
/// assert_eq!(kinds[5], TokenKind::Function);
/// assert_eq!(render(&tokens), "xmod3+sin((1+2)*x)");
/// ```
pub fn tokenize(source: &str, context: &Context) -> ParseResult<Vec<Token>> {
    let lexemes = lex(source).map_err(|position| unexpected_character(source, position))?;

    let mut tokens = vec![Token::start()];
    let mut index = 0;

    while let Some((lexeme, span)) = lexemes.get(index) {
        match lexeme {
            Lexeme::Digits => {
                tokens.push(scan_number(source, span.clone())?);
                index += 1;
            },
            Lexeme::Letters => {
                index = scan_word(source, &lexemes, index, context, &mut tokens)?;
            },
            Lexeme::LParen => {
                let (inner, next) = scan_group(source, &lexemes, index)?;
                tokens.push(Token::new(TokenKind::Parentheses, inner, span.start));
                index = next;
            },
            Lexeme::RParen => {
                return Err(ParseError::UnexpectedClosingParenthesis { position: span.start,
                                                                      fragment: source.to_string(), });
            },
            Lexeme::Comma | Lexeme::Equals | Lexeme::Symbol => {
                let text = &source[span.clone()];
                let op = BinaryOperator::from_name(text).filter(|op| !op.is_word())
                                                        .ok_or_else(|| unexpected_character(source, span.start))?;
                tokens.push(Token::operator(op, span.start));
                index += 1;
            },
        }
    }

    tokens.push(Token::end(source.len()));
    let tokens = resolve_negatives(tokens, source)?;
    trace!(source, ?tokens, "tokenized");

    Ok(tokens)
}

/// Validates a run of digits and dots: at most one dot, and a digit right
/// after it.
fn scan_number(source: &str, span: Range<usize>) -> ParseResult<Token> {
    let literal = &source[span.clone()];
    let mut parts = literal.split('.');
    let _integral = parts.next();
    let fraction = parts.next();

    let malformed = parts.next().is_some()
                    || fraction.is_some_and(|f| !f.starts_with(|c: char| c.is_ascii_digit()));
    if malformed {
        return Err(ParseError::MalformedNumber { literal:  literal.to_string(),
                                                 position: span.start,
                                                 fragment: source.to_string(), });
    }

    Ok(Token::new(TokenKind::Number, literal, span.start))
}

/// Splits the letter run at `index` into function, variable and operator
/// tokens. Returns the index of the next unconsumed lexeme.
fn scan_word(source: &str,
             lexemes: &Lexemes,
             index: usize,
             context: &Context,
             tokens: &mut Vec<Token>)
             -> ParseResult<usize> {
    let span = lexemes[index].1.clone();
    let word = &source[span.clone()];
    let before_paren = matches!(lexemes.get(index + 1), Some((Lexeme::LParen, _)));
    let mut offset = 0;
    let mut after_variable = false;

    while offset < word.len() {
        let rest = &word[offset..];
        let position = span.start + offset;

        if before_paren && let Some(name) = context.functions.names().find(|name| *name == rest) {
            let (arguments, next) = scan_group(source, lexemes, index + 1)?;
            tokens.push(Token::new(TokenKind::Function, name, position));
            tokens.push(Token::new(TokenKind::Parentheses, arguments, span.end));
            return Ok(next);
        }

        if let Some(name) = context.variables
                                   .names()
                                   .filter(|name| !name.is_empty())
                                   .find(|name| rest.starts_with(name))
        {
            tokens.push(Token::new(TokenKind::Variable, name, position));
            offset += name.len();
            after_variable = true;
            continue;
        }

        if let Some(op) = BinaryOperator::ALL.into_iter()
                                             .filter(|op| op.is_word())
                                             .find(|op| rest.starts_with(op.name()))
        {
            tokens.push(Token::operator(op, position));
            offset += op.name().len();
            after_variable = false;
            continue;
        }

        if after_variable {
            return Err(unexpected_character(source, position));
        }

        // An unknown name runs up to the next word operator. It is kept whole
        // so evaluation can report the undefined variable or unknown function.
        let end = BinaryOperator::ALL.into_iter()
                                     .filter(|op| op.is_word())
                                     .filter_map(|op| rest.find(op.name()))
                                     .min()
                                     .unwrap_or(rest.len());
        let name = &rest[..end];

        if before_paren && end == rest.len() {
            let (arguments, next) = scan_group(source, lexemes, index + 1)?;
            tokens.push(Token::new(TokenKind::Function, name, position));
            tokens.push(Token::new(TokenKind::Parentheses, arguments, span.end));
            return Ok(next);
        }
        tokens.push(Token::new(TokenKind::Variable, name, position));
        offset += end;
        after_variable = true;
    }

    Ok(index + 1)
}

/// Finds the parenthesis closing the one at `open`, tracking nesting depth.
/// Returns the raw text between them and the index after the closing one.
fn scan_group(source: &str, lexemes: &Lexemes, open: usize) -> ParseResult<(String, usize)> {
    let start = lexemes[open].1.clone();
    let mut depth = 0usize;

    for (index, (lexeme, span)) in lexemes.iter().enumerate().skip(open) {
        match lexeme {
            Lexeme::LParen => depth += 1,
            Lexeme::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok((source[start.end..span.start].to_string(), index + 1));
                }
            },
            _ => {},
        }
    }

    Err(ParseError::UnmatchedParenthesis { position: start.start,
                                           fragment: source.to_string(), })
}

fn unexpected_character(source: &str, position: usize) -> ParseError {
    ParseError::UnexpectedCharacter { found: source[position..].chars().next().unwrap_or_default(),
                                      position,
                                      fragment: source.to_string() }
}

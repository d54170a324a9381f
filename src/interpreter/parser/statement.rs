use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::Context,
        parser::core::{ParseResult, parse_source, parse_tokens},
        token::render,
        tokenizer::{split_assignment, strip_whitespace, tokenize},
    },
};

/// A parsed line together with its rendered form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// What to evaluate.
    pub statement:  Statement,
    /// The line as the tokenizer saw it: whitespace removed and unary minus
    /// signs folded. For an assignment this is just the variable name.
    pub expression: String,
}

/// Parses a single line.
///
/// Whitespace is removed first. A line containing one `=` is an assignment
/// to the name on its left; any other line is an expression.
///
/// Parsing does not touch the variable store; it only reads the current
/// names so the tokenizer can recognize them.
///
/// # Errors
/// Returns any syntax or structural error found in the line.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Statement,
///     interpreter::{evaluator::core::Context, parser::statement::parse_statement},
/// };
///
/// let context = Context::new();
///
/// let parsed = parse_statement("x = 2 * 3", &context).unwrap();
/// assert_eq!(parsed.expression, "x");
/// assert!(matches!(parsed.statement, Statement::Assignment { ref name, .. } if name == "x"));
///
/// let parsed = parse_statement("4 * -(1 + 1)", &context).unwrap();
/// assert_eq!(parsed.expression, "4*(0-(1+1))");
/// ```
pub fn parse_statement(line: &str, context: &Context) -> ParseResult<ParsedLine> {
    let line = strip_whitespace(line);

    if let Some((name, source)) = split_assignment(&line)? {
        let value = parse_source(source, context)?;
        return Ok(ParsedLine { statement:  Statement::Assignment { name: name.to_string(),
                                                                   value },
                               expression: name.to_string(), });
    }

    let tokens = tokenize(&line, context)?;
    let expr = parse_tokens(&tokens, context)?;

    Ok(ParsedLine { statement:  Statement::Expression(expr),
                    expression: render(&tokens), })
}

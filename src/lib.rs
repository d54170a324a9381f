//! # calcline
//!
//! calcline evaluates single-line arithmetic expressions to a double-precision
//! result. Lines may use numbers, the operators `+ - * / mod ^`, builtin
//! functions, variables, parentheses and a single `name=expression`
//! assignment.
//!
//! A line goes through four stages: the tokenizer splits it into tokens and
//! keeps parenthesized text unparsed, the negative-sign resolver folds unary
//! minus signs into their operands, the parser builds an expression tree
//! (parsing nested text as it goes) and the evaluator computes the value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::instrument;

pub use crate::error::Error;
use crate::{
    interpreter::{evaluator::core::Context, parser::statement::parse_statement},
    util::num::format_value,
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` and `Statement` enums that represent a
/// line as a tree, and the `BinaryOperator` enum with operator names and
/// precedence. The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (syntax, structure,
///   variables, functions).
/// - Attaches positions and the offending text for context.
/// - Classifies errors into coarse kinds for callers.
pub mod error;
/// Orchestrates the whole process of evaluating a line.
///
/// This module ties together lexing, tokenizing, negative-sign resolution,
/// parsing and evaluation, and holds the evaluation context.
pub mod interpreter;
/// Numeric helpers shared across modules.
pub mod util;

/// The outcome of evaluating one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The line as it was understood: whitespace removed and unary minus
    /// signs folded. For an assignment, the variable name.
    pub expression: String,
    /// The computed value.
    pub value:      f64,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.expression, format_value(self.value))
    }
}

/// Evaluates one line in the given context.
///
/// Assignments store their value in the context's variable store. A line
/// that fails leaves the store unchanged.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or parsed, or if
/// evaluation refers to an undefined variable or calls a function with the
/// wrong number of arguments.
///
/// # Examples
/// ```
/// use calcline::{evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
///
/// let result = evaluate("x = 2", &mut context).unwrap();
/// assert_eq!(result.to_string(), "x=2");
///
/// let result = evaluate("x * 3 + -1", &mut context).unwrap();
/// assert_eq!(result.value, 5.0);
/// assert_eq!(result.to_string(), "x*3+-1=5");
///
/// // `y` was never assigned.
/// assert!(evaluate("y * 2", &mut context).is_err());
/// ```
#[instrument(level = "debug", skip(context), err)]
pub fn evaluate(source: &str, context: &mut Context) -> Result<Evaluation, Error> {
    let parsed = parse_statement(source, context)?;
    let value = context.eval_statement(&parsed.statement)?;

    Ok(Evaluation { expression: parsed.expression,
                    value })
}

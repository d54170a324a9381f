/// The evaluator module computes results from expression trees.
///
/// It holds the evaluation context (variable store and function registry),
/// performs the arithmetic and dispatches function calls.
///
/// # Responsibilities
/// - Evaluates expression trees and statements.
/// - Resolves variables and calls builtin functions.
/// - Reports undefined variables, unknown functions and wrong argument
///   counts.
pub mod evaluator;
/// The lexer module classifies raw characters.
///
/// A `logos` scanner splits the input into digit runs, letter runs,
/// parentheses and single symbols, with their byte spans.
pub mod lexer;
/// The negative-sign resolver.
///
/// Rewrites minus signs that have no left operand so that the parser only
/// ever sees binary operators.
pub mod negatives;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Parses parenthesized text and function arguments into subtrees.
/// - Reports operators with missing operands and leftover tokens.
pub mod parser;
/// Token types and rendering of token sequences back into text.
pub mod token;
/// The tokenizer turns a line into tokens.
///
/// # Responsibilities
/// - Detects and validates the `name=expression` assignment form.
/// - Recognizes functions, variables and operators in letter runs, in
///   declaration order.
/// - Validates number literals and parenthesis nesting.
pub mod tokenizer;
/// The variable store shared by every line of a session.
pub mod variables;

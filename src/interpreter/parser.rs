/// Binary operator parsing.
///
/// One function per precedence level, from addition down to exponentiation.
pub mod binary;
/// Core parsing entry points.
///
/// Parses token sequences and raw text into expression trees.
pub mod core;
/// Operand parsing: numbers, variables, groups and function calls.
pub mod primary;
/// Line parsing, including the assignment form.
pub mod statement;
/// Parsing helpers.
pub mod utils;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic of `+ - * / mod ^` on `f64`.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context (variable store and function registry) and
/// the recursive evaluation of expression trees and statements.
pub mod core;

/// Function evaluation.
///
/// Holds the registry of builtin functions, checks argument counts and
/// computes results.
pub mod function;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    #[error("Variable with name '{name}' was not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the registry.
    #[error("No '{name}' function exists in {call}.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The full call text, `name(arguments)`.
        call: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("{} arguments in {call}: '{name}' takes {expected}, found {found}.",
            quantity(.found, .expected))]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The full call text, `name(arguments)`.
        call:     String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn quantity(found: &usize, expected: &usize) -> &'static str {
    if *found < *expected { "Not enough" } else { "Too many" }
}

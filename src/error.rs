/// Parsing errors.
///
/// Defines all error types that can occur while splitting a line into tokens
/// and arranging those tokens into an expression tree. This covers both
/// syntax errors (text that cannot be tokenized) and structural errors
/// (tokens in an order that does not form an expression).
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree: undefined variables, unknown functions and wrong argument counts.
pub mod runtime_error;

pub use parse_error::{ParseError, Side};
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure while evaluating a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unparseable character, malformed number, unmatched parentheses,
    /// multiple `=`, invalid assignment target or adjacent double minus.
    Syntax,
    /// Reference to a variable that was never assigned.
    UndefinedVariable,
    /// Call to a function that is not registered.
    UnknownFunction,
    /// Function called with the wrong number of arguments.
    Arity,
    /// An operator missing an operand, or leftover tokens.
    Structural,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     error::{ErrorKind, RuntimeError},
    ///     Error,
    /// };
    ///
    /// let err = Error::from(RuntimeError::UndefinedVariable { name: "y".to_string() });
    /// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_structural() => ErrorKind::Structural,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::UnknownFunction { .. }) => ErrorKind::UnknownFunction,
            Self::Runtime(RuntimeError::ArityMismatch { .. }) => ErrorKind::Arity,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing or parsing a line.
///
/// Positions are byte offsets into `fragment`, the text that was being
/// scanned. For parenthesized sub-expressions and function arguments the
/// fragment is the inner text, not the whole line.
pub enum ParseError {
    /// A character that does not start any known token.
    #[error("Syntax error at position {position} in '{fragment}': could not parse token starting with '{found}'.")]
    UnexpectedCharacter {
        /// The offending character.
        found:    char,
        /// Offset of the character.
        position: usize,
        /// The text being scanned.
        fragment: String,
    },
    /// A numeric literal with more than one `.` or a `.` not followed by a
    /// digit.
    #[error("Syntax error at position {position} in '{fragment}': malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Offset of the literal.
        position: usize,
        /// The text being scanned.
        fragment: String,
    },
    /// An opening parenthesis without a matching closing one.
    #[error("Syntax error at position {position} in '{fragment}': no closing parenthesis for '('.")]
    UnmatchedParenthesis {
        /// Offset of the opening parenthesis.
        position: usize,
        /// The text being scanned.
        fragment: String,
    },
    /// A closing parenthesis with no opening one before it.
    #[error("Syntax error at position {position} in '{fragment}': unexpected ')'.")]
    UnexpectedClosingParenthesis {
        /// Offset of the closing parenthesis.
        position: usize,
        /// The text being scanned.
        fragment: String,
    },
    /// More than one `=` in a line.
    #[error("Syntax error: too many '=' in '{line}'.")]
    MultipleAssignments {
        /// The offending line.
        line: String,
    },
    /// The target of an assignment is empty or contains non-letters.
    #[error("Syntax error: invalid variable name '{name}'.")]
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// Two minus signs in a row, such as `x--2`.
    #[error("Syntax error at position {position} in '{fragment}': multiple '-' signs in a row; use parentheses.")]
    DoubleNegation {
        /// Offset of the second minus sign.
        position: usize,
        /// The text being scanned.
        fragment: String,
    },
    /// Nothing to evaluate, such as `()` or an empty function argument.
    #[error("Structural error: empty expression.")]
    EmptyExpression,
    /// An operator without a usable operand on one side.
    #[error("Structural error: operator '{operator}' at position {position} has no {side} operand.")]
    MissingOperand {
        /// The operator text.
        operator: String,
        /// Offset of the operator.
        position: usize,
        /// Which operand is missing.
        side:     Side,
    },
    /// A token left over once a complete expression was read, such as the
    /// `(3)` in `2(3)`.
    #[error("Structural error: unexpected '{token}' at position {position}.")]
    UnexpectedToken {
        /// The leftover token, rendered.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
}

/// The side of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Before the operator.
    Left,
    /// After the operator.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl ParseError {
    /// Returns `true` for errors about the arrangement of otherwise valid
    /// tokens, as opposed to text that could not be tokenized.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self,
                 Self::EmptyExpression | Self::MissingOperand { .. } | Self::UnexpectedToken { .. })
    }
}

use crate::ast::BinaryOperator;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A number literal, possibly negative after unary-minus folding.
    Number,
    /// A reference to a variable in the store.
    Variable,
    /// A function name. Always followed by a [`TokenKind::Parentheses`]
    /// token holding its arguments.
    Function,
    /// Unparsed text that was enclosed in parentheses.
    Parentheses,
    /// A binary operator.
    Operator(BinaryOperator),
    /// Sentinel at the start of every sequence.
    Start,
    /// Sentinel at the end of every sequence.
    End,
}

/// A lexical token.
///
/// Parentheses and function tokens keep the raw text between the parentheses.
/// That text is only tokenized when the parser reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The raw text. For parentheses this excludes the enclosing `(` and `)`.
    pub text:     String,
    /// A number token's value, when it is already known.
    pub value:    Option<f64>,
    /// Byte offset of the token in the text it was scanned from.
    pub position: usize,
}

impl Token {
    /// Creates a token whose text still has to be interpreted.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               value: None,
               position }
    }

    /// Creates a number token with a known value.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::number(2.5, 0);
    /// assert_eq!(token.kind, TokenKind::Number);
    /// assert_eq!(token.text, "2.5");
    /// assert_eq!(token.value, Some(2.5));
    /// ```
    #[must_use]
    pub fn number(value: f64, position: usize) -> Self {
        Self { kind: TokenKind::Number,
               text: value.to_string(),
               value: Some(value),
               position }
    }

    /// Creates an operator token.
    #[must_use]
    pub fn operator(op: BinaryOperator, position: usize) -> Self {
        Self::new(TokenKind::Operator(op), op.name(), position)
    }

    /// The start sentinel.
    #[must_use]
    pub fn start() -> Self {
        Self::new(TokenKind::Start, "", 0)
    }

    /// The end sentinel.
    #[must_use]
    pub fn end(position: usize) -> Self {
        Self::new(TokenKind::End, "", position)
    }

    /// Operator precedence, or `-1` for anything that is not an operator.
    #[must_use]
    pub const fn precedence(&self) -> i32 {
        match self.kind {
            TokenKind::Operator(op) => op.precedence(),
            _ => -1,
        }
    }

    /// Returns `true` for the operator `op`.
    #[must_use]
    pub fn is_operator(&self, op: BinaryOperator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    /// Returns `true` for either sentinel.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self.kind, TokenKind::Start | TokenKind::End)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Start | TokenKind::End => Ok(()),
            TokenKind::Parentheses => write!(f, "({})", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

/// Renders a token sequence back into expression text.
///
/// Sentinels are dropped and parentheses tokens are wrapped in `(` and `)`.
/// For a line without assignments or unary minus signs this reproduces the
/// input with its whitespace removed.
///
/// # Example
/// ```
/// use calcline::interpreter::{
///     evaluator::core::Context,
///     token::render,
///     tokenizer::tokenize,
/// };
///
/// let context = Context::new();
/// let tokens = tokenize("sqrt(16)*(1+2)", &context).unwrap();
/// assert_eq!(render(&tokens), "sqrt(16)*(1+2)");
///
/// let tokens = tokenize("-sqrt(16)", &context).unwrap();
/// assert_eq!(render(&tokens), "(0-(sqrt(16)))");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

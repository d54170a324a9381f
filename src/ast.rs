use crate::util::num::format_value;

/// A binary operator together with its precedence.
///
/// Operators are declared in a fixed order. The tokenizer tries them in that
/// order, so the order matters whenever one operator name is a prefix of
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Division, `/`.
    Div,
    /// Floating-point remainder, `mod`. The sign follows the dividend.
    Mod,
    /// Exponentiation, `^`.
    Pow,
}

impl BinaryOperator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod, Self::Pow];

    /// The operator as written in source.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.name(), "mod");
    /// assert_eq!(BinaryOperator::Pow.name(), "^");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Pow => "^",
        }
    }

    /// Binding strength. Higher binds tighter; equal levels associate to the
    /// left.
    #[must_use]
    pub const fn precedence(self) -> i32 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Mod => 1,
            Self::Pow => 2,
        }
    }

    /// Looks an operator up by its exact source name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns `true` if the operator is spelled with letters, like `mod`.
    #[must_use]
    pub fn is_word(self) -> bool {
        self.name().starts_with(|c: char| c.is_ascii_alphabetic())
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built once per line by the parser, with every parenthesized
/// group and function argument already parsed, and is then evaluated
/// recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, one per comma-separated part.
        arguments: Vec<Self>,
        /// The call as written, `name(arguments)`, for error messages.
        call:      String,
    },
}

impl std::fmt::Display for Expr {
    /// Writes the tree fully parenthesized, which makes grouping visible.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{}", format_value(*value)),
            Self::Variable { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// A whole input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name=expr`: evaluate and store into the variable store.
    Assignment {
        /// Target variable.
        name:  String,
        /// The assigned expression.
        value: Expr,
    },
    /// Any other line.
    Expression(Expr),
}

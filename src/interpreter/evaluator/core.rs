use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{evaluator::function::core::FunctionRegistry, variables::VariableStore},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context of a session.
///
/// This struct holds the variable store and the function registry. It is
/// passed to the tokenizer, which needs the current variable and function
/// names, and to the evaluator, which needs their values.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line, so
/// variables assigned on one line are visible on the next.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Variables assigned so far, in assignment order.
    pub variables: VariableStore,
    /// The functions that can be called.
    pub functions: FunctionRegistry,
}

impl Context {
    /// Creates a context with no variables and the builtin functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose store already holds `PI`.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::with_constants();
    /// assert_eq!(context.get_variable("PI").unwrap(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut context = Self::new();
        context.set_variable("PI", std::f64::consts::PI);
        context
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if the variable was never assigned.
    pub fn get_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Assigns a variable, creating it or overwriting its value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.variables.set(name, value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left before right; function arguments left to right.
    /// Arithmetic follows IEEE 754, so dividing by zero gives an infinity or
    /// `NaN` instead of an error.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", 4.0);
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string() }),
    ///                             op:    BinaryOperator::Pow,
    ///                             right: Box::new(Expr::Literal { value: 0.5 }), };
    /// assert_eq!(context.eval(&expr).unwrap(), 2.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name } => self.get_variable(name),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 call, } => {
                let args = arguments.iter()
                                    .map(|argument| self.eval(argument))
                                    .collect::<EvalResult<Vec<_>>>()?;
                self.functions.call(name, &args, call)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side first and only stores the
    /// value if that succeeds, so a failed line never changes the store.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                debug!(name = name.as_str(), value, "assigned variable");
                self.set_variable(name.clone(), value);
                Ok(value)
            },
            Statement::Expression(expr) => self.eval(expr),
        }
    }
}

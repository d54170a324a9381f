use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments whose length already
/// matches the declared arity.
type BuiltinFn = fn(&[f64]) -> f64;

/// A registered function: its name, how many arguments it takes and its
/// implementation.
#[derive(Debug)]
pub struct FunctionDef {
    /// The name used in expressions.
    pub name:  &'static str,
    /// The exact number of arguments.
    pub arity: usize,
    func:      BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup, in declaration order),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "floor" => { arity: 1, func: builtin::floor },
    "ceil"  => { arity: 1, func: builtin::ceil },
    "round" => { arity: 1, func: builtin::round },
    "pow"   => { arity: 2, func: builtin::pow },
    "sqrt"  => { arity: 1, func: builtin::sqrt },
    "root"  => { arity: 2, func: builtin::root },
    "sin"   => { arity: 1, func: builtin::sin },
    "cos"   => { arity: 1, func: builtin::cos },
    "tan"   => { arity: 1, func: builtin::tan },
    "asin"  => { arity: 1, func: builtin::asin },
    "acos"  => { arity: 1, func: builtin::acos },
    "atan"  => { arity: 1, func: builtin::atan },
}

/// The closed set of functions a session can call.
///
/// The tokenizer tries names in declaration order and takes the first one
/// that matches, so a shorter name declared earlier shadows a longer name
/// that starts with it.
#[derive(Debug, Clone, Copy)]
pub struct FunctionRegistry {
    table: &'static [FunctionDef],
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FunctionRegistry {
    /// The builtin registry.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { table: BUILTIN_TABLE }
    }

    /// Finds a function by its exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static FunctionDef> {
        self.table.iter().find(|def| def.name == name)
    }

    /// Function names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.table.iter().map(|def| def.name)
    }

    /// Calls a function by name.
    ///
    /// `call` is the call as written, `name(arguments)`, and is only used in
    /// error messages.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function has this name.
    /// - `ArityMismatch` if `args` does not have the declared length.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     error::RuntimeError,
    ///     interpreter::evaluator::function::core::FunctionRegistry,
    /// };
    ///
    /// let registry = FunctionRegistry::builtin();
    /// assert_eq!(registry.call("pow", &[2.0, 10.0], "pow(2,10)").unwrap(), 1024.0);
    ///
    /// let err = registry.call("sqrt", &[1.0, 2.0], "sqrt(1,2)").unwrap_err();
    /// assert!(matches!(err, RuntimeError::ArityMismatch { expected: 1, found: 2, .. }));
    ///
    /// let err = registry.call("log", &[1.0], "log(1)").unwrap_err();
    /// assert!(matches!(err, RuntimeError::UnknownFunction { .. }));
    /// ```
    pub fn call(&self, name: &str, args: &[f64], call: &str) -> EvalResult<f64> {
        let def = self.lookup(name)
                      .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                     call: call.to_string(), })?;

        if args.len() != def.arity {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     call:     call.to_string(),
                                                     expected: def.arity,
                                                     found:    args.len(), });
        }

        let result = (def.func)(args);
        debug!(function = name, ?args, result, "dispatched function call");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_declaration_order() {
        let names: Vec<_> = FunctionRegistry::builtin().names().collect();
        assert_eq!(names, BUILTIN_FUNCTIONS);
        assert_eq!(names.first(), Some(&"floor"));
        assert_eq!(names.last(), Some(&"atan"));
    }

    #[test]
    fn arity_is_declared_per_function() {
        let registry = FunctionRegistry::builtin();
        assert_eq!(registry.lookup("root").map(|def| def.arity), Some(2));
        assert_eq!(registry.lookup("asin").map(|def| def.arity), Some(1));
        assert!(registry.lookup("Sin").is_none());
    }

    #[test]
    fn too_few_arguments_is_reported() {
        let err = FunctionRegistry::builtin().call("root", &[8.0], "root(8)")
                                             .unwrap_err();
        assert_eq!(err.to_string(),
                   "Not enough arguments in root(8): 'root' takes 2, found 1.");
    }
}

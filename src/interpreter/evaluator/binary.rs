use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// All operators follow IEEE 754 double arithmetic and never fail:
    /// division and remainder by zero produce infinities or `NaN`. `Mod` is
    /// the truncated remainder, so its sign follows the dividend.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -5.0, 3.0), -2.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_sign_follows_dividend() {
        assert_eq!(Context::eval_binary(BinaryOperator::Mod, 5.0, -3.0), 2.0);
        assert_eq!(Context::eval_binary(BinaryOperator::Mod, 5.5, 2.0), 1.5);
    }

    #[test]
    fn zero_divisors_do_not_fail() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert!(Context::eval_binary(BinaryOperator::Mod, 1.0, 0.0).is_nan());
        assert!(Context::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    }
}

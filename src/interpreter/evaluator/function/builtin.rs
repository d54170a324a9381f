//! Every builtin receives exactly as many arguments as its registry entry
//! declares; the registry checks the count before dispatching.

/// Generates a trigonometric builtin that takes its argument in degrees.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::sin;
///
/// assert!((sin(&[30.0]) - 0.5).abs() < 1e-12);
/// ```
macro_rules! degree_input {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            args[0].to_radians().$real_fn()
        }
    };
}

/// Generates an inverse trigonometric builtin that returns degrees.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::atan;
///
/// assert!((atan(&[1.0]) - 45.0).abs() < 1e-12);
/// ```
macro_rules! degree_output {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            args[0].$real_fn().to_degrees()
        }
    };
}

degree_input!(sin, sin);
degree_input!(cos, cos);
degree_input!(tan, tan);
degree_output!(asin, asin);
degree_output!(acos, acos);
degree_output!(atan, atan);

/// Largest integer not greater than the argument.
#[must_use]
pub fn floor(args: &[f64]) -> f64 {
    args[0].floor()
}

/// Smallest integer not less than the argument.
#[must_use]
pub fn ceil(args: &[f64]) -> f64 {
    args[0].ceil()
}

/// Rounds to the nearest integer, with halfway cases going to the even
/// neighbour.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::round;
///
/// assert_eq!(round(&[2.5]), 2.0);
/// assert_eq!(round(&[3.5]), 4.0);
/// assert_eq!(round(&[-2.6]), -3.0);
/// ```
#[must_use]
pub fn round(args: &[f64]) -> f64 {
    args[0].round_ties_even()
}

/// Square root. Negative arguments give `NaN`.
#[must_use]
pub fn sqrt(args: &[f64]) -> f64 {
    args[0].sqrt()
}

/// `pow(x, y)` is `x` raised to `y`.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// `root(x, n)` is the `n`-th root of `x`, computed as `x^(1/n)`.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::root;
///
/// assert!((root(&[8.0, 3.0]) - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn root(args: &[f64]) -> f64 {
    args[0].powf(1.0 / args[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_works_in_degrees() {
        assert!((cos(&[60.0]) - 0.5).abs() < 1e-12);
        assert!((tan(&[45.0]) - 1.0).abs() < 1e-12);
        assert!((asin(&[0.5]) - 30.0).abs() < 1e-9);
        assert!((acos(&[0.0]) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_family() {
        assert_eq!(floor(&[-1.5]), -2.0);
        assert_eq!(ceil(&[-1.5]), -1.0);
        assert_eq!(round(&[0.5]), 0.0);
        assert_eq!(round(&[1.5]), 2.0);
    }

    #[test]
    fn square_root_of_negative_is_nan() {
        assert!(sqrt(&[-4.0]).is_nan());
        assert_eq!(pow(&[2.0, 10.0]), 1024.0);
    }
}

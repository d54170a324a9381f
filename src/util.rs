/// Numeric parsing and formatting helpers.
///
/// This module converts validated number literals to `f64` and renders
/// results in the fixed invariant decimal form used for output, independent of
/// the host locale.
pub mod num;

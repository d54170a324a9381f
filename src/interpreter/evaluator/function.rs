/// Built-in function implementations.
///
/// Contains the numeric functions available in every session. Trigonometric
/// functions work in degrees.
pub mod builtin;
/// The function registry.
///
/// Declares the fixed table of functions with their arities and dispatches
/// calls by name.
pub mod core;

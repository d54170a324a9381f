/// Splits function argument text on commas.
///
/// Every comma splits, even one inside a nested call, so
/// `pow(pow(2,2),3)` yields the arguments `pow(2`, `2)` and `3`, and the
/// first of those fails to parse. Wrap nested multi-argument calls in a
/// variable assignment instead.
///
/// An empty argument list yields one empty argument.
///
/// # Example
/// ```
/// use calcline::interpreter::parser::utils::split_arguments;
///
/// assert_eq!(split_arguments("2,10").collect::<Vec<_>>(), ["2", "10"]);
/// assert_eq!(split_arguments("pow(2,2),3").collect::<Vec<_>>(), ["pow(2", "2)", "3"]);
/// assert_eq!(split_arguments("").collect::<Vec<_>>(), [""]);
/// ```
pub fn split_arguments(text: &str) -> impl Iterator<Item = &str> {
    text.split(',')
}

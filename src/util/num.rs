/// Parses a number literal that the tokenizer has already validated.
///
/// Accepts an optional leading `-` (from unary-minus folding), digits and at
/// most one `.`. Returns `None` for anything else.
///
/// ## Example
/// ```
/// use calcline::util::num::parse_literal;
///
/// assert_eq!(parse_literal(".5"), Some(0.5));
/// assert_eq!(parse_literal("-12.25"), Some(-12.25));
/// assert_eq!(parse_literal("1e5"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse().ok()
}

/// Renders a result in invariant decimal form.
///
/// Finite values use the shortest representation that round-trips. Non-finite
/// values are spelled out as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use calcline::util::num::format_value;
///
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(0.25), "0.25");
/// assert_eq!(format_value(1.0 / 0.0), "Infinity");
/// assert_eq!(format_value(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_literals() {
        assert_eq!(parse_literal(""), None);
        assert_eq!(parse_literal("-"), None);
        assert_eq!(parse_literal("inf"), None);
        assert_eq!(parse_literal("1.2.3"), None);
    }

    #[test]
    fn negative_infinity_is_spelled_out() {
        assert_eq!(format_value(-1.0 / 0.0), "-Infinity");
        assert_eq!(format_value(-4.0), "-4");
    }
}

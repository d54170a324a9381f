use std::ops::Range;

use logos::Logos;

/// A raw lexeme.
///
/// The lexer only classifies runs of characters. Splitting letter runs into
/// functions, variables and word operators depends on the current variable
/// store, so that happens in the tokenizer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// A run of digits and dots, such as `3.14`, `.5` or the malformed `1.2.3`.
    #[regex(r"[0-9.]+")]
    Digits,
    /// A run of ASCII letters, such as `sin`, `x` or `xmody`.
    #[regex(r"[a-zA-Z]+")]
    Letters,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Any other single character; operators like `+` or `^` land here.
    #[regex(r"[^0-9.a-zA-Z(),=]")]
    Symbol,
}

/// Splits `source` into lexemes with their byte spans.
///
/// # Errors
/// Returns the offset of the first byte the lexer could not classify.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Lexeme, lex};
///
/// let lexemes = lex("2*sin(x)").unwrap();
/// let kinds: Vec<Lexeme> = lexemes.iter().map(|(lexeme, _)| *lexeme).collect();
/// assert_eq!(kinds,
///            [Lexeme::Digits,
///             Lexeme::Symbol,
///             Lexeme::Letters,
///             Lexeme::LParen,
///             Lexeme::Letters,
///             Lexeme::RParen]);
/// ```
pub fn lex(source: &str) -> Result<Vec<(Lexeme, Range<usize>)>, usize> {
    Lexeme::lexer(source).spanned()
                         .map(|(lexeme, span)| match lexeme {
                             Ok(lexeme) => Ok((lexeme, span)),
                             Err(()) => Err(span.start),
                         })
                         .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_are_greedy() {
        let lexemes = lex("1.2.3+.5").unwrap();
        assert_eq!(lexemes,
                   [(Lexeme::Digits, 0..5), (Lexeme::Symbol, 5..6), (Lexeme::Digits, 6..8)]);
    }

    #[test]
    fn letter_runs_are_not_split() {
        let lexemes = lex("xmody").unwrap();
        assert_eq!(lexemes, [(Lexeme::Letters, 0..5)]);
    }

    #[test]
    fn unknown_characters_are_symbols() {
        let lexemes = lex("2#3").unwrap();
        assert_eq!(lexemes[1], (Lexeme::Symbol, 1..2));
    }
}

use logos::Logos;

use crate::util::num::accumulate_literal;

/// Represents a lexical token of an expression.
///
/// The language only knows two kinds of tokens: maximal runs of digits and
/// decimal points, and single characters standing for operators. Any
/// character that is neither whitespace nor part of a numeric run is an
/// operator token, whether the evaluator supports it or not.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5`, `.5` or even `1.2.3`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Single operator characters, such as `+` or `*`.
    #[regex(r"[^\s0-9.]", parse_operator)]
    Operator(char),
    /// Whitespace between tokens.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Converts the current numeric run into its value.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The accumulated literal value. Malformed runs still produce a value.
fn parse_number(lex: &logos::Lexer<Token>) -> f64 {
    accumulate_literal(lex.slice())
}

/// Extracts the operator character from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The single character of the slice.
/// - `None`: If the slice is empty, which the regex rules out.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

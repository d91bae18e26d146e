//! # lrcalc
//!
//! lrcalc is a streaming arithmetic expression evaluator written in Rust.
//! It scans an expression once, left to right, and folds every number into a
//! running total with the operator that precedes it. There is no operator
//! precedence and there are no parentheses: `2 + 3 * 4` is `20`.
//!
//! Odd input never fails by default. Unsupported operators drop their
//! operand, division by a zero literal is skipped and malformed literals are
//! read greedily. A strict mode reports the same situations as
//! [`error::EvalError`] instead.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type of strict evaluation.
///
/// Lenient evaluation never fails. This module defines the error returned
/// when an expression is evaluated strictly and the scan meets something
/// lenient evaluation would have degraded silently. Each error carries the
/// byte offset of the offending token.
pub mod error;
/// Tokenizes and evaluates expressions.
///
/// This module ties together the lexer, the operator model and the
/// evaluator, and exposes the `Evaluator` type that owns an expression and
/// its last result.
///
/// # Responsibilities
/// - Coordinates lexing and the left-to-right fold.
/// - Keeps evaluation state between calls.
/// - Selects between lenient and strict handling of odd input.
pub mod interpreter;
/// Numeric literal helpers.
pub mod util;

pub use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator, Mode},
};

/// Evaluates an expression leniently in one call.
///
/// This is a shorthand for storing `source` in a fresh [`Evaluator`] and
/// evaluating it.
///
/// # Examples
/// ```
/// use lrcalc::evaluate_str;
///
/// assert_eq!(evaluate_str("2 + 3 * 4"), 20.0);
/// assert_eq!(evaluate_str("7"), 7.0);
/// assert_eq!(evaluate_str(""), 0.0);
///
/// // Unsupported operators drop the following number.
/// assert_eq!(evaluate_str("5 % 3"), 5.0);
/// ```
#[must_use]
pub fn evaluate_str(source: &str) -> f64 {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression(source);
    evaluator.evaluate()
}

/// Evaluates an expression strictly in one call.
///
/// # Errors
/// Returns an error for the first unsupported operator, malformed literal,
/// division by a zero literal, missing operator or operand.
///
/// # Examples
/// ```
/// use lrcalc::{error::EvalError, evaluate_strict};
///
/// assert_eq!(evaluate_strict("3.5 - 1.25"), Ok(2.25));
/// assert_eq!(evaluate_strict("10 / 0 + 5"),
///            Err(EvalError::DivisionByZero { offset: 5 }));
/// ```
pub fn evaluate_strict(source: &str) -> EvalResult<f64> {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression(source);
    evaluator.try_evaluate()
}

/// Evaluates every non-blank line of `source` as its own expression.
///
/// One [`Evaluator`] is reused for all lines, so each line replaces the
/// previous expression before being evaluated in `mode`. Blank lines are
/// skipped and produce no result.
///
/// # Returns
/// One result per non-blank line, in order. Only [`Mode::Strict`] can
/// produce errors; a failing line does not stop the following ones.
///
/// # Examples
/// ```
/// use lrcalc::{Mode, error::EvalError, evaluate_lines};
///
/// let results = evaluate_lines("1 + 1\n\n2 % 2\n3 * 3", Mode::Strict);
/// assert_eq!(results,
///            vec![Ok(2.0),
///                 Err(EvalError::UnsupportedOperator { op: '%', offset: 2 }),
///                 Ok(9.0)]);
/// ```
#[must_use]
pub fn evaluate_lines(source: &str, mode: Mode) -> Vec<EvalResult<f64>> {
    let mut evaluator = Evaluator::new();

    source.lines()
          .filter(|line| !line.trim().is_empty())
          .map(|line| {
              evaluator.set_expression(line);
              evaluator.evaluate_with(mode)
          })
          .collect()
}

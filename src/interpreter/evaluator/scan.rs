use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Mode},
        lexer::Token,
        operator::{Application, Operator},
    },
    util::num::is_well_formed_literal,
};

/// Outcome of a single left-to-right scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scan {
    /// The running total once the scan stopped.
    pub total:   f64,
    /// The first anomaly met, if any. In strict mode the scan stops there.
    pub anomaly: Option<EvalError>,
}

impl Scan {
    /// Turns the scan into a strict result: any anomaly is an error.
    ///
    /// # Errors
    /// Returns the recorded anomaly, if there is one.
    pub fn into_result(self) -> EvalResult<f64> {
        self.anomaly.map_or(Ok(self.total), Err)
    }
}

/// The kind of the previously scanned token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Previous {
    Start,
    Number,
    Operator,
}

/// Folds an expression left to right into a single total.
///
/// The total starts at `0.0` and the pending operator at `+`. Whitespace is
/// skipped. Every numeric run is applied to the total with the pending
/// operator, which stays in effect until the next operator character
/// replaces it. All operators share one precedence level.
///
/// In [`Mode::Lenient`] anomalies are logged, the first one is recorded and
/// the scan goes on as if nothing happened. In [`Mode::Strict`] the scan
/// stops at the first one, before the offending token touches the total.
///
/// # Parameters
/// - `source`: The expression text.
/// - `mode`: Whether to stop at the first anomaly.
///
/// # Example
/// ```
/// use lrcalc::{Mode, interpreter::evaluator::scan::scan};
///
/// assert_eq!(scan("2 + 3 * 4", Mode::Lenient).total, 20.0);
/// assert_eq!(scan("2 3", Mode::Lenient).total, 5.0);
/// assert!(scan("2 3", Mode::Strict).anomaly.is_some());
/// ```
#[must_use]
pub fn scan(source: &str, mode: Mode) -> Scan {
    let mut total = 0.0;
    let mut pending = Operator::default();
    let mut previous = Previous::Start;
    let mut anomaly = None;

    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        // Every character matches a rule, so lexing cannot fail.
        let Ok(token) = token else {
            continue;
        };
        let offset = lexer.span().start;
        trace!(?token, offset, "scanned token");

        let found = match token {
            Token::Number(num) => {
                let application = pending.apply(total, num);
                let found =
                    check_number(lexer.slice(), previous, offset).or(match application {
                        Application::SkippedDivisionByZero => {
                            Some(EvalError::DivisionByZero { offset })
                        },
                        Application::Applied(_) | Application::SkippedUnsupported(_) => None,
                    });
                if found.is_none() || mode == Mode::Lenient {
                    total = application.total_or(total);
                }
                previous = Previous::Number;
                found
            },
            Token::Operator(c) => {
                let found = check_operator(c, previous, offset);
                pending = Operator::from(c);
                previous = Previous::Operator;
                found
            },
            Token::Ignored => None,
        };

        if let Some(error) = found {
            if mode == Mode::Strict {
                return Scan { total,
                              anomaly: Some(error) };
            }
            debug!(%error, "ignored in lenient mode");
            anomaly.get_or_insert(error);
        }
    }

    if previous == Previous::Operator {
        let error = EvalError::UnexpectedEndOfInput { offset: source.len() };
        if mode == Mode::Strict {
            return Scan { total,
                          anomaly: Some(error) };
        }
        debug!(%error, "ignored in lenient mode");
        anomaly.get_or_insert(error);
    }

    debug!(total, ?mode, "evaluation finished");
    Scan { total, anomaly }
}

fn check_number(literal: &str, previous: Previous, offset: usize) -> Option<EvalError> {
    if previous == Previous::Number {
        return Some(EvalError::MissingOperator { offset });
    }
    if !is_well_formed_literal(literal) {
        return Some(EvalError::MalformedNumber { literal: literal.to_string(),
                                                 offset });
    }
    None
}

fn check_operator(op: char, previous: Previous, offset: usize) -> Option<EvalError> {
    if !Operator::from(op).is_supported() {
        return Some(EvalError::UnsupportedOperator { op, offset });
    }
    // A single leading operator applies to the implicit zero.
    if previous == Previous::Operator {
        return Some(EvalError::UnexpectedOperator { op, offset });
    }
    None
}

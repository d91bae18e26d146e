use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::evaluator::scan::{Scan, scan},
};

/// Result type used by strict evaluation.
///
/// Strict evaluation returns either the computed total or the [`EvalError`]
/// describing the first anomaly met during the scan.
pub type EvalResult<T> = Result<T, EvalError>;

/// Selects how the scan treats input it cannot make sense of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Degrade silently: unsupported operators drop their operand, division
    /// by a zero literal is skipped and malformed literals are read greedily.
    #[default]
    Lenient,
    /// Stop at the first anomaly and report it as an [`EvalError`].
    Strict,
}

/// Owns an expression and the result of its last evaluation.
///
/// ## Usage
///
/// An `Evaluator` starts empty with a result of `0.0`. Store an expression
/// with [`Evaluator::set_expression`], compute it with
/// [`Evaluator::evaluate`], then read it back any number of times with
/// [`Evaluator::result`]. Storing a new expression never touches the result;
/// only evaluating or clearing does.
///
/// ```
/// use lrcalc::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// evaluator.set_expression("2 + 3 * 4");
/// assert_eq!(evaluator.evaluate(), 20.0);
///
/// evaluator.set_expression("1");
/// assert_eq!(evaluator.result(), 20.0);
///
/// evaluator.clear();
/// assert_eq!(evaluator.result(), 0.0);
/// assert_eq!(evaluator.expression(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluator {
    expression: Option<String>,
    result:     f64,
}

impl Evaluator {
    /// Creates an evaluator with no expression and a result of `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of `text` as the current expression.
    ///
    /// Any previous expression is discarded. The stored result is left as
    /// it is until the next evaluation.
    pub fn set_expression(&mut self, text: impl Into<String>) {
        self.expression = Some(text.into());
    }

    /// Stores `text` if one is supplied.
    ///
    /// `None` leaves the evaluator untouched, including any previously
    /// stored expression.
    ///
    /// # Example
    /// ```
    /// use lrcalc::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.replace_expression(Some("4 / 2"));
    /// evaluator.replace_expression(None);
    /// assert_eq!(evaluator.expression(), Some("4 / 2"));
    /// ```
    pub fn replace_expression(&mut self, text: Option<&str>) {
        if let Some(text) = text {
            self.set_expression(text);
        }
    }

    /// Returns the stored expression, if any.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// Evaluates the stored expression leniently and stores the total.
    ///
    /// Operators apply strictly left to right with equal precedence, starting
    /// from an implicit `0 +`. Without a stored expression, or with an empty
    /// one, the result is `0.0`. This never fails; see
    /// [`Evaluator::try_evaluate`] for the strict counterpart.
    ///
    /// # Returns
    /// The new result.
    ///
    /// # Example
    /// ```
    /// use lrcalc::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.set_expression("10 / 0 + 5");
    /// assert_eq!(evaluator.evaluate(), 15.0);
    /// ```
    pub fn evaluate(&mut self) -> f64 {
        let Scan { total, .. } = self.scan(Mode::Lenient);
        self.result = total;
        total
    }

    /// Evaluates the stored expression strictly.
    ///
    /// The scan is the same as [`Evaluator::evaluate`], but the first
    /// anomaly aborts the evaluation. On failure the previous result is kept.
    ///
    /// # Errors
    /// Returns the [`EvalError`] describing the first anomaly: an
    /// unsupported operator, a malformed literal, a division by a zero
    /// literal, two numbers or two operators in a row, or a trailing
    /// operator.
    ///
    /// # Example
    /// ```
    /// use lrcalc::{Evaluator, error::EvalError};
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.set_expression("3.5 - 1.25");
    /// assert_eq!(evaluator.try_evaluate(), Ok(2.25));
    ///
    /// evaluator.set_expression("6 % 4");
    /// assert_eq!(evaluator.try_evaluate(),
    ///            Err(EvalError::UnsupportedOperator { op: '%', offset: 2 }));
    /// assert_eq!(evaluator.result(), 2.25);
    /// ```
    pub fn try_evaluate(&mut self) -> EvalResult<f64> {
        let total = self.scan(Mode::Strict).into_result()?;
        self.result = total;
        Ok(total)
    }

    /// Evaluates the stored expression in the given mode.
    ///
    /// # Errors
    /// Only [`Mode::Strict`] can fail, as described on
    /// [`Evaluator::try_evaluate`].
    pub fn evaluate_with(&mut self, mode: Mode) -> EvalResult<f64> {
        match mode {
            Mode::Lenient => Ok(self.evaluate()),
            Mode::Strict => self.try_evaluate(),
        }
    }

    /// Returns the result of the last evaluation without recomputing it.
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// Resets the result to `0.0` and discards the stored expression.
    pub fn clear(&mut self) {
        self.expression = None;
        self.result = 0.0;
    }

    fn scan(&self, mode: Mode) -> Scan {
        self.expression.as_deref().map_or_else(|| {
                                                   debug!("no expression stored");
                                                   Scan::default()
                                               },
                                               |source| scan(source, mode))
    }
}

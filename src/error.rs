/// Strict evaluation errors.
///
/// Defines the error raised when an expression is evaluated in strict mode
/// and the scan meets input that lenient evaluation would silently degrade:
/// unsupported operators, malformed literals, division by a zero literal,
/// or operators and numbers out of alternation.
pub mod eval_error;

pub use eval_error::EvalError;

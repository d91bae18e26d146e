/// The evaluator module folds expressions into results.
///
/// The evaluator scans the token stream once, applies every number to a
/// running total with the most recent operator, and owns the state that
/// survives between evaluations.
///
/// # Responsibilities
/// - Holds the stored expression and the result of the last evaluation.
/// - Applies operators strictly left to right, with no precedence.
/// - Degrades silently on odd input, or reports it in strict mode.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces numeric literal
/// runs and single-character operators, skipping whitespace.
///
/// # Responsibilities
/// - Cuts maximal runs of digits and decimal points into number tokens.
/// - Turns every other non-whitespace character into an operator token.
pub mod lexer;
/// The operator module defines the pending operator of the fold.
///
/// # Responsibilities
/// - Maps operator characters to `+`, `-`, `*`, `/` or an unsupported kind.
/// - Applies a number to the running total, guarding division by zero.
pub mod operator;

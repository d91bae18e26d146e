/// Numeric literal helpers.
///
/// This module turns the raw character runs produced by the lexer into
/// floating-point values using the digit accumulation rule of the evaluator,
/// and reports whether such a run is a well-formed decimal literal. The
/// lexer uses the former for every literal, strict evaluation uses the
/// latter to reject malformed input.
pub mod num;

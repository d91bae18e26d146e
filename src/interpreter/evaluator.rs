/// Core evaluation state and modes.
///
/// Contains the `Evaluator` lifecycle wrapper that owns the expression and
/// its last result, the lenient and strict evaluation modes, and the result
/// type used by strict evaluation.
pub mod core;

/// The left-to-right scan.
///
/// Walks the token stream once, folding every number into a running total
/// with the pending operator and recording anomalies along the way.
pub mod scan;

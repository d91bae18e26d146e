/// Scale of the first digit after the decimal point.
pub const FIRST_FRACTION_MULTIPLIER: f64 = 0.1;

/// Accumulates a run of digits and decimal points into an `f64`.
///
/// Digits before the first `.` build the integer part as `n * 10 + digit`.
/// After it, each digit contributes `digit * 10^-k` with `k` starting at 1
/// and growing by one per digit. Further dots are skipped without touching
/// the scale, so a run such as `1.5.5` reads as `1 + 0.5 + 0.05`. Characters
/// other than ASCII digits and `.` are ignored.
///
/// The run is never rejected; see [`is_well_formed_literal`] for the check
/// used by strict evaluation.
///
/// # Parameters
/// - `run`: The characters of a numeric literal, as cut by the lexer.
///
/// # Returns
/// The accumulated value. An empty run, or a run made only of dots, yields
/// `0.0`.
///
/// # Example
/// ```
/// use lrcalc::util::num::accumulate_literal;
///
/// assert_eq!(accumulate_literal("42"), 42.0);
/// assert_eq!(accumulate_literal("3.5"), 3.5);
/// assert_eq!(accumulate_literal(".5"), 0.5);
/// assert_eq!(accumulate_literal("1.5.5"), 1.55);
/// assert_eq!(accumulate_literal("."), 0.0);
/// ```
// Multiply and add stay separate: fused results differ in the last bit.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn accumulate_literal(run: &str) -> f64 {
    let mut value = 0.0_f64;
    let mut multiplier: Option<f64> = None;

    for c in run.chars() {
        if c == '.' {
            multiplier.get_or_insert(FIRST_FRACTION_MULTIPLIER);
            continue;
        }
        let Some(digit) = c.to_digit(10) else {
            continue;
        };
        let digit = f64::from(digit);

        match multiplier.as_mut() {
            Some(m) => {
                value += digit * *m;
                *m /= 10.0;
            },
            None => value = value * 10.0 + digit,
        }
    }

    value
}

/// Checks whether a literal run is a plain decimal number.
///
/// A well-formed literal holds at least one digit and at most one `.`, so
/// `7`, `7.`, `.5` and `3.25` pass while `.`, `1.2.3` and `..` do not.
///
/// # Example
/// ```
/// use lrcalc::util::num::is_well_formed_literal;
///
/// assert!(is_well_formed_literal("3.25"));
/// assert!(is_well_formed_literal(".5"));
/// assert!(!is_well_formed_literal("1.2.3"));
/// assert!(!is_well_formed_literal("."));
/// ```
#[must_use]
pub fn is_well_formed_literal(run: &str) -> bool {
    let dots = run.chars().filter(|&c| c == '.').count();
    let digits = run.chars().filter(char::is_ascii_digit).count();

    digits > 0 && dots <= 1 && digits + dots == run.chars().count()
}

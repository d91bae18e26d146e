use std::fs;

use lrcalc::{EvalError, Evaluator, Mode, evaluate_lines, evaluate_str, evaluate_strict};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!((actual - expected).abs() < TOLERANCE,
            "{context}: expected {expected}, got {actual}");
}

fn assert_evaluates(src: &str, expected: f64) {
    assert_close(evaluate_str(src), expected, src);
}

fn assert_rejected(src: &str, expected: &EvalError) {
    match evaluate_strict(src) {
        Ok(v) => panic!("'{src}' evaluated to {v} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{src}"),
    }
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("Case line without '=>': {line}"));
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
               (expression.to_string(), expected)
           })
           .collect()
}

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            assert_close(evaluate_str(&expression),
                         expected,
                         &format!("{path:?}: {expression}"));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn documented_scenarios() {
    assert_evaluates("2 + 3 * 4", 20.0);
    assert_evaluates("10 / 0 + 5", 15.0);
    assert_evaluates("3.5 - 1.25", 2.25);
    assert_evaluates("", 0.0);
    assert_evaluates("7", 7.0);

    let mut evaluator = Evaluator::new();
    evaluator.clear();
    assert_close(evaluator.result(), 0.0, "clear then result");
}

#[test]
fn well_formed_expressions_fold_left_to_right() {
    let numbers = [3.0, 1.5, 4.0, 0.25, 9.0, 2.0];
    let operators = ['+', '*', '-', '/', '*'];

    let mut source = numbers[0].to_string();
    let mut expected = numbers[0];
    for (op, n) in operators.iter().zip(&numbers[1..]) {
        source.push_str(&format!(" {op} {n}"));
        expected = match op {
            '+' => expected + n,
            '-' => expected - n,
            '*' => expected * n,
            '/' => expected / n,
            _ => unreachable!(),
        };
    }

    assert_evaluates(&source, expected);
}

#[test]
fn single_number_is_identity() {
    for n in ["0", "42", "0.125", "1000000", "12.5"] {
        assert_evaluates(n, n.parse().unwrap());
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("2+3*4", 20.0);
    assert_evaluates("\t2 +\n3\r\n*  4 ", 20.0);
    assert_evaluates(" \t \n", 0.0);
}

#[test]
fn set_expression_does_not_touch_result() {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression("6 * 7");
    assert_close(evaluator.result(), 0.0, "before first evaluate");

    assert_close(evaluator.evaluate(), 42.0, "6 * 7");
    evaluator.set_expression("1 + 1");
    assert_close(evaluator.result(), 42.0, "after replacing the expression");
    assert_eq!(evaluator.expression(), Some("1 + 1"));

    assert_close(evaluator.evaluate(), 2.0, "1 + 1");
}

#[test]
fn evaluate_without_expression_is_zero() {
    let mut evaluator = Evaluator::new();
    assert_close(evaluator.evaluate(), 0.0, "fresh evaluator");

    evaluator.set_expression("5");
    evaluator.evaluate();
    evaluator.clear();
    assert_eq!(evaluator.expression(), None);
    assert_close(evaluator.evaluate(), 0.0, "after clear");
    assert_eq!(evaluator.try_evaluate(), Ok(0.0));
}

#[test]
fn empty_expression_overwrites_result() {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression("9");
    evaluator.evaluate();

    evaluator.set_expression("   ");
    assert_close(evaluator.evaluate(), 0.0, "whitespace only");
    assert_close(evaluator.result(), 0.0, "stored result");
}

#[test]
fn clear_resets_from_any_state() {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression("3 * 3");
    evaluator.clear();
    assert_close(evaluator.result(), 0.0, "clear after set");

    evaluator.set_expression("3 * 3");
    evaluator.evaluate();
    evaluator.clear();
    assert_close(evaluator.result(), 0.0, "clear after evaluate");
}

#[test]
fn absent_expression_is_a_no_op() {
    let mut evaluator = Evaluator::new();
    evaluator.replace_expression(None);
    assert_eq!(evaluator.expression(), None);

    evaluator.replace_expression(Some("2 / 4"));
    evaluator.replace_expression(None);
    assert_close(evaluator.evaluate(), 0.5, "2 / 4");
}

#[test]
fn division_by_zero_literal_keeps_total() {
    assert_evaluates("8 / 0", 8.0);
    assert_evaluates("8 / 0.000", 8.0);
    assert_evaluates("8 / 0 / 2", 4.0);
    assert_evaluates("8 / . ", 8.0);
}

#[test]
fn unsupported_operator_drops_operands_until_replaced() {
    assert_evaluates("4 ^ 2", 4.0);
    assert_evaluates("4 ^ 2 3", 4.0);
    assert_evaluates("4 x 2 - 1", 3.0);
}

#[test]
fn strict_mode_accepts_well_formed_input() {
    assert_eq!(evaluate_strict("2 + 3 * 4"), Ok(20.0));
    assert_eq!(evaluate_strict("-4 + 1"), Ok(-3.0));
    assert_eq!(evaluate_strict(""), Ok(0.0));
    assert_eq!(evaluate_strict(".5 * 4"), Ok(2.0));
}

#[test]
fn strict_mode_rejects_anomalies() {
    assert_rejected("6 % 4", &EvalError::UnsupportedOperator { op: '%', offset: 2 });
    assert_rejected("1.2.3 + 1", &EvalError::MalformedNumber { literal: "1.2.3".to_string(),
                                                               offset:  0, });
    assert_rejected("3 + .", &EvalError::MalformedNumber { literal: ".".to_string(),
                                                           offset:  4, });
    assert_rejected("10 / 0 + 5", &EvalError::DivisionByZero { offset: 5 });
    assert_rejected("1 2", &EvalError::MissingOperator { offset: 2 });
    assert_rejected("1 + * 2", &EvalError::UnexpectedOperator { op: '*', offset: 4 });
    assert_rejected("1 +", &EvalError::UnexpectedEndOfInput { offset: 3 });
}

#[test]
fn failed_strict_evaluation_keeps_previous_result() {
    let mut evaluator = Evaluator::new();
    evaluator.set_expression("5 * 5");
    assert_eq!(evaluator.evaluate_with(Mode::Strict), Ok(25.0));

    evaluator.set_expression("5 / 0");
    assert!(evaluator.evaluate_with(Mode::Strict).is_err());
    assert_close(evaluator.result(), 25.0, "after strict failure");

    assert_eq!(evaluator.evaluate_with(Mode::Lenient), Ok(5.0));
    assert_close(evaluator.result(), 5.0, "after lenient retry");
}

#[test]
fn strict_errors_render_with_offset() {
    let err = evaluate_strict("2 & 2").unwrap_err();
    assert_eq!(err.offset(), 2);
    assert_eq!(err.to_string(), "Error at offset 2: Unsupported operator '&'.");
}

#[test]
fn second_decimal_point_continues_fraction() {
    assert_evaluates("1.5.5", 1.55);
    assert_evaluates("2.25.1", 2.251);
    assert_eq!(evaluate_str("1.7").to_bits(), (1.0_f64 + 7.0 * 0.1).to_bits());
}

#[test]
fn lines_are_evaluated_separately() {
    let results = evaluate_lines("2 + 3 * 4\n\n   \n10 / 0 + 5\n7", Mode::Lenient);
    assert_eq!(results, vec![Ok(20.0), Ok(15.0), Ok(7.0)]);

    assert!(evaluate_lines("", Mode::Lenient).is_empty());
    assert!(evaluate_lines(" \n\t\n", Mode::Strict).is_empty());
}

#[test]
fn strict_lines_report_each_failure_and_continue() {
    let results = evaluate_lines("1 + 1\n4 / 0\n2 *\n3 - 1", Mode::Strict);

    assert_eq!(results,
               vec![Ok(2.0),
                    Err(EvalError::DivisionByZero { offset: 4 }),
                    Err(EvalError::UnexpectedEndOfInput { offset: 3 }),
                    Ok(2.0)]);
    assert!(results.iter().any(Result::is_err));
}

#[test]
fn lenient_lines_never_fail() {
    let results = evaluate_lines("4 / 0\n5 % 2\n1.2.3", Mode::Lenient);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(results.len(), 3);
}

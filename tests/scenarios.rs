//! End-to-end keypad scenarios.

use keycalc::core::Phase;
use keycalc::{Calculator, CalculatorBuilder, OperatorKind, Outcome, Snapshot};

fn run(keys: &[&str]) -> Calculator {
    let mut calculator = Calculator::new();
    calculator.press_all(keys.iter().copied()).unwrap();
    calculator
}

#[test]
fn multiplication_is_recorded() {
    let calculator = run(&["7", "×", "8", "="]);

    assert_eq!(calculator.display(), "56");
    let entries = calculator.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].expression(), "7 × 8");
    assert_eq!(entries[0].result(), 56.0);
}

#[test]
fn division_by_zero_is_recorded_as_zero() {
    let calculator = run(&["9", "÷", "0", "="]);

    assert_eq!(calculator.display(), "0");
    let entries = calculator.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].expression(), "9 ÷ 0");
    assert_eq!(entries[0].result(), 0.0);
}

#[test]
fn chained_addition_folds_left_to_right() {
    let calculator = run(&["5", "+", "3", "+", "2", "="]);

    assert_eq!(calculator.display(), "10");
    assert_eq!(calculator.history().entries()[0].expression(), "8 + 2");
}

#[test]
fn mixed_chain_has_no_precedence() {
    let calculator = run(&["2", "+", "3", "×", "4", "="]);
    assert_eq!(calculator.display(), "20");
}

#[test]
fn intermediate_result_is_displayed() {
    let calculator = run(&["5", "+", "3", "-"]);

    assert_eq!(calculator.display(), "8");
    assert_eq!(calculator.state().operation(), Some(OperatorKind::Subtract));
    assert_eq!(calculator.state().phase(), Phase::AwaitingOperand);
    assert!(calculator.history().is_empty());
}

#[test]
fn switching_operator_folds_with_current_display() {
    let calculator = run(&["6", "+", "×", "="]);

    assert_eq!(calculator.display(), "144");
    assert_eq!(calculator.history().entries()[0].expression(), "12 × 12");
}

#[test]
fn decimal_entry() {
    let calculator = run(&[".", "5", "+", ".", "2", "5", "="]);

    assert_eq!(calculator.display(), "0.75");
    assert_eq!(calculator.history().entries()[0].expression(), "0.5 + 0.25");
}

#[test]
fn floating_point_results_are_not_rounded() {
    let calculator = run(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(calculator.display(), "0.30000000000000004");
}

#[test]
fn negative_results_display_with_sign() {
    let calculator = run(&["3", "-", "8", "="]);
    assert_eq!(calculator.display(), "-5");
}

#[test]
fn typing_after_equals_starts_new_number() {
    let calculator = run(&["2", "×", "3", "=", "4"]);

    assert_eq!(calculator.display(), "4");
    assert_eq!(calculator.state().operation(), None);
}

#[test]
fn operator_after_equals_continues_from_result() {
    let calculator = run(&["2", "×", "3", "=", "+", "1", "="]);

    assert_eq!(calculator.display(), "7");
    let expressions: Vec<&str> = calculator
        .history()
        .entries()
        .iter()
        .map(|e| e.expression())
        .collect();
    assert_eq!(expressions, vec!["6 + 1", "2 × 3"]);
}

#[test]
fn repeated_equals_is_noop() {
    let mut calculator = run(&["4", "+", "4", "="]);
    assert_eq!(calculator.equals(), Outcome::Unchanged);
    assert_eq!(calculator.display(), "8");
    assert_eq!(calculator.history().len(), 1);
}

#[test]
fn clear_then_clear_history() {
    let mut calculator = run(&["1", "+", "2", "=", "5", "×"]);

    calculator.clear();
    assert_eq!(calculator.display(), "0");
    assert_eq!(calculator.state().operation(), None);
    assert_eq!(calculator.history().len(), 1);

    calculator.press("7").unwrap();
    calculator.clear_history();
    assert_eq!(calculator.display(), "7");
    assert!(calculator.history().is_empty());
}

#[test]
fn history_panel_visibility() {
    let mut calculator = Calculator::new();
    assert!(!calculator.should_show_history());

    calculator.press("H").unwrap();
    assert!(calculator.should_show_history());
    calculator.press("H").unwrap();
    assert!(!calculator.should_show_history());

    calculator.press_all(["1", "+", "1", "="]).unwrap();
    assert!(calculator.should_show_history());

    calculator.press("CH").unwrap();
    assert!(!calculator.should_show_history());
}

#[test]
fn session_survives_snapshot() {
    let mut calculator = CalculatorBuilder::new().history_limit(3).build().unwrap();
    calculator.press_all(["1", "2", "÷", "4", "=", "×", "2"]).unwrap();

    let bytes = calculator.snapshot().to_bytes().unwrap();
    let mut restored = Calculator::restore(Snapshot::from_bytes(&bytes).unwrap()).unwrap();

    restored.press("=").unwrap();
    assert_eq!(restored.display(), "6");
    assert_eq!(restored.history().len(), 2);
    assert_eq!(restored.history().limit(), Some(3));
}

#[test]
fn large_products_switch_to_exponent() {
    let calculator = run(&[
        "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "×", "9", "9", "9", "9", "9", "9",
        "9", "9", "9", "9", "9", "=",
    ]);

    assert!(calculator.display().contains("e+"));
}

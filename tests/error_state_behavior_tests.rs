use calc_rs::api::{CalcEngine, CalcEngineConfig};
use calc_rs::core::{ArithmeticError, BinaryOperator};
use calc_rs::display::NullDisplay;
use calc_rs::state::{CalculatorState, Phase};

fn build_engine() -> CalcEngine<NullDisplay> {
    CalcEngine::new(NullDisplay::default(), CalcEngineConfig::default()).expect("engine init")
}

fn build_divided_by_zero() -> CalcEngine<NullDisplay> {
    let mut engine = build_engine();
    engine.press_digit('5').expect("digit");
    engine.press_operator(BinaryOperator::Divide).expect("operator");
    engine.press_digit('0').expect("digit");
    engine.press_equals().expect("equals");
    engine
}

#[test]
fn division_by_zero_on_equals_enters_error_state() {
    let engine = build_divided_by_zero();
    assert_eq!(engine.phase(), Phase::Error);
    assert_eq!(engine.state().error(), Some(ArithmeticError::DivisionByZero));

    let snapshot = engine.render_snapshot();
    assert!(snapshot.is_error);
    assert_eq!(snapshot.display_value, "Can't ÷ 0");
    assert_eq!(snapshot.expression_text, "");
}

#[test]
fn error_state_ignores_everything_except_clear() {
    let mut engine = build_divided_by_zero();

    engine.press_digit('7').expect("digit");
    engine.press_decimal().expect("decimal");
    engine.press_operator(BinaryOperator::Add).expect("operator");
    engine.press_equals().expect("equals");
    engine.toggle_sign().expect("sign");
    engine.percent().expect("percent");

    assert_eq!(engine.phase(), Phase::Error);
    assert_eq!(engine.render_snapshot().display_value, "Can't ÷ 0");
}

#[test]
fn backspace_in_error_state_acts_as_clear() {
    let mut engine = build_divided_by_zero();
    engine.backspace().expect("backspace");
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.state(), &CalculatorState::default());
}

#[test]
fn clear_from_error_restores_the_exact_default_state() {
    let mut engine = build_divided_by_zero();
    engine.clear().expect("clear");

    assert_eq!(engine.state(), &CalculatorState::default());
    let snapshot = engine.render_snapshot();
    assert_eq!(snapshot.display_value, "0");
    assert_eq!(snapshot.expression_text, "");
    assert!(!snapshot.is_error);

    // Fresh input is accepted immediately after.
    engine.press_digit('8').expect("digit");
    assert_eq!(engine.render_snapshot().display_value, "8");
}

#[test]
fn display_keeps_flagging_error_until_clear() {
    let mut engine = build_divided_by_zero();
    engine.press_digit('1').expect("digit");
    assert!(engine.display().last_snapshot.as_ref().is_some_and(|s| s.is_error));
    engine.clear().expect("clear");
    assert!(engine.display().last_snapshot.as_ref().is_some_and(|s| !s.is_error));
}

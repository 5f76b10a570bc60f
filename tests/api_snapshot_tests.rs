use calc_rs::api::{CalcEngine, CalcEngineConfig, EngineSnapshot};
use calc_rs::core::{ArithmeticError, BinaryOperator};
use calc_rs::display::NullDisplay;
use calc_rs::state::EntryPolicy;

fn build_engine() -> CalcEngine<NullDisplay> {
    CalcEngine::new(NullDisplay::default(), CalcEngineConfig::default()).expect("engine init")
}

#[test]
fn calc_engine_config_json_roundtrip() {
    let config = CalcEngineConfig::default().with_entry_policy(EntryPolicy {
        max_entry_digits: 10,
        result_significant_digits: 8,
    });

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = CalcEngineConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_json_missing_fields_fall_back_to_defaults() {
    let restored = CalcEngineConfig::from_json_str("{}").expect("defaults should apply");
    assert_eq!(restored, CalcEngineConfig::default());
}

#[test]
fn engine_snapshot_captures_the_full_machine_state() {
    let mut engine = build_engine();
    engine.press_digit('4').expect("digit");
    engine.press_operator(BinaryOperator::Subtract).expect("operator");
    engine.press_digit('1').expect("digit");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current, "1");
    assert_eq!(snapshot.previous.as_deref(), Some("4"));
    assert_eq!(snapshot.operator, Some(BinaryOperator::Subtract));
    assert!(!snapshot.just_evaluated);
    assert!(!snapshot.pending_new_operand);
    assert_eq!(snapshot.expression, "4 −");
    assert!(snapshot.error.is_none());
}

#[test]
fn snapshot_json_contract_v1_roundtrips() {
    let mut engine = build_engine();
    engine.press_digit('9').expect("digit");
    engine.press_operator(BinaryOperator::Divide).expect("operator");
    engine.press_digit('0').expect("digit");
    engine.press_equals().expect("equals");

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = EngineSnapshot::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, engine.snapshot());
    assert_eq!(restored.error, Some(ArithmeticError::DivisionByZero));
}

#[test]
fn bare_snapshot_json_is_accepted_for_compatibility() {
    let engine = build_engine();
    let snapshot = engine.snapshot();
    let bare = serde_json::to_string(&snapshot).expect("snapshot should serialize");
    let restored = EngineSnapshot::from_json_compat_str(&bare).expect("bare payload should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let engine = build_engine();
    let snapshot = engine.snapshot();
    let payload = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    });
    let input = payload.to_string();
    assert!(EngineSnapshot::from_json_compat_str(&input).is_err());
}

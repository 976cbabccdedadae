use fretboard_rs::api::{DIAGRAM_CONFIG_JSON_SCHEMA_V1, DiagramConfig};
use fretboard_rs::core::{PitchClass, Tuning};
use fretboard_rs::error::FretboardError;

#[test]
fn config_json_contract_round_trips() {
    let config = DiagramConfig::new(2, 6)
        .with_scale(2.0)
        .with_string_count(4)
        .with_tuning(
            Tuning::new(vec![PitchClass::G, PitchClass::D, PitchClass::A, PitchClass::E])
                .expect("bass tuning"),
        );

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {DIAGRAM_CONFIG_JSON_SCHEMA_V1}")));
    let parsed = DiagramConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_uses_defaults_for_missing_fields() {
    let parsed = DiagramConfig::from_json_str(r#"{"from_fret": 5, "to_fret": 9}"#).expect("parse");
    assert_eq!(parsed, DiagramConfig::new(5, 9));
    assert_eq!(parsed.tuning, Tuning::standard_six_string());
}

#[test]
fn invalid_config_json_is_rejected() {
    assert!(DiagramConfig::from_json_str(r#"{"from_fret": 9, "to_fret": 5}"#).is_err());
    assert!(
        DiagramConfig::from_json_str(r#"{"schema_version": 2, "config": {}}"#).is_err()
    );
    assert!(DiagramConfig::from_json_str("not json").is_err());
}

#[test]
fn versioned_payload_reports_inner_config_errors() {
    for input in [
        r#"{"schema_version":1,"config":{"from_fret":3,"to_fret":8,"tuning":[]}}"#,
        r#"{"schema_version":1,"config":{"from_fret":"three"}}"#,
    ] {
        let err = DiagramConfig::from_json_str(input).expect_err("invalid inner config");
        assert!(
            matches!(&err, FretboardError::InvalidData(message) if message.contains("contract")),
            "input {input}: {err}"
        );
    }
}

#[test]
fn bare_config_with_unknown_key_is_rejected() {
    let err = DiagramConfig::from_json_str(r#"{"frm_fret": 3}"#).expect_err("unknown key");
    assert!(err.to_string().contains("frm_fret"), "{err}");
}

#[test]
fn config_json_fret_ceiling() {
    assert!(DiagramConfig::from_json_str(r#"{"from_fret": 24, "to_fret": 25}"#).is_ok());
    assert_eq!(
        DiagramConfig::from_json_str(r#"{"from_fret": 25, "to_fret": 26}"#),
        Err(FretboardError::InvalidFretRange {
            from_fret: 25,
            to_fret: 26
        })
    );
    assert!(DiagramConfig::from_json_str(r#"{"from_fret": 0, "to_fret": 26}"#).is_err());
}

use std::path::Path;

use bicams_norms::error::NormsError;
use bicams_norms::{brazil, NormsTable};

#[test]
fn builtin_table_survives_json() {
    let json = serde_json::to_string_pretty(brazil()).unwrap();
    let parsed = NormsTable::from_json(&json).unwrap();
    assert_eq!(&parsed, brazil());
}

#[test]
fn unbounded_ends_serialize_as_null() {
    let json = serde_json::to_value(brazil()).unwrap();
    let first = &json["SDMT"]["conversion"][0];
    assert_eq!(first["scaled"], 1);
    assert!(first["low"].is_null());
    assert_eq!(first["high"], 9);
}

#[test]
fn missing_measure_is_a_parse_error() {
    let mut json = serde_json::to_value(brazil()).unwrap();
    json.as_object_mut().unwrap().remove("BVMT_Total");
    let err = NormsTable::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, NormsError::Parse(_)));
}

#[test]
fn non_positive_residual_sd_is_rejected() {
    let mut json = serde_json::to_value(brazil()).unwrap();
    json["SDMT"]["regression"]["residual_sd"] = serde_json::json!(0.0);
    let err = NormsTable::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, NormsError::InvalidResidualSd { value, .. } if value == 0.0));
}

#[test]
fn gap_in_loaded_table_is_rejected() {
    let mut json = serde_json::to_value(brazil()).unwrap();
    json["CVLT_totaldeacertos"]["conversion"][1]["low"] = serde_json::json!(21);
    let err = NormsTable::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, NormsError::Gap { after: 19, next: 21, .. }));
}

#[test]
fn missing_file_reports_path() {
    let err = NormsTable::load(Path::new("/nonexistent/norms.json")).unwrap_err();
    assert!(matches!(err, NormsError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/norms.json"));
}

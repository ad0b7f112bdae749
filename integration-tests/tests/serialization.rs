use approx::assert_relative_eq;
use serde_json::Value;

use integration_tests::{SETTINGS_TOML, newton_over};
use mathroots::{Equation, Method, Settings};

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("reports always serialize")
}

#[test]
fn bisection_report_serializes_results_and_trace() {
    let report = Equation::new("x^3 - 2x - 5 = 0")
        .solve(&Settings::default())
        .expect("valid equation");
    let json = to_json(&report);

    assert_eq!(json["equation"], "x^3 - 2x - 5 = 0");
    assert_eq!(json["expression"], "x**3 - 2*x - 5");
    assert_eq!(json["method"], "bisection");
    assert_eq!(json["derivative"], Value::Null);

    let result = &json["results"][0];
    assert_eq!(result["candidate"]["kind"], "interval");
    assert_eq!(result["success"], true);
    assert_eq!(result["failure"], Value::Null);
    assert_relative_eq!(
        result["root"].as_f64().expect("root is a number"),
        2.094_551_481_542_327,
        epsilon = 1e-5
    );

    let trace = result["trace"].as_array().expect("trace is an array");
    assert_eq!(trace.len() as u64, result["iterations"].as_u64().expect("count"));
    assert_eq!(trace[0]["iter"], 1);
    for field in ["a", "b", "c", "fa", "fb", "fc", "error"] {
        assert!(trace[0][field].is_number(), "missing {field}");
    }
}

#[test]
fn newton_failures_serialize_with_their_kind() {
    let report = Equation::new("x^3")
        .solve(&newton_over(-1.0, 1.0, 1.0))
        .expect("valid equation");
    let json = to_json(&report);

    assert_eq!(json["method"], "newton");
    assert_eq!(json["derivative"], "3*x**2");

    let first = &json["results"][0];
    assert_eq!(first["candidate"]["kind"], "seed");
    assert_eq!(first["candidate"]["fallback"], false);
    assert_eq!(first["success"], false);
    assert_eq!(first["root"], Value::Null);
    assert_eq!(first["failure"]["kind"], "singular_derivative");
    assert_eq!(first["failure"]["x"], 0.0);
    // No step was taken, so the error is infinite and serializes as null.
    assert_eq!(first["final_error"], Value::Null);
}

#[test]
fn settings_survive_a_toml_round_trip() {
    let settings = Settings {
        method: Method::Newton,
        tolerance: 1e-9,
        ..Settings::default()
    }
    .with_interval(-3.0, 3.0, 0.25);

    let text = toml::to_string(&settings).expect("settings serialize");
    let parsed = Settings::from_toml_str(&text).expect("settings parse");
    assert_eq!(parsed, settings);
}

#[test]
fn partial_settings_files_keep_defaults() {
    let settings = Settings::from_toml_str(SETTINGS_TOML).expect("valid settings");
    let defaults = Settings::default();

    assert_eq!(settings.method, Method::Newton);
    assert!(!settings.auto_interval);
    assert_relative_eq!(settings.tolerance, 1e-10);
    assert_relative_eq!(settings.root_tolerance, defaults.root_tolerance);
    assert_eq!(settings.seed_limit, defaults.seed_limit);

    let json: Settings = serde_json::from_str(r#"{ "method": "bisection" }"#).expect("valid json");
    assert_eq!(json, defaults);
}

#[test]
fn invalid_settings_files_are_rejected() {
    assert!(Settings::from_toml_str("method = \"secant\"").is_err());
    assert!(Settings::from_toml_str("tolerance = -1.0").is_err());
    assert!(Settings::from_toml_str("interval_step = 0.0\nauto_interval = false").is_err());
}

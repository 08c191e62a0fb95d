//! Checks elbow search results against a fixture of reference cases.

use approx::assert_relative_eq;
use elbow_rs::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    name: String,
    #[allow(dead_code)]
    notes: String,
    input: InputData,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Expected {
    index: usize,
    x: f64,
    y: f64,
    distance: f64,
}

fn load_cases() -> Vec<ReferenceCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/reference_cases.json");
    let text = fs::read_to_string(&path).expect("reference fixture should be readable");
    serde_json::from_str(&text).expect("reference fixture should be valid JSON")
}

#[test]
fn test_reference_cases_load() {
    let cases = load_cases();
    assert!(!cases.is_empty());
    for case in &cases {
        assert_eq!(case.input.x.len(), case.input.y.len(), "{}", case.name);
    }
}

#[test]
fn test_reference_cases_match() {
    let finder = Elbow::new().return_distances().build().unwrap();

    for case in load_cases() {
        let result = finder
            .find(&case.input.x, &case.input.y)
            .unwrap_or_else(|e| panic!("{}: {}", case.name, e));

        assert_eq!(result.index, case.expected.index, "{}", case.name);
        assert_eq!(result.x, case.input.x[result.index], "{}", case.name);
        assert_eq!(result.y, case.input.y[result.index], "{}", case.name);
        assert_relative_eq!(result.x, case.expected.x, max_relative = 1e-12);
        assert_relative_eq!(result.y, case.expected.y, max_relative = 1e-12);
        assert_relative_eq!(
            result.distance,
            case.expected.distance,
            epsilon = 1e-12,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_reference_cases_free_function_agrees() {
    for case in load_cases() {
        let point = find_elbow(&case.input.x, &case.input.y).unwrap();
        let i = case.expected.index;
        assert_eq!(point, (case.input.x[i], case.input.y[i]), "{}", case.name);
    }
}

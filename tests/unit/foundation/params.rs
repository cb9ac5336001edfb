use super::*;
use serde_json::json;

#[derive(Debug, serde::Deserialize, PartialEq)]
#[serde(default)]
struct Knobs {
    amount: f64,
    enabled: bool,
}

impl Default for Knobs {
    fn default() -> Self {
        Self {
            amount: 2.0,
            enabled: true,
        }
    }
}

#[test]
fn decode_fills_missing_keys_from_defaults() {
    let p = ParameterSet::new().with("amount", 0.5);
    let k: Knobs = p.decode().unwrap();
    assert_eq!(
        k,
        Knobs {
            amount: 0.5,
            enabled: true
        }
    );
}

#[test]
fn decode_reports_type_errors_as_validation() {
    let p = ParameterSet::new().with("enabled", "yes");
    let err = p.decode::<Knobs>().unwrap_err();
    assert!(matches!(err, FlexError::Validation(_)));
}

#[test]
fn from_value_accepts_null_and_objects_only() {
    assert!(ParameterSet::from_value(&Value::Null).unwrap().is_empty());
    let p = ParameterSet::from_value(&json!({"a": 1.5})).unwrap();
    assert_eq!(p.number("a"), Some(1.5));
    assert!(matches!(
        ParameterSet::from_value(&json!([1, 2])).unwrap_err(),
        FlexError::Shape(_)
    ));
}

#[test]
fn number_ignores_non_numeric_entries() {
    let p = ParameterSet::new().with("flag", true).with("x", 3);
    assert_eq!(p.number("flag"), None);
    assert_eq!(p.number("x"), Some(3.0));
    assert!(p.contains("flag"));
    assert_eq!(p.len(), 2);
}

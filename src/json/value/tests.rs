use crate::json::{DistillError, Number, Value, ValueKind};

#[test]
fn parse_maps_native_kinds_onto_variants() {
	let json = Value::parse(r#"{"s": "x", "i": -3, "u": 18446744073709551615, "f": 1.5, "b": true, "n": null, "a": [1], "o": {}}"#)
		.expect("document parses");

	assert_eq!(json.get_key("s"), Some(&Value::String("x".to_owned())));
	assert_eq!(json.get_key("i"), Some(&Value::Number(Number::Int(-3))));
	assert_eq!(json.get_key("u"), Some(&Value::Number(Number::UInt(u64::MAX))));
	assert_eq!(json.get_key("f"), Some(&Value::Number(Number::Float(1.5))));
	assert_eq!(json.get_key("b"), Some(&Value::Bool(true)));
	assert_eq!(json.get_key("n"), Some(&Value::Null));
	assert_eq!(json.get_key("a").map(Value::kind), Some(ValueKind::Array));
	assert_eq!(json.get_key("o").map(Value::kind), Some(ValueKind::Object));
}

#[test]
fn positive_integers_normalize_to_signed_storage() {
	let json = Value::parse("42").expect("number parses");
	assert_eq!(json, Value::Number(Number::Int(42)));
	assert_eq!(json.as_u64(), Some(42));
	assert_eq!(json.as_f64(), Some(42.0));
}

#[test]
fn accessors_reject_other_kinds() {
	let json = Value::String("7".to_owned());
	assert_eq!(json.as_i64(), None);
	assert_eq!(json.as_bool(), None);
	assert!(json.as_array().is_none());
	assert!(json.get_index(0).is_none());
	assert!(json.get_key("x").is_none());
}

#[test]
fn malformed_text_is_a_parse_error() {
	let err = Value::parse("{\"a\":").expect_err("truncated input should fail");
	assert!(matches!(err, DistillError::Json(_)));
}

#[test]
fn to_json_round_trips_through_native_tree() {
	let native = serde_json::json!({"list": [1, 2.5, "x", null, false], "nested": {"k": "v"}});
	let json = Value::from(native.clone());
	assert_eq!(json.to_json(), native);
	assert_eq!(json.to_string(), native.to_string());
}

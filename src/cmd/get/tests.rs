use distil::json::{DistillError, Path, Value};

use super::{Target, extract_as};
use crate::cmd::test_support::{fixture_arg, run_distil, run_distil_json};

fn doc() -> Value {
	Value::open(distil_testkit::fixture_path("users.json")).expect("fixture loads")
}

#[test]
fn typed_targets_extract_and_convert_back() {
	let json = doc();
	let name = extract_as(&json, &Path::parse("users[0].name").expect("path"), Target::String, false).expect("name");
	assert_eq!(name, Some(Value::String("ada".to_owned())));

	let version = extract_as(&json, &Path::key("version"), Target::Float, false).expect("version widens");
	assert_eq!(version.and_then(|item| item.as_f64()), Some(3.0));

	let limits = extract_as(&json, &Path::key("limits"), Target::Object, false).expect("limits");
	assert_eq!(limits.as_ref().and_then(|item| item.get_key("write")).and_then(Value::as_i64), Some(10));
}

#[test]
fn optional_target_masks_absence_but_not_mismatch() {
	let json = doc();
	let phone = extract_as(&json, &Path::parse("users[0].contact.phone").expect("path"), Target::String, true).expect("masked");
	assert_eq!(phone, None);

	let err = extract_as(&json, &Path::key("service"), Target::Int, true).expect_err("string is not an int");
	assert!(matches!(err, DistillError::TypeMismatch { .. }));
}

#[test]
fn get_json_output_reports_value() {
	let fixture = fixture_arg("users.json");
	let json = run_distil_json(&["get", &fixture, "users[1].name", "--as", "string", "--json"]);

	assert_eq!(json["path"], "users[1].name");
	assert_eq!(json["as"], "string");
	assert_eq!(json["present"], true);
	assert_eq!(json["value"], "grace");
}

#[test]
fn get_optional_json_output_reports_absence() {
	let fixture = fixture_arg("users.json");
	let json = run_distil_json(&["get", &fixture, "users[1].contact.email", "--optional", "--json"]);

	assert_eq!(json["present"], false);
	assert!(json["value"].is_null());
}

#[test]
fn get_missing_path_fails_with_full_path() {
	let fixture = fixture_arg("users.json");
	let output = run_distil(&["get", &fixture, "users[1].contact.email", "--as", "string"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains(r#"["users", 1, "contact", "email"]"#), "unexpected stderr: {stderr}");
}

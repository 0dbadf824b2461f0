use crate::json::{DistillError, Path, PathElement};

#[test]
fn literal_constructors_match_named_ones() {
	assert_eq!(Path::from("user"), Path::key("user"));
	assert_eq!(Path::from(3), Path::index(3));
	assert_eq!(Path::from(["a", "b"]), Path::of([PathElement::from("a"), PathElement::from("b")]));
	assert_eq!(crate::path![], Path::root());
	assert!(Path::root().is_empty());
}

#[test]
fn macro_mixes_keys_and_indices() {
	let path = crate::path!["nested", "array", 2];
	assert_eq!(
		path.elements(),
		&[PathElement::Key("nested".to_owned()), PathElement::Key("array".to_owned()), PathElement::Index(2)]
	);
}

#[test]
fn concatenation_preserves_order() {
	let joined = Path::key("user2") + Path::of(["contact", "email"]);
	assert_eq!(joined, crate::path!["user2", "contact", "email"]);

	let mut path = Path::root();
	path += Path::index(0);
	path.push("name");
	assert_eq!(path, crate::path![0, "name"]);
	assert_eq!(path.child(1).len(), 3);
}

#[test]
fn equality_is_elementwise() {
	assert_ne!(Path::key("0"), Path::index(0));
	assert_ne!(crate::path!["a", "b"], crate::path!["b", "a"]);
}

#[test]
fn display_lists_elements() {
	assert_eq!(crate::path!["user2", "contact", 0].to_string(), r#"["user2", "contact", 0]"#);
	assert_eq!(Path::root().to_string(), "[]");
}

#[test]
fn parse_accepts_dotted_and_indexed_syntax() {
	assert_eq!(Path::parse("user").expect("parses"), crate::path!["user"]);
	assert_eq!(Path::parse("nested.array[2]").expect("parses"), crate::path!["nested", "array", 2]);
	assert_eq!(Path::parse("matrix[0][1].value").expect("parses"), crate::path!["matrix", 0, 1, "value"]);
	assert_eq!(Path::parse("[3].id").expect("parses"), crate::path![3, "id"]);
	assert_eq!(Path::parse("with space.x-y").expect("parses"), crate::path!["with space", "x-y"]);
}

#[test]
fn parse_rejects_malformed_input() {
	for input in ["", ".a", "a.", "a..b", "a[", "a[x]", "a[1]b", "a]", "a.[0]"] {
		let err = Path::parse(input).expect_err("malformed path should fail");
		assert!(matches!(err, DistillError::InvalidPath { ref path } if path == input), "unexpected error for {input:?}: {err:?}");
	}
}

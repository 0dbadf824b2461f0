use distil::json::{Path, PathElement, Result};
use serde::Serialize;

/// Path expression selecting the document root.
pub(crate) const ROOT_EXPR: &str = "$";

/// Parse a dotted path expression; `$` selects the document root.
pub(crate) fn parse_path(expr: &str) -> Result<Path> {
	if expr == ROOT_EXPR {
		return Ok(Path::root());
	}
	Path::parse(expr)
}

/// Render a path in the dotted syntax accepted by [`parse_path`].
///
/// Keys containing `.`, `[` or `]` are written verbatim and will not parse back.
pub(crate) fn render_path(path: &Path) -> String {
	if path.is_empty() {
		return ROOT_EXPR.to_owned();
	}

	let mut out = String::new();
	for element in path {
		match element {
			PathElement::Key(key) => {
				if !out.is_empty() {
					out.push('.');
				}
				out.push_str(key);
			}
			PathElement::Index(index) => {
				out.push('[');
				out.push_str(&index.to_string());
				out.push(']');
			}
		}
	}
	out
}

/// Write a serializable payload to stdout as pretty JSON.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

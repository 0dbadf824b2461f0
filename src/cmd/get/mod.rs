use std::collections::HashMap;
use std::path::PathBuf;

use distil::json::{Distillable, Path, Result, Value};
use tracing::debug;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, parse_path, render_path};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Dotted path such as `users[0].name`; `$` selects the document root.
	pub at: String,
	#[arg(long = "as", value_enum, default_value_t = Target::Any)]
	pub target: Target,
	#[arg(long)]
	pub optional: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
}

/// Extraction target selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
	/// Any node, returned unchanged.
	Any,
	/// JSON string.
	String,
	/// Signed 64-bit integer.
	Int,
	/// Unsigned 64-bit integer.
	Uint,
	/// Any number, as a 64-bit float.
	Float,
	/// JSON boolean.
	Bool,
	/// Array of arbitrary nodes.
	Array,
	/// Object of arbitrary nodes.
	Object,
}

impl Target {
	/// Command-line spelling of the target.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::String => "string",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

/// Extract the value at a path and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		at,
		target,
		optional,
		json,
		max_depth,
		max_array,
	} = args;

	let path = parse_path(&at)?;
	let document = Value::open(&file)?;
	debug!(file = %file.display(), path = %path, target = target.as_str(), "extracting");
	let extracted = extract_as(&document, &path, target, optional)?;

	if json {
		return emit_json(&GetJson {
			file: file.display().to_string(),
			path: render_path(&path),
			target: target.as_str(),
			present: extracted.is_some(),
			value: extracted.as_ref().map_or(serde_json::Value::Null, Value::to_json),
		});
	}

	let mut print = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}

	println!("file: {}", file.display());
	println!("path: {}", render_path(&path));
	println!("as: {}", target.as_str());
	match extracted {
		Some(value) => {
			println!("value:");
			print_value(&value, 2, print);
		}
		None => println!("value: <absent>"),
	}

	Ok(())
}

/// Extract `path` as `target`, returning `None` only for masked optional lookups.
pub(crate) fn extract_as(document: &Value, path: &Path, target: Target, optional: bool) -> Result<Option<Value>> {
	match target {
		Target::Any => typed::<Value>(document, path, optional),
		Target::String => typed::<String>(document, path, optional),
		Target::Int => typed::<i64>(document, path, optional),
		Target::Uint => typed::<u64>(document, path, optional),
		Target::Float => typed::<f64>(document, path, optional),
		Target::Bool => typed::<bool>(document, path, optional),
		Target::Array => typed::<Vec<Value>>(document, path, optional),
		Target::Object => typed::<HashMap<String, Value>>(document, path, optional),
	}
}

fn typed<T: Distillable + Into<Value>>(document: &Value, path: &Path, optional: bool) -> Result<Option<Value>> {
	if optional {
		document.option::<T>(path).map(|item| item.map(Into::into)).evaluate()
	} else {
		document.distil::<T>(path).map(|item| Some(item.into())).evaluate()
	}
}

#[derive(serde::Serialize)]
struct GetJson {
	file: String,
	path: String,
	#[serde(rename = "as")]
	target: &'static str,
	present: bool,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use distil::json::{Path, Result, Value, ValueKind};

use crate::cmd::util::{emit_json, parse_path, render_path};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Only list leaves below this dotted path.
	#[arg(long)]
	pub at: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Scalar or empty container reached by a full walk of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leaf {
	pub path: Path,
	pub kind: ValueKind,
}

/// List every leaf path under the selected root with its kind.
pub fn run(args: Args) -> Result<()> {
	let Args { file, at, json } = args;

	let root = match at {
		Some(expr) => parse_path(&expr)?,
		None => Path::root(),
	};
	let document = Value::open(&file)?;
	let node = document.at(root.clone()).resolve()?;
	let leaves = collect_leaves(node, root.clone());

	if json {
		return emit_json(&PathsJson {
			file: file.display().to_string(),
			root: render_path(&root),
			count: leaves.len(),
			paths: leaves
				.iter()
				.map(|leaf| LeafJson {
					path: render_path(&leaf.path),
					kind: leaf.kind.as_str(),
				})
				.collect(),
		});
	}

	for leaf in &leaves {
		println!("{}\t{}", render_path(&leaf.path), leaf.kind.as_str());
	}

	Ok(())
}

/// Walk `node` depth-first, visiting object members in key order.
pub(crate) fn collect_leaves(node: &Value, prefix: Path) -> Vec<Leaf> {
	let mut out = Vec::new();
	walk(node, prefix, &mut out);
	out
}

fn walk(node: &Value, path: Path, out: &mut Vec<Leaf>) {
	match node {
		Value::Array(items) if !items.is_empty() => {
			for (index, item) in items.iter().enumerate() {
				walk(item, path.child(index), out);
			}
		}
		Value::Object(members) if !members.is_empty() => {
			let mut keys: Vec<&String> = members.keys().collect();
			keys.sort();
			for key in keys {
				walk(&members[key], path.child(key.as_str()), out);
			}
		}
		_ => out.push(Leaf { path, kind: node.kind() }),
	}
}

#[derive(serde::Serialize)]
struct PathsJson {
	file: String,
	root: String,
	count: usize,
	paths: Vec<LeafJson>,
}

#[derive(serde::Serialize)]
struct LeafJson {
	path: String,
	kind: &'static str,
}

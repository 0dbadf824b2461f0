use tracing::debug;

use crate::json::{DistillError, Path, PathElement, Result, Value};

/// Why a path step could not be followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
	/// Object has no member with this key.
	MissingKey(String),
	/// Array index is past the end.
	IndexOob {
		/// Requested index.
		index: usize,
		/// Array length.
		len: usize,
	},
	/// Key step applied to a non-object, or index step to a non-array.
	KindMismatch {
		/// Kind of the node the step was applied to.
		got: &'static str,
	},
}

/// First unreachable step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
	/// Zero-based index of the failing element.
	pub step_index: usize,
	/// Structured reason.
	pub reason: MissReason,
}

/// Follow `path` from `root`, reporting the first unreachable step.
pub fn locate<'v>(root: &'v Value, path: &Path) -> std::result::Result<&'v Value, Miss> {
	let mut current = root;

	for (step_index, step) in path.iter().enumerate() {
		current = match (step, current) {
			(PathElement::Key(key), Value::Object(entries)) => entries.get(key).ok_or_else(|| Miss {
				step_index,
				reason: MissReason::MissingKey(key.clone()),
			})?,
			(PathElement::Index(index), Value::Array(items)) => items.get(*index).ok_or(Miss {
				step_index,
				reason: MissReason::IndexOob {
					index: *index,
					len: items.len(),
				},
			})?,
			(_, other) => {
				return Err(Miss {
					step_index,
					reason: MissReason::KindMismatch { got: other.kind().as_str() },
				});
			}
		};
	}

	Ok(current)
}

/// Resolve `path` against `root`.
///
/// Fails with [`DistillError::MissingPath`] carrying the full requested path, not the
/// prefix that could not be followed.
pub fn resolve<'v>(root: &'v Value, path: &Path) -> Result<&'v Value> {
	locate(root, path).map_err(|miss| {
		debug!(path = %path, step = miss.step_index, reason = ?miss.reason, "path unreachable");
		DistillError::MissingPath { path: path.clone() }
	})
}

/// Resolve `path`, mapping unreachable paths and `null` nodes to `None`.
pub fn resolve_present<'v>(root: &'v Value, path: &Path) -> Option<&'v Value> {
	locate(root, path).ok().filter(|node| !node.is_null())
}

impl Value {
	/// Resolve `path` against this node.
	pub fn resolve(&self, path: impl Into<Path>) -> Result<&Value> {
		resolve(self, &path.into())
	}

	/// Return whether `path` is reachable from this node.
	pub fn contains(&self, path: impl Into<Path>) -> bool {
		locate(self, &path.into()).is_ok()
	}
}

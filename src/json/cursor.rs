use crate::json::extract::{extract, extract_optional};
use crate::json::navigate::resolve;
use crate::json::{Distillable, Distillate, Path, PathElement, Result, Value};

/// Deferred reference to the node at `path` below `root`.
///
/// Nothing is resolved until one of the extraction methods is called.
#[derive(Debug, Clone)]
pub struct Cursor<'v> {
	root: &'v Value,
	path: Path,
}

impl<'v> Cursor<'v> {
	/// Cursor on `path` below `root`.
	pub fn new(root: &'v Value, path: Path) -> Self {
		Self { root, path }
	}

	/// Path measured from the root.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Cursor one element deeper.
	pub fn at(&self, element: impl Into<PathElement>) -> Self {
		Self {
			root: self.root,
			path: self.path.child(element),
		}
	}

	/// Resolve the addressed node.
	pub fn resolve(&self) -> Result<&'v Value> {
		resolve(self.root, &self.path)
	}

	/// Lazily extract a `T`.
	pub fn distil<T: Distillable>(self) -> Distillate<'v, T> {
		let Self { root, path } = self;
		Distillate::pending(move || extract(root, &path))
	}

	/// Lazily extract an optional `T`.
	pub fn option<T: Distillable>(self) -> Distillate<'v, Option<T>> {
		let Self { root, path } = self;
		Distillate::pending(move || extract_optional(root, &path))
	}
}

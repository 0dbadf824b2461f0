use std::fmt;
use std::ops::{Add, AddAssign};

use crate::json::{DistillError, Result};

/// One step into a JSON tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
	/// Select an object member by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

impl fmt::Display for PathElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => write!(f, "{key:?}"),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

impl From<&str> for PathElement {
	fn from(value: &str) -> Self {
		Self::Key(value.to_owned())
	}
}

impl From<String> for PathElement {
	fn from(value: String) -> Self {
		Self::Key(value)
	}
}

impl From<&String> for PathElement {
	fn from(value: &String) -> Self {
		Self::Key(value.clone())
	}
}

impl From<usize> for PathElement {
	fn from(value: usize) -> Self {
		Self::Index(value)
	}
}

/// Ordered address of a node inside a JSON tree. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
	elements: Vec<PathElement>,
}

impl Path {
	/// Path addressing the root node.
	pub fn root() -> Self {
		Self::default()
	}

	/// Single object-key path.
	pub fn key(key: impl Into<String>) -> Self {
		Self {
			elements: vec![PathElement::Key(key.into())],
		}
	}

	/// Single array-index path.
	pub fn index(index: usize) -> Self {
		Self {
			elements: vec![PathElement::Index(index)],
		}
	}

	/// Path from an explicit element sequence.
	pub fn of<I, E>(elements: I) -> Self
	where
		I: IntoIterator<Item = E>,
		E: Into<PathElement>,
	{
		Self {
			elements: elements.into_iter().map(Into::into).collect(),
		}
	}

	/// Parse dotted syntax with optional `[index]` selectors, e.g. `user.tags[0].name`.
	///
	/// A leading `[index]` addresses a root array.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(DistillError::InvalidPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut elements = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && bytes[idx] != b'.' && bytes[idx] != b'[' && bytes[idx] != b']' {
				idx += 1;
			}

			if idx > start {
				elements.push(PathElement::Key(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(DistillError::InvalidPath { path: input.to_owned() });
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(DistillError::InvalidPath { path: input.to_owned() });
				}

				let number = input[n_start..idx]
					.parse::<usize>()
					.map_err(|_| DistillError::InvalidPath { path: input.to_owned() })?;
				elements.push(PathElement::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(DistillError::InvalidPath { path: input.to_owned() });
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(DistillError::InvalidPath { path: input.to_owned() });
				}
			}
		}

		Ok(Self { elements })
	}

	/// Ordered elements.
	pub fn elements(&self) -> &[PathElement] {
		&self.elements
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Return whether this is the root path.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Iterate over elements.
	pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
		self.elements.iter()
	}

	/// Append one element.
	pub fn push(&mut self, element: impl Into<PathElement>) {
		self.elements.push(element.into());
	}

	/// Return a copy extended by one element.
	pub fn child(&self, element: impl Into<PathElement>) -> Self {
		let mut out = self.clone();
		out.push(element);
		out
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (idx, element) in self.elements.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{element}")?;
		}
		f.write_str("]")
	}
}

impl Add for Path {
	type Output = Path;

	fn add(mut self, rhs: Path) -> Path {
		self.elements.extend(rhs.elements);
		self
	}
}

impl AddAssign for Path {
	fn add_assign(&mut self, rhs: Path) {
		self.elements.extend(rhs.elements);
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a PathElement;
	type IntoIter = std::slice::Iter<'a, PathElement>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}

impl From<PathElement> for Path {
	fn from(value: PathElement) -> Self {
		Self { elements: vec![value] }
	}
}

impl From<Vec<PathElement>> for Path {
	fn from(elements: Vec<PathElement>) -> Self {
		Self { elements }
	}
}

impl<E: Into<PathElement>, const N: usize> From<[E; N]> for Path {
	fn from(elements: [E; N]) -> Self {
		Self::of(elements)
	}
}

impl From<&str> for Path {
	fn from(value: &str) -> Self {
		Self::key(value)
	}
}

impl From<String> for Path {
	fn from(value: String) -> Self {
		Self::key(value)
	}
}

impl From<usize> for Path {
	fn from(value: usize) -> Self {
		Self::index(value)
	}
}

impl From<&Path> for Path {
	fn from(value: &Path) -> Self {
		value.clone()
	}
}

/// Build a [`Path`] from mixed key and index literals.
///
/// ```
/// use distil::json::{Path, PathElement};
///
/// let path = distil::path!["nested", "array", 2];
/// assert_eq!(path, Path::of([PathElement::from("nested"), PathElement::from("array"), PathElement::Index(2)]));
/// ```
#[macro_export]
macro_rules! path {
	() => {
		$crate::json::Path::root()
	};
	($($element:expr),+ $(,)?) => {
		$crate::json::Path::from(vec![$($crate::json::PathElement::from($element)),+])
	};
}

#[cfg(test)]
mod tests;

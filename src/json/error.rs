use std::any::{Any, TypeId, type_name};
use std::fmt;

use thiserror::Error;

use crate::json::{Path, Value};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DistillError>;

/// Boxed caller-defined error carried through [`DistillError::Custom`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Static description of a Rust target type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
	id: TypeId,
	name: &'static str,
}

impl TypeDescriptor {
	/// Describe `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	/// Return whether this descriptor names `T`.
	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}

	/// Fully qualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Value rejected by a filter, kept as its original type.
pub struct FilteredPayload {
	value: Box<dyn Any + Send + Sync>,
	rendered: String,
}

impl FilteredPayload {
	/// Capture a rejected value.
	pub fn new<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
		let rendered = format!("{value:?}");
		Self {
			value: Box::new(value),
			rendered,
		}
	}

	/// Borrow the rejected value if it is a `T`.
	pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
		self.value.downcast_ref::<T>()
	}

	/// Return whether the rejected value is a `T`.
	pub fn is<T: 'static>(&self) -> bool {
		self.value.is::<T>()
	}

	/// Debug rendering captured at rejection time.
	pub fn rendered(&self) -> &str {
		&self.rendered
	}
}

impl fmt::Debug for FilteredPayload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.rendered)
	}
}

/// Errors produced while navigating, extracting, and transforming JSON values.
#[derive(Debug, Error)]
pub enum DistillError {
	/// A path element could not be resolved.
	#[error("missing path {path}")]
	MissingPath {
		/// Full path that was requested.
		path: Path,
	},
	/// A node was found but has the wrong kind or shape.
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Requested target type.
		expected: TypeDescriptor,
		/// Offending raw node.
		actual: Value,
	},
	/// A structurally valid value was rejected by a predicate or transform.
	#[error("filtered value of type {type_name}: {value:?}")]
	FilteredValue {
		/// Static type of the rejected value.
		type_name: TypeDescriptor,
		/// The rejected value.
		value: FilteredPayload,
	},
	/// Textual path syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed, or a report could not be serialized.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Caller-defined failure.
	#[error("{0}")]
	Custom(BoxError),
}

impl DistillError {
	/// Missing-path failure for `path`.
	pub fn missing(path: impl Into<Path>) -> Self {
		Self::MissingPath { path: path.into() }
	}

	/// Type-mismatch failure for target `T`.
	pub fn mismatch<T: ?Sized + 'static>(actual: &Value) -> Self {
		Self::TypeMismatch {
			expected: TypeDescriptor::of::<T>(),
			actual: actual.clone(),
		}
	}

	/// Filter rejection of `value`.
	pub fn filtered<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
		Self::FilteredValue {
			type_name: TypeDescriptor::of::<T>(),
			value: FilteredPayload::new(value),
		}
	}

	/// Filter rejection reported against type `T` with no payload.
	pub fn filtered_unit<T: ?Sized + 'static>() -> Self {
		Self::FilteredValue {
			type_name: TypeDescriptor::of::<T>(),
			value: FilteredPayload::new(()),
		}
	}

	/// Wrap a caller-defined error.
	pub fn custom<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
		Self::Custom(Box::new(err))
	}

	/// Borrow the caller-defined error if it is an `E`.
	pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
		match self {
			Self::Custom(inner) => inner.downcast_ref::<E>(),
			_ => None,
		}
	}

	/// Return whether this is a caller-defined error of type `E`.
	pub fn is<E: std::error::Error + 'static>(&self) -> bool {
		self.downcast_ref::<E>().is_some()
	}

	/// Prefix any missing path with `parent`.
	pub(crate) fn under(self, parent: &Path) -> Self {
		match self {
			Self::MissingPath { path } => Self::MissingPath { path: parent.clone() + path },
			other => other,
		}
	}

	/// Retarget a mismatch on `node` itself to report `T` as expected.
	pub(crate) fn retarget<T: ?Sized + 'static>(self, node: &Value) -> Self {
		match self {
			Self::TypeMismatch { actual, .. } if actual == *node => Self::TypeMismatch {
				expected: TypeDescriptor::of::<T>(),
				actual,
			},
			other => other,
		}
	}
}

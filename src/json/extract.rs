use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::json::navigate::{resolve, resolve_present};
use crate::json::{Cursor, DistillError, Distillate, Number, Path, Result, Value};

/// Types that can be built from a JSON node.
///
/// Composite types implement [`Distillable::distil`] by issuing further lookups
/// against `json`:
///
/// ```
/// use distil::json::{Distillable, Result, Value};
///
/// struct User {
/// 	id: i64,
/// 	email: String,
/// }
///
/// impl Distillable for User {
/// 	fn distil(json: &Value) -> Result<Self> {
/// 		Ok(Self {
/// 			id: json.value("id")?,
/// 			email: json.value(["contact", "email"])?,
/// 		})
/// 	}
/// }
///
/// let doc = Value::parse(r#"{"user": {"id": 1, "contact": {"email": "a@b.c"}}}"#).unwrap();
/// let user: User = doc.value("user").unwrap();
/// assert_eq!(user.id, 1);
/// assert_eq!(user.email, "a@b.c");
/// ```
pub trait Distillable: Sized + 'static {
	/// Convert `json` into `Self`.
	fn distil(json: &Value) -> Result<Self>;
}

/// Strictly extract a `T` at `path` below `root`.
///
/// Missing paths reported by a nested composite decode are prefixed with `path`.
pub fn extract<T: Distillable>(root: &Value, path: &Path) -> Result<T> {
	let node = resolve(root, path)?;
	T::distil(node).map_err(|err| err.under(path))
}

/// Extract a `T` at `path`, treating an unreachable path or a `null` node as `None`.
///
/// A node of the wrong kind still fails, reporting `Option<T>` as the expected type.
pub fn extract_optional<T: Distillable>(root: &Value, path: &Path) -> Result<Option<T>> {
	let Some(node) = resolve_present(root, path) else {
		trace!(path = %path, "optional path absent or null");
		return Ok(None);
	};
	T::distil(node)
		.map(Some)
		.map_err(|err| err.retarget::<Option<T>>(node).under(path))
}

impl Value {
	/// Lazily extract a `T` at `path`.
	pub fn distil<T: Distillable>(&self, path: impl Into<Path>) -> Distillate<'_, T> {
		let path = path.into();
		Distillate::pending(move || extract(self, &path))
	}

	/// Lazily extract an optional `T` at `path`.
	pub fn option<T: Distillable>(&self, path: impl Into<Path>) -> Distillate<'_, Option<T>> {
		let path = path.into();
		Distillate::pending(move || extract_optional(self, &path))
	}

	/// Extract a `T` at `path` immediately.
	pub fn value<T: Distillable>(&self, path: impl Into<Path>) -> Result<T> {
		extract(self, &path.into())
	}

	/// Extract an optional `T` at `path` immediately.
	pub fn value_opt<T: Distillable>(&self, path: impl Into<Path>) -> Result<Option<T>> {
		extract_optional(self, &path.into())
	}

	/// Convert this node itself into a `T`.
	pub fn decode<T: Distillable>(&self) -> Result<T> {
		T::distil(self)
	}

	/// Subscript-style handle on the node at `path`.
	pub fn at(&self, path: impl Into<Path>) -> Cursor<'_> {
		Cursor::new(self, path.into())
	}
}

impl Distillable for Value {
	fn distil(json: &Value) -> Result<Self> {
		Ok(json.clone())
	}
}

impl Distillable for String {
	fn distil(json: &Value) -> Result<Self> {
		json.as_str().map(str::to_owned).ok_or_else(|| DistillError::mismatch::<String>(json))
	}
}

impl Distillable for bool {
	fn distil(json: &Value) -> Result<Self> {
		json.as_bool().ok_or_else(|| DistillError::mismatch::<bool>(json))
	}
}

macro_rules! distil_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl Distillable for $ty {
				fn distil(json: &Value) -> Result<Self> {
					json.as_number()
						.and_then(Number::as_i128)
						.and_then(|value| <$ty>::try_from(value).ok())
						.ok_or_else(|| DistillError::mismatch::<$ty>(json))
				}
			}
		)*
	};
}

distil_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Distillable for f64 {
	fn distil(json: &Value) -> Result<Self> {
		json.as_f64().ok_or_else(|| DistillError::mismatch::<f64>(json))
	}
}

impl Distillable for f32 {
	fn distil(json: &Value) -> Result<Self> {
		json.as_f64().map(|value| value as f32).ok_or_else(|| DistillError::mismatch::<f32>(json))
	}
}

impl<T: Distillable> Distillable for Vec<T> {
	fn distil(json: &Value) -> Result<Self> {
		let items = json.as_array().ok_or_else(|| DistillError::mismatch::<Vec<T>>(json))?;
		items
			.iter()
			.enumerate()
			.map(|(index, item)| T::distil(item).map_err(|err| err.under(&Path::index(index))))
			.collect()
	}
}

impl<T: Distillable> Distillable for HashMap<String, T> {
	fn distil(json: &Value) -> Result<Self> {
		distil_entries::<T, Self>(json)
	}
}

impl<T: Distillable> Distillable for BTreeMap<String, T> {
	fn distil(json: &Value) -> Result<Self> {
		distil_entries::<T, Self>(json)
	}
}

/// Decode object members in key order; the first failing key is the one reported.
fn distil_entries<T, M>(json: &Value) -> Result<M>
where
	T: Distillable,
	M: Distillable + FromIterator<(String, T)>,
{
	let entries = json.as_object().ok_or_else(|| DistillError::mismatch::<M>(json))?;
	let mut keys: Vec<&String> = entries.keys().collect();
	keys.sort();
	keys.into_iter()
		.map(|key| {
			T::distil(&entries[key])
				.map(|value| (key.clone(), value))
				.map_err(|err| err.under(&Path::key(key.as_str())))
		})
		.collect()
}

impl<T: Distillable> Distillable for Option<T> {
	fn distil(json: &Value) -> Result<Self> {
		if json.is_null() {
			return Ok(None);
		}
		T::distil(json).map(Some).map_err(|err| err.retarget::<Option<T>>(json))
	}
}

impl<T: Distillable> Distillable for Box<T> {
	fn distil(json: &Value) -> Result<Self> {
		T::distil(json).map(Box::new)
	}
}

use std::collections::HashMap;
use std::fmt;

use crate::json::Result;

/// Immutable JSON value tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// JSON `null`.
	#[default]
	Null,
	/// JSON `true` / `false`.
	Bool(bool),
	/// Any JSON number.
	Number(Number),
	/// JSON string.
	String(String),
	/// Ordered JSON array.
	Array(Vec<Value>),
	/// Unordered JSON object.
	Object(HashMap<String, Value>),
}

/// Numeric payload, split by the storage class the parser produced.
///
/// Integers that fit `i64` are always stored as [`Number::Int`]; [`Number::UInt`]
/// only holds values above `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Signed integer.
	Int(i64),
	/// Unsigned integer above `i64::MAX`.
	UInt(u64),
	/// Floating point.
	Float(f64),
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// `null`.
	Null,
	/// Boolean.
	Bool,
	/// Number.
	Number,
	/// String.
	String,
	/// Array.
	Array,
	/// Object.
	Object,
}

impl ValueKind {
	/// Lowercase JSON kind label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Number {
	/// Normalize an unsigned integer into the narrowest storage class.
	pub fn from_u64(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(signed) => Self::Int(signed),
			Err(_) => Self::UInt(value),
		}
	}

	/// Integer view as `i128`. Floats qualify only when finite with no fractional part.
	pub fn as_i128(self) -> Option<i128> {
		match self {
			Self::Int(v) => Some(i128::from(v)),
			Self::UInt(v) => Some(i128::from(v)),
			Self::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i128),
			Self::Float(_) => None,
		}
	}

	/// Widening view as `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(v) => v as f64,
			Self::UInt(v) => v as f64,
			Self::Float(v) => v,
		}
	}

	fn to_json(self) -> serde_json::Value {
		match self {
			Self::Int(v) => serde_json::Value::from(v),
			Self::UInt(v) => serde_json::Value::from(v),
			Self::Float(v) => serde_json::Number::from_f64(v)
				.map(serde_json::Value::Number)
				.unwrap_or(serde_json::Value::Null),
		}
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v) => write!(f, "{v}"),
			Self::UInt(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
		}
	}
}

impl From<&serde_json::Number> for Number {
	fn from(value: &serde_json::Number) -> Self {
		if let Some(v) = value.as_i64() {
			Self::Int(v)
		} else if let Some(v) = value.as_u64() {
			Self::UInt(v)
		} else {
			Self::Float(value.as_f64().unwrap_or(f64::NAN))
		}
	}
}

impl Value {
	/// Parse JSON text into a value tree.
	pub fn parse(input: &str) -> Result<Self> {
		let native: serde_json::Value = serde_json::from_str(input)?;
		Ok(Self::from(native))
	}

	/// Parse JSON bytes into a value tree.
	pub fn from_slice(input: &[u8]) -> Result<Self> {
		let native: serde_json::Value = serde_json::from_slice(input)?;
		Ok(Self::from(native))
	}

	/// Read and parse a JSON file.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Self::from_slice(&bytes)
	}

	/// Kind discriminant.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Null => ValueKind::Null,
			Self::Bool(_) => ValueKind::Bool,
			Self::Number(_) => ValueKind::Number,
			Self::String(_) => ValueKind::String,
			Self::Array(_) => ValueKind::Array,
			Self::Object(_) => ValueKind::Object,
		}
	}

	/// Return whether this is `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Numeric payload.
	pub fn as_number(&self) -> Option<Number> {
		match self {
			Self::Number(v) => Some(*v),
			_ => None,
		}
	}

	/// Integer payload when it fits `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Number(Number::Int(v)) => Some(*v),
			_ => None,
		}
	}

	/// Integer payload when it fits `u64`.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Number(Number::Int(v)) => u64::try_from(*v).ok(),
			Self::Number(Number::UInt(v)) => Some(*v),
			_ => None,
		}
	}

	/// Numeric payload widened to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		self.as_number().map(Number::as_f64)
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v.as_str()),
			_ => None,
		}
	}

	/// Array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Object entries.
	pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
		match self {
			Self::Object(entries) => Some(entries),
			_ => None,
		}
	}

	/// Child by object key.
	pub fn get_key(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|entries| entries.get(key))
	}

	/// Child by array index.
	pub fn get_index(&self, index: usize) -> Option<&Value> {
		self.as_array().and_then(|items| items.get(index))
	}

	/// Export back to the native parser representation.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Bool(v) => serde_json::Value::Bool(*v),
			Self::Number(v) => v.to_json(),
			Self::String(v) => serde_json::Value::String(v.clone()),
			Self::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
			Self::Object(entries) => serde_json::Value::Object(entries.iter().map(|(key, value)| (key.clone(), value.to_json())).collect()),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(v) => Self::Number(Number::from(&v)),
			serde_json::Value::String(v) => Self::String(v),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(entries) => Self::Object(entries.into_iter().map(|(key, value)| (key, Value::from(value))).collect()),
		}
	}
}

impl From<&serde_json::Value> for Value {
	fn from(value: &serde_json::Value) -> Self {
		Self::from(value.clone())
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		value.to_json()
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_json())
	}
}

#[cfg(test)]
mod tests;

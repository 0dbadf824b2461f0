use std::collections::{BTreeMap, HashMap};

use crate::json::{Number, Value};

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Number> for Value {
	fn from(value: Number) -> Self {
		Self::Number(value)
	}
}

macro_rules! value_from_signed {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(Number::Int(i64::from(value)))
				}
			}
		)*
	};
}

macro_rules! value_from_unsigned {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(Number::from_u64(u64::from(value)))
				}
			}
		)*
	};
}

value_from_signed!(i8, i16, i32, i64);
value_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
	fn from(value: isize) -> Self {
		Self::Number(Number::Int(value as i64))
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Self::Number(Number::from_u64(value as u64))
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Number(Number::Float(f64::from(value)))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(Number::Float(value))
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(value: Vec<T>) -> Self {
		Self::Array(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
	fn from(value: HashMap<String, T>) -> Self {
		Self::Object(value.into_iter().map(|(key, item)| (key, item.into())).collect())
	}
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
	fn from(value: BTreeMap<String, T>) -> Self {
		Self::Object(value.into_iter().map(|(key, item)| (key, item.into())).collect())
	}
}

impl<T: Into<Value>> FromIterator<T> for Value {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::Array(iter.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use crate::json::{Number, Value};

	#[test]
	fn scalars_map_onto_value_variants() {
		assert_eq!(Value::from(true), Value::Bool(true));
		assert_eq!(Value::from("Alembic"), Value::String("Alembic".to_owned()));
		assert_eq!(Value::from(-7_i8), Value::Number(Number::Int(-7)));
		assert_eq!(Value::from(7_u16), Value::Number(Number::Int(7)));
		assert_eq!(Value::from(u64::MAX), Value::Number(Number::UInt(u64::MAX)));
		assert_eq!(Value::from(1.5_f32), Value::Number(Number::Float(1.5)));
	}

	#[test]
	fn containers_convert_elementwise() {
		assert_eq!(Value::from(vec![Some(1_i64), None]), Value::parse("[1, null]").expect("parses"));

		let mut map = BTreeMap::new();
		map.insert("a".to_owned(), 1_u8);
		assert_eq!(Value::from(map), Value::parse(r#"{"a": 1}"#).expect("parses"));
	}

	#[test]
	fn converted_values_extract_back() {
		let json: Value = ["x", "y"].into_iter().collect();
		let items: Vec<String> = json.decode().expect("array of strings");
		assert_eq!(items, ["x", "y"]);
	}
}

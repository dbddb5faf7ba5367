/// Array value types
pub mod array;
/// JSON conversion for values
pub mod into_json;
/// Numeric value types
pub mod number;
/// Object value types
pub mod object;

use serde::{Deserialize, Serialize};

pub use self::array::Array;
pub use self::number::Number;
pub use self::object::Object;
use crate::Kind;

/// Represents a value in a tree-shaped document.
///
/// This enum contains every value type a document may hold. Documents
/// themselves are the `Object` variant; the flattener treats everything
/// else as opaque leaf data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Null value.
	#[default]
	Null,
	/// Boolean value.
	Bool(bool),
	/// Numeric value, either an integer or a float.
	Number(Number),
	/// String value.
	String(String),
	/// Sequence of values.
	Array(Array),
	/// Ordered mapping from field name to value.
	Object(Object),
}

impl Value {
	// -----------------------------------
	// Simple value detection
	// -----------------------------------

	/// Check if this value is a null
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Check if this value is an array
	pub fn is_array(&self) -> bool {
		matches!(self, Value::Array(_))
	}

	/// Check if this value is an object
	pub fn is_object(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	// -----------------------------------
	// Simple value extraction
	// -----------------------------------

	/// Fetch the contained boolean, if this value is one
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Fetch the contained integer, if this value is one
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Number(Number::Int(v)) => Some(*v),
			_ => None,
		}
	}

	/// Fetch the contained string, if this value is one
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	/// Fetch the contained array, if this value is one
	pub fn as_array(&self) -> Option<&Array> {
		match self {
			Value::Array(v) => Some(v),
			_ => None,
		}
	}

	/// Fetch the contained object, if this value is one
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(v) => Some(v),
			_ => None,
		}
	}

	// -----------------------------------
	// Simple output of value type
	// -----------------------------------

	/// Returns the kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Number(Number::Int(_)) => Kind::Int,
			Value::Number(Number::Float(_)) => Kind::Float,
			Value::String(_) => Kind::String,
			Value::Array(_) => Kind::Array,
			Value::Object(_) => Kind::Object,
		}
	}

	/// Returns the kind of this value as a string tag.
	pub fn kind_of(&self) -> &'static str {
		self.kind().as_str()
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(Number::Int(v))
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(Number::Int(v as i64))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(Number::Float(v))
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Value::String(v.clone())
	}
}

impl From<Array> for Value {
	fn from(v: Array) -> Self {
		Value::Array(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::Array(Array(v))
	}
}

impl From<Object> for Value {
	fn from(v: Object) -> Self {
		Value::Object(v)
	}
}

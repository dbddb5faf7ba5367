use serde_json::{Map, Number as JsonNumber, Value as JsonValue};

use crate::{Number, Value};

impl Value {
	/// Converts the value into a json representation of the value.
	///
	/// This function manually implements the encoding into a json value
	/// to ensure clarity and stability in regards to how the value
	/// variants are converted.
	pub fn into_json_value(self) -> JsonValue {
		match self {
			Value::Null => JsonValue::Null,
			Value::Bool(boolean) => JsonValue::Bool(boolean),
			Value::Number(number) => match number {
				Number::Int(int) => JsonValue::Number(JsonNumber::from(int)),
				Number::Float(float) => {
					// This is replicating serde_json::to_string default behavior.
					// f64 will convert to null if it is either NaN or infinity.
					if let Some(number) = JsonNumber::from_f64(float) {
						JsonValue::Number(number)
					} else {
						JsonValue::Null
					}
				}
			},
			Value::String(string) => JsonValue::String(string),
			Value::Array(array) => JsonValue::Array(
				array.0.into_iter().map(Value::into_json_value).collect::<Vec<JsonValue>>(),
			),
			Value::Object(object) => {
				let mut map = Map::with_capacity(object.len());
				for (k, v) in object.0 {
					map.insert(k, v.into_json_value());
				}
				JsonValue::Object(map)
			}
		}
	}

	/// Builds a value from a json representation.
	///
	/// Integers which do not fit in an `i64` are widened to a float, as
	/// are all other non-integral json numbers.
	pub fn from_json_value(json: JsonValue) -> Value {
		match json {
			JsonValue::Null => Value::Null,
			JsonValue::Bool(boolean) => Value::Bool(boolean),
			JsonValue::Number(number) => match number.as_i64() {
				Some(int) => Value::Number(Number::Int(int)),
				None => Value::Number(Number::Float(number.as_f64().unwrap_or(f64::NAN))),
			},
			JsonValue::String(string) => Value::String(string),
			JsonValue::Array(array) => {
				Value::Array(array.into_iter().map(Value::from_json_value).collect())
			}
			JsonValue::Object(map) => Value::Object(
				map.into_iter().map(|(k, v)| (k, Value::from_json_value(v))).collect(),
			),
		}
	}
}

impl From<JsonValue> for Value {
	fn from(v: JsonValue) -> Self {
		Value::from_json_value(v)
	}
}

impl From<Value> for JsonValue {
	fn from(v: Value) -> Self {
		v.into_json_value()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::Object;

	#[test]
	fn json_object_field_order_is_preserved() {
		let val = Value::from(json!({ "z": 1, "a": { "nested": [1, 2.5, "x"] }, "m": null }));
		let Value::Object(obj) = &val else {
			panic!("expected an object");
		};
		let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["z", "a", "m"]);
		assert_eq!(JsonValue::from(val), json!({ "z": 1, "a": { "nested": [1, 2.5, "x"] }, "m": null }));
	}

	#[test]
	fn json_numbers_split_into_int_and_float() {
		assert_eq!(Value::from(json!(7)), Value::from(7));
		assert_eq!(Value::from(json!(-7)), Value::from(-7));
		assert_eq!(Value::from(json!(2.5)), Value::from(2.5));
		// u64 values above i64::MAX widen to a float
		assert_eq!(Value::from(json!(u64::MAX)), Value::from(u64::MAX as f64));
	}

	#[test]
	fn non_finite_floats_encode_as_null() {
		let mut obj = Object::new();
		obj.insert("nan", f64::NAN);
		assert_eq!(Value::Object(obj).into_json_value(), json!({ "nan": null }));
	}
}

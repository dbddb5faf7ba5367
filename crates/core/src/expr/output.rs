use anyhow::Result;

use treeflat_types::Value;

use super::flatten::FlattenPlan;
use crate::err::Error;

impl FlattenPlan {
	/// Evaluates this plan and attaches the flat array to a copy of the
	/// input document under the given field.
	///
	/// The input document is left untouched; an existing field of that
	/// name is replaced in place in the returned copy.
	pub fn apply(&self, doc: &Value, field: &str) -> Result<Value> {
		match doc {
			Value::Object(fields) => {
				let mut out = fields.clone();
				out.insert(field, self.process(doc));
				Ok(Value::Object(out))
			}
			value => Err(anyhow::Error::new(Error::InvalidFlattenTarget {
				value: value.kind_of().to_owned(),
			})),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn apply_attaches_the_flat_array() {
		let val = Value::from(json!({
			"name": "root",
			"children": [{ "name": "a" }],
		}));
		let out = FlattenPlan::new("children").apply(&val, "flattened").unwrap();
		assert_eq!(
			out,
			Value::from(json!({
				"name": "root",
				"children": [{ "name": "a" }],
				"flattened": [
					{ "order": 0, "depth": 0, "path": "0", "name": "root" },
					{ "order": 1, "depth": 1, "path": "0_0", "name": "a" },
				],
			}))
		);
		// The input document is unchanged
		assert_eq!(val, Value::from(json!({ "name": "root", "children": [{ "name": "a" }] })));
	}

	#[test]
	fn apply_replaces_an_existing_field() {
		let val = Value::from(json!({ "name": "root", "flattened": "stale" }));
		let out = FlattenPlan::new("children").apply(&val, "flattened").unwrap();
		let Some(records) = out.as_object().unwrap().get("flattened") else {
			panic!("expected the flattened field to be present");
		};
		assert!(records.is_array());
	}

	#[test]
	fn apply_rejects_a_non_object_target() {
		let err = FlattenPlan::new("children").apply(&Value::from(5), "flattened").unwrap_err();
		assert!(matches!(
			err.downcast_ref::<Error>(),
			Some(Error::InvalidFlattenTarget { value }) if value == "int"
		));
	}
}

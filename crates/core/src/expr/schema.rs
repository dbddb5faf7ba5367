use treeflat_types::{Array, Object, Value};

/// Builds the field-type summary of a sub-document.
///
/// The summary pairs each of the sub-document's own fields with the
/// runtime kind of its value, in field order. It is computed before the
/// branching field and the omission set are filtered out, so it describes
/// the sub-document as stored, not as emitted. A non-object sub-document
/// has no fields and summarizes to an empty array.
pub(crate) fn field_summary(subdocument: &Value) -> Array {
	match subdocument {
		Value::Object(fields) => fields
			.iter()
			.map(|(name, value)| {
				let mut entry = Object::with_capacity(2);
				entry.insert("name", name.as_str());
				entry.insert("type", value.kind_of());
				Value::Object(entry)
			})
			.collect(),
		_ => Array::new(),
	}
}

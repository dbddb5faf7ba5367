use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Represents an object with ordered key-value pairs.
///
/// An object is a collection of key-value pairs where keys are strings and
/// values can be of any type. The underlying storage is an
/// `IndexMap<String, Value>` which preserves insertion order, so a document
/// round-trips with its fields in their original order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Object(pub(crate) IndexMap<String, Value>);

impl Object {
	/// Create a new empty object
	pub fn new() -> Self {
		Object(IndexMap::new())
	}

	/// Create a new object with the given capacity
	pub fn with_capacity(len: usize) -> Self {
		Object(IndexMap::with_capacity(len))
	}

	/// Get the value of a field, if present
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Check whether a field is present
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Insert a field, returning the previous value if the field existed.
	///
	/// An existing field keeps its position in the object; only its value
	/// is replaced.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Remove a field, preserving the order of the remaining fields
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.shift_remove(key)
	}

	/// Get an iterator over the key-value pairs in the object
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
		self.0.iter()
	}

	/// Get an iterator over the field names in the object
	pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
		self.0.keys()
	}

	/// Get the number of fields in the object
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Check whether the object has no fields
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<IndexMap<String, Value>> for Object {
	fn from(v: IndexMap<String, Value>) -> Self {
		Object(v)
	}
}

impl<T: Into<Value>> FromIterator<(String, T)> for Object {
	fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
		Object(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
	}
}

impl IntoIterator for Object {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Object {
	type Item = (&'a String, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, String, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

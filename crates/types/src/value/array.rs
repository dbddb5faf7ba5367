use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::Value;

/// Represents a sequence of values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Array(pub Vec<Value>);

impl Array {
	/// Create a new empty array
	pub fn new() -> Self {
		Array(Vec::new())
	}

	/// Create a new array with the given capacity
	pub fn with_capacity(len: usize) -> Self {
		Array(Vec::with_capacity(len))
	}
}

impl Deref for Array {
	type Target = Vec<Value>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Array {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl From<Vec<Value>> for Array {
	fn from(v: Vec<Value>) -> Self {
		Array(v)
	}
}

impl<T: Into<Value>> FromIterator<T> for Array {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Array(iter.into_iter().map(Into::into).collect())
	}
}

impl IntoIterator for Array {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Array {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
